//! Task data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, TrackerError};

/// What flavor of task an entry is. Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskKind {
    Todo,
    Deadline { by: String },
    Event { at: String },
}

impl TaskKind {
    /// One-letter tag used in list rendering.
    pub fn tag(&self) -> char {
        match self {
            Self::Todo => 'T',
            Self::Deadline { .. } => 'D',
            Self::Event { .. } => 'E',
        }
    }
}

/// A tracked task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing. Never empty.
    pub description: String,

    /// Whether the task has been completed.
    #[serde(default)]
    pub done: bool,

    /// Todo, deadline, or event, with the kind-specific date text inline.
    #[serde(flatten)]
    pub kind: TaskKind,

    /// When the task was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the task was first marked done.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a plain todo.
    pub fn todo(description: impl Into<String>) -> Result<Self> {
        Self::new(description.into(), TaskKind::Todo)
    }

    /// Create a deadline with its free-text date.
    pub fn deadline(description: impl Into<String>, by: impl Into<String>) -> Result<Self> {
        Self::new(description.into(), TaskKind::Deadline { by: by.into() })
    }

    /// Create an event with its free-text time.
    pub fn event(description: impl Into<String>, at: impl Into<String>) -> Result<Self> {
        Self::new(description.into(), TaskKind::Event { at: at.into() })
    }

    fn new(description: String, kind: TaskKind) -> Result<Self> {
        // Empty descriptions are rejected here so no task can ever carry one.
        if description.trim().is_empty() {
            return Err(TrackerError::MissingArgument(description));
        }

        Ok(Self {
            description,
            done: false,
            kind,
            created_at: Some(Utc::now()),
            completed_at: None,
        })
    }

    /// Mark the task done. Marking an already-done task again is fine; the
    /// first completion timestamp is kept.
    pub fn mark_done(&mut self) {
        self.done = true;
        if self.completed_at.is_none() {
            self.completed_at = Some(Utc::now());
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.done { 'X' } else { ' ' };
        write!(f, "[{}][{}] {}", self.kind.tag(), check, self.description)?;

        match &self.kind {
            TaskKind::Todo => Ok(()),
            TaskKind::Deadline { by } => write!(f, " (by: {})", by),
            TaskKind::Event { at } => write!(f, " (at: {})", at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_not_done() {
        let task = Task::todo("read book").unwrap();
        assert!(!task.done);
        assert!(task.created_at.is_some());
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_empty_description_rejected() {
        assert!(Task::todo("").is_err());
        assert!(Task::todo("   ").is_err());
        assert!(Task::deadline("", "Sunday").is_err());
        assert!(Task::event(" ", "Mon 2pm").is_err());
    }

    #[test]
    fn test_mark_done_is_idempotent() {
        let mut task = Task::todo("read book").unwrap();
        task.mark_done();
        assert!(task.done);

        let first_completion = task.completed_at;
        assert!(first_completion.is_some());

        task.mark_done();
        assert!(task.done);
        assert_eq!(task.completed_at, first_completion);
    }

    #[test]
    fn test_display_todo() {
        let mut task = Task::todo("read book").unwrap();
        assert_eq!(task.to_string(), "[T][ ] read book");

        task.mark_done();
        assert_eq!(task.to_string(), "[T][X] read book");
    }

    #[test]
    fn test_display_deadline_and_event() {
        let deadline = Task::deadline("return book", "Sunday").unwrap();
        assert_eq!(deadline.to_string(), "[D][ ] return book (by: Sunday)");

        let event = Task::event("team sync", "Mon 2pm").unwrap();
        assert_eq!(event.to_string(), "[E][ ] team sync (at: Mon 2pm)");
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(TaskKind::Todo.tag(), 'T');
        assert_eq!(TaskKind::Deadline { by: "x".into() }.tag(), 'D');
        assert_eq!(TaskKind::Event { at: "x".into() }.tag(), 'E');
    }

    #[test]
    fn test_serde_roundtrip_keeps_kind_fields() {
        let task = Task::deadline("return book", "Sunday").unwrap();
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"kind\":\"deadline\""));
        assert!(json.contains("\"by\":\"Sunday\""));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        // Older data files carry neither timestamps nor the done flag.
        let json = r#"{"description":"read book","kind":"todo"}"#;
        let task: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task.description, "read book");
        assert!(!task.done);
        assert!(task.created_at.is_none());
    }
}
