//! Command execution engine
//!
//! Takes one input line at a time, drives the classifier and the argument
//! parser, applies the result to the task list it owns, and reports back as
//! a value. The engine never prints and never lets an error escape as
//! anything but an [`Outcome::Error`].

use tracing::debug;

use crate::command::{self, classify, CommandKind};
use crate::config::ListConfig;
use crate::error::{Result, TrackerError};
use crate::task::{Task, TaskList};

/// What one line of input produced. The console renders these; persistence
/// hooks key off [`Outcome::mutated`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Exited,
    Listed(Vec<(usize, Task)>),
    TaskAdded { task: Task, total: usize },
    TaskMarkedDone(Task),
    TaskDeleted { index: i64, task: Task },
    HelpRequested,
    Error(TrackerError),
}

impl Outcome {
    /// Whether this outcome changed the task list and should be persisted.
    pub fn mutated(&self) -> bool {
        matches!(
            self,
            Self::TaskAdded { .. } | Self::TaskMarkedDone(_) | Self::TaskDeleted { .. }
        )
    }
}

/// Owns the task list and processes one command per call.
pub struct Executor {
    list: TaskList,
}

impl Executor {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            list: TaskList::with_config(config),
        }
    }

    /// Resume from previously saved tasks.
    pub fn with_tasks(tasks: Vec<Task>, config: &ListConfig) -> Self {
        Self {
            list: TaskList::from_tasks(tasks, config),
        }
    }

    /// The current task sequence, handed to the persistence collaborator
    /// after every mutation.
    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    /// Run one input line against the list.
    pub fn execute(&mut self, line: &str) -> Outcome {
        let kind = classify(line);
        debug!(?kind, "classified input");

        // A full list only answers to "list" and "bye"; nothing else is
        // even parsed. When the latch is configured to release on delete,
        // "delete" is let through as well so the list can actually shrink.
        if self.list.is_full() && !self.allowed_when_full(kind) {
            return Outcome::Error(TrackerError::ListFull);
        }

        match kind {
            CommandKind::Exit => Outcome::Exited,
            CommandKind::ListAll => self.run_list(),
            CommandKind::Help => Outcome::HelpRequested,
            CommandKind::MarkDone => self.run_done(line),
            CommandKind::AddTodo => self.run_todo(line),
            CommandKind::AddDeadline => self.run_deadline(line),
            CommandKind::AddEvent => self.run_event(line),
            CommandKind::Delete => self.run_delete(line),
            CommandKind::Unknown => {
                Outcome::Error(TrackerError::UnrecognizedCommand(line.to_string()))
            }
        }
    }

    fn allowed_when_full(&self, kind: CommandKind) -> bool {
        match kind {
            CommandKind::ListAll | CommandKind::Exit => true,
            CommandKind::Delete => self.list.releases_full_on_delete(),
            _ => false,
        }
    }

    fn run_list(&self) -> Outcome {
        match self.list.list_all() {
            Ok(entries) => Outcome::Listed(
                entries
                    .into_iter()
                    .map(|(number, task)| (number, task.clone()))
                    .collect(),
            ),
            Err(err) => Outcome::Error(err),
        }
    }

    fn run_done(&mut self, line: &str) -> Outcome {
        let result = command::parse_index(line)
            .and_then(|index| self.list.mark_done(index).map(|task| task.clone()));

        match result {
            Ok(task) => Outcome::TaskMarkedDone(task),
            Err(err) => Outcome::Error(err),
        }
    }

    fn run_delete(&mut self, line: &str) -> Outcome {
        let result = command::parse_index(line)
            .and_then(|index| self.list.delete(index).map(|task| (index, task)));

        match result {
            Ok((index, task)) => Outcome::TaskDeleted { index, task },
            Err(err) => Outcome::Error(err),
        }
    }

    fn run_todo(&mut self, line: &str) -> Outcome {
        self.push(command::extract_description(line, "").and_then(Task::todo))
    }

    fn run_deadline(&mut self, line: &str) -> Outcome {
        self.push(parse_dated(line, "/by").and_then(|(job, by)| Task::deadline(job, by)))
    }

    fn run_event(&mut self, line: &str) -> Outcome {
        self.push(parse_dated(line, "/at").and_then(|(job, at)| Task::event(job, at)))
    }

    fn push(&mut self, result: Result<Task>) -> Outcome {
        let task = match result {
            Ok(task) => task,
            Err(err) => return Outcome::Error(err),
        };

        match self.list.add(task.clone()) {
            Ok(()) => Outcome::TaskAdded {
                task,
                total: self.list.len(),
            },
            Err(err) => Outcome::Error(err),
        }
    }
}

/// Description and date field share the same delimiter token: the
/// description stops at it, the date is whatever follows it.
fn parse_dated(line: &str, delimiter: &str) -> Result<(String, String)> {
    let job = command::extract_description(line, delimiter)?;
    let date = command::extract_date_field(line, delimiter)?;
    Ok((job, date))
}
