//! Task storage - JSON file persistence
//!
//! The console hands the full task sequence to `save` after every mutation
//! and loads it back on startup. The on-disk layout is this module's own
//! business; nothing else reads the file.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::task::Task;

/// Directory under the home directory holding tracker state.
const APP_DIR: &str = ".taskline";

pub struct Storage {
    tasks_path: PathBuf,
}

impl Storage {
    /// Storage rooted at the default data directory (`~/.taskline`).
    pub fn new() -> Result<Self> {
        Self::at_dir(&default_data_dir()?)
    }

    /// Storage rooted at an explicit directory (the `--data-dir` override).
    pub fn at_dir(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            tasks_path: dir.join("tasks.json"),
        })
    }

    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.tasks_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.tasks_path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        Ok(tasks)
    }

    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        // Keep the previous file around in case the write goes wrong.
        if self.tasks_path.exists() {
            let backup_path = self.tasks_path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.tasks_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.tasks_path, content)?;
        Ok(())
    }
}

/// Resolve the default data directory under the user's home.
pub fn default_data_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("could not determine home directory"))?;
    Ok(home.join(APP_DIR))
}
