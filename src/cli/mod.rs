//! Command-line definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Interactive task tracker for the terminal.
#[derive(Parser)]
#[command(name = "tsk", version, about)]
pub struct Cli {
    /// Directory holding tasks.json and config.toml (defaults to ~/.taskline)
    #[arg(long, env = "TASKLINE_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
