//! Taskline - interactive task tracker for the terminal

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskline::cli::{Cli, Commands};
use taskline::console;

fn main() -> Result<()> {
    if std::env::var("TASKLINE_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskline=debug")
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "tsk", &mut std::io::stdout());
            Ok(())
        }
        None => console::run(cli.data_dir),
    }
}
