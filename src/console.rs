//! Interactive console front end
//!
//! Thin glue around the engine: greets, reads stdin line by line, renders
//! outcomes, and hands the task list to storage after every mutation. All
//! printing happens here; the engine only ever returns values.

use anyhow::Result;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::warn;

use crate::config::Config;
use crate::engine::{Executor, Outcome};
use crate::storage::{self, Storage};

const RULE: &str = "____________________________________________________________";

pub fn run(data_dir: Option<PathBuf>) -> Result<()> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => storage::default_data_dir()?,
    };

    let storage = Storage::at_dir(&dir)?;
    let config = Config::load_from(&dir)?;
    let tasks = storage.load()?;
    let mut executor = Executor::with_tasks(tasks, &config.list);

    print_hello();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let outcome = executor.execute(&line);

        if outcome.mutated() {
            // A failed save shouldn't kill the session; the list is still
            // good in memory.
            if let Err(e) = storage.save(executor.tasks()) {
                warn!("Failed to save tasks: {e:#}");
            }
        }

        if outcome == Outcome::Exited {
            break;
        }

        render(&outcome);
    }

    print_bye();
    Ok(())
}

fn render(outcome: &Outcome) {
    match outcome {
        Outcome::Exited => {}
        Outcome::Listed(entries) => {
            println!("TASK LIST:");
            for (number, task) in entries {
                println!("{number}. {task}");
            }
            println!();
        }
        Outcome::TaskAdded { task, total } => {
            println!("Added to list:");
            println!("{task}");
            println!("{}\n", task_tally(*total));
        }
        Outcome::TaskMarkedDone(task) => {
            println!("Congrats! You've completed:");
            println!("   {task}\n");
        }
        Outcome::TaskDeleted { index, task } => {
            println!("Removed task {index}:");
            println!("   {task}\n");
        }
        Outcome::HelpRequested => print_help(),
        Outcome::Error(err) => {
            println!("{err}");
            println!("Enter \"help\" for a list of available commands and formats\n");
        }
    }
}

fn task_tally(total: usize) -> String {
    let noun = if total == 1 { "task" } else { "tasks" };
    format!("{total} {noun} in the list")
}

fn print_help() {
    println!("COMMAND LIST:");
    println!("-------------");
    println!("TODO -\nFORMAT: todo [job]\n");
    println!("DEADLINE -\nFORMAT: deadline [job] /by [date]\n");
    println!("EVENT -\nFORMAT: event [job] /at [time]\n");
    println!("LIST -\nFORMAT: list\n");
    println!("DONE -\nFORMAT: done [number]\n");
    println!("DELETE -\nFORMAT: delete [number]\n");
    println!("To exit, enter \"bye\"\n");
}

fn print_hello() {
    println!("{RULE}");
    println!("Hello, this is Taskline!");
    println!("What would you like to do today?");
    println!("{RULE}");
}

fn print_bye() {
    println!("{RULE}");
    println!("Bye! Come back when you feel like being productive again ;)");
    println!("{RULE}");
}
