//! Task model and list
//!
//! - `Task` with its three kinds (todo, deadline, event)
//! - `TaskList`, the ordered capacity-bounded collection with the full latch

pub mod list;
pub mod model;

pub use list::{TaskList, DEFAULT_CAPACITY};
pub use model::{Task, TaskKind};
