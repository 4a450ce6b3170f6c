pub mod migrate;
pub mod tasks;

pub use tasks::{TASKS_KEY, TaskStore};
