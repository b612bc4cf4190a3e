//! Domain models: task IDs and tasks

mod id;
mod task;

pub use id::{IdError, TaskId};
pub use task::Task;
