//! Todo CLI - An interactive console todo manager
//!
//! Tasks live in process memory only: sequential integer IDs, a title, and a
//! completion flag. A read-eval loop on stdin drives the service layer until
//! `exit` or end of input.

pub mod domain;
pub mod service;
pub mod cli;

pub use domain::{IdError, Task, TaskId};
pub use service::{ListFilter, ServiceError, TaskService};
