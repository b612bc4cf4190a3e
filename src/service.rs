//! Task service
//!
//! Sole owner of the in-memory task collection. Every mutation and query goes
//! through [`TaskService`]; the CLI layer never touches the collection
//! directly. Tasks are kept in insertion order and IDs are handed out
//! sequentially, never reused within a run.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Task, TaskId};

#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Task with ID {0} not found")]
    NotFound(TaskId),
}

/// Which tasks a listing should include
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl ListFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Pending => !task.completed,
            ListFilter::Completed => task.completed,
        }
    }
}

/// In-memory task collection with sequential ID assignment
#[derive(Debug, Default)]
pub struct TaskService {
    tasks: Vec<Task>,
    next_id: Option<TaskId>,
}

impl TaskService {
    /// Creates an empty service; the first task gets ID 1
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: None,
        }
    }

    /// Adds a new pending task with the next sequential ID
    pub fn add(&mut self, title: &str) -> Result<&Task, ServiceError> {
        if title.trim().is_empty() {
            return Err(ServiceError::EmptyTitle);
        }

        let id = self.next_id.unwrap_or_else(TaskId::first);
        self.next_id = Some(id.next());

        self.tasks.push(Task::new(id, title));
        Ok(self.tasks.last().unwrap())
    }

    /// All tasks in insertion order
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks matching the given filter, in insertion order
    pub fn filtered(&self, filter: ListFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Looks up a task by ID
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Replaces a task's title.
    ///
    /// The title is validated before the lookup, so an empty title never
    /// touches the stored task even when the ID is also unknown.
    pub fn update(&mut self, id: TaskId, new_title: &str) -> Result<&Task, ServiceError> {
        if new_title.trim().is_empty() {
            return Err(ServiceError::EmptyTitle);
        }

        let task = self.get_mut(id)?;
        task.set_title(new_title);
        Ok(task)
    }

    /// Removes a task. Its ID is not reclaimed.
    pub fn delete(&mut self, id: TaskId) -> Result<Task, ServiceError> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(ServiceError::NotFound(id))?;
        Ok(self.tasks.remove(pos))
    }

    /// Sets or clears a task's completion flag. Idempotent.
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> Result<&Task, ServiceError> {
        let task = self.get_mut(id)?;
        task.set_completed(completed);
        Ok(task)
    }

    /// Number of tasks currently stored
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if no tasks are stored
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, ServiceError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ServiceError::NotFound(id))
    }
}
