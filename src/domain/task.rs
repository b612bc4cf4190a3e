//! Task domain model
//!
//! A task is an in-memory record: ID, title, completion flag, plus creation
//! and completion timestamps surfaced in JSON output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::TaskId;

/// A single todo item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, immutable after creation
    pub id: TaskId,

    /// Human-readable title, always non-empty
    pub title: String,

    /// Whether the task has been completed
    pub completed: bool,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was completed (if it is)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a new pending task with the given ID and title.
    ///
    /// The caller (the service) is responsible for validating the title;
    /// this constructor only trims it.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into().trim().to_string(),
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Replaces the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into().trim().to_string();
    }

    /// Sets or clears the completion flag. Idempotent.
    pub fn set_completed(&mut self, completed: bool) {
        if self.completed == completed {
            return;
        }
        self.completed = completed;
        self.completed_at = if completed { Some(Utc::now()) } else { None };
    }

    /// Returns the checkbox marker used in list output: `x` when done
    pub fn marker(&self) -> char {
        if self.completed {
            'x'
        } else {
            ' '
        }
    }
}
