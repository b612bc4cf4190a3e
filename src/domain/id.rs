//! Sequential task IDs
//!
//! IDs are positive integers assigned in creation order, starting at 1.
//! Within a process run an ID is never reused, even after the task it named
//! has been deleted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Task ID must be a positive integer, got '{0}'")]
    Invalid(String),
}

/// Task ID - a positive integer assigned sequentially
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// The ID assigned to the first task in a run
    pub fn first() -> Self {
        Self(1)
    }

    /// Returns the ID that follows this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<u64>() {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(IdError::Invalid(s.to_string())),
        }
    }
}
