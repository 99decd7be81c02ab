//! Task Entity
//!
//! A single to-do entry. Identity is the session-stable `TaskId`; the
//! persisted form (`TaskRecord`) carries no id and relies on array order.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Stable task identifier, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u32);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(TaskId)
    }
}

/// A to-do task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Stable identifier
    pub id: TaskId,
    /// Text as entered by the user (never blank)
    pub description: String,
    /// Completion status
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }

    /// Rebuild a task from its persisted record
    pub fn from_record(id: TaskId, record: TaskRecord) -> Self {
        Self {
            id,
            description: record.description,
            completed: record.completed,
        }
    }

    pub fn to_record(&self) -> TaskRecord {
        TaskRecord {
            description: self.description.clone(),
            completed: self.completed,
        }
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Persisted shape of a task: `{"description": ..., "completed": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub description: String,
    pub completed: bool,
}

/// True when the description is empty or whitespace only.
///
/// Whitespace follows the browser's `String.prototype.trim`: U+FEFF counts,
/// U+0085 does not.
pub fn is_blank(description: &str) -> bool {
    description.chars().all(is_trim_whitespace)
}

fn is_trim_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}
