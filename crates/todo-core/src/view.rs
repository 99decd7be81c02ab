//! View Projection
//!
//! Deterministic projection of the task list into renderable rows and a
//! progress summary. The UI rebuilds its rows from this on every change.

use crate::domain::TaskId;
use crate::list::TaskList;

/// One rendered row
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    /// Position at render time
    pub index: usize,
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Completion percentage in `[0, 100]`; 0 for an empty list
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }

    pub fn rounded_rate(&self) -> u32 {
        self.rate().round() as u32
    }

    pub fn label(&self) -> String {
        format!("{}% Completed", self.rounded_rate())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListView {
    pub rows: Vec<TaskRow>,
    pub progress: Progress,
}

pub fn project(list: &TaskList) -> ListView {
    let rows = list
        .tasks()
        .iter()
        .enumerate()
        .map(|(index, task)| TaskRow {
            index,
            id: task.id,
            description: task.description.clone(),
            completed: task.completed,
        })
        .collect();

    ListView {
        rows,
        progress: Progress::new(list.completed_count(), list.len()),
    }
}
