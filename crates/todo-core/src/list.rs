//! Task List
//!
//! Ordered, in-memory task sequence. Ids are handed out from a monotonic
//! counter so a deleted task's id is never reused within a session.

use std::collections::HashSet;

use crate::domain::{DomainError, DomainResult, Entity, Task, TaskId, TaskRecord, is_blank};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from persisted records, assigning fresh ids in order
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        let mut list = Self::new();
        for record in records {
            let id = list.allocate_id();
            list.tasks.push(Task::from_record(id, record));
        }
        list
    }

    pub fn to_records(&self) -> Vec<TaskRecord> {
        self.tasks.iter().map(Task::to_record).collect()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(Entity::id).collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    pub fn id_at(&self, index: usize) -> DomainResult<TaskId> {
        self.tasks
            .get(index)
            .map(Entity::id)
            .ok_or_else(|| DomainError::NotFound(format!("task at index {}", index)))
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Append a task; blank descriptions are ignored and yield `None`
    pub fn push(&mut self, description: &str) -> Option<TaskId> {
        if is_blank(description) {
            return None;
        }
        let id = self.allocate_id();
        self.tasks.push(Task::new(id, description));
        Some(id)
    }

    pub fn toggle(&mut self, id: TaskId) -> DomainResult<bool> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| not_found(id))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    pub fn remove(&mut self, id: TaskId) -> DomainResult<Task> {
        let index = self.position_of(id).ok_or_else(|| not_found(id))?;
        Ok(self.tasks.remove(index))
    }

    pub fn set_all_completed(&mut self, completed: bool) {
        for task in &mut self.tasks {
            task.completed = completed;
        }
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Rearrange tasks to follow `order`, which must be a permutation of the
    /// current ids
    pub fn reorder(&mut self, order: &[TaskId]) -> DomainResult<()> {
        if order.len() != self.tasks.len() {
            return Err(DomainError::InvalidInput(format!(
                "reorder expects {} ids, got {}",
                self.tasks.len(),
                order.len()
            )));
        }
        let current: HashSet<TaskId> = self.ids().into_iter().collect();
        let mut seen = HashSet::with_capacity(order.len());
        for id in order {
            if !current.contains(id) {
                return Err(not_found(*id));
            }
            if !seen.insert(*id) {
                return Err(DomainError::InvalidInput(format!("duplicate task id {}", id)));
            }
        }

        let mut remaining = std::mem::take(&mut self.tasks);
        for id in order {
            if let Some(index) = remaining.iter().position(|task| task.id == *id) {
                self.tasks.push(remaining.remove(index));
            }
        }
        Ok(())
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }
}

fn not_found(id: TaskId) -> DomainError {
    DomainError::NotFound(format!("task {}", id))
}
