//! Task Repository
//!
//! Maps the task list and theme onto string keys of a `KeyValueStore`.
//! Tasks are stored as a JSON array of `{description, completed}`.

use tracing::{debug, warn};

use super::traits::KeyValueStore;
use crate::config::StorageKeys;
use crate::domain::{DomainResult, TaskRecord, Theme};
use crate::list::TaskList;

pub struct TaskRepository<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> TaskRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    pub fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Load tasks; a missing, unreadable or malformed entry yields an empty list
    pub fn load_tasks(&self) -> TaskList {
        let raw = match self.store.get(&self.keys.tasks) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.keys.tasks, "no stored tasks");
                return TaskList::new();
            }
            Err(err) => {
                warn!(key = %self.keys.tasks, error = %err, "failed reading stored tasks");
                return TaskList::new();
            }
        };

        // `null` is what JSON.stringify of nothing looks like; treat it as empty
        match serde_json::from_str::<Option<Vec<TaskRecord>>>(&raw) {
            Ok(records) => {
                let list = TaskList::from_records(records.unwrap_or_default());
                debug!(count = list.len(), "loaded tasks");
                list
            }
            Err(err) => {
                warn!(key = %self.keys.tasks, error = %err, "discarding malformed stored tasks");
                TaskList::new()
            }
        }
    }

    pub fn save_tasks(&mut self, list: &TaskList) -> DomainResult<()> {
        let json = serde_json::to_string(&list.to_records())?;
        self.store.set(&self.keys.tasks, &json)
    }

    /// Load the theme; anything other than "dark" is light
    pub fn load_theme(&self) -> Theme {
        match self.store.get(&self.keys.theme) {
            Ok(Some(raw)) => Theme::from_str(&raw),
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!(key = %self.keys.theme, error = %err, "failed reading stored theme");
                Theme::default()
            }
        }
    }

    pub fn save_theme(&mut self, theme: Theme) -> DomainResult<()> {
        self.store.set(&self.keys.theme, theme.as_str())
    }
}
