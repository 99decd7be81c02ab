//! Todo Controller
//!
//! Single owner of the task list and theme. Every mutation is written to
//! storage before it returns; if the write fails the in-memory change is
//! rolled back so memory and storage never diverge.

use tracing::debug;

use crate::config::StorageKeys;
use crate::domain::{DomainResult, TaskId, Theme};
use crate::list::TaskList;
use crate::repository::{KeyValueStore, TaskRepository};
use crate::view::{self, ListView};

pub struct TodoController<S> {
    tasks: TaskList,
    theme: Theme,
    repo: TaskRepository<S>,
}

impl<S: KeyValueStore> TodoController<S> {
    /// Load persisted state from `store` using the default keys
    pub fn load(store: S) -> Self {
        Self::load_with_keys(store, StorageKeys::default())
    }

    pub fn load_with_keys(store: S, keys: StorageKeys) -> Self {
        let repo = TaskRepository::with_keys(store, keys);
        let tasks = repo.load_tasks();
        let theme = repo.load_theme();
        Self { tasks, theme, repo }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn repository(&self) -> &TaskRepository<S> {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut TaskRepository<S> {
        &mut self.repo
    }

    pub fn view(&self) -> ListView {
        view::project(&self.tasks)
    }

    /// Append a task. Blank input is ignored: `Ok(None)` and nothing is written.
    pub fn add_task(&mut self, description: &str) -> DomainResult<Option<TaskId>> {
        let snapshot = self.tasks.clone();
        let Some(id) = self.tasks.push(description) else {
            debug!("ignoring blank task description");
            return Ok(None);
        };
        self.persist_or_restore(snapshot)?;
        debug!(%id, "added task");
        Ok(Some(id))
    }

    pub fn toggle_completion(&mut self, id: TaskId) -> DomainResult<bool> {
        let completed = self.mutate(|tasks| tasks.toggle(id))?;
        debug!(%id, completed, "toggled task");
        Ok(completed)
    }

    pub fn delete_task(&mut self, id: TaskId) -> DomainResult<()> {
        self.mutate(|tasks| tasks.remove(id))?;
        debug!(%id, "deleted task");
        Ok(())
    }

    /// Resolve a rendered row position to its task id
    pub fn task_id_at(&self, index: usize) -> DomainResult<TaskId> {
        self.tasks.id_at(index)
    }

    pub fn toggle_completion_at(&mut self, index: usize) -> DomainResult<bool> {
        let id = self.task_id_at(index)?;
        self.toggle_completion(id)
    }

    pub fn delete_task_at(&mut self, index: usize) -> DomainResult<()> {
        let id = self.task_id_at(index)?;
        self.delete_task(id)
    }

    pub fn mark_all_completed(&mut self) -> DomainResult<()> {
        self.mutate(|tasks| {
            tasks.set_all_completed(true);
            Ok(())
        })?;
        debug!(count = self.tasks.len(), "marked all tasks completed");
        Ok(())
    }

    pub fn unmark_all_completed(&mut self) -> DomainResult<()> {
        self.mutate(|tasks| {
            tasks.set_all_completed(false);
            Ok(())
        })?;
        debug!(count = self.tasks.len(), "unmarked all tasks");
        Ok(())
    }

    pub fn delete_all(&mut self) -> DomainResult<()> {
        self.mutate(|tasks| {
            tasks.clear();
            Ok(())
        })?;
        debug!("deleted all tasks");
        Ok(())
    }

    /// Commit a new order, e.g. the visual order after a drag
    pub fn reorder(&mut self, order: &[TaskId]) -> DomainResult<()> {
        if order == self.tasks.ids().as_slice() {
            return Ok(());
        }
        self.mutate(|tasks| tasks.reorder(order))?;
        debug!(?order, "reordered tasks");
        Ok(())
    }

    /// Flip light/dark and persist; returns the new theme
    pub fn toggle_theme(&mut self) -> DomainResult<Theme> {
        let next = self.theme.toggled();
        self.repo.save_theme(next)?;
        self.theme = next;
        debug!(theme = next.as_str(), "toggled theme");
        Ok(next)
    }

    fn mutate<T>(&mut self, op: impl FnOnce(&mut TaskList) -> DomainResult<T>) -> DomainResult<T> {
        let snapshot = self.tasks.clone();
        let out = match op(&mut self.tasks) {
            Ok(out) => out,
            Err(err) => {
                self.tasks = snapshot;
                return Err(err);
            }
        };
        self.persist_or_restore(snapshot)?;
        Ok(out)
    }

    fn persist_or_restore(&mut self, snapshot: TaskList) -> DomainResult<()> {
        if let Err(err) = self.repo.save_tasks(&self.tasks) {
            self.tasks = snapshot;
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, TaskRecord};
    use crate::repository::MemoryStore;

    fn setup() -> TodoController<MemoryStore> {
        TodoController::load(MemoryStore::new())
    }

    fn stored_records(ctrl: &TodoController<MemoryStore>) -> Vec<TaskRecord> {
        let raw = ctrl.repository().store().raw("tasks").expect("tasks not persisted");
        serde_json::from_str(raw).expect("stored tasks are not valid JSON")
    }

    fn descriptions(ctrl: &TodoController<MemoryStore>) -> Vec<String> {
        ctrl.tasks().tasks().iter().map(|t| t.description.clone()).collect()
    }

    #[test]
    fn test_add_persists_and_appends() {
        let mut ctrl = setup();
        ctrl.add_task("A").unwrap();
        let b = ctrl.add_task("B").unwrap().unwrap();

        assert_eq!(descriptions(&ctrl), vec!["A", "B"]);
        assert_eq!(ctrl.tasks().get(b).map(|t| t.completed), Some(false));
        assert_eq!(stored_records(&ctrl), ctrl.tasks().to_records());
    }

    #[test]
    fn test_blank_add_changes_nothing() {
        let mut ctrl = setup();
        ctrl.add_task("A").unwrap();
        let writes_before = ctrl.repository().store().writes().len();

        assert_eq!(ctrl.add_task("").unwrap(), None);
        assert_eq!(ctrl.add_task("   ").unwrap(), None);

        assert_eq!(descriptions(&ctrl), vec!["A"]);
        assert_eq!(ctrl.repository().store().writes().len(), writes_before);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut ctrl = setup();
        for d in ["A", "B", "C"] {
            ctrl.add_task(d).unwrap();
        }
        ctrl.delete_task_at(1).unwrap();

        assert_eq!(descriptions(&ctrl), vec!["A", "C"]);
        assert_eq!(stored_records(&ctrl).len(), 2);
    }

    #[test]
    fn test_positional_dispatch_out_of_range() {
        let mut ctrl = setup();
        ctrl.add_task("A").unwrap();

        assert!(matches!(ctrl.toggle_completion_at(5), Err(DomainError::NotFound(_))));
        assert!(matches!(ctrl.delete_task_at(1), Err(DomainError::NotFound(_))));
        assert_eq!(descriptions(&ctrl), vec!["A"]);
    }

    #[test]
    fn test_stale_id_after_delete() {
        let mut ctrl = setup();
        let a = ctrl.add_task("A").unwrap().unwrap();
        let b = ctrl.add_task("B").unwrap().unwrap();
        ctrl.delete_task(a).unwrap();

        // Index 0 now points at B; the id of A stays invalid
        assert!(ctrl.toggle_completion(a).is_err());
        assert!(ctrl.toggle_completion_at(0).unwrap());
        assert!(ctrl.tasks().get(b).unwrap().completed);
    }

    #[test]
    fn test_mark_then_unmark_all() {
        let mut ctrl = setup();
        for d in ["A", "B", "C"] {
            ctrl.add_task(d).unwrap();
        }
        ctrl.toggle_completion_at(1).unwrap();

        ctrl.mark_all_completed().unwrap();
        assert!(ctrl.tasks().tasks().iter().all(|t| t.completed));
        assert_eq!(ctrl.view().progress.label(), "100% Completed");

        ctrl.unmark_all_completed().unwrap();
        assert!(ctrl.tasks().tasks().iter().all(|t| !t.completed));
        assert_eq!(descriptions(&ctrl), vec!["A", "B", "C"]);
        assert_eq!(stored_records(&ctrl), ctrl.tasks().to_records());
    }

    #[test]
    fn test_delete_all() {
        let mut ctrl = setup();
        ctrl.add_task("A").unwrap();
        ctrl.delete_all().unwrap();

        assert!(ctrl.tasks().is_empty());
        assert_eq!(ctrl.repository().store().raw("tasks"), Some("[]"));
    }

    #[test]
    fn test_reorder_commits_order() {
        let mut ctrl = setup();
        let a = ctrl.add_task("A").unwrap().unwrap();
        let b = ctrl.add_task("B").unwrap().unwrap();
        let c = ctrl.add_task("C").unwrap().unwrap();

        ctrl.reorder(&[c, a, b]).unwrap();
        assert_eq!(descriptions(&ctrl), vec!["C", "A", "B"]);
        assert_eq!(stored_records(&ctrl)[0].description, "C");
    }

    #[test]
    fn test_reorder_to_same_order_skips_write() {
        let mut ctrl = setup();
        let a = ctrl.add_task("A").unwrap().unwrap();
        let writes_before = ctrl.repository().store().writes().len();

        ctrl.reorder(&[a]).unwrap();
        assert_eq!(ctrl.repository().store().writes().len(), writes_before);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let mut ctrl = setup();
        let a = ctrl.add_task("A").unwrap().unwrap();
        ctrl.repository_mut().store_mut().set_fail_writes(true);

        assert!(matches!(ctrl.add_task("B"), Err(DomainError::Storage(_))));
        assert!(ctrl.toggle_completion(a).is_err());
        assert!(ctrl.delete_all().is_err());
        assert!(ctrl.toggle_theme().is_err());

        assert_eq!(descriptions(&ctrl), vec!["A"]);
        assert!(!ctrl.tasks().get(a).unwrap().completed);
        assert_eq!(ctrl.theme(), Theme::Light);
        assert_eq!(stored_records(&ctrl), ctrl.tasks().to_records());
    }

    #[test]
    fn test_rejected_toggle_leaves_view_unchanged() {
        let mut ctrl = setup();
        let a = ctrl.add_task("A").unwrap().unwrap();
        let before = ctrl.view();
        ctrl.repository_mut().store_mut().set_fail_writes(true);

        assert!(ctrl.toggle_completion(a).is_err());
        assert!(ctrl.toggle_completion(TaskId(99)).is_err());

        let after = ctrl.view();
        assert_eq!(after, before);
        assert!(!after.rows[0].completed);
    }

    #[test]
    fn test_theme_toggle_twice_from_unset() {
        let mut ctrl = setup();
        assert_eq!(ctrl.theme(), Theme::Light);

        assert_eq!(ctrl.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(ctrl.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(ctrl.repository().store().writes_to("theme"), vec!["dark", "light"]);
        assert!(ctrl.repository().store().writes_to("tasks").is_empty());
    }

    #[test]
    fn test_load_restores_previous_session() {
        let store = MemoryStore::new()
            .with_entry("tasks", r#"[{"description":"Old","completed":true}]"#)
            .with_entry("theme", "dark");
        let ctrl = TodoController::load(store);

        assert_eq!(descriptions(&ctrl), vec!["Old"]);
        assert_eq!(ctrl.theme(), Theme::Dark);
        assert_eq!(ctrl.view().progress.label(), "100% Completed");
    }
}
