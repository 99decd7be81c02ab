//! Repository Integration Tests
//!
//! Tests for TaskRepository with an in-memory key-value store.

#[cfg(test)]
mod tests {
    use crate::config::StorageKeys;
    use crate::domain::{TaskRecord, Theme};
    use crate::list::TaskList;
    use crate::repository::{KeyValueStore, MemoryStore, TaskRepository};

    fn setup_repo(tasks_json: Option<&str>) -> TaskRepository<MemoryStore> {
        let mut store = MemoryStore::new();
        if let Some(json) = tasks_json {
            store = store.with_entry("tasks", json);
        }
        TaskRepository::new(store)
    }

    #[test]
    fn test_load_absent_is_empty() {
        let repo = setup_repo(None);
        assert!(repo.load_tasks().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["not json", "{\"description\":\"x\"}", "[{\"completed\":true}]", ""] {
            let repo = setup_repo(Some(raw));
            assert!(repo.load_tasks().is_empty(), "expected empty list for {:?}", raw);
        }
    }

    #[test]
    fn test_load_null_is_empty() {
        let repo = setup_repo(Some("null"));
        assert!(repo.load_tasks().is_empty());
    }

    #[test]
    fn test_load_preserves_order_and_flags() {
        let repo = setup_repo(Some(
            r#"[{"description":"B","completed":true},{"description":"A","completed":false}]"#,
        ));
        let list = repo.load_tasks();
        assert_eq!(
            list.to_records(),
            vec![
                TaskRecord { description: "B".into(), completed: true },
                TaskRecord { description: "A".into(), completed: false },
            ]
        );
    }

    #[test]
    fn test_save_writes_json_array() {
        let mut repo = setup_repo(None);
        let mut list = TaskList::new();
        list.push("Write report");
        let id = list.push("Call Sam").unwrap();
        list.toggle(id).unwrap();

        repo.save_tasks(&list).expect("save failed");
        assert_eq!(
            repo.store().raw("tasks"),
            Some(r#"[{"description":"Write report","completed":false},{"description":"Call Sam","completed":true}]"#)
        );
        assert_eq!(repo.load_tasks().to_records(), list.to_records());
    }

    #[test]
    fn test_save_failure_is_reported() {
        let mut repo = setup_repo(None);
        repo.store_mut().set_fail_writes(true);
        assert!(repo.save_tasks(&TaskList::new()).is_err());
        assert!(repo.store().get("tasks").unwrap().is_none());
    }

    #[test]
    fn test_theme_round_trip() {
        let mut repo = setup_repo(None);
        assert_eq!(repo.load_theme(), Theme::Light);

        repo.save_theme(Theme::Dark).unwrap();
        assert_eq!(repo.store().raw("theme"), Some("dark"));
        assert_eq!(repo.load_theme(), Theme::Dark);
    }

    #[test]
    fn test_unknown_theme_value_is_light() {
        let repo = TaskRepository::new(MemoryStore::new().with_entry("theme", "sepia"));
        assert_eq!(repo.load_theme(), Theme::Light);
    }

    #[test]
    fn test_custom_keys() {
        let mut repo = TaskRepository::with_keys(
            MemoryStore::new(),
            StorageKeys { tasks: "home.tasks".to_string(), theme: "home.theme".to_string() },
        );
        repo.save_theme(Theme::Dark).unwrap();
        assert_eq!(repo.store().raw("home.theme"), Some("dark"));
        assert_eq!(repo.store().raw("theme"), None);
    }
}
