//! Storage Configuration
//!
//! Key names under which the app persists its state.

/// Default key for the serialized task array
pub const TASKS_KEY: &str = "tasks";
/// Default key for the theme value
pub const THEME_KEY: &str = "theme";

/// Storage key layout used by `TaskRepository`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub tasks: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks: TASKS_KEY.to_string(),
            theme: THEME_KEY.to_string(),
        }
    }
}
