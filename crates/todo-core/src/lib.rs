//! Todo Core
//!
//! Framework-free state for the to-do list:
//! - domain: task and theme entities, error type
//! - list: ordered in-memory task sequence with stable ids
//! - repository: key-value storage abstraction and the task repository
//! - view: projection into rows and progress
//! - controller: owner of all state, persists after every mutation

pub mod config;
pub mod controller;
pub mod domain;
pub mod list;
pub mod repository;
pub mod view;

pub use config::StorageKeys;
pub use controller::TodoController;
pub use domain::{DomainError, DomainResult, Entity, Task, TaskId, TaskRecord, Theme};
pub use list::TaskList;
pub use repository::{KeyValueStore, MemoryStore, TaskRepository};
pub use view::{ListView, Progress, TaskRow};
