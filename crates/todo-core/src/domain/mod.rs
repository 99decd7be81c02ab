//! Domain Layer
//!
//! Contains the domain entities and core abstractions.
//! This layer has no browser dependencies (only serde for serialization).

mod entity;
mod task;
mod theme;

pub use entity::{Entity, DomainError, DomainResult};
pub use task::{Task, TaskId, TaskRecord, is_blank};
pub use theme::Theme;
