//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory;
mod task_repo;

#[cfg(test)]
mod tests;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use task_repo::TaskRepository;
