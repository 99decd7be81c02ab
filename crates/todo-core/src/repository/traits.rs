//! Repository Layer - Core Traits
//!
//! Abstract string key-value storage. The browser implementation wraps
//! `window.localStorage`; tests use `MemoryStore`.

use crate::domain::DomainResult;

/// Synchronous string-keyed storage
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> DomainResult<()>;
}
