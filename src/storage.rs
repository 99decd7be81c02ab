//! Browser Storage
//!
//! `KeyValueStore` backed by `window.localStorage`.

use todo_core::{DomainError, DomainResult, KeyValueStore};
use wasm_bindgen::JsValue;

/// Handle to the origin's local storage; looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> DomainResult<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| DomainError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> DomainResult<()> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}
