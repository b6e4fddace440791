//! Browser `sessionStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session must survive page loads within one browser session and no
//! longer, so it lives in `sessionStorage` rather than `localStorage`. These
//! helpers centralize the hydrate-only web-sys glue; SSR and native tests
//! see an always-empty store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Why a value could not be written to `sessionStorage`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("session storage is unavailable")]
    Unavailable,
    #[error("could not encode value: {0}")]
    Encode(String),
    #[error("could not write {key}: {message}")]
    Write { key: String, message: String },
}

/// Load a JSON value from `sessionStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `sessionStorage` for `key`.
///
/// # Errors
///
/// Returns [`StorageError`] when storage is missing, the value does not
/// serialize, or the browser refuses the write (quota, private mode).
pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()
            .and_then(|w| w.session_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)?;
        let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
        storage.set_item(key, &raw).map_err(|e| {
            log::warn!("sessionStorage write for {key} failed: {e:?}");
            StorageError::Write { key: key.to_owned(), message: format!("{e:?}") }
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        Ok(())
    }
}

/// Remove `key` from `sessionStorage`.
pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}
