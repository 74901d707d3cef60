//! JSON key-value persistence.
//!
//! Each piece of shell state lives under its own key and is loaded and
//! saved independently. A missing or unparseable value is treated as "no
//! saved state": [`load_or_default`] logs and falls back, it never fails.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use aurora_common::StorageError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Key for user settings.
pub const SETTINGS_KEY: &str = "aurora-os-settings";

/// Key for the ordered desktop icon list.
pub const ICONS_KEY: &str = "aurora-os-desktop-icons";

/// Key for the filesystem blob. The payload is owned by the filesystem
/// collaborator; this layer never interprets it.
pub const FILESYSTEM_KEY: &str = "aurora-filesystem";

/// Keyed string storage. The JSON encoding happens in
/// [`load_or_default`]/[`save`] so stores only move strings around.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str);
}

/// Load one value, calling `fallback` when the key is absent or its
/// payload does not parse. Corrupt state is logged and discarded — boot
/// must survive it.
pub fn load_or<T, F>(store: &dyn Storage, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.get(key) {
        None => {
            debug!("no saved value for {key}, using defaults");
            fallback()
        }
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("corrupt value for {key} ({e}), using defaults");
                fallback()
            }
        },
    }
}

/// [`load_or`] with `T::default()` as the fallback.
pub fn load_or_default<T: DeserializeOwned + Default>(store: &dyn Storage, key: &str) -> T {
    load_or(store, key, T::default)
}

/// Serialize and persist one value under its key.
pub fn save<T: Serialize>(store: &mut dyn Storage, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
    store.set(key, &raw)
}
