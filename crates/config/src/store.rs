//! Thread-safe string key/value store.
//!
//! Responsibilities:
//! - Hold resolved configuration values keyed by logical name.
//! - Provide get/set/delete/clear/snapshot operations safe for concurrent callers.
//!
//! Does NOT handle:
//! - Resolving values from files or the process environment (see `loader`).
//!
//! Invariants:
//! - The empty string is never a key; `get` and `set` reject it with `EmptyKey`.
//! - An empty string value is present, distinct from an absent key.
//! - Every operation holds the lock for its whole duration: reads share it, writes own it.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{ConfigError, Result};

/// Mapping from logical key to resolved string value, guarded by a read/write lock.
#[derive(Debug, Default)]
pub struct Store {
    values: RwLock<HashMap<String, String>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Critical sections never leave the map half-updated, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Retrieve the value stored under `key`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::EmptyKey` if `key` is empty.
    /// - `ConfigError::KeyNotFound` if nothing is stored under `key`.
    pub fn get(&self, key: &str) -> Result<String> {
        if key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }
        self.read()
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Retrieve the value stored under `key`, or `default` when absent.
    pub fn get_or_default(&self, key: &str, default: &str) -> String {
        self.read()
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Retrieve the value stored under `key`, or the empty string when absent.
    pub fn get_value(&self, key: &str) -> String {
        self.get_or_default(key, "")
    }

    /// Whether a value is stored under `key`.
    pub fn has(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Insert or overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyKey` if `key` is empty.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }
        self.write().insert(key, value.into());
        Ok(())
    }

    /// Remove `key`. Removing an absent key is a no-op.
    pub fn delete(&self, key: &str) {
        self.write().remove(key);
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Independent copy of every entry.
    pub fn get_all(&self) -> HashMap<String, String> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Write many entries under a single exclusive lock.
    pub(crate) fn extend(&self, entries: impl IntoIterator<Item = (String, String)>) {
        let mut values = self.write();
        for (key, value) in entries {
            if !key.is_empty() {
                values.insert(key, value);
            }
        }
    }
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            values: RwLock::new(self.get_all()),
        }
    }
}

impl FromIterator<(String, String)> for Store {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let store = Store::new();
        store.extend(iter);
        store
    }
}
