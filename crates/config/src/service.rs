//! Mapping-driven configuration service.
//!
//! Responsibilities:
//! - Own a `ConfigMapping` and the `Store` it populates.
//! - Expose dynamic get/set access to resolved values.
//!
//! Does NOT handle:
//! - Required-field validation; unresolved mapping entries are simply absent.
//!
//! Invariants:
//! - The mapping is owned by value and cannot change after construction.
//! - The store lives exactly as long as the service and is never shared with another service.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::loader::Loader;
use crate::mapping::ConfigMapping;
use crate::store::Store;

/// Configuration service binding logical keys to environment variables.
///
/// ```ignore
/// let service = Service::new(ConfigMapping::from([
///     ("SupabaseKey", "SUPABASE_ANON_KEY"),
///     ("Port", "PORT"),
/// ]));
/// service.load(".env")?;
/// let port = service.get_or_default("Port", "8080");
/// ```
#[derive(Debug)]
pub struct Service {
    mapping: ConfigMapping,
    store: Store,
    loader: Loader,
}

impl Service {
    /// Create a service whose verbosity follows the global logging toggle.
    pub fn new(mapping: ConfigMapping) -> Self {
        Self::with_loader(mapping, Loader::from_global())
    }

    /// Like [`Service::new`], but rejects an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoMapping` if `mapping` has no entries.
    pub fn try_new(mapping: ConfigMapping) -> Result<Self> {
        if mapping.is_empty() {
            return Err(ConfigError::NoMapping);
        }
        Ok(Self::new(mapping))
    }

    pub fn with_loader(mapping: ConfigMapping, loader: Loader) -> Self {
        Self {
            mapping,
            store: Store::new(),
            loader,
        }
    }

    /// Resolve every mapped key from `path` (or the process environment when empty).
    ///
    /// Returns the number of keys written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadEnvFailed` if the file cannot be loaded.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<usize> {
        self.loader.load_mapping(path, &self.mapping, &self.store)
    }

    pub fn mapping(&self) -> &ConfigMapping {
        &self.mapping
    }

    /// Read/write handle on the resolved values.
    pub fn config(&self) -> &Store {
        &self.store
    }

    pub fn get(&self, key: &str) -> Result<String> {
        self.store.get(key)
    }

    pub fn get_or_default(&self, key: &str, default: &str) -> String {
        self.store.get_or_default(key, default)
    }

    pub fn get_value(&self, key: &str) -> String {
        self.store.get_value(key)
    }

    pub fn has(&self, key: &str) -> bool {
        self.store.has(key)
    }

    /// Override a value. See [`Store::set`].
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        self.store.set(key, value)
    }

    pub fn delete(&self, key: &str) {
        self.store.delete(key)
    }

    pub fn clear(&self) {
        self.store.clear()
    }

    pub fn get_all(&self) -> HashMap<String, String> {
        self.store.get_all()
    }
}
