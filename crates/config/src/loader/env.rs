//! Environment lookup sources.
//!
//! Responsibilities:
//! - Resolve environment variable names against the process environment.
//! - Parse an environment file into an overlay consulted after the process environment.
//! - Export parsed entries into the process environment for later subsystems.
//!
//! Does NOT handle:
//! - The `.env` syntax itself (delegated to `dotenvy`).
//! - Mapping names onto store keys or struct fields (see `mapper.rs`).
//!
//! Invariants:
//! - A file is parsed completely before anything is exported; a parse failure changes nothing.
//! - Existing process variables are never overwritten by file entries.
//! - Non-UTF-8 process values are treated as unset.
//! - Entries with a NUL byte or an invalid name fail the whole file, so export never panics.
//!
//! Known limitation: exporting mutates process-wide state. Two loaders exporting
//! concurrently in one process race on it; callers must serialise such loads.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, LoadEnvCause, Result};

/// Where environment names are resolved.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    overlay: HashMap<String, String>,
    use_process: bool,
    path: Option<PathBuf>,
}

impl EnvSource {
    /// Resolve strictly against the process environment.
    pub fn process() -> Self {
        Self {
            overlay: HashMap::new(),
            use_process: true,
            path: None,
        }
    }

    /// Parse the environment file at `path` into an overlay over the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadEnvFailed` if the file cannot be read or any line fails to parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let load_failed = |cause: LoadEnvCause| ConfigError::LoadEnvFailed {
            path: path.to_path_buf(),
            cause,
        };

        let iter = dotenvy::from_path_iter(path).map_err(|e| load_failed(e.into()))?;
        let mut overlay = HashMap::new();
        for (entry_index, item) in iter.enumerate() {
            let (key, value) = item.map_err(|e| load_failed(e.into()))?;
            if !is_valid_name(&key) || value.contains('\0') {
                return Err(load_failed(LoadEnvCause::InvalidEntry { entry_index }));
            }
            overlay.insert(key, value);
        }

        Ok(Self {
            overlay,
            use_process: true,
            path: Some(path.to_path_buf()),
        })
    }

    /// A self-contained source that never reads the process environment.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            overlay: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            use_process: false,
            path: None,
        }
    }

    /// Resolve `name`: process environment first, then the file overlay.
    pub fn lookup(&self, name: &str) -> Option<String> {
        if self.use_process
            && let Some(value) = process_var(name)
        {
            return Some(value);
        }
        self.overlay.get(name).cloned()
    }

    /// File this source was parsed from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of entries parsed from the file.
    pub fn overlay_len(&self) -> usize {
        self.overlay.len()
    }

    /// Copy overlay entries into the process environment where not already set.
    ///
    /// Returns the number of variables exported.
    pub fn export_to_process(&self) -> usize {
        if !self.use_process {
            return 0;
        }
        let mut exported = 0;
        for (key, value) in &self.overlay {
            if !is_valid_name(key) || value.contains('\0') {
                continue;
            }
            if std::env::var_os(key).is_none() {
                // SAFETY: concurrent exporters must be serialised by the caller
                // (see the module-level note), as with dotenvy's own loader.
                unsafe {
                    std::env::set_var(key, value);
                }
                exported += 1;
            }
        }
        exported
    }
}

/// Whether `name` can be read from or written to the process environment.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['=', '\0'])
}

fn process_var(name: &str) -> Option<String> {
    if !is_valid_name(name) {
        return None;
    }
    std::env::var(name).ok()
}
