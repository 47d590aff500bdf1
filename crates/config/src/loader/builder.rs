//! Loader builder implementation.
//!
//! Responsibilities:
//! - Orchestrate read source -> resolve names -> populate -> validate.
//! - Carry explicit verbosity and export behaviour for a load.
//!
//! Does NOT handle:
//! - Per-field population logic (delegated to mapper.rs).
//! - File parsing and process lookups (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - An empty path means process environment only; no file I/O is attempted.
//! - A file that fails to load aborts before any key or field is populated.
//! - There is no retry; a failed load must be re-invoked by the caller.

use std::path::Path;

use super::env::EnvSource;
use super::mapper::{apply_fields, apply_mapping};
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::mapping::ConfigMapping;
use crate::store::Store;
use crate::target::EnvTarget;

/// Loads environment values into records or stores.
#[derive(Debug, Clone, Copy)]
pub struct Loader {
    diagnostics: Diagnostics,
    export: bool,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    /// Quiet loader that exports file entries into the process environment.
    pub fn new() -> Self {
        Self {
            diagnostics: Diagnostics::default(),
            export: true,
        }
    }

    /// Loader whose verbosity follows the global logging toggle at creation time.
    pub fn from_global() -> Self {
        Self::new().with_diagnostics(Diagnostics::from_global())
    }

    /// Emit diagnostic events for each step of a load.
    pub fn verbose(self, verbose: bool) -> Self {
        self.with_diagnostics(Diagnostics::new(verbose))
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Whether parsed file entries are exported into the process environment (default: true).
    pub fn export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    /// Open the source for `path`: the process environment when empty, else the file overlay.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadEnvFailed` if the file cannot be read or parsed.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<EnvSource> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            self.diagnostics
                .info("Load", "Initialized - loading from OS environment variables");
            return Ok(EnvSource::process());
        }

        self.diagnostics.info(
            "Load",
            format!("Initialized - loading from file: {}", path.display()),
        );
        let source =
            EnvSource::from_file(path).inspect_err(|e| self.diagnostics.error("Load", e))?;
        if self.export {
            let exported = source.export_to_process();
            tracing::debug!(
                path = %path.display(),
                parsed = source.overlay_len(),
                exported,
                "Exported .env entries into process environment"
            );
        }
        Ok(source)
    }

    /// Load `path` and fill every annotated field of `target`.
    ///
    /// # Errors
    ///
    /// - `ConfigError::LoadEnvFailed` if the file cannot be loaded; `target` is untouched.
    /// - `ConfigError::InvalidTarget` if the target's field table is unusable.
    /// - `ConfigError::MissingRequiredFields` naming every unresolved required variable.
    pub fn load_into<T>(&self, path: impl AsRef<Path>, target: &mut T) -> Result<()>
    where
        T: EnvTarget + ?Sized,
    {
        let source = self.open(path)?;
        self.apply_into(&source, target)
    }

    /// Fill `target` from an already opened source.
    pub fn apply_into<T>(&self, source: &EnvSource, target: &mut T) -> Result<()>
    where
        T: EnvTarget + ?Sized,
    {
        match apply_fields(source, target, &self.diagnostics) {
            Ok(()) => {
                self.diagnostics
                    .info("Load", "Successfully loaded all configuration values");
                Ok(())
            }
            Err(e) => {
                self.diagnostics.error("Load", &e);
                Err(e)
            }
        }
    }

    /// Load `path` and copy every resolvable `mapping` entry into `store`.
    ///
    /// Unresolved entries stay absent from `store`; they are not an error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadEnvFailed` if the file cannot be loaded; `store` is untouched.
    pub fn load_mapping(
        &self,
        path: impl AsRef<Path>,
        mapping: &ConfigMapping,
        store: &Store,
    ) -> Result<usize> {
        let source = self.open(path)?;
        Ok(self.apply_mapping(&source, mapping, store))
    }

    /// Copy `mapping` entries from an already opened source. Returns the number of keys written.
    pub fn apply_mapping(
        &self,
        source: &EnvSource,
        mapping: &ConfigMapping,
        store: &Store,
    ) -> usize {
        let written = apply_mapping(source, mapping, store, &self.diagnostics);
        self.diagnostics.info(
            "Load",
            format!("Resolved {} of {} mapped keys", written, mapping.len()),
        );
        written
    }
}

/// Load `path` (or the process environment when empty) into `target`.
///
/// Verbosity follows [`crate::enable_logging`] / [`crate::disable_logging`].
///
/// # Errors
///
/// See [`Loader::load_into`].
pub fn load<T>(path: impl AsRef<Path>, target: &mut T) -> Result<()>
where
    T: EnvTarget + ?Sized,
{
    Loader::from_global().load_into(path, target)
}
