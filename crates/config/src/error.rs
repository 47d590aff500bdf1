//! Error types for configuration loading and store access.
//!
//! Responsibilities:
//! - Define one classified variant per failure kind of the store, mapper and loader.
//! - Translate `dotenvy` failures into a cause that is safe to display.
//!
//! Does NOT handle:
//! - Logging of failures (see `diagnostics.rs`).
//!
//! Invariants:
//! - `LoadEnvFailed` NEVER includes raw .env line contents to prevent secret leakage.
//! - `MissingRequiredFields` lists environment names in field declaration order.

use std::io::ErrorKind as IoErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors returned by the store, the mappers and the loader.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Lookup of a key absent from the store.
    #[error("configuration key not found: {key}")]
    KeyNotFound { key: String },

    /// The empty string was used as a key.
    #[error("key cannot be empty")]
    EmptyKey,

    /// The environment file could not be read or parsed.
    #[error("failed to load .env file at {path}: {cause}")]
    LoadEnvFailed {
        path: PathBuf,
        #[source]
        cause: LoadEnvCause,
    },

    /// A value does not fit the field it was destined for.
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// No mapping was supplied where the caller requires one.
    #[error("no configuration mapping provided")]
    NoMapping,

    /// Every required environment variable that could not be resolved.
    #[error("missing required environment variables: {}", keys.join(", "))]
    MissingRequiredFields { keys: Vec<String> },

    /// The load target cannot be populated.
    #[error("invalid load target: {reason}")]
    InvalidTarget { reason: String },
}

/// Underlying reason an environment file failed to load.
///
/// SAFETY: no variant carries file contents, only positions and I/O kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadEnvCause {
    #[error("parse error at position {error_index}")]
    Parse { error_index: usize },

    #[error("I/O error: {kind}")]
    Io { kind: IoErrorKind },

    /// An entry that cannot be placed in the process environment (NUL byte, `=` in key).
    #[error("invalid entry at index {entry_index}")]
    InvalidEntry { entry_index: usize },

    #[error("unknown dotenv error")]
    Unknown,
}

impl From<dotenvy::Error> for LoadEnvCause {
    fn from(error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, idx) => LoadEnvCause::Parse { error_index: idx },
            dotenvy::Error::Io(io_err) => LoadEnvCause::Io {
                kind: io_err.kind(),
            },
            _ => LoadEnvCause::Unknown,
        }
    }
}

/// Fieldless classification of a [`ConfigError`], convenient for matching sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    KeyNotFound,
    EmptyKey,
    LoadEnvFailed,
    InvalidValue,
    NoMapping,
    MissingRequiredFields,
    InvalidTarget,
}

impl ConfigError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            ConfigError::EmptyKey => ErrorKind::EmptyKey,
            ConfigError::LoadEnvFailed { .. } => ErrorKind::LoadEnvFailed,
            ConfigError::InvalidValue { .. } => ErrorKind::InvalidValue,
            ConfigError::NoMapping => ErrorKind::NoMapping,
            ConfigError::MissingRequiredFields { .. } => ErrorKind::MissingRequiredFields,
            ConfigError::InvalidTarget { .. } => ErrorKind::InvalidTarget,
        }
    }

    /// The environment names reported missing, empty for every other variant.
    pub fn missing_keys(&self) -> &[String] {
        match self {
            ConfigError::MissingRequiredFields { keys } => keys,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_fields_lists_keys_in_order() {
        let err = ConfigError::MissingRequiredFields {
            keys: vec!["K2".to_string(), "K3".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "missing required environment variables: K2, K3"
        );
        assert_eq!(err.kind(), ErrorKind::MissingRequiredFields);
        assert_eq!(err.missing_keys(), ["K2", "K3"]);
    }

    #[test]
    fn test_parse_cause_does_not_carry_line_contents() {
        let cause = LoadEnvCause::from(dotenvy::Error::LineParse(
            "PASSWORD=hunter2 oops".to_string(),
            17,
        ));
        assert_eq!(cause, LoadEnvCause::Parse { error_index: 17 });
        assert!(!cause.to_string().contains("hunter2"));
    }

    #[test]
    fn test_io_cause_keeps_kind() {
        let io = std::io::Error::new(IoErrorKind::NotFound, "nope");
        let cause = LoadEnvCause::from(dotenvy::Error::Io(io));
        assert_eq!(
            cause,
            LoadEnvCause::Io {
                kind: IoErrorKind::NotFound
            }
        );
    }

    #[test]
    fn test_other_errors_have_no_missing_keys() {
        assert!(ConfigError::EmptyKey.missing_keys().is_empty());
        assert_eq!(ConfigError::NoMapping.kind(), ErrorKind::NoMapping);
    }
}
