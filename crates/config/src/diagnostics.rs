//! Optional diagnostic output for load operations.
//!
//! Responsibilities:
//! - Emit `tracing` events shaped as `[component] [operation] message` when verbose.
//! - Provide the process-wide enable/disable toggle used by the convenience entry points.
//!
//! Does NOT handle:
//! - Installing a subscriber; binaries and tests decide where events go.
//!
//! Invariants:
//! - A non-verbose `Diagnostics` emits nothing.
//! - The global toggle starts disabled and only `Diagnostics::from_global()` reads it.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

/// Component name attached to every event.
pub const COMPONENT: &str = "envbind";

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Turn on diagnostics for loaders built with `from_global()`.
pub fn enable_logging() {
    LOGGING_ENABLED.store(true, Ordering::SeqCst);
}

/// Turn off diagnostics for loaders built with `from_global()`.
pub fn disable_logging() {
    LOGGING_ENABLED.store(false, Ordering::SeqCst);
}

pub fn is_logging_enabled() -> bool {
    LOGGING_ENABLED.load(Ordering::SeqCst)
}

/// Explicit verbosity carried by a `Loader`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    verbose: bool,
}

impl Diagnostics {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Snapshot of the global toggle.
    pub fn from_global() -> Self {
        Self::new(is_logging_enabled())
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn info(&self, operation: &str, message: impl Display) {
        if self.verbose {
            tracing::info!(
                component = COMPONENT,
                operation,
                "[{}] [{}] {}",
                COMPONENT,
                operation,
                message
            );
        }
    }

    pub fn warn(&self, operation: &str, message: impl Display) {
        if self.verbose {
            tracing::warn!(
                component = COMPONENT,
                operation,
                "[{}] [{}] {}",
                COMPONENT,
                operation,
                message
            );
        }
    }

    pub fn error(&self, operation: &str, error: &dyn std::error::Error) {
        if self.verbose {
            tracing::error!(
                component = COMPONENT,
                operation,
                error = %error,
                "[{}] [{}] ERROR: {}",
                COMPONENT,
                operation,
                error
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_global_toggle_round_trip() {
        disable_logging();
        assert!(!is_logging_enabled());
        assert!(!Diagnostics::from_global().is_verbose());

        enable_logging();
        assert!(is_logging_enabled());
        assert!(Diagnostics::from_global().is_verbose());

        disable_logging();
        assert!(!is_logging_enabled());
    }

    #[test]
    #[serial]
    fn test_toggle_is_safe_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    if i % 2 == 0 {
                        enable_logging();
                    } else {
                        disable_logging();
                    }
                    is_logging_enabled()
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        disable_logging();
        assert!(!is_logging_enabled());
    }

    #[test]
    fn test_explicit_verbosity_ignores_global_state() {
        assert!(Diagnostics::new(true).is_verbose());
        assert!(!Diagnostics::default().is_verbose());
        // Quiet diagnostics must be callable without a subscriber.
        let quiet = Diagnostics::default();
        quiet.info("Load", "nothing");
        quiet.warn("Load", "nothing");
        quiet.error("Load", &crate::error::ConfigError::EmptyKey);
    }
}
