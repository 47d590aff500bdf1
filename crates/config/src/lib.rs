//! Typed configuration from `.env` files and the process environment.
//!
//! This crate resolves environment variables into either an annotated record
//! (every annotated field required, missing variables reported together) or a
//! thread-safe [`Store`] driven by an explicit [`ConfigMapping`].

// Lets `#[derive(EnvTarget)]` output name `::envbind` from inside this crate.
extern crate self as envbind;

pub mod diagnostics;
mod error;
mod loader;
mod mapping;
mod service;
mod store;
mod target;

pub use diagnostics::{Diagnostics, disable_logging, enable_logging, is_logging_enabled};
pub use error::{ConfigError, ErrorKind, LoadEnvCause, Result};
pub use loader::{EnvSource, Loader, load};
pub use mapping::ConfigMapping;
pub use service::Service;
pub use store::Store;
pub use target::{Bindings, EnvTarget, FieldBinding, FieldSlot};

#[cfg(feature = "derive")]
pub use envbind_derive::EnvTarget;
