//! Loading configuration from environment files and the process environment.
//!
//! Responsibilities:
//! - Open a lookup source for a path (`env.rs`).
//! - Populate stores from declarative mappings and records from field tables (`mapper.rs`).
//! - Provide the `Loader` builder and the one-call `load` entry point (`builder.rs`).
//!
//! Does NOT handle:
//! - Owning resolved values across calls (see `service.rs`).
//!
//! Invariants / Assumptions:
//! - Process environment values take precedence over file entries.
//! - Record targets treat every annotated field as required unless marked optional.
//! - Mapping targets treat unresolved entries as soft-missing.

mod builder;
mod env;
mod mapper;

#[cfg(test)]
mod tests;

pub use builder::{Loader, load};
pub use env::EnvSource;
