//! Proc macro for generating environment field tables for configuration structs.
//!
//! This crate provides `#[derive(EnvTarget)]`, which implements `envbind::EnvTarget`
//! by listing every `#[env(...)]`-annotated field in declaration order.
//!
//! # Field Attributes
//! - `#[env(name = "PORT")]` - Source the field from the `PORT` environment variable
//! - `#[env(name = "PORT", optional)]` - Leave the field untouched when `PORT` is unset
//!
//! Fields without `#[env]` are not part of the table and are never written.
//!
//! # Type Handling
//! - `String` fields are assigned the raw value.
//! - Any other annotated type is listed as unsupported: the loader warns and skips it.
//!
//! # Example
//! ```ignore
//! #[derive(Default, EnvTarget)]
//! pub struct AppConfig {
//!     #[env(name = "SUPABASE_KEY")]
//!     pub supabase_key: String,
//!     #[env(name = "PORT")]
//!     pub port: String,
//!     pub not_loaded: String,
//! }
//! ```

mod env_target;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

#[proc_macro_derive(EnvTarget, attributes(env))]
pub fn derive_env_target(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    env_target::generate_impl(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
