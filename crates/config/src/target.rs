//! Field tables for the reflective load strategy.
//!
//! Rust has no runtime field introspection, so an annotated record describes itself
//! as an ordered list of [`FieldBinding`]s. The table is produced either by
//! `#[derive(EnvTarget)]` or by hand with the [`Bindings`] builder.
//!
//! Invariants:
//! - Bindings appear in field declaration order; missing keys are reported in that order.
//! - Only `FieldSlot::Text` is ever written.

use std::borrow::Cow;

/// Where a resolved value goes.
#[derive(Debug)]
pub enum FieldSlot<'a> {
    /// A writable string field.
    Text(&'a mut String),
    /// An annotated field of a type the loader cannot assign.
    Unsupported { type_name: &'static str },
}

/// One annotated field: its name, its environment variable and its slot.
#[derive(Debug)]
pub struct FieldBinding<'a> {
    pub field: &'static str,
    pub env: Cow<'static, str>,
    pub required: bool,
    pub slot: FieldSlot<'a>,
}

impl<'a> FieldBinding<'a> {
    /// A required string field.
    pub fn text(
        field: &'static str,
        env: impl Into<Cow<'static, str>>,
        value: &'a mut String,
    ) -> Self {
        Self {
            field,
            env: env.into(),
            required: true,
            slot: FieldSlot::Text(value),
        }
    }

    /// A string field left untouched and unreported when its variable is unset.
    pub fn optional(
        field: &'static str,
        env: impl Into<Cow<'static, str>>,
        value: &'a mut String,
    ) -> Self {
        Self {
            required: false,
            ..Self::text(field, env, value)
        }
    }

    /// An annotated field whose type cannot receive a string.
    pub fn unsupported(
        field: &'static str,
        env: impl Into<Cow<'static, str>>,
        type_name: &'static str,
    ) -> Self {
        Self {
            field,
            env: env.into(),
            required: true,
            slot: FieldSlot::Unsupported { type_name },
        }
    }
}

/// A record whose annotated fields can be populated from environment variables.
///
/// Usually derived:
///
/// ```ignore
/// #[derive(Default, envbind::EnvTarget)]
/// struct AppConfig {
///     #[env(name = "SUPABASE_KEY")]
///     supabase_key: String,
///     #[env(name = "PORT")]
///     port: String,
///     #[env(name = "LOG_LEVEL", optional)]
///     log_level: String,
///     cache: Vec<u8>,
/// }
/// ```
pub trait EnvTarget {
    /// Annotated fields in declaration order.
    fn fields(&mut self) -> Vec<FieldBinding<'_>>;
}

/// Hand-written field table, for records that do not derive `EnvTarget`.
///
/// ```ignore
/// let mut bindings = Bindings::new()
///     .text("supabase_key", "SUPABASE_KEY", &mut config.supabase_key)
///     .text("port", "PORT", &mut config.port);
/// envbind::load(".env", &mut bindings)?;
/// ```
#[derive(Debug, Default)]
pub struct Bindings<'a> {
    entries: Vec<FieldBinding<'a>>,
}

impl<'a> Bindings<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(
        mut self,
        field: &'static str,
        env: impl Into<Cow<'static, str>>,
        value: &'a mut String,
    ) -> Self {
        self.entries.push(FieldBinding::text(field, env, value));
        self
    }

    pub fn optional(
        mut self,
        field: &'static str,
        env: impl Into<Cow<'static, str>>,
        value: &'a mut String,
    ) -> Self {
        self.entries.push(FieldBinding::optional(field, env, value));
        self
    }

    pub fn unsupported(
        mut self,
        field: &'static str,
        env: impl Into<Cow<'static, str>>,
        type_name: &'static str,
    ) -> Self {
        self.entries.push(FieldBinding::unsupported(field, env, type_name));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> EnvTarget for Bindings<'a> {
    fn fields(&mut self) -> Vec<FieldBinding<'_>> {
        self.entries
            .iter_mut()
            .map(|binding| FieldBinding {
                field: binding.field,
                env: binding.env.clone(),
                required: binding.required,
                slot: match &mut binding.slot {
                    FieldSlot::Text(value) => FieldSlot::Text(&mut **value),
                    FieldSlot::Unsupported { type_name } => FieldSlot::Unsupported {
                        type_name: *type_name,
                    },
                },
            })
            .collect()
    }
}
