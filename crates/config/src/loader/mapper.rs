//! Population strategies: declarative mapping into a `Store`, and field tables into records.
//!
//! Invariants:
//! - A key or field only ever receives the value of its own environment name.
//! - Field targets are validated completely before the first write.
//! - Every missing required field is collected; the error is raised once, after all fields.

use super::env::EnvSource;
use crate::diagnostics::Diagnostics;
use crate::error::{ConfigError, Result};
use crate::mapping::ConfigMapping;
use crate::store::Store;
use crate::target::{EnvTarget, FieldSlot};

/// Copy every resolvable mapping entry into `store`.
///
/// Unresolved entries are left absent. Returns the number of keys written.
pub fn apply_mapping(
    source: &EnvSource,
    mapping: &ConfigMapping,
    store: &Store,
    diagnostics: &Diagnostics,
) -> usize {
    let mut resolved = Vec::with_capacity(mapping.len());
    for (key, env_name) in mapping {
        match source.lookup(env_name) {
            Some(value) => {
                diagnostics.info("Load", format!("Loaded {} -> {}", env_name, key));
                resolved.push((key.clone(), value));
            }
            None => {
                diagnostics.warn(
                    "Load",
                    format!("Environment variable {} not set", env_name),
                );
            }
        }
    }
    let count = resolved.len();
    store.extend(resolved);
    count
}

/// Fill the annotated fields of `target` from `source`.
///
/// # Errors
///
/// - `ConfigError::InvalidTarget` if a binding names no environment variable; nothing is written.
/// - `ConfigError::MissingRequiredFields` naming every unresolved required variable,
///   in declaration order. Resolvable fields are still written.
pub fn apply_fields<T>(
    source: &EnvSource,
    target: &mut T,
    diagnostics: &Diagnostics,
) -> Result<()>
where
    T: EnvTarget + ?Sized,
{
    let bindings = target.fields();

    if let Some(binding) = bindings.iter().find(|b| b.env.trim().is_empty()) {
        return Err(ConfigError::InvalidTarget {
            reason: format!(
                "field {} has an empty environment variable name",
                binding.field
            ),
        });
    }

    let mut missing = Vec::new();
    for binding in bindings {
        match binding.slot {
            FieldSlot::Unsupported { type_name } => {
                diagnostics.warn(
                    "Load",
                    format!("Unsupported field type for {}: {}", binding.field, type_name),
                );
            }
            FieldSlot::Text(value) => match source.lookup(&binding.env) {
                Some(found) => {
                    *value = found;
                    diagnostics.info(
                        "Load",
                        format!("Loaded {} -> {}", binding.env, binding.field),
                    );
                }
                None if binding.required => missing.push(binding.env.into_owned()),
                None => {
                    diagnostics.info(
                        "Load",
                        format!(
                            "Optional {} not set, {} left unchanged",
                            binding.env, binding.field
                        ),
                    );
                }
            },
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingRequiredFields { keys: missing })
    }
}
