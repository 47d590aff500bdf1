//! Declarative mapping from logical configuration keys to environment variable names.

use std::collections::HashMap;
use std::collections::hash_map::Iter;

/// Logical key (the name used in code) to environment variable name.
///
/// A `Service` takes its mapping by value, so the table cannot change underneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigMapping {
    entries: HashMap<String, String>,
}

impl ConfigMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ConfigMapping::insert`].
    pub fn with(mut self, key: impl Into<String>, env_name: impl Into<String>) -> Self {
        self.insert(key, env_name);
        self
    }

    /// Bind `key` to `env_name`, replacing and returning any previous binding.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        env_name: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(key.into(), env_name.into())
    }

    /// Environment variable name bound to `key`.
    pub fn env_name(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for ConfigMapping {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for ConfigMapping {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ConfigMapping {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
