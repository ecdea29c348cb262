//! Facts used to resolve `%{name}` placeholders.

use std::collections::{BTreeMap, HashMap};

/// Anything that can answer "what is the value of fact `name`?".
pub trait FactSource {
    fn fact(&self, name: &str) -> Option<&str>;
}

impl FactSource for HashMap<String, String> {
    fn fact(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FactSource for BTreeMap<String, String> {
    fn fact(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// An owned set of facts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facts {
    values: BTreeMap<String, String>,
}

impl Facts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects facts from environment variables starting with `prefix`.
    ///
    /// `FACTER_Environment=production` with prefix `FACTER_` becomes the fact
    /// `environment`.
    pub fn from_env(prefix: &str) -> Self {
        Self::from_vars(std::env::vars(), prefix)
    }

    /// Like [`from_env`](Self::from_env), over an explicit set of variables.
    pub fn from_vars<I, K, V>(vars: I, prefix: &str) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut facts = Self::new();
        for (key, value) in vars {
            if let Some(name) = key.as_ref().strip_prefix(prefix) {
                if name.is_empty() {
                    continue;
                }
                facts.insert(name.to_lowercase(), value);
            }
        }
        tracing::trace!(count = facts.len(), prefix, "collected facts");
        facts
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FactSource for Facts {
    fn fact(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Facts {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut facts = Self::new();
        for (name, value) in iter {
            facts.insert(name, value);
        }
        facts
    }
}
