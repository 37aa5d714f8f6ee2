//! Configuration sources.
//!
//! Environment lookups go through [`ConfigSource`] so that resolution stays a
//! pure function of its inputs. Production code passes [`ProcessEnv`]; tests
//! pass a [`MapSource`].

use std::collections::BTreeMap;

use crate::errors::ConfigError;

/// A read-only key/value source, typically the process environment.
pub trait ConfigSource {
    /// Returns the raw value for `key`, if set.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns the value for `key`, treating empty strings and the literal
    /// `"None"` as unset.
    fn value(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty() && v != "None")
    }

    /// Parses `key` as a float. Unset is `Ok(None)`; a non-numeric value is
    /// a fatal [`ConfigError::NonNumericEnv`].
    fn float(&self, key: &str) -> Result<Option<f64>, ConfigError> {
        match self.value(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| ConfigError::NonNumericEnv {
                    key: key.to_string(),
                    value: raw,
                }),
        }
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ConfigSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory source for tests and embedding callers.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: BTreeMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ConfigSource for MapSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_none_literal_are_unset() {
        let src = MapSource::new().with("A", "").with("B", "None").with("C", "1.5");
        assert_eq!(src.value("A"), None);
        assert_eq!(src.value("B"), None);
        assert_eq!(src.float("C").unwrap(), Some(1.5));
        assert_eq!(src.float("MISSING").unwrap(), None);
    }

    #[test]
    fn non_numeric_float_is_config_error() {
        let src = MapSource::new().with("EPSILON_MS", "fast");
        match src.float("EPSILON_MS") {
            Err(ConfigError::NonNumericEnv { key, value }) => {
                assert_eq!(key, "EPSILON_MS");
                assert_eq!(value, "fast");
            }
            other => panic!("expected NonNumericEnv, got {other:?}"),
        }
    }
}
