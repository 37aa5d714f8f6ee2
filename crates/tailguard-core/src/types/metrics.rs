//! Prometheus textfile snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metric name to value. Ordered so exports are byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsSnapshot(BTreeMap<String, f64>);

impl MetricsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Required keys absent from the snapshot, in sorted order.
    pub fn missing<'k>(&self, required: &[&'k str]) -> Vec<&'k str> {
        let mut missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|k| !self.0.contains_key(*k))
            .collect();
        missing.sort_unstable();
        missing
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
