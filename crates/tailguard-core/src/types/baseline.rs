//! Per-runner golden baseline statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Historical p99 statistics for one runner.
///
/// The store guarantees `median_p99_ms` and `mad_p99_ms` on load; the fields
/// are optional here so the allowance calculator can reason about any subset
/// of signals. Unknown keys in the document are kept in `extra` and written
/// back out verbatim in the export bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_p99_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mad_p99_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_p99_ms: Option<f64>,
    /// Older calibration output recorded the last value under `p99_ms`.
    #[serde(default, rename = "p99_ms", skip_serializing_if = "Option::is_none")]
    pub legacy_p99_ms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest_fnv: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Baseline {
    pub fn new(median_p99_ms: f64, mad_p99_ms: f64) -> Self {
        Self {
            median_p99_ms: Some(median_p99_ms),
            mad_p99_ms: Some(mad_p99_ms),
            ..Self::default()
        }
    }

    pub fn with_last(mut self, last_p99_ms: f64) -> Self {
        self.last_p99_ms = Some(last_p99_ms);
        self
    }

    pub fn with_digest(mut self, digest: impl Into<String>) -> Self {
        self.digest_fnv = Some(digest.into());
        self
    }

    /// Last observed p99: `last_p99_ms`, else the legacy `p99_ms` key. A
    /// zero value counts as absent.
    pub fn last_observed(&self) -> Option<f64> {
        let recorded = |v: &f64| *v != 0.0;
        self.last_p99_ms
            .filter(recorded)
            .or(self.legacy_p99_ms.filter(recorded))
    }

    /// Reference digest, if one was calibrated. Empty strings count as absent.
    pub fn reference_digest(&self) -> Option<&str> {
        self.digest_fnv.as_deref().filter(|d| !d.is_empty())
    }
}
