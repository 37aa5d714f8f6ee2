//! Prometheus textfile parser.

use std::path::Path;

use tailguard_core::constants::REQUIRED_METRICS;
use tailguard_core::errors::InputError;
use tailguard_core::types::MetricsSnapshot;

/// Parse and validate a Prometheus textfile.
pub fn parse_metrics_snapshot(path: &Path) -> Result<MetricsSnapshot, InputError> {
    let text = super::read_input("metrics", path)?;
    parse_metrics_str(&text, path)
}

/// Parse `key value` lines. `#` comments and blank lines are ignored, lines
/// that are not exactly two tokens are skipped, and a value that is not a
/// number rejects the whole file. All [`REQUIRED_METRICS`] must be present.
pub fn parse_metrics_str(text: &str, path: &Path) -> Result<MetricsSnapshot, InputError> {
    let mut snapshot = MetricsSnapshot::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let &[key, value] = tokens.as_slice() else {
            tracing::debug!(line, "skipping metrics line without exactly two tokens");
            continue;
        };
        let parsed = value
            .parse::<f64>()
            .map_err(|_| InputError::NonNumericMetric {
                key: key.to_string(),
                value: value.to_string(),
            })?;
        snapshot.insert(key, parsed);
    }

    let missing = snapshot.missing(&REQUIRED_METRICS);
    if !missing.is_empty() {
        return Err(InputError::MissingMetrics {
            path: path.to_path_buf(),
            missing: missing.into_iter().map(str::to_string).collect(),
        });
    }
    tracing::debug!(path = %path.display(), metrics = snapshot.len(), "parsed metrics snapshot");
    Ok(snapshot)
}
