//! Reads the golden baseline document.
//!
//! Document shape:
//!
//! ```json
//! { "runners": { "<id>": { "median_p99_ms": 0.4, "mad_p99_ms": 0.02 } },
//!   "defaults": { "median_p99_ms": 0.5, "mad_p99_ms": 0.03 } }
//! ```
//!
//! The document is ground truth maintained by the external calibration
//! process. It is read fresh on every call and never written here.

use std::path::Path;

use serde_json::Value;
use tailguard_core::errors::InputError;
use tailguard_core::types::Baseline;

/// Which part of the document supplied the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineSource {
    Runner,
    Defaults,
}

/// Load the baseline for `runner_id`, falling back to `defaults`.
pub fn load_baseline(path: &Path, runner_id: &str) -> Result<Baseline, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            InputError::BaselineNotFound {
                path: path.to_path_buf(),
            }
        } else {
            InputError::Unreadable {
                kind: "baseline",
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let doc: Value = serde_json::from_str(&text).map_err(|e| InputError::BaselineInvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let (entry, source) = select_entry(&doc, runner_id)?;
    let baseline = baseline_from(entry)?;
    tracing::debug!(
        path = %path.display(),
        runner_id,
        source = ?source,
        median_p99_ms = ?baseline.median_p99_ms,
        mad_p99_ms = ?baseline.mad_p99_ms,
        "loaded baseline"
    );
    Ok(baseline)
}

/// Picks `runners[runner_id]`, else `defaults`. Null and empty entries are
/// treated as absent.
pub fn select_entry<'d>(
    doc: &'d Value,
    runner_id: &str,
) -> Result<(&'d Value, BaselineSource), InputError> {
    let usable = |v: &&Value| match v {
        Value::Null => false,
        Value::Object(map) => !map.is_empty(),
        _ => true,
    };
    if let Some(entry) = doc
        .get("runners")
        .and_then(|r| r.get(runner_id))
        .filter(usable)
    {
        return Ok((entry, BaselineSource::Runner));
    }
    if let Some(entry) = doc.get("defaults").filter(usable) {
        return Ok((entry, BaselineSource::Defaults));
    }
    Err(InputError::NoBaselineEntry {
        runner_id: runner_id.to_string(),
    })
}

fn baseline_from(entry: &Value) -> Result<Baseline, InputError> {
    let obj = entry.as_object().ok_or_else(|| InputError::BaselineMalformed {
        message: format!("expected an object, got {entry}"),
    })?;
    for field in ["median_p99_ms", "mad_p99_ms"] {
        match obj.get(field) {
            None | Some(Value::Null) => return Err(InputError::BaselineMissingField { field }),
            Some(Value::Number(_)) => {}
            Some(other) => {
                return Err(InputError::BaselineNonNumericField {
                    field,
                    value: other.to_string(),
                })
            }
        }
    }
    serde_json::from_value(entry.clone()).map_err(|e| InputError::BaselineMalformed {
        message: e.to_string(),
    })
}
