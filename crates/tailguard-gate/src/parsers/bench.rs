//! NDJSON benchmark summary parser.

use std::path::Path;

use serde_json::{Map, Value};
use tailguard_core::errors::InputError;
use tailguard_core::types::BenchMeasurement;

/// Field names that may carry the output digest, in priority order.
const DIGEST_FIELDS: [&str; 2] = ["digest_fnv", "actual"];

/// Parse the first JSON line of a benchmark NDJSON file.
pub fn parse_bench_measurement(path: &Path) -> Result<BenchMeasurement, InputError> {
    let text = super::read_input("bench", path)?;
    parse_bench_str(&text, path)
}

/// Parse NDJSON text. `path` is only used for error messages.
///
/// Blank lines are skipped, as are lines that do not parse as JSON. The first
/// line that does parse is the record; if it lacks a numeric `p99_ms` the
/// input is rejected without looking further.
pub fn parse_bench_str(text: &str, path: &Path) -> Result<BenchMeasurement, InputError> {
    let mut saw_content = false;
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        saw_content = true;
        match serde_json::from_str::<Value>(line) {
            Ok(value) => {
                tracing::debug!(path = %path.display(), line = idx + 1, "selected bench record");
                return measurement_from(&value);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), line = idx + 1, error = %e, "skipping non-JSON bench line");
            }
        }
    }
    if saw_content {
        Err(InputError::NoJsonLine {
            path: path.to_path_buf(),
        })
    } else {
        Err(InputError::EmptyBench {
            path: path.to_path_buf(),
        })
    }
}

fn measurement_from(value: &Value) -> Result<BenchMeasurement, InputError> {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let p99_ms = match obj.get("p99_ms") {
        None | Some(Value::Null) => return Err(InputError::MissingBenchField { field: "p99_ms" }),
        Some(v) => number(v).ok_or_else(|| InputError::NonNumericBenchField {
            field: "p99_ms",
            value: v.to_string(),
        })?,
    };

    Ok(BenchMeasurement {
        p99_ms,
        p999_ms: optional_tier(obj, "p999_ms")?,
        p9999_ms: optional_tier(obj, "p9999_ms")?,
        digest: DIGEST_FIELDS
            .iter()
            .filter_map(|k| obj.get(*k).and_then(Value::as_str))
            .find(|d| !d.is_empty())
            .map(str::to_string),
        determinism: obj.get("determinism").and_then(Value::as_bool),
    })
}

/// Absent or null tiers read as `0.0` ("not measured").
fn optional_tier(obj: &Map<String, Value>, field: &'static str) -> Result<f64, InputError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(0.0),
        Some(v) => number(v).ok_or_else(|| InputError::NonNumericBenchField {
            field,
            value: v.to_string(),
        }),
    }
}

/// JSON numbers, or strings holding one (some harnesses quote floats).
/// Non-finite values (`"NaN"`, `"inf"`) are rejected: they compare false
/// against every ceiling.
fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<BenchMeasurement, InputError> {
        parse_bench_str(text, Path::new("bench.jsonl"))
    }

    #[test]
    fn first_parseable_line_wins() {
        let m = parse("\n{broken\n{\"p99_ms\": 1.5}\n{\"p99_ms\": 9.0}\n").unwrap();
        assert_eq!(m.p99_ms, 1.5);
        assert_eq!(m.p999_ms, 0.0);
        assert_eq!(m.p9999_ms, 0.0);
    }

    #[test]
    fn digest_prefers_digest_fnv_then_actual() {
        let m = parse(r#"{"p99_ms": 1, "digest_fnv": "", "actual": "0xbeef"}"#).unwrap();
        assert_eq!(m.digest.as_deref(), Some("0xbeef"));
        let m = parse(r#"{"p99_ms": 1, "digest_fnv": "0xcafe", "actual": "0xbeef"}"#).unwrap();
        assert_eq!(m.digest.as_deref(), Some("0xcafe"));
    }

    #[test]
    fn determinism_passes_through_unvalidated() {
        let m = parse(r#"{"p99_ms": 1, "determinism": false}"#).unwrap();
        assert_eq!(m.determinism, Some(false));
        let m = parse(r#"{"p99_ms": 1, "determinism": "yes"}"#).unwrap();
        assert_eq!(m.determinism, None);
    }

    #[test]
    fn empty_and_garbage_files_are_distinguished() {
        assert!(matches!(parse("\n  \n"), Err(InputError::EmptyBench { .. })));
        assert!(matches!(parse("nope\n"), Err(InputError::NoJsonLine { .. })));
    }

    #[test]
    fn missing_or_non_numeric_p99_is_rejected() {
        assert!(matches!(
            parse(r#"{"p999_ms": 3.0}"#),
            Err(InputError::MissingBenchField { field: "p99_ms" })
        ));
        assert!(matches!(
            parse(r#"{"p99_ms": "fast"}"#),
            Err(InputError::NonNumericBenchField { field: "p99_ms", .. })
        ));
        assert!(matches!(
            parse(r#"{"p99_ms": "NaN"}"#),
            Err(InputError::NonNumericBenchField { field: "p99_ms", .. })
        ));
        // A non-object JSON line is selected and then lacks the field.
        assert!(matches!(
            parse("[1, 2]\n{\"p99_ms\": 1}"),
            Err(InputError::MissingBenchField { .. })
        ));
    }

    #[test]
    fn non_finite_tiers_are_rejected() {
        for raw in [r#"{"p99_ms": "nan"}"#, r#"{"p99_ms": "inf"}"#, r#"{"p99_ms": 1.0, "p999_ms": "NaN"}"#] {
            assert!(
                matches!(parse(raw), Err(InputError::NonNumericBenchField { .. })),
                "{raw}"
            );
        }
    }
}
