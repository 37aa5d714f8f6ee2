//! Test fixture loader and scratch-input builders for the tailguard crates.
//!
//! Static fixtures live under `data/` in this crate. Scenario tests that need
//! a specific combination of inputs build them in a [`ScratchRun`] instead.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tailguard_core::constants::REQUIRED_METRICS;
use tempfile::TempDir;

/// Root directory of the static fixtures.
fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> Value {
    load_fixture(relative_path)
}

// ---------------------------------------------------------------------------
// Scratch inputs
// ---------------------------------------------------------------------------

/// A temporary directory holding the inputs of one run.
pub struct ScratchRun {
    dir: TempDir,
}

impl ScratchRun {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create scratch dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Path of `name` inside the scratch dir. Does not create anything.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `content` to `name` and returns its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture parent");
        }
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    /// Writes `bench.jsonl`, `metrics.prom`, and `baseline.json` and returns
    /// their paths in that order.
    pub fn inputs(&self, bench: &str, metrics: &str, baseline: &Value) -> (PathBuf, PathBuf, PathBuf) {
        (
            self.write("bench.jsonl", bench),
            self.write("metrics.prom", metrics),
            self.write("baseline.json", &baseline.to_string()),
        )
    }
}

impl Default for ScratchRun {
    fn default() -> Self {
        Self::new()
    }
}

/// One NDJSON bench record. `p999_ms` and `digest` are omitted when `None`.
pub fn bench_line(p99_ms: f64, p999_ms: Option<f64>, digest: Option<&str>) -> String {
    let mut record = json!({ "p99_ms": p99_ms, "determinism": true });
    if let Some(p999) = p999_ms {
        record["p999_ms"] = json!(p999);
    }
    if let Some(d) = digest {
        record["digest_fnv"] = json!(d);
    }
    format!("{record}\n")
}

/// A Prometheus textfile carrying every required metric.
pub fn metrics_text() -> String {
    metrics_text_without(&[])
}

/// A Prometheus textfile carrying every required metric except `skip`.
pub fn metrics_text_without(skip: &[&str]) -> String {
    let mut out = String::from("# HELP lob_p99_ms order book p99 latency\n# TYPE lob_p99_ms gauge\n");
    for (i, key) in REQUIRED_METRICS.iter().enumerate() {
        if skip.contains(key) {
            continue;
        }
        let value = if *key == "lob_publish_allowed" { 1.0 } else { 100.0 * (i + 1) as f64 };
        out.push_str(&format!("{key} {value}\n"));
    }
    out
}

/// Baseline document whose `defaults` entry is `entry`.
pub fn defaults_baseline(entry: Value) -> Value {
    json!({ "runners": {}, "defaults": entry })
}

/// Baseline document with a single per-runner entry and no defaults.
pub fn runner_baseline(runner_id: &str, entry: Value) -> Value {
    json!({ "runners": { runner_id: entry } })
}
