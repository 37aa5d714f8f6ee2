//! Schema parsers for the two harness outputs.

pub mod bench;
pub mod prom;

pub use bench::{parse_bench_measurement, parse_bench_str};
pub use prom::{parse_metrics_snapshot, parse_metrics_str};

use std::path::Path;

use tailguard_core::errors::InputError;

/// Reads a whole input file, distinguishing "missing" from "unreadable".
pub(crate) fn read_input(kind: &'static str, path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            InputError::FileNotFound {
                kind,
                path: path.to_path_buf(),
            }
        } else {
            InputError::Unreadable {
                kind,
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
