//! Parsed benchmark summary.

use serde::Serialize;

/// The first valid record of the NDJSON benchmark summary.
///
/// `p999_ms` and `p9999_ms` are stored as `0.0` when the harness did not
/// measure the tier, which keeps the export schema numeric. Gate logic must go
/// through [`BenchMeasurement::p999`] / [`BenchMeasurement::p9999`], which turn
/// the sentinel into `None` so "not measured" can never be read as "measured
/// as zero".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchMeasurement {
    pub p99_ms: f64,
    pub p999_ms: f64,
    pub p9999_ms: f64,
    pub digest: Option<String>,
    pub determinism: Option<bool>,
}

impl BenchMeasurement {
    /// Measurement with only the p99 tier populated.
    pub fn with_p99(p99_ms: f64) -> Self {
        Self {
            p99_ms,
            p999_ms: 0.0,
            p9999_ms: 0.0,
            digest: None,
            determinism: None,
        }
    }

    /// Measured p99.9, or `None` when the tier was not measured.
    pub fn p999(&self) -> Option<f64> {
        measured(self.p999_ms)
    }

    /// Measured p99.99, or `None` when the tier was not measured.
    pub fn p9999(&self) -> Option<f64> {
        measured(self.p9999_ms)
    }
}

fn measured(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_tier_reads_as_unmeasured() {
        let m = BenchMeasurement::with_p99(1.0);
        assert_eq!(m.p999(), None);
        assert_eq!(m.p9999(), None);

        let m = BenchMeasurement {
            p999_ms: 2.5,
            ..BenchMeasurement::with_p99(1.0)
        };
        assert_eq!(m.p999(), Some(2.5));
    }
}
