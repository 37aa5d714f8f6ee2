//! Auto-tune advisor.
//!
//! Back-computes multiplier values that would have put the gate just above
//! the current measurement. Advisory only: the verdict never depends on it.
//! Applying the suggestions recalibrates toward THIS run, which is unsound
//! when this run is itself anomalous.

use serde::Serialize;
use tailguard_core::constants::AUTO_TUNE_HEADROOM;
use tailguard_core::types::{Baseline, BenchMeasurement};

const NOTES: &str = "Adds ~5% headroom using the latest measurement.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoTuneSuggestion {
    /// Suggested absolute cap: measured p99 plus ~5%.
    pub p99_budget_ms: f64,
    pub current_allowed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mad_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p99_multiplier: Option<f64>,
    pub notes: &'static str,
}

/// Compute suggestions from the measurement and the baseline in use.
pub fn suggest(
    measurement: &BenchMeasurement,
    baseline: &Baseline,
    allowed_p99_ms: f64,
) -> AutoTuneSuggestion {
    let measured = measurement.p99_ms;
    let median = nonzero(baseline.median_p99_ms).unwrap_or(measured);
    let last = nonzero(baseline.last_observed()).unwrap_or(median);

    let mad_multiplier = baseline
        .mad_p99_ms
        .filter(|mad| *mad > 0.0)
        .map(|mad| round_to(f64::max(1.0, (measured - median) / mad + 0.5), 2));
    let p99_multiplier =
        (last > 0.0).then(|| round_to(f64::max(1.0, measured / last + 0.02), 3));

    AutoTuneSuggestion {
        p99_budget_ms: round_to(measured * AUTO_TUNE_HEADROOM, 4),
        current_allowed_ms: round_to(allowed_p99_ms, 4),
        mad_multiplier,
        p99_multiplier,
        notes: NOTES,
    }
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_multipliers_from_measurement() {
        let baseline = Baseline::new(400.0, 20.0).with_last(420.0);
        let s = suggest(&BenchMeasurement::with_p99(450.0), &baseline, 460.05);
        assert_eq!(s.p99_budget_ms, 472.5);
        assert_eq!(s.current_allowed_ms, 460.05);
        // (450 - 400) / 20 + 0.5
        assert_eq!(s.mad_multiplier, Some(3.0));
        // 450 / 420 + 0.02 = 1.0914...
        assert_eq!(s.p99_multiplier, Some(1.091));
    }

    #[test]
    fn multipliers_never_drop_below_one() {
        let baseline = Baseline::new(400.0, 20.0).with_last(500.0);
        let s = suggest(&BenchMeasurement::with_p99(300.0), &baseline, 460.05);
        assert_eq!(s.mad_multiplier, Some(1.0));
        assert_eq!(s.p99_multiplier, Some(1.0));
    }

    #[test]
    fn zero_mad_skips_mad_suggestion() {
        let baseline = Baseline::new(400.0, 0.0);
        let s = suggest(&BenchMeasurement::with_p99(450.0), &baseline, 440.05);
        assert_eq!(s.mad_multiplier, None);
        // last falls back to the median
        assert_eq!(s.p99_multiplier, Some(1.145));
    }
}
