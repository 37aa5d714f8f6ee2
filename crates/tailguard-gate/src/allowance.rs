//! Allowed p99 ceiling: the minimum of independent candidate bounds.
//!
//! Each candidate is a pure function returning an optional ceiling. The
//! tightest one wins, so any single strong signal constrains the gate even
//! when the others are loose.

use std::fmt;

use serde::Serialize;
use tailguard_core::errors::ConfigError;
use tailguard_core::types::Baseline;

/// Where a candidate ceiling came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateSource {
    /// `median + mad_multiplier * mad + epsilon`
    MadSpread,
    /// `last * p99_multiplier + epsilon`
    LastObserved,
    /// `median * p99_multiplier + epsilon`, only when no MAD spread exists.
    MedianFallback,
    /// Absolute cap, used as-is.
    BudgetCap,
}

impl CandidateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MadSpread => "mad_spread",
            Self::LastObserved => "last_observed",
            Self::MedianFallback => "median_fallback",
            Self::BudgetCap => "budget_cap",
        }
    }
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    pub source: CandidateSource,
    pub ceiling_ms: f64,
}

/// The computed allowance plus every candidate that fed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Allowance {
    pub allowed_p99_ms: f64,
    pub binding: CandidateSource,
    pub candidates: Vec<Candidate>,
}

/// MAD spread candidate. Requires a finite median and a positive MAD; a zero
/// MAD never produces a candidate.
pub fn mad_candidate(baseline: &Baseline, mad_multiplier: f64, epsilon_ms: f64) -> Option<Candidate> {
    let median = baseline.median_p99_ms.filter(|m| m.is_finite())?;
    let mad = baseline.mad_p99_ms.filter(|m| m.is_finite() && *m > 0.0)?;
    finite(CandidateSource::MadSpread, median + mad_multiplier * mad + epsilon_ms)
}

/// Last-observed candidate. Falls back to the median only when the MAD
/// candidate is unavailable, so a baseline with a median is never ungated.
pub fn last_candidate(
    baseline: &Baseline,
    p99_multiplier: f64,
    epsilon_ms: f64,
    mad_available: bool,
) -> Option<Candidate> {
    let (source, last) = match baseline.last_observed().filter(|v| v.is_finite()) {
        Some(last) => (CandidateSource::LastObserved, last),
        None if !mad_available => (
            CandidateSource::MedianFallback,
            baseline.median_p99_ms.filter(|m| m.is_finite())?,
        ),
        None => return None,
    };
    finite(source, last * p99_multiplier + epsilon_ms)
}

/// Absolute cap candidate.
pub fn cap_candidate(budget_cap_ms: Option<f64>) -> Option<Candidate> {
    finite(CandidateSource::BudgetCap, budget_cap_ms?)
}

fn finite(source: CandidateSource, ceiling_ms: f64) -> Option<Candidate> {
    ceiling_ms.is_finite().then_some(Candidate { source, ceiling_ms })
}

/// Collects every candidate and reduces by minimum.
///
/// Fails with [`ConfigError::NoAllowance`] when no candidate is computable:
/// an ungated run must never silently pass.
pub fn compute_allowance(
    baseline: &Baseline,
    mad_multiplier: f64,
    p99_multiplier: f64,
    epsilon_ms: f64,
    budget_cap_ms: Option<f64>,
) -> Result<Allowance, ConfigError> {
    let mad = mad_candidate(baseline, mad_multiplier, epsilon_ms);
    let candidates: Vec<Candidate> = [
        mad,
        last_candidate(baseline, p99_multiplier, epsilon_ms, mad.is_some()),
        cap_candidate(budget_cap_ms),
    ]
    .into_iter()
    .flatten()
    .collect();

    let tightest = candidates
        .iter()
        .copied()
        .min_by(|a, b| a.ceiling_ms.total_cmp(&b.ceiling_ms))
        .ok_or(ConfigError::NoAllowance)?;

    tracing::debug!(
        allowed_p99_ms = tightest.ceiling_ms,
        binding_candidate = %tightest.source,
        candidates = candidates.len(),
        "computed allowance"
    );

    Ok(Allowance {
        allowed_p99_ms: tightest.ceiling_ms,
        binding: tightest.source,
        candidates,
    })
}

/// Allowed p99 ceiling in milliseconds. See [`compute_allowance`].
pub fn compute_allowed(
    baseline: &Baseline,
    mad_multiplier: f64,
    p99_multiplier: f64,
    epsilon_ms: f64,
    budget_cap_ms: Option<f64>,
) -> Result<f64, ConfigError> {
    compute_allowance(baseline, mad_multiplier, p99_multiplier, epsilon_ms, budget_cap_ms)
        .map(|a| a.allowed_p99_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mad_yields_no_mad_candidate() {
        let b = Baseline::new(400.0, 0.0).with_last(410.0);
        assert_eq!(mad_candidate(&b, 3.0, 0.05), None);
        let a = compute_allowance(&b, 3.0, 1.10, 0.05, None).unwrap();
        assert_eq!(a.binding, CandidateSource::LastObserved);
        assert_eq!(a.candidates.len(), 1);
    }

    #[test]
    fn median_fallback_only_without_mad() {
        let with_mad = Baseline::new(400.0, 20.0);
        assert_eq!(last_candidate(&with_mad, 1.1, 0.05, true), None);

        let no_mad = Baseline::new(400.0, 0.0);
        let c = last_candidate(&no_mad, 1.1, 0.05, false).unwrap();
        assert_eq!(c.source, CandidateSource::MedianFallback);
        assert!((c.ceiling_ms - 440.05).abs() < 1e-9);
    }

    #[test]
    fn nothing_computable_is_config_error() {
        let empty = Baseline::default();
        assert!(matches!(
            compute_allowed(&empty, 3.0, 1.1, 0.05, None),
            Err(ConfigError::NoAllowance)
        ));
        assert_eq!(compute_allowed(&empty, 3.0, 1.1, 0.05, Some(5.0)).unwrap(), 5.0);
    }
}
