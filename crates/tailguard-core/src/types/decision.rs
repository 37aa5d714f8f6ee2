//! The guardrail verdict.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final verdict of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GateStatus {
    Pass,
    Fail,
}

impl GateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
        }
    }
}

impl fmt::Display for GateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one tier of the cascading gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TierId {
    /// Hard p99 ceiling.
    P99Gate,
    /// Digest equality, when enforced.
    DigestGate,
    /// Derived p99.9 ceiling (3x the p99 allowance).
    P999Gate,
    /// p99.99, observational only.
    P9999Advisory,
}

impl TierId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P99Gate => "p99_gate",
            Self::DigestGate => "digest_gate",
            Self::P999Gate => "p999_gate",
            Self::P9999Advisory => "p9999_advisory",
        }
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one evaluation. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateDecision {
    pub status: GateStatus,
    pub allowed_p99_ms: f64,
    pub allowed_p999_ms: f64,
    pub digest_ok: bool,
    /// Tiers that flagged failure, in evaluation order.
    pub failures: Vec<TierId>,
    /// Ordered, human-readable decision trace.
    pub trace: Vec<String>,
}

impl GateDecision {
    pub fn passed(&self) -> bool {
        self.status == GateStatus::Pass
    }

    pub fn verdict_line(&self) -> String {
        format!("verdict: {}", self.status)
    }

    /// Console rendering: verdict line first, then the trace, newline-terminated.
    pub fn render(&self) -> String {
        let mut out = self.verdict_line();
        out.push('\n');
        for line in &self.trace {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
