//! Process exit contract.
//!
//! "Could not evaluate" and "evaluated as failing" must stay distinguishable
//! to CI, so every outcome maps to its own code.

use tailguard_core::errors::GuardError;
use tailguard_core::types::GateDecision;

pub const EXIT_PASS: u8 = 0;
pub const EXIT_FAIL: u8 = 1;
pub const EXIT_INPUT_ERROR: u8 = 2;
pub const EXIT_CONFIG_ERROR: u8 = 3;
pub const EXIT_EXPORT_ERROR: u8 = 4;
/// Bad command line (sysexits `EX_USAGE`).
pub const EXIT_USAGE: u8 = 64;

pub fn for_decision(decision: &GateDecision) -> u8 {
    if decision.passed() {
        EXIT_PASS
    } else {
        EXIT_FAIL
    }
}

pub fn for_error(error: &GuardError) -> u8 {
    match error {
        GuardError::Input(_) => EXIT_INPUT_ERROR,
        GuardError::Config(_) => EXIT_CONFIG_ERROR,
        GuardError::Export(_) => EXIT_EXPORT_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use tailguard_core::errors::{ConfigError, InputError};

    use super::*;

    #[test]
    fn error_kinds_have_distinct_codes() {
        let input = GuardError::from(InputError::MissingBenchField { field: "p99_ms" });
        let config = GuardError::from(ConfigError::NoAllowance);
        let codes = [EXIT_FAIL, for_error(&input), for_error(&config)];
        assert_eq!(codes, [1, 2, 3]);
    }
}
