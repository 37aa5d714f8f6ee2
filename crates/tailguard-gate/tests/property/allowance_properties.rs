use proptest::prelude::*;
use tailguard_core::config::ProfileName;
use tailguard_core::types::{Baseline, BenchMeasurement, TierId};
use tailguard_gate::{compute_allowed, evaluate, GateInput};

proptest! {
    #[test]
    fn allowance_is_minimum_of_candidates(
        median in 1.0f64..1000.0,
        mad in 0.01f64..100.0,
        last in 1.0f64..1000.0,
        cap in 1.0f64..2000.0,
        mad_mult in 1.0f64..5.0,
        p99_mult in 1.0f64..1.5,
        eps in 0.0f64..0.1,
    ) {
        let baseline = Baseline::new(median, mad).with_last(last);
        let expected = (median + mad_mult * mad + eps)
            .min(last * p99_mult + eps)
            .min(cap);
        let allowed = compute_allowed(&baseline, mad_mult, p99_mult, eps, Some(cap)).unwrap();
        prop_assert_eq!(allowed, expected);
    }

    #[test]
    fn zero_mad_never_produces_a_candidate(
        median in 1.0f64..1000.0,
        last in 1.0f64..1000.0,
        p99_mult in 1.0f64..1.5,
        eps in 0.0f64..0.1,
    ) {
        let baseline = Baseline::new(median, 0.0).with_last(last);
        let allowed = compute_allowed(&baseline, 3.0, p99_mult, eps, None).unwrap();
        prop_assert_eq!(allowed, last * p99_mult + eps);
    }

    #[test]
    fn unmeasured_p999_never_gates(p99 in 0.1f64..1000.0, allowed in 0.001f64..1.0e6) {
        let profile = ProfileName::Standard.preset();
        let measurement = BenchMeasurement::with_p99(p99);
        let baseline = Baseline::new(400.0, 20.0);
        let decision = evaluate(&GateInput {
            runner_id: "prop",
            profile: &profile,
            measurement: &measurement,
            baseline: &baseline,
            allowed_p99_ms: allowed,
        });
        prop_assert!(!decision.trace.iter().any(|l| l.starts_with("p999_gate")));
        prop_assert!(!decision.failures.contains(&TierId::P999Gate));
    }

    #[test]
    fn unenforced_digest_never_fails(reference in "[a-f0-9]{1,16}", measured in "[a-f0-9]{1,16}") {
        let profile = ProfileName::Lenient.preset();
        let measurement = BenchMeasurement {
            digest: Some(measured),
            ..BenchMeasurement::with_p99(100.0)
        };
        let baseline = Baseline::new(400.0, 20.0).with_digest(reference);
        let decision = evaluate(&GateInput {
            runner_id: "prop",
            profile: &profile,
            measurement: &measurement,
            baseline: &baseline,
            allowed_p99_ms: 500.0,
        });
        prop_assert!(decision.passed());
        prop_assert!(decision.digest_ok);
    }
}
