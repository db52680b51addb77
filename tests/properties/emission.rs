//! Property tests for the emission arithmetic.

use proptest::prelude::*;

use pegada::domain::services::{compute_annual, compute_daily, compute_total};

fn quantity() -> impl Strategy<Value = f64> {
    (1u32..1_000_000).prop_map(|n| n as f64 / 100.0)
}

fn factor() -> impl Strategy<Value = f64> {
    (0u32..100_000).prop_map(|n| n as f64 / 1000.0)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: total is the plain product of its inputs.
    #[test]
    fn property_total_is_product(q in quantity(), f in factor(), n in 1u32..1000) {
        let total = compute_total(q, f, n).unwrap();
        prop_assert_eq!(total, q * f * n as f64);
    }

    /// PROPERTY: total never decreases when any input grows.
    #[test]
    fn property_total_is_monotonic(
        q in quantity(),
        f in factor(),
        n in 1u32..1000,
        dq in quantity(),
        df in factor(),
        dn in 0u32..1000,
    ) {
        let base = compute_total(q, f, n).unwrap();
        prop_assert!(compute_total(q + dq, f, n).unwrap() >= base);
        prop_assert!(compute_total(q, f + df, n).unwrap() >= base);
        prop_assert!(compute_total(q, f, n + dn).unwrap() >= base);
    }

    /// PROPERTY: negative inputs are rejected, never computed.
    #[test]
    fn property_negative_inputs_fail(q in quantity(), f in factor(), n in 1u32..1000) {
        prop_assert!(compute_total(-q, f, n).is_err());
        prop_assert!(compute_total(q, -f - 0.001, n).is_err());
    }

    /// PROPERTY: a zero frequency never divides by zero.
    #[test]
    fn property_daily_at_zero_frequency(total in any::<f64>()) {
        prop_assert_eq!(compute_daily(total, 0), 0.0);
    }

    /// PROPERTY: annualizing a one-off total leaves it unchanged.
    #[test]
    fn property_annual_idempotent_at_one(total in 0.0f64..1e12) {
        prop_assert_eq!(compute_annual(total, 1), total);
    }
}
