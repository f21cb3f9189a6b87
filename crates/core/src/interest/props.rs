//! Property-based tests for the interest projection engine.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::projection::{accrued, project};

/// Strategy to generate positive principal amounts (0.01 to 10,000,000.00).
fn principal() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive annual rates (0.01% to 100.00%).
fn rate() -> impl Strategy<Value = Decimal> {
    (1i64..10_000i64).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate dates within a few decades of 2000.
fn date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2050, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Absent and zero rates are the identity, bit-for-bit.
    #[test]
    fn prop_zero_rate_is_identity(p in principal(), from in date(), to in date()) {
        prop_assert_eq!(project(p, None, from, to), p);
        prop_assert_eq!(project(p, Some(Decimal::ZERO), from, to), p);
    }

    /// A positive rate over non-negative elapsed time never shrinks the loan.
    #[test]
    fn prop_positive_rate_never_below_principal(
        p in principal(),
        r in rate(),
        from in date(),
        days in 0u64..20_000,
    ) {
        let to = from + chrono::Days::new(days);
        prop_assert!(project(p, Some(r), from, to) >= p);
    }

    /// Accrued interest grows monotonically with elapsed time.
    #[test]
    fn prop_accrual_monotonic_in_time(
        p in principal(),
        r in rate(),
        from in date(),
        days in 0u64..10_000,
    ) {
        let near = accrued(p, Some(r), from, from + chrono::Days::new(days));
        let far = accrued(p, Some(r), from, from + chrono::Days::new(days + 365));
        prop_assert!(far > near);
    }
}
