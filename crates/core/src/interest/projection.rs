//! Simple-interest projection over elapsed calendar days.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Average days per year; approximates leap years.
const DAYS_PER_YEAR: Decimal = Decimal::from_parts(36525, 0, 0, false, 2);

/// Projects a loan's current value at `as_of`.
///
/// Accrual is simple interest on the original principal:
/// `principal * (1 + rate/100 * years)`, with years derived from whole days
/// elapsed divided by 365.25. An absent or zero rate returns the principal
/// exactly, with no accrual arithmetic.
///
/// A future-dated loan (negative elapsed time) is not special-cased; the
/// formula applies unchanged and may yield less than the principal.
#[must_use]
pub fn project(
    principal: Decimal,
    rate_percent: Option<Decimal>,
    loan_date: NaiveDate,
    as_of: NaiveDate,
) -> Decimal {
    let Some(rate) = rate_percent.filter(|r| !r.is_zero()) else {
        return principal;
    };

    let days = (as_of - loan_date).num_days();
    let years = Decimal::from(days) / DAYS_PER_YEAR;

    principal * (Decimal::ONE + rate / Decimal::ONE_HUNDRED * years)
}

/// Interest accrued so far: projected value minus the original principal.
#[must_use]
pub fn accrued(
    principal: Decimal,
    rate_percent: Option<Decimal>,
    loan_date: NaiveDate,
    as_of: NaiveDate,
) -> Decimal {
    project(principal, rate_percent, loan_date, as_of) - principal
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_per_year_constant() {
        assert_eq!(DAYS_PER_YEAR, dec!(365.25));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(dec!(0)))]
    fn test_no_rate_returns_principal_exactly(#[case] rate: Option<Decimal>) {
        let value = project(dec!(10000), rate, date(2023, 1, 1), date(2030, 6, 15));
        assert_eq!(value, dec!(10000));
    }

    #[test]
    fn test_one_year_at_ten_percent() {
        // 365 whole days over a 365.25-day year.
        let value = project(
            dec!(10000),
            Some(dec!(10)),
            date(2023, 1, 1),
            date(2024, 1, 1),
        );
        let expected = dec!(10000) * (Decimal::ONE + dec!(0.10) * (dec!(365) / dec!(365.25)));
        assert_eq!(value, expected);
        assert!((value - dec!(10999.32)).abs() < dec!(0.01));
    }

    #[test]
    fn test_same_day_accrues_nothing() {
        let value = project(
            dec!(50000),
            Some(dec!(12)),
            date(2024, 1, 1),
            date(2024, 1, 1),
        );
        assert_eq!(value, dec!(50000));
    }

    #[test]
    fn test_future_dated_loan_projects_below_principal() {
        let value = project(
            dec!(10000),
            Some(dec!(10)),
            date(2025, 1, 1),
            date(2024, 1, 1),
        );
        assert!(value < dec!(10000));
    }

    #[test]
    fn test_half_year_is_half_the_interest() {
        let principal = dec!(20000);
        let rate = Some(dec!(8));
        let start = date(2024, 1, 1);

        let full = accrued(principal, rate, start, date(2024, 1, 1) + chrono::Days::new(730));
        let half = accrued(principal, rate, start, date(2024, 1, 1) + chrono::Days::new(365));
        assert!((full - half * dec!(2)).abs() < dec!(0.000001));
    }

    #[test]
    fn test_accrued_is_projection_minus_principal() {
        let interest = accrued(
            dec!(10000),
            Some(dec!(10)),
            date(2023, 1, 1),
            date(2024, 1, 1),
        );
        let value = project(
            dec!(10000),
            Some(dec!(10)),
            date(2023, 1, 1),
            date(2024, 1, 1),
        );
        assert_eq!(interest, value - dec!(10000));
    }
}
