//! Property-based tests for currency conversion.
//!
//! - Same-currency conversion preserves cent amounts (rates below 100)
//! - Results always carry exactly 2 decimal places
//! - Conversion is deterministic
//! - Round trips stay within the two-stage rounding bound
//! - The base-currency step rounds the exact quotient

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::conversion::{BASE_SCALE, RESULT_SCALE, divide_half_up, round_half_up};
use super::converter::{convert, rate, supported_currencies};

/// Strategy to generate cent amounts (0.00 to 1,000,000.00).
fn cent_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate amounts with up to 6 decimal places.
fn fine_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000_000i64, 0u32..=6).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Strategy to pick any supported currency code.
fn currency() -> impl Strategy<Value = &'static str> {
    prop::sample::select(supported_currencies())
}

/// Strategy to pick a currency whose rate keeps the 4-place intermediate
/// error under half a cent.
fn small_rate_currency() -> impl Strategy<Value = &'static str> {
    let codes: Vec<&'static str> = supported_currencies()
        .into_iter()
        .filter(|code| rate(code).is_some_and(|r| r < Decimal::ONE_HUNDRED))
        .collect();
    prop::sample::select(codes)
}

/// Upper bound on `|x - convert(convert(x, a, b), b, a)|` for cent amounts.
///
/// Each leg contributes at most `0.00005 * rate` from the 4-place rounding
/// and `0.005` from the 2-place rounding; the first leg's error is scaled by
/// `rate_a / rate_b` on the way back.
fn round_trip_tolerance(rate_a: Decimal, rate_b: Decimal) -> Decimal {
    Decimal::new(1, 4) * rate_a + Decimal::new(5, 3) * (Decimal::ONE + rate_a / rate_b)
}

/// Strategy to generate amounts below 10^18 with up to 28 significant digits.
fn wide_amount() -> impl Strategy<Value = Decimal> {
    (0i128..10i128.pow(28), 10u32..=28)
        .prop_map(|(mantissa, scale)| Decimal::from_i128_with_scale(mantissa, scale))
}

/// Reference for [`divide_half_up`]: exact integer division of the mantissas.
///
/// `a / b` scaled by `10^places` is `ma * 10^(sb + places) / (mb * 10^sa)`.
fn exact_divide_half_up(dividend: Decimal, divisor: Decimal, places: u32) -> Decimal {
    let numerator = dividend.mantissa() * 10i128.pow(divisor.scale() + places);
    let denominator = divisor.mantissa() * 10i128.pow(dividend.scale());
    let quotient = (2 * numerator + denominator) / (2 * denominator);
    Decimal::from_i128_with_scale(quotient, places)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The 4-place intermediate equals the exactly rounded quotient.
    #[test]
    fn prop_base_step_matches_exact_division(
        amount in wide_amount(),
        code in currency(),
    ) {
        let from_rate = rate(code).unwrap();
        let expected = exact_divide_half_up(amount, from_rate, BASE_SCALE);
        prop_assert_eq!(divide_half_up(amount, from_rate, BASE_SCALE), Some(expected));
    }

    /// Converting a cent amount into its own currency returns it unchanged.
    #[test]
    fn prop_same_currency_preserves_cents(
        amount in cent_amount(),
        code in small_rate_currency(),
    ) {
        let result = convert(amount, code, code).unwrap();
        prop_assert_eq!(result, amount);
    }

    /// Every result has exactly 2 decimal places.
    #[test]
    fn prop_result_has_two_decimals(
        amount in fine_amount(),
        from in currency(),
        to in currency(),
    ) {
        let result = convert(amount, from, to).unwrap();
        prop_assert_eq!(result.scale(), RESULT_SCALE);
        prop_assert_eq!(Some(result), round_half_up(result, RESULT_SCALE));
    }

    /// Results are never negative.
    #[test]
    fn prop_result_non_negative(
        amount in fine_amount(),
        from in currency(),
        to in currency(),
    ) {
        let result = convert(amount, from, to).unwrap();
        prop_assert!(result >= Decimal::ZERO);
    }

    /// Same inputs always give the same output.
    #[test]
    fn prop_convert_is_deterministic(
        amount in fine_amount(),
        from in currency(),
        to in currency(),
    ) {
        let first = convert(amount, from, to).unwrap();
        let second = convert(amount, from, to).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A -> B -> A lands within the accumulated rounding error.
    #[test]
    fn prop_round_trip_within_tolerance(
        amount in cent_amount(),
        from in currency(),
        to in currency(),
    ) {
        let there = convert(amount, from, to).unwrap();
        let back = convert(there, to, from).unwrap();

        let tolerance = round_trip_tolerance(rate(from).unwrap(), rate(to).unwrap());
        let deviation = (back - amount).abs();
        prop_assert!(
            deviation <= tolerance,
            "{} {} -> {} {} -> {} {}: deviation {} exceeds {}",
            amount, from, there, to, back, from, deviation, tolerance
        );
    }

    /// Larger inputs never convert to smaller outputs.
    #[test]
    fn prop_convert_is_monotonic(
        a in cent_amount(),
        b in cent_amount(),
        from in currency(),
        to in currency(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(convert(low, from, to).unwrap() <= convert(high, from, to).unwrap());
    }

    /// Negative amounts are always rejected.
    #[test]
    fn prop_negative_amount_rejected(
        cents in 1i64..100_000_000i64,
        from in currency(),
        to in currency(),
    ) {
        let err = convert(Decimal::new(-cents, 2), from, to).unwrap_err();
        prop_assert_eq!(err.error_code(), "NEGATIVE_AMOUNT");
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// JPY's rate is large enough for the intermediate rounding to show.
    #[test]
    fn test_jpy_same_currency_drift() {
        assert_eq!(convert(dec!(1000), "JPY", "JPY").unwrap(), dec!(1000.01));
        assert_eq!(convert(dec!(100), "JPY", "JPY").unwrap(), dec!(100.00));
    }

    /// More than 4 fractional digits can round differently than a single rounding.
    #[test]
    fn test_fine_amount_same_currency() {
        // 0.004999 -> 0.0050 -> 0.01, while a single rounding gives 0.00
        assert_eq!(convert(dec!(0.004999), "USD", "USD").unwrap(), dec!(0.01));
    }

    /// Amounts whose quotient sits just below a rounding midpoint.
    #[test]
    fn test_exact_division_near_midpoint() {
        for amount in [
            dec!(789999.21003949999999999999999),
            dec!(790000000000000.00003949999999),
        ] {
            let expected = exact_divide_half_up(amount, dec!(0.79), BASE_SCALE);
            assert_eq!(divide_half_up(amount, dec!(0.79), BASE_SCALE), Some(expected));
        }
    }

    #[test]
    fn test_round_trip_tolerance_examples() {
        assert_eq!(round_trip_tolerance(dec!(1), dec!(1)), dec!(0.0101));
        assert!(round_trip_tolerance(dec!(149.50), dec!(0.79)) < dec!(1));
    }
}
