//! Conversion arithmetic.
//!
//! CRITICAL: Rounding strategy for cross-currency conversion:
//! - Convert into the base currency first, round to 4 decimal places
//! - Convert out of the base currency, round to 2 decimal places
//! - Round half up at both steps, never once at the end
//!
//! The two rounding points are observable at the cent level and must not be
//! collapsed into one. The first one rounds the exact quotient, not the
//! 28-digit quotient `Decimal` division produces.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Decimal places kept for the intermediate amount in the base currency.
pub const BASE_SCALE: u32 = 4;

/// Decimal places of every conversion result.
pub const RESULT_SCALE: u32 = 2;

/// Rounds half up to `decimal_places` and pads the scale to exactly that many digits.
///
/// For non-negative values half up and half away from zero are the same rule.
/// Returns `None` if the value is too large to carry `decimal_places` digits.
#[must_use]
pub fn round_half_up(value: Decimal, decimal_places: u32) -> Option<Decimal> {
    let rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    with_scale(rounded, decimal_places)
}

/// Divides `dividend` by `divisor` and rounds the exact quotient half up to
/// `decimal_places`.
///
/// `Decimal` division keeps only 28 significant digits, so rounding its result
/// again can land one unit off. The quotient is truncated, then corrected with
/// the exact remainder `dividend - quotient * divisor`.
///
/// Expects a non-negative `dividend` and a positive `divisor`. Returns `None`
/// on division by zero or if a value does not fit in a `Decimal`.
#[must_use]
pub fn divide_half_up(dividend: Decimal, divisor: Decimal, decimal_places: u32) -> Option<Decimal> {
    let unit = Decimal::new(1, decimal_places);
    let step = unit.checked_mul(divisor)?;

    let mut quotient = dividend
        .checked_div(divisor)?
        .round_dp_with_strategy(decimal_places, RoundingStrategy::ToZero);
    let mut remainder = dividend.checked_sub(quotient.checked_mul(divisor)?)?;

    // Division may have rounded across a unit boundary in either direction
    while remainder < Decimal::ZERO {
        quotient = quotient.checked_sub(unit)?;
        remainder = remainder.checked_add(step)?;
    }
    while remainder >= step {
        quotient = quotient.checked_add(unit)?;
        remainder = remainder.checked_sub(step)?;
    }

    if remainder.checked_mul(Decimal::TWO)? >= step {
        quotient = quotient.checked_add(unit)?;
    }

    with_scale(quotient, decimal_places)
}

/// Converts `amount` out of a currency with `from_rate` into one with `to_rate`,
/// going through the base currency.
///
/// Returns `None` if an intermediate value does not fit in a `Decimal` at
/// its required scale.
#[must_use]
pub fn convert_via_base(amount: Decimal, from_rate: Decimal, to_rate: Decimal) -> Option<Decimal> {
    let in_base = divide_half_up(amount, from_rate, BASE_SCALE)?;
    let converted = in_base.checked_mul(to_rate)?;
    round_half_up(converted, RESULT_SCALE)
}

/// `rescale` gives up silently when the mantissa has no room for the digits.
fn with_scale(mut value: Decimal, decimal_places: u32) -> Option<Decimal> {
    value.rescale(decimal_places);
    (value.scale() == decimal_places).then_some(value)
}
