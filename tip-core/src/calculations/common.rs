//! Common utility functions for split calculations.
//!
//! This module provides the rounding and formatting shared by the split
//! calculator and the form's display accessors.

use rust_decimal::Decimal;

/// Number of decimal places every currency amount is displayed with.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(7.407)), dec!(7.41));
/// assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
/// assert_eq!(round_half_up(dec!(0.124)), dec!(0.12));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        CURRENCY_SCALE,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Formats an amount with exactly two decimal places.
///
/// The value is rounded half-up first, then padded so that whole numbers
/// still render as `"11.00"` rather than `"11"`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::format_amount;
///
/// assert_eq!(format_amount(dec!(11)), "11.00");
/// assert_eq!(format_amount(dec!(48.557)), "48.56");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    rounded.rescale(CURRENCY_SCALE);
    rounded.to_string()
}
