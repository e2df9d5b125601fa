//! Keystroke normalization for the three form inputs.
//!
//! Every function takes the raw text of a field after a keystroke and returns
//! the value to store, or `None` for the unset sentinel. Nothing here can
//! fail: stray characters are dropped and out-of-range numbers are clamped.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::CURRENCY_SCALE;

/// Smallest bill, in cents.
pub const BILL_MIN_CENTS: u64 = 1;
/// Largest bill, in cents (9999.99).
pub const BILL_MAX_CENTS: u64 = 999_999;

pub const TIP_MIN_PERCENT: u32 = 1;
pub const TIP_MAX_PERCENT: u32 = 100;

pub const PEOPLE_MIN: u32 = 1;
/// The people field advertises 1-99 but the clamp ceiling is 100.
pub const PEOPLE_MAX: u32 = 100;

/// Normalizes bill text into an amount with two decimal places.
///
/// Keeps digits and periods, then reads the digits alone as a count of
/// cents. Typing after a committed `"5.00"` therefore shifts digits left the
/// way a till does: `"5.000"` becomes `50.00`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::sanitize::normalize_bill;
///
/// assert_eq!(normalize_bill("$1,234"), Some(dec!(12.34)));
/// assert_eq!(normalize_bill("abc"), None);
/// ```
pub fn normalize_bill(raw: &str) -> Option<Decimal> {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let digits: String = kept.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        if !raw.is_empty() {
            debug!(field = "bill", input = %raw, "no digits, bill unset");
        }
        return None;
    }

    let cents = clamp_digits(&digits, BILL_MIN_CENTS, BILL_MAX_CENTS);
    if kept.matches('.').count() > 1 {
        debug!(field = "bill", input = %raw, "extra periods ignored");
    }
    log_if_clamped("bill", raw, &digits, cents);

    // cents <= 999_999 always fits an i64
    Some(Decimal::new(cents as i64, CURRENCY_SCALE))
}

/// Normalizes custom tip text into the digits the field keeps.
///
/// Non-digits are stripped. Text already inside `[1, 100]` is kept as typed,
/// leading zeros included; anything outside is replaced by the nearest
/// bound. Use [`percent_from_text`] to read the stored text as a number.
///
/// # Examples
///
/// ```
/// use tip_core::sanitize::normalize_custom_tip;
///
/// assert_eq!(normalize_custom_tip("18%").as_deref(), Some("18"));
/// assert_eq!(normalize_custom_tip("007").as_deref(), Some("007"));
/// assert_eq!(normalize_custom_tip("250").as_deref(), Some("100"));
/// assert_eq!(normalize_custom_tip(""), None);
/// ```
pub fn normalize_custom_tip(raw: &str) -> Option<String> {
    let digits = digits_only(raw);
    if digits.is_empty() {
        if !raw.is_empty() {
            debug!(field = "tip", input = %raw, "no digits, field unset");
        }
        return None;
    }

    let percent = clamp_digits(
        &digits,
        u64::from(TIP_MIN_PERCENT),
        u64::from(TIP_MAX_PERCENT),
    );
    if was_clamped(&digits, percent) {
        debug!(field = "tip", input = %raw, stored = percent, "input clamped");
        Some(percent.to_string())
    } else {
        Some(digits)
    }
}

/// Reads tip text produced by [`normalize_custom_tip`] (or a preset's
/// percentage) as a whole number.
pub fn percent_from_text(text: &str) -> Option<u32> {
    text.parse().ok()
}

/// Normalizes people text into a head count in `[1, 100]`.
pub fn normalize_people(raw: &str) -> Option<u32> {
    normalize_whole("people", raw, PEOPLE_MIN, PEOPLE_MAX)
}

fn normalize_whole(
    field: &'static str,
    raw: &str,
    min: u32,
    max: u32,
) -> Option<u32> {
    let digits = digits_only(raw);
    if digits.is_empty() {
        if !raw.is_empty() {
            debug!(field, input = %raw, "no digits, field unset");
        }
        return None;
    }

    let value = clamp_digits(&digits, u64::from(min), u64::from(max));
    log_if_clamped(field, raw, &digits, value);

    // clamped into a u32 range above
    Some(value as u32)
}

fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Parses a non-empty run of ASCII digits and clamps it to `[min, max]`.
///
/// Runs too long for a `u64` saturate instead of failing.
fn clamp_digits(
    digits: &str,
    min: u64,
    max: u64,
) -> u64 {
    let significant = digits.trim_start_matches('0');
    let value = if significant.is_empty() {
        0
    } else if significant.len() > 19 {
        u64::MAX
    } else {
        significant.parse().unwrap_or(u64::MAX)
    };
    value.clamp(min, max)
}

fn was_clamped(
    digits: &str,
    stored: u64,
) -> bool {
    digits.trim_start_matches('0') != stored.to_string()
}

fn log_if_clamped(
    field: &'static str,
    raw: &str,
    digits: &str,
    stored: u64,
) {
    if was_clamped(digits, stored) {
        debug!(field, input = %raw, stored, "input clamped");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // normalize_bill tests
    // =========================================================================

    #[test]
    fn normalize_bill_reads_digits_as_cents() {
        assert_eq!(normalize_bill("5000"), Some(dec!(50.00)));
        assert_eq!(normalize_bill("12345"), Some(dec!(123.45)));
    }

    #[test]
    fn normalize_bill_ignores_embedded_period() {
        assert_eq!(normalize_bill("50.00"), Some(dec!(50.00)));
        assert_eq!(normalize_bill("123.45"), Some(dec!(123.45)));
    }

    #[test]
    fn normalize_bill_shifts_digit_typed_after_committed_value() {
        assert_eq!(normalize_bill("0.012"), Some(dec!(0.12)));
        assert_eq!(normalize_bill("5.000"), Some(dec!(50.00)));
    }

    #[test]
    fn normalize_bill_shrinks_on_backspace() {
        assert_eq!(normalize_bill("50.0"), Some(dec!(5.00)));
    }

    #[test]
    fn normalize_bill_strips_other_characters() {
        assert_eq!(normalize_bill("$1,234"), Some(dec!(12.34)));
        assert_eq!(normalize_bill(" 9 9 "), Some(dec!(0.99)));
    }

    #[test]
    fn normalize_bill_empty_is_unset() {
        assert_eq!(normalize_bill(""), None);
        assert_eq!(normalize_bill("abc"), None);
    }

    #[test]
    fn normalize_bill_periods_only_is_unset() {
        assert_eq!(normalize_bill("."), None);
        assert_eq!(normalize_bill(".."), None);
    }

    #[test]
    fn normalize_bill_drops_every_period() {
        assert_eq!(normalize_bill("1.2.3"), Some(dec!(1.23)));
    }

    #[test]
    fn normalize_bill_clamps_zero_to_one_cent() {
        assert_eq!(normalize_bill("0"), Some(dec!(0.01)));
        assert_eq!(normalize_bill("0.00"), Some(dec!(0.01)));
    }

    #[test]
    fn normalize_bill_clamps_to_maximum() {
        assert_eq!(normalize_bill("999999"), Some(dec!(9999.99)));
        assert_eq!(normalize_bill("1000000"), Some(dec!(9999.99)));
        assert_eq!(
            normalize_bill("123456789012345678901234567890"),
            Some(dec!(9999.99))
        );
    }

    #[test]
    fn normalize_bill_displays_two_places() {
        let amount = normalize_bill("100").unwrap();

        assert_eq!(amount.to_string(), "1.00");
    }

    // =========================================================================
    // normalize_custom_tip tests
    // =========================================================================

    #[test]
    fn normalize_custom_tip_accepts_in_range() {
        assert_eq!(normalize_custom_tip("1").as_deref(), Some("1"));
        assert_eq!(normalize_custom_tip("18").as_deref(), Some("18"));
        assert_eq!(normalize_custom_tip("100").as_deref(), Some("100"));
    }

    #[test]
    fn normalize_custom_tip_clamps_out_of_range() {
        assert_eq!(normalize_custom_tip("0").as_deref(), Some("1"));
        assert_eq!(normalize_custom_tip("000").as_deref(), Some("1"));
        assert_eq!(normalize_custom_tip("101").as_deref(), Some("100"));
        assert_eq!(
            normalize_custom_tip("99999999999999999999999").as_deref(),
            Some("100")
        );
    }

    #[test]
    fn normalize_custom_tip_strips_non_digits() {
        assert_eq!(normalize_custom_tip("1.5").as_deref(), Some("15"));
        assert_eq!(normalize_custom_tip("-20").as_deref(), Some("20"));
    }

    #[test]
    fn normalize_custom_tip_keeps_leading_zeros_in_range() {
        assert_eq!(normalize_custom_tip("007").as_deref(), Some("007"));
        assert_eq!(normalize_custom_tip("0100").as_deref(), Some("0100"));
    }

    #[test]
    fn normalize_custom_tip_empty_is_unset() {
        assert_eq!(normalize_custom_tip(""), None);
        assert_eq!(normalize_custom_tip("%"), None);
    }

    #[test]
    fn percent_from_text_reads_zero_padded_text() {
        assert_eq!(percent_from_text("007"), Some(7));
        assert_eq!(percent_from_text("100"), Some(100));
        assert_eq!(percent_from_text(""), None);
    }

    // =========================================================================
    // normalize_people tests
    // =========================================================================

    #[test]
    fn normalize_people_accepts_in_range() {
        assert_eq!(normalize_people("5"), Some(5));
        assert_eq!(normalize_people("99"), Some(99));
    }

    #[test]
    fn normalize_people_ceiling_is_one_hundred() {
        assert_eq!(normalize_people("100"), Some(100));
        assert_eq!(normalize_people("150"), Some(100));
    }

    #[test]
    fn normalize_people_clamps_zero_to_one() {
        assert_eq!(normalize_people("0"), Some(1));
        assert_eq!(normalize_people("00"), Some(1));
    }

    #[test]
    fn normalize_people_empty_is_unset() {
        assert_eq!(normalize_people(""), None);
        assert_eq!(normalize_people("two"), None);
    }

    // =========================================================================
    // clamp_digits tests
    // =========================================================================

    #[test]
    fn clamp_digits_saturates_overlong_input() {
        let result = clamp_digits("184467440737095516150", 1, 100);

        assert_eq!(result, 100);
    }
}
