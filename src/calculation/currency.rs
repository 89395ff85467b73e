//! Currency display.
//!
//! Amounts are shown in dollars with `en` locale grouping: `,` between
//! thousands, at most three fraction digits, no trailing fraction zeros.

use rust_decimal::{Decimal, RoundingStrategy};

/// Maximum number of fraction digits shown.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats an amount for display, e.g. `48100` as `"$48,100"`.
///
/// The sign follows the dollar symbol, so `-1000` renders as `"$-1,000"`.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from(48100)), "$48,100");
/// assert_eq!(format_currency(Decimal::from_str("50050.50").unwrap()), "$50,050.5");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut formatted = String::from("$");
    if rounded.is_sign_negative() && !rounded.is_zero() {
        formatted.push('-');
    }
    formatted.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_amount_with_grouping() {
        assert_eq!(format_currency(dec("48100")), "$48,100");
        assert_eq!(format_currency(dec("52000")), "$52,000");
    }

    #[test]
    fn test_small_amounts_are_not_grouped() {
        assert_eq!(format_currency(dec("0")), "$0");
        assert_eq!(format_currency(dec("999")), "$999");
    }

    #[test]
    fn test_millions() {
        assert_eq!(format_currency(dec("1234567")), "$1,234,567");
    }

    #[test]
    fn test_trailing_fraction_zeros_are_dropped() {
        assert_eq!(format_currency(dec("51100.00")), "$51,100");
        assert_eq!(format_currency(dec("1965.50")), "$1,965.5");
    }

    #[test]
    fn test_fraction_rounds_to_three_digits() {
        assert_eq!(format_currency(dec("1000.12345")), "$1,000.123");
        assert_eq!(format_currency(dec("1000.9995")), "$1,001");
    }

    #[test]
    fn test_negative_amount_sign_follows_symbol() {
        assert_eq!(format_currency(dec("-1000")), "$-1,000");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        assert_eq!(format_currency(dec("-0.0001")), "$0");
    }
}
