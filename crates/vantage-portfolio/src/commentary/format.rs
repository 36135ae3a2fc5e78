//! Text formatting helpers for reports.

use rust_decimal::Decimal;

/// Formats an amount with two decimals and thousands separators
/// (`-12,345.60`).
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

/// Formats an amount prefixed with a currency symbol (`₹6,465.00`).
#[must_use]
pub fn format_currency(symbol: &str, amount: Decimal) -> String {
    format!("{symbol}{}", format_amount(amount))
}

/// "profit" for non-negative amounts, "loss" otherwise.
#[must_use]
pub fn profit_label(amount: Decimal) -> &'static str {
    if amount >= Decimal::ZERO {
        "profit"
    } else {
        "loss"
    }
}

/// Returns at most the first `max` characters of `s`.
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(6465)), "6,465.00");
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(999.999)), "1,000.00");
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(dec!(100)), "100.00");
    }

    #[test]
    fn test_format_negative_amount() {
        assert_eq!(format_amount(dec!(-10000)), "-10,000.00");
        assert_eq!(format_amount(dec!(-0.001)), "0.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("₹", dec!(86332.50)), "₹86,332.50");
        assert_eq!(format_currency("$", dec!(-5)), "$-5.00");
    }

    #[test]
    fn test_profit_label() {
        assert_eq!(profit_label(dec!(0)), "profit");
        assert_eq!(profit_label(dec!(1)), "profit");
        assert_eq!(profit_label(dec!(-0.01)), "loss");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        // Multi-byte characters are not split
        assert_eq!(truncate_chars("₹₹₹₹", 2), "₹₹");
    }
}
