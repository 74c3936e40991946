//! Currency-text parsing and formatting.
//!
//! The CSV `Expense` column stores amounts as currency text, e.g.
//! `$1,234.56`. Parsing strips the dollar sign and thousands separators and
//! keeps the exact decimal value; formatting is the inverse, US-style
//! grouping with exactly two decimal places.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Parse currency text into an exact decimal value.
///
/// Accepts an optional leading `-`, an optional `$`, and comma thousands
/// separators: `"12.5"`, `"$900.00"`, `"-$1,234.56"`. Anything else that is
/// not a plain decimal number is rejected.
pub fn parse_amount(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    let bare = unsigned.strip_prefix('$').unwrap_or(unsigned);
    let value = Decimal::from_str(&bare.replace(',', ""))?;
    Ok(if trimmed.starts_with('-') { -value } else { value })
}

/// Round to 2 decimal places, half-up.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a decimal amount as a US-style currency string.
///
/// # Examples
///
/// ```
/// use expense_core::currency::format_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_currency(Decimal::from_str("1234.56").unwrap()), "$1,234.56");
/// assert_eq!(format_currency(Decimal::ZERO), "$0.00");
/// assert_eq!(format_currency(Decimal::from_str("-9.99").unwrap()), "-$9.99");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_currency(amount);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_thousands(int_part);
    if negative {
        format!("-${grouped}.{frac_part}")
    } else {
        format!("${grouped}.{frac_part}")
    }
}

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
