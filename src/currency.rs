//! Rupee formatting with Indian digit grouping
//!
//! Amounts are grouped as lakh/crore: the last three integer digits form one
//! group and every group before it has two digits (`12,34,567`).

use rust_decimal::{Decimal, RoundingStrategy};

/// Rupee sign prefixed to every formatted amount
pub const RUPEE: &str = "₹";

/// Format an amount as rupees with a fixed number of fraction digits
///
/// Rounds the exact binary value of `amount` half away from zero, so
/// `1.005` (stored as `1.00499...`) becomes `₹1.00` and `0.125` becomes
/// `₹0.13`.
pub fn format_inr(amount: f64, fraction_digits: u32) -> String {
    if !amount.is_finite() {
        return format!("{RUPEE}{amount}");
    }

    let fixed = to_fixed(amount, fraction_digits);
    let (negative, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(fixed.len() + 8);
    // "-0.00" after rounding is printed unsigned
    if negative && unsigned.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        out.push('-');
    }
    out.push_str(RUPEE);
    out.push_str(&group_indian(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a whole-rupee amount, e.g. `200000.0` -> `₹2,00,000`
pub fn format_inr_whole(amount: f64) -> String {
    format_inr(amount, 0)
}

/// Format a rupee amount with paise, e.g. `2000.0` -> `₹2,000.00`
pub fn format_inr_paise(amount: f64) -> String {
    format_inr(amount, 2)
}

/// Insert Indian grouping separators into a run of ASCII digits
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push(',');
    out.push_str(tail);
    out
}

/// Shortest text that round-trips `value`, without a sign on zero
///
/// Magnitudes of `1e21` and above or below `1e-6` switch to exponent form
/// with an explicit exponent sign (`1e-7`, `1.5e+21`), as number labels do
/// in the browser.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    let magnitude = value.abs();
    if magnitude.is_nan() || (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

fn to_fixed(amount: f64, fraction_digits: u32) -> String {
    let width = fraction_digits as usize;
    match Decimal::from_f64_retain(amount) {
        Some(exact) => {
            let strategy = RoundingStrategy::MidpointAwayFromZero;
            let rounded = exact.round_dp_with_strategy(fraction_digits, strategy);
            format!("{rounded:.width$}")
        }
        // Beyond Decimal's range; f64 formatting is exact there anyway
        None => format!("{amount:.width$}"),
    }
}
