//! Number formatting and parsing for the calculator display.
//!
//! The display is a string, so every transition goes through
//! [`parse_display`] on the way in and [`format_number`] on the way out.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Longest numeric prefix of a display string.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^([+-]?)(Infinity|\d+\.?\d*(?:[eE][+-]?\d+)?|\.\d+(?:[eE][+-]?\d+)?)"
    ).unwrap();
}

/// Format a number as its shortest round-trip decimal string.
///
/// Non-finite values pass through as `NaN`, `Infinity` or `-Infinity`.
/// Magnitudes in `[1e-6, 1e21)` render as plain decimals; anything else
/// uses exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e3".
    let sci = format!("{:e}", value.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((&sci, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Decimal point position relative to the digit string.
    let n = exp + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp_sign = if n - 1 >= 0 { "+" } else { "-" };
        let exp_abs = (n - 1).abs();
        if k == 1 {
            format!("{}e{}{}", digits, exp_sign, exp_abs)
        } else {
            format!("{}.{}e{}{}", &digits[..1], &digits[1..], exp_sign, exp_abs)
        }
    };

    format!("{}{}", sign, body)
}

/// Parse the numeric prefix of a display string.
///
/// Trailing garbage is ignored and a string with no numeric prefix
/// (a lone `-`, `NaN`) yields `NaN`. Never fails.
pub fn parse_display(display: &str) -> f64 {
    let trimmed = display.trim_start();
    let Some(caps) = NUMERIC_PREFIX.captures(trimmed) else {
        return f64::NAN;
    };

    let negative = &caps[1] == "-";
    let body = &caps[2];

    let magnitude = if body == "Infinity" {
        f64::INFINITY
    } else {
        normalize_literal(body).parse::<f64>().unwrap_or(f64::NAN)
    };

    if negative { -magnitude } else { magnitude }
}

/// Rewrite `5.` and `.5` style literals into a form every float parser accepts.
fn normalize_literal(body: &str) -> String {
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(pos) => body.split_at(pos),
        None => (body, ""),
    };

    let mut mantissa = mantissa.trim_end_matches('.').to_string();
    if mantissa.starts_with('.') {
        mantissa.insert(0, '0');
    }

    format!("{}{}", mantissa, exponent)
}

/// Insert thousand separators into the integer part of a rendered display.
///
/// Strings without a leading digit run (`NaN`, `Infinity`) and exponent
/// forms are returned unchanged.
pub fn group_thousands(display: &str) -> String {
    if display.contains(['e', 'E']) {
        return display.to_string();
    }

    let (sign, rest) = match display.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", display),
    };

    let int_len = rest.chars().take_while(|c| c.is_ascii_digit()).count();
    if int_len == 0 {
        return display.to_string();
    }

    let (int_part, tail) = rest.split_at(int_len);

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let grouped: String = grouped.chars().rev().collect();
    format!("{}{}{}", sign, grouped, tail)
}
