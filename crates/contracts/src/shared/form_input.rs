//! Coercion of raw dialog inputs.
//!
//! Form fields arrive as strings. Numbers are read from the longest numeric
//! prefix and fall back to zero, so `"12abc"` is 12 and `""` is 0.

use chrono::NaiveDate;
use thiserror::Error;

/// Why a dialog submission was not turned into a create request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("name is required")]
    MissingName,

    #[error("project is required")]
    MissingProject,

    #[error("monthly budget is required")]
    MissingBudget,

    #[error("classification {0} is not allowed here")]
    ClassificationNotAllowed(String),

    #[error("unknown classification: {0}")]
    UnknownClassification(String),
}

/// Integer prefix of `input`, or 0 when there is none
pub fn parse_int_or_zero(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Decimal prefix of `input`, or 0.0 when there is none or it is not finite
pub fn parse_float_or_zero(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-') | Some(b'+')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    match s[..end].trim_end_matches('.').parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// `YYYY-MM-DD` date input; empty or malformed input is `None`
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Required text field: trimmed, `None` when blank
pub fn required(input: &str) -> Option<String> {
    let s = input.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_or_zero() {
        assert_eq!(parse_int_or_zero("8920"), 8920);
        assert_eq!(parse_int_or_zero("  42"), 42);
        assert_eq!(parse_int_or_zero("12abc"), 12);
        assert_eq!(parse_int_or_zero("42.9"), 42);
        assert_eq!(parse_int_or_zero("-15"), -15);
        assert_eq!(parse_int_or_zero("+7"), 7);
        assert_eq!(parse_int_or_zero(""), 0);
        assert_eq!(parse_int_or_zero("abc"), 0);
        assert_eq!(parse_int_or_zero("-"), 0);
    }

    #[test]
    fn test_parse_float_or_zero() {
        assert_eq!(parse_float_or_zero("12.3"), 12.3);
        assert_eq!(parse_float_or_zero("320.00"), 320.0);
        assert_eq!(parse_float_or_zero(".5"), 0.5);
        assert_eq!(parse_float_or_zero("5."), 5.0);
        assert_eq!(parse_float_or_zero("1,5"), 1.0);
        assert_eq!(parse_float_or_zero("-2.5kg"), -2.5);
        assert_eq!(parse_float_or_zero("1e3"), 1000.0);
        assert_eq!(parse_float_or_zero("1e"), 1.0);
        assert_eq!(parse_float_or_zero("2E-1x"), 0.2);
        assert_eq!(parse_float_or_zero(""), 0.0);
        assert_eq!(parse_float_or_zero("."), 0.0);
        assert_eq!(parse_float_or_zero("abc"), 0.0);
        assert_eq!(parse_float_or_zero("1e999"), 0.0);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-21"),
            NaiveDate::from_ymd_opt(2025, 1, 21)
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("21/01/2025"), None);
    }

    #[test]
    fn test_required() {
        assert_eq!(required("  Projeto Alpha "), Some("Projeto Alpha".to_string()));
        assert_eq!(required("   "), None);
    }
}
