//! Number formatting shared by metrics, summaries and table cells

/// Formats `value` with exactly `decimals` fractional digits.
///
/// Exact ties round away from zero, so `to_fixed(0.125, 2)` is `"0.13"`.
/// Non-finite input formats as zero.
///
/// # Examples
///
/// ```
/// use contracts::shared::format::to_fixed;
/// assert_eq!(to_fixed(100.0, 2), "100.00");
/// assert_eq!(to_fixed(100.0 / 3.0, 2), "33.33");
/// ```
pub fn to_fixed(value: f64, decimals: u8) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let negative = value < 0.0;
    let decimals = decimals as usize;

    // Exact decimal expansion with enough guard digits to see ties
    let expanded = format!("{:.*}", decimals + 40, value.abs());
    let (int_part, frac_part) = match expanded.split_once('.') {
        Some(parts) => parts,
        None => (expanded.as_str(), ""),
    };

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .map(|b| *b >= b'5')
        .unwrap_or(false);

    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if negative {
        out.push('-');
    }
    for d in &digits[..split] {
        out.push((b'0' + d) as char);
    }
    if decimals > 0 {
        out.push('.');
        for d in &digits[split..] {
            out.push((b'0' + d) as char);
        }
    }
    out
}

/// Nearest integer, ties toward positive infinity (`-2.5` becomes `-2`).
pub fn round_half_up(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// Groups an integer by thousands with dots
///
/// # Examples
/// ```
/// use contracts::shared::format::format_thousands;
/// assert_eq!(format_thousands(1234567), "1.234.567");
/// assert_eq!(format_thousands(42), "42");
/// ```
pub fn format_thousands(n: i64) -> String {
    let grouped = group_digits(&n.unsigned_abs().to_string());
    if n < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Money in reais: `R$ 1.234,56`
pub fn format_money(value: f64) -> String {
    let fixed = to_fixed(value, 2);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, cents) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("{}R$ {},{}", sign, group_digits(int_part), cents)
}

fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_pads_whole_numbers() {
        assert_eq!(to_fixed(0.0, 2), "0.00");
        assert_eq!(to_fixed(100.0, 2), "100.00");
        assert_eq!(to_fixed(7.5, 2), "7.50");
        assert_eq!(to_fixed(12.0, 1), "12.0");
    }

    #[test]
    fn test_to_fixed_rounding() {
        assert_eq!(to_fixed(100.0 / 3.0, 2), "33.33");
        assert_eq!(to_fixed(2.0 / 3.0, 2), "0.67");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.375, 2), "0.38");
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(99.995_000_1, 2), "100.00");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_to_fixed_negative_and_degenerate() {
        assert_eq!(to_fixed(-1.5, 2), "-1.50");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(f64::NAN, 2), "0.00");
        assert_eq!(to_fixed(f64::INFINITY, 2), "0.00");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(89.5), 90);
        assert_eq!(round_half_up(89.49), 89);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(f64::NAN), 0);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(8920), "8.920");
        assert_eq!(format_thousands(1234567890), "1.234.567.890");
        assert_eq!(format_thousands(-1234), "-1.234");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.45), "R$ 0,45");
        assert_eq!(format_money(320.0), "R$ 320,00");
        assert_eq!(format_money(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_money(-1234.5), "-R$ 1.234,50");
    }
}
