//! Conversion between typed digit strings and `f64` operands, and back to
//! display text.

/// Parse a digit-only input buffer into an operand.
///
/// Returns `None` when the buffer is empty, contains anything but ASCII
/// digits, or does not yield a real number.
pub fn parse_operand(input: &str) -> Option<f64> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Render a number the way the display shows it.
///
/// Integral values have no fractional part, very large and very small
/// magnitudes switch to exponent notation, and negative zero prints as `0`.
///
/// ```rust
/// use chaincalc::core::format_number;
///
/// assert_eq!(format_number(9.0), "9");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    format!("{value}")
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_digit_strings() {
        assert_eq!(parse_operand("0"), Some(0.0));
        assert_eq!(parse_operand("42"), Some(42.0));
        assert_eq!(parse_operand("007"), Some(7.0));
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("-1"), None);
        assert_eq!(parse_operand("1.5"), None);
        assert_eq!(parse_operand("1e3"), None);
        assert_eq!(parse_operand("NaN"), None);
        assert_eq!(parse_operand("inf"), None);
    }

    #[test]
    fn parse_of_huge_digit_string_is_infinite() {
        let digits = "9".repeat(400);
        assert_eq!(parse_operand(&digits), Some(f64::INFINITY));
    }

    #[test]
    fn integral_values_drop_fraction() {
        assert_eq!(format_number(27.0), "27");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(123_456_789.0), "123456789");
    }

    #[test]
    fn fractions_use_shortest_representation() {
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn extreme_magnitudes_use_exponent() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(2.5e-7), "2.5e-7");
        assert_eq!(format_number(-1e300), "-1e+300");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn non_finite_values_have_names() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
