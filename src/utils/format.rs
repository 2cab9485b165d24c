/// Placeholder shown for values that are not available
pub const NOT_AVAILABLE: &str = "N/A";

/// Format a tick or tooltip value: `None` becomes "N/A", numbers use
/// thousands separators and a fixed number of fraction digits
/// (`1234.5678` with 2 digits -> `"1,234.57"`)
pub fn format_tick(value: Option<f64>, fraction_digits: usize) -> String {
    match value {
        Some(v) => format_grouped(v, fraction_digits),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Fixed-point formatting with comma grouping of the integer part
pub fn format_grouped(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", fraction_digits, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut output = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);

    // Values that round to zero lose their sign
    if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        output.push('-');
    }

    let len = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            output.push(',');
        }
        output.push(ch);
    }

    if let Some(frac) = frac_part {
        output.push('.');
        output.push_str(frac);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_is_not_available() {
        assert_eq!(format_tick(None, 2), "N/A");
        assert_eq!(format_tick(None, 1), "N/A");
    }

    #[test]
    fn test_two_fraction_digits() {
        assert_eq!(format_tick(Some(1.2345), 2), "1.23");
        assert_eq!(format_tick(Some(0.0), 2), "0.00");
        assert_eq!(format_tick(Some(2.0), 2), "2.00");
    }

    #[test]
    fn test_one_fraction_digit() {
        assert_eq!(format_tick(Some(12.26), 1), "12.3");
        assert_eq!(format_tick(Some(99.0), 1), "99.0");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_grouped(1234.5, 1), "1,234.5");
        assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(100000.0, 0), "100,000");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_grouped(-9876.5, 2), "-9,876.50");
        assert_eq!(format_grouped(-0.001, 2), "0.00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_grouped(f64::NAN, 2), "NaN");
        assert_eq!(format_grouped(f64::INFINITY, 2), "inf");
    }
}
