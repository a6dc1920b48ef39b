/// Formats an integer with thousands separators (commas)
///
/// # Examples
/// ```ignore
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Formats an amount as money with two decimals: `$1,234.56`
pub fn format_money(value: f64, currency: &str) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}{currency}{}.{frac_part}", group_thousands(int_part))
}

/// Formats a number with a fixed count of decimals and thousands separators
pub fn format_decimal(value: f64, decimals: u8) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.*}", decimals as usize, value.abs());
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => format!("{sign}{}.{frac_part}", group_thousands(int_part)),
        None => format!("{sign}{}", group_thousands(&fixed)),
    }
}

/// Bytes to mebibytes, rounded to 2 decimals
pub fn bytes_to_mb(bytes: usize) -> f64 {
    (bytes as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(1234567890), "1,234,567,890");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0, "$"), "$0.00");
        assert_eq!(format_money(35.0, "$"), "$35.00");
        assert_eq!(format_money(1234567.891, "$"), "$1,234,567.89");
        assert_eq!(format_money(-1500.5, "$"), "-$1,500.50");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(5.5, 2), "5.50");
        assert_eq!(format_decimal(12345.678, 1), "12,345.7");
        assert_eq!(format_decimal(1000.0, 0), "1,000");
    }

    #[test]
    fn test_bytes_to_mb() {
        assert_eq!(bytes_to_mb(0), 0.0);
        assert_eq!(bytes_to_mb(1024 * 1024), 1.0);
        assert_eq!(bytes_to_mb(1536 * 1024), 1.5);
    }
}
