use std::time::Duration;

/// Formats a number by adding commas to separate thousands for better readability.
///
/// Works for anything that displays as plain decimal digits, which includes
/// `BigUint`.
///
/// # Examples
/// ```
/// use fibbench::report::format::format_with_separators;
/// assert_eq!(format_with_separators(102_334_155u64), "102,334,155");
/// assert_eq!(format_with_separators(55u64), "55");
/// ```
pub fn format_with_separators<T: ToString>(number: T) -> String {
    let num_str = number.to_string();
    let mut result = String::with_capacity(num_str.len() + num_str.len() / 3);
    let chars: Vec<_> = num_str.chars().rev().collect();
    for (i, char) in chars.iter().enumerate() {
        if i % 3 == 0 && i != 0 {
            result.push(',');
        }
        result.push(*char);
    }
    result.chars().rev().collect()
}

/// Formats a duration in seconds with a fixed number of decimal places, e.g. `0.000012s`.
pub fn format_secs(duration: Duration, decimals: usize) -> String {
    format!("{:.*}s", decimals, duration.as_secs_f64())
}

/// bytes size for 1 kilobyte
pub const KB: u64 = 1_000;

static UNITS: &str = "KMGTPE";

/// Converts a byte size to a human-readable string representation.
///
/// For example, `1024` bytes becomes `1.0 KB`, and `1_048_576` bytes becomes `1.0 MB`.
pub fn bytes_to_string(bytes: u64) -> String {
    let unit_prefix = UNITS.as_bytes();

    if bytes < KB {
        return format!("{} B", bytes);
    }
    let mut exp = 1;
    while exp < unit_prefix.len() && bytes >= KB.pow(exp as u32 + 1) {
        exp += 1;
    }
    format!(
        "{:.1} {}B",
        bytes as f64 / KB.pow(exp as u32) as f64,
        unit_prefix[exp - 1] as char,
    )
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::*;

    #[test]
    fn separators_test() {
        assert_eq!(format_with_separators(0u32), "0");
        assert_eq!(format_with_separators(999u32), "999");
        assert_eq!(format_with_separators(1000u32), "1,000");
        assert_eq!(format_with_separators(331_160_281u128), "331,160,281");
        let big: BigUint = "280571172992510140037611932413038677189525".parse().unwrap();
        assert_eq!(
            format_with_separators(big),
            "280,571,172,992,510,140,037,611,932,413,038,677,189,525"
        );
    }

    #[test]
    fn secs_test() {
        let duration = Duration::from_micros(12);
        assert_eq!(format_secs(duration, 6), "0.000012s");
        assert_eq!(format_secs(Duration::from_millis(12_345), 4), "12.3450s");
    }

    #[test]
    fn bytes_test() {
        assert_eq!(bytes_to_string(10), "10 B");
        assert_eq!(bytes_to_string(1024), "1.0 KB");
        assert_eq!(bytes_to_string(1_048_576), "1.0 MB");
        assert_eq!(bytes_to_string(1_000_000), "1.0 MB");
        assert_eq!(bytes_to_string(999_999), "1000.0 KB");
    }
}
