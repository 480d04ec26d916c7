//! Number Formatting
//!
//! Presentation formatting for the stats cards and insight text. Mirrors the
//! en-US short compact notation used across the dashboard (1.2K, 3.4M).

/// Format an engagement rate as a percentage with one decimal place
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate)
}

/// Format a count in compact notation: 1234 -> "1.2K", 1234567 -> "1.2M"
pub fn format_compact(value: u64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

    let v = value as f64;
    for (divisor, suffix) in UNITS {
        if v >= divisor {
            let scaled = v / divisor;
            // Two significant figures below 10, whole numbers above
            return if scaled < 10.0 {
                let rounded = (scaled * 10.0).round() / 10.0;
                if rounded.fract() == 0.0 {
                    format!("{:.0}{}", rounded, suffix)
                } else {
                    format!("{:.1}{}", rounded, suffix)
                }
            } else {
                format!("{:.0}{}", scaled, suffix)
            };
        }
    }

    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent_one_decimal() {
        assert_eq!(format_percent(42.567), "42.6%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(100.0), "100.0%");
    }

    #[test]
    fn test_format_compact_millions() {
        assert_eq!(format_compact(1_234_567), "1.2M");
        assert_eq!(format_compact(3_400_000), "3.4M");
    }

    #[test]
    fn test_format_compact_thousands() {
        assert_eq!(format_compact(1_234), "1.2K");
        assert_eq!(format_compact(1_000), "1K");
        assert_eq!(format_compact(12_345), "12K");
    }

    #[test]
    fn test_format_compact_small_values_verbatim() {
        assert_eq!(format_compact(0), "0");
        assert_eq!(format_compact(365), "365");
        assert_eq!(format_compact(999), "999");
    }

    #[test]
    fn test_format_compact_billions() {
        assert_eq!(format_compact(2_500_000_000), "2.5B");
    }
}
