//! Rounding and number rendering shared by the engine and the reporting layer

/// Round to one decimal place, ties to even on the exact binary value.
///
/// Scaling by ten and calling `f64::round` rounds half away from zero,
/// which turns 0.25 into 0.3. Fixed-precision formatting rounds the exact
/// binary expansion instead.
pub fn round1(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Render a number the way it is interpolated into report text:
/// shortest round-trip digits, with a trailing `.0` for integral values.
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Render a USD-billions amount as `$<amount>B`
pub fn format_billions(value: f64) -> String {
    format!("${}B", format_decimal(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1_ties_to_even() {
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(0.35), 0.3); // 0.35 is stored slightly below the tie
        assert_eq!(round1(144.04), 144.0);
        assert_eq!(round1(-1.55), -1.6);
    }

    #[test]
    fn test_round1_passes_through_non_finite() {
        assert!(round1(f64::NAN).is_nan());
        assert_eq!(round1(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(-2.0), "-2.0");
        assert_eq!(format_decimal(-1.5), "-1.5");
        assert_eq!(format_decimal(4627.0), "4627.0");
        assert_eq!(format_decimal(0.1), "0.1");
    }

    #[test]
    fn test_format_billions() {
        assert_eq!(format_billions(4622.8), "$4622.8B");
        assert_eq!(format_billions(230.0), "$230.0B");
    }
}
