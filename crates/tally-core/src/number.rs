//! Decimal text helpers shared by the calculator and the intake log.

/// Parses operand text into a number.
///
/// Returns `None` for text with no digits at all (a bare sign or decimal
/// point), which the calculator treats as "no operand yet". Text with too
/// many digits parses to an infinity; callers check finiteness of results.
pub fn parse_operand(text: &str) -> Option<f64> {
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Rounds half away from zero at the given number of fractional digits.
///
/// Values too large to scale are returned unchanged; they have no fractional
/// part left to round anyway.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Formats a number as plain decimal text.
///
/// Uses the shortest representation that round-trips, never exponent
/// notation, and renders negative zero as `0`.
pub fn format_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
