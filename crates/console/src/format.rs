//! Number formatting shared by telemetry and reports.

/// Scientific notation with ten fractional digits, an upper-case `E`, an explicit exponent sign
/// and at least three exponent digits, e.g. `1.6000000000E+006`.
pub fn format_e10(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{value:.10e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}E{sign}{:03}", exponent.abs())
        }
        None => formatted,
    }
}
