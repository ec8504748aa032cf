//! FILENAME: app/src/format.rs
//! PURPOSE: Renders evaluation results for display.

/// Integral values below this magnitude are shown without a fraction.
const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

/// Upper bound on requested decimal places; an f64 carries about 17
/// significant digits, and the formatter panics on huge precisions.
pub const MAX_PRECISION: usize = 17;

/// Formats a result. With `precision`, rounds to that many decimal places
/// (at most `MAX_PRECISION`) and trims trailing zeros; otherwise prints the
/// shortest exact form.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "inf" } else { "-inf" }.to_string();
    }

    match precision {
        Some(digits) => {
            let formatted = format!("{:.*}", digits.min(MAX_PRECISION), value);
            let trimmed = if formatted.contains('.') {
                formatted.trim_end_matches('0').trim_end_matches('.')
            } else {
                formatted.as_str()
            };
            // Rounding can leave "-0" behind
            if trimmed == "-0" {
                "0".to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => {
            if value.fract() == 0.0 && value.abs() < INTEGER_DISPLAY_LIMIT {
                format!("{}", value as i64)
            } else {
                format!("{}", value)
            }
        }
    }
}
