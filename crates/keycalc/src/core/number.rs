//! Canonical number rendering
//!
//! Every value the engine writes back into its display goes through
//! [`format_number`], so results render identically on every platform:
//! integers without a trailing `.0`, the shortest decimal that round-trips,
//! exponent form outside `[1e-6, 1e21)`, and the literal words `Infinity`,
//! `-Infinity` and `NaN` for IEEE special values.

/// Lower bound (inclusive) of the plain decimal range
const PLAIN_MIN: f64 = 1e-6;

/// Upper bound (exclusive) of the plain decimal range
const PLAIN_MAX: f64 = 1e21;

/// Renders a value as display text
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }
    // Covers -0.0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        format!("{value}")
    } else {
        exponent_form(value)
    }
}

/// `1e21` -> `1e+21`, `1.5e-7` stays as is
fn exponent_form(value: f64) -> String {
    let raw = format!("{value:e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => raw,
    }
}

/// Parses operand text, `None` when empty or malformed
///
/// Accepts everything [`format_number`] produces, including the special
/// value words, so results can be fed straight back in as operands.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Parses the display, treating malformed text as `NaN`
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    parse_operand(text).unwrap_or(f64::NAN)
}
