//! Display formatting for stats and card fields.

use crate::feed::FieldValue;

/// Shown for any stat that is missing or zero.
pub const PLACEHOLDER: &str = "--";

/// Format a count the way the page has always shown it: integers without a
/// trailing ".0", zero or missing as the placeholder.
pub fn count(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => format!("{}", v),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Format a 0–1 rate as a percentage with one decimal ("0.623" → "62.3%").
pub fn rate(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => format!("{}%", fixed_one(v * 100.0)),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Numbers get one decimal, text passes through verbatim, missing is blank.
pub fn one_decimal(value: Option<&FieldValue>) -> String {
    match value {
        Some(FieldValue::Number(n)) => fixed_one(*n),
        Some(FieldValue::Text(s)) => s.clone(),
        None => String::new(),
    }
}

/// One decimal place, with exact ties rounded away from zero (6.25 → "6.3").
///
/// `{:.1}` already rounds from the exact binary value, so only exact ties need
/// handling. At one decimal those are the odd multiples of 0.25.
fn fixed_one(v: f64) -> String {
    let quarters = v * 4.0;
    if quarters.is_finite() && quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (v * 10.0).round() / 10.0);
    }
    format!("{:.1}", v)
}

/// Probability cell: one-decimal value followed by "%".
pub fn probability(value: Option<&FieldValue>) -> String {
    format!("{}%", one_decimal(value))
}
