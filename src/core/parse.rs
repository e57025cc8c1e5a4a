//! Numeric coercion for form-style input
//!
//! Stores keep the raw text the user typed; everything downstream works on
//! numbers. This is the single place where that conversion happens, so the
//! calculators never see a malformed value.

/// Parse a numeric form value, substituting `fallback` when the text is
/// empty, non-numeric, or not finite.
///
/// # Arguments
/// * `value` - Raw text from a form field
/// * `fallback` - Value to use when parsing fails
///
/// # Examples
/// ```
/// use gpa_planner::core::parse::to_number;
///
/// assert!((to_number("3.5", 0.0) - 3.5).abs() < f64::EPSILON);
/// assert!((to_number("", 0.0)).abs() < f64::EPSILON);
/// assert!((to_number("abc", 1.0) - 1.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn to_number(value: &str, fallback: f64) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(fallback)
}
