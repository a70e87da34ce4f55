//! Input validation for grade selections and semester-GPA text

use crate::core::models::grade_scale::MAX_POINTS;
use crate::core::models::GradeScale;
use regex::Regex;
use std::sync::LazyLock;

/// At most one integer digit, optionally followed by `.` and up to three
/// fractional digits. The empty string matches (a cleared field).
static GPA_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9](?:\.[0-9]{0,3})?)?$").expect("GPA text pattern is a valid regex")
});

/// Syntactic pre-filter for a semester-GPA field.
///
/// This is applied on every edit; text that fails it never replaces the
/// previous field value. Passing it does not make the text a usable GPA,
/// see [`parse_gpa`].
#[must_use]
pub fn is_valid_gpa_text(text: &str) -> bool {
    GPA_TEXT.is_match(text)
}

/// Parse semester-GPA text into a value that may contribute to totals.
///
/// Returns `None` for text that fails the syntactic filter, for partial text
/// (`""`, `"3."`), and for values outside `[0, 4]`.
#[must_use]
pub fn parse_gpa(text: &str) -> Option<f64> {
    if text.is_empty() || text.ends_with('.') || !is_valid_gpa_text(text) {
        return None;
    }
    text.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && (0.0..=MAX_POINTS).contains(value))
}

/// Whether `label` may be assigned to a course under `scale`.
#[must_use]
pub fn is_valid_grade(scale: &GradeScale, label: &str) -> bool {
    scale.contains(label)
}
