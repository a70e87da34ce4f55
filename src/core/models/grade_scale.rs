//! Grade scale model

use serde::{Deserialize, Serialize};

/// Highest point value on the scale
pub const MAX_POINTS: f64 = 4.0;

/// A letter grade and its point value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Grade label (e.g., "A+", "B-")
    pub label: String,
    /// Point value in `[0, 4]`
    pub points: f64,
}

/// Fixed 4.0 grade scale plus the "not attempted" sentinel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeScale {
    /// Grades in display order (best first)
    grades: Vec<Grade>,
    /// Sentinel label meaning the course is not counted
    not_attempted: String,
    /// Label of the failing grade; failing courses earn no secured credit
    failing: String,
}

impl GradeScale {
    /// Build a grade scale
    ///
    /// # Errors
    /// Returns an error if a label is empty or repeated, a point value is
    /// outside `[0, 4]`, the sentinel collides with a grade, or the failing
    /// label is not one of the grades.
    pub fn new(
        not_attempted: impl Into<String>,
        failing: impl Into<String>,
        grades: Vec<Grade>,
    ) -> Result<Self, String> {
        let not_attempted = not_attempted.into();
        let failing = failing.into();

        if not_attempted.is_empty() {
            return Err("Grade scale sentinel label must not be empty".to_string());
        }
        for (idx, grade) in grades.iter().enumerate() {
            if grade.label.is_empty() {
                return Err(format!("Grade #{} has an empty label", idx + 1));
            }
            if grade.label == not_attempted {
                return Err(format!(
                    "Grade '{}' collides with the not-attempted sentinel",
                    grade.label
                ));
            }
            if !grade.points.is_finite() || !(0.0..=MAX_POINTS).contains(&grade.points) {
                return Err(format!(
                    "Grade '{}' has point value {} outside [0, {MAX_POINTS}]",
                    grade.label, grade.points
                ));
            }
            if grades[..idx].iter().any(|g| g.label == grade.label) {
                return Err(format!("Grade '{}' is listed twice", grade.label));
            }
        }
        if !grades.iter().any(|g| g.label == failing) {
            return Err(format!("Failing grade '{failing}' is not on the scale"));
        }

        Ok(Self {
            grades,
            not_attempted,
            failing,
        })
    }

    /// Point value for a grade label; `None` for the sentinel or unknown labels
    #[must_use]
    pub fn points(&self, label: &str) -> Option<f64> {
        self.grades
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.points)
    }

    /// Whether `label` is a valid selection (a grade or the sentinel)
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.is_sentinel(label) || self.points(label).is_some()
    }

    /// Whether `label` is the "not attempted" sentinel
    #[must_use]
    pub fn is_sentinel(&self, label: &str) -> bool {
        label == self.not_attempted
    }

    /// Whether `label` is the failing grade
    #[must_use]
    pub fn is_failing(&self, label: &str) -> bool {
        label == self.failing
    }

    /// Selectable labels: the sentinel first, then grades best to worst
    #[must_use]
    pub fn options(&self) -> Vec<&str> {
        std::iter::once(self.not_attempted.as_str())
            .chain(self.grades.iter().map(|g| g.label.as_str()))
            .collect()
    }

    /// Grades in display order
    #[must_use]
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// The sentinel label
    #[must_use]
    pub fn not_attempted(&self) -> &str {
        &self.not_attempted
    }

    /// The failing label
    #[must_use]
    pub fn failing(&self) -> &str {
        &self.failing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(label: &str, points: f64) -> Grade {
        Grade {
            label: label.to_string(),
            points,
        }
    }

    fn scale() -> GradeScale {
        GradeScale::new(
            "N/A",
            "F",
            vec![grade("A", 4.0), grade("B", 3.0), grade("F", 0.0)],
        )
        .expect("valid scale")
    }

    #[test]
    fn looks_up_points() {
        let scale = scale();
        assert_eq!(scale.points("A"), Some(4.0));
        assert_eq!(scale.points("F"), Some(0.0));
        assert_eq!(scale.points("N/A"), None);
        assert_eq!(scale.points("Z"), None);
    }

    #[test]
    fn sentinel_is_selectable_but_not_graded() {
        let scale = scale();
        assert!(scale.contains("N/A"));
        assert!(scale.is_sentinel("N/A"));
        assert!(!scale.contains("a"));
        assert_eq!(scale.options(), vec!["N/A", "A", "B", "F"]);
    }

    #[test]
    fn rejects_points_above_four() {
        let err = GradeScale::new("N/A", "F", vec![grade("A", 4.3), grade("F", 0.0)]);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_duplicate_labels() {
        let err = GradeScale::new("N/A", "F", vec![grade("A", 4.0), grade("A", 3.0), grade("F", 0.0)]);
        assert!(err.unwrap_err().contains("twice"));
    }

    #[test]
    fn rejects_unknown_failing_grade() {
        let err = GradeScale::new("N/A", "E", vec![grade("A", 4.0), grade("F", 0.0)]);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_sentinel_collision() {
        let err = GradeScale::new("F", "F", vec![grade("A", 4.0), grade("F", 0.0)]);
        assert!(err.is_err());
    }
}
