//! Sparse user-entered assignments: course grades and semester GPAs
//!
//! Both maps are only ever written through their validating setters, so the
//! aggregators can trust every stored grade label to be a scale key and every
//! stored GPA text to have passed the syntactic filter.

use super::{CreditSchedule, GradeScale, Semester};
use crate::core::validation::{is_valid_gpa_text, is_valid_grade, parse_gpa};
use std::collections::HashMap;

/// Course code to grade label for the active semester
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GradeAssignment {
    grades: HashMap<String, String>,
}

impl GradeAssignment {
    /// Create an empty assignment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `label` to course `code` of `semester`
    ///
    /// # Returns
    /// `false` (and leaves the assignment untouched) when the course is not
    /// part of `semester` or the label is not on `scale`
    pub fn set(&mut self, semester: &Semester, code: &str, label: &str, scale: &GradeScale) -> bool {
        if semester.get_course(code).is_none() || !is_valid_grade(scale, label) {
            return false;
        }
        self.grades.insert(code.to_string(), label.to_string());
        true
    }

    /// Grade label assigned to `code`, if any
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&str> {
        self.grades.get(code).map(String::as_str)
    }

    /// Drop every assignment
    pub fn clear(&mut self) {
        self.grades.clear();
    }

    /// Number of assigned courses (sentinel selections included)
    #[must_use]
    pub fn len(&self) -> usize {
        self.grades.len()
    }

    /// Whether nothing is assigned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }
}

/// Semester key to the raw GPA text the user typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemesterGpaAssignment {
    entries: HashMap<String, String>,
}

impl SemesterGpaAssignment {
    /// Create an empty assignment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the GPA text for semester `key`
    ///
    /// Empty text clears the entry. Text that fails the syntactic filter is
    /// rejected and the previous value is kept.
    ///
    /// # Returns
    /// `false` when the semester is unknown or the text is rejected
    pub fn set(&mut self, schedule: &CreditSchedule, key: &str, text: &str) -> bool {
        if schedule.get_semester(key).is_none() || !is_valid_gpa_text(text) {
            return false;
        }
        if text.is_empty() {
            self.entries.remove(key);
        } else {
            self.entries.insert(key.to_string(), text.to_string());
        }
        true
    }

    /// Raw text entered for `key`, if any
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// GPA for `key` if its text is a complete value in `[0, 4]`
    #[must_use]
    pub fn value(&self, key: &str) -> Option<f64> {
        self.text(key).and_then(parse_gpa)
    }

    /// Remove the entry for `key`; returns whether one existed
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries, complete or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Grade};

    fn semester() -> Semester {
        let mut s = Semester::new("1.1");
        s.add_course(Course::new("CS101", "Introduction to Programming", 3.0));
        s
    }

    fn scale() -> GradeScale {
        GradeScale::new(
            "N/A",
            "F",
            vec![
                Grade {
                    label: "A".to_string(),
                    points: 4.0,
                },
                Grade {
                    label: "F".to_string(),
                    points: 0.0,
                },
            ],
        )
        .expect("valid scale")
    }

    #[test]
    fn grade_setter_rejects_unknown_label_and_keeps_previous() {
        let (semester, scale) = (semester(), scale());
        let mut grades = GradeAssignment::new();

        assert!(grades.set(&semester, "CS101", "A", &scale));
        assert!(!grades.set(&semester, "CS101", "A+", &scale));
        assert_eq!(grades.get("CS101"), Some("A"));
    }

    #[test]
    fn grade_setter_rejects_foreign_course() {
        let (semester, scale) = (semester(), scale());
        let mut grades = GradeAssignment::new();

        assert!(!grades.set(&semester, "CS999", "A", &scale));
        assert!(grades.is_empty());
    }

    #[test]
    fn gpa_setter_keeps_previous_on_bad_keystroke() {
        let mut schedule = CreditSchedule::new();
        schedule.add_semester(semester());
        let mut gpas = SemesterGpaAssignment::new();

        assert!(gpas.set(&schedule, "1.1", "3.5"));
        assert!(!gpas.set(&schedule, "1.1", "3.5x"));
        assert!(!gpas.set(&schedule, "1.1", "3.5000"));
        assert_eq!(gpas.text("1.1"), Some("3.5"));
        assert_eq!(gpas.value("1.1"), Some(3.5));
    }

    #[test]
    fn gpa_setter_clears_on_empty_text() {
        let mut schedule = CreditSchedule::new();
        schedule.add_semester(semester());
        let mut gpas = SemesterGpaAssignment::new();

        assert!(gpas.set(&schedule, "1.1", "3."));
        assert_eq!(gpas.value("1.1"), None);
        assert!(gpas.set(&schedule, "1.1", ""));
        assert!(gpas.is_empty());
    }

    #[test]
    fn gpa_setter_rejects_unknown_semester() {
        let schedule = CreditSchedule::new();
        let mut gpas = SemesterGpaAssignment::new();

        assert!(!gpas.set(&schedule, "7.7", "3.0"));
        assert!(gpas.is_empty());
    }
}
