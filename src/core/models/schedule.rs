//! Credit schedule model

use super::{Course, Semester};
use serde::{Deserialize, Serialize};

/// The static credit schedule: every semester in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditSchedule {
    semesters: Vec<Semester>,
}

impl CreditSchedule {
    /// Create an empty schedule
    #[must_use]
    pub const fn new() -> Self {
        Self {
            semesters: Vec::new(),
        }
    }

    /// Add a semester
    ///
    /// # Returns
    /// `true` if the semester was added, `false` if the key is already taken
    pub fn add_semester(&mut self, semester: Semester) -> bool {
        if self.get_semester(&semester.key).is_some() {
            return false;
        }
        self.semesters.push(semester);
        true
    }

    /// Semesters in declaration order
    #[must_use]
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Look up a semester by key
    #[must_use]
    pub fn get_semester(&self, key: &str) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.key == key)
    }

    /// Semester keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.semesters.iter().map(|s| s.key.as_str())
    }

    /// Total credit hours of a semester, or `None` for an unknown key
    #[must_use]
    pub fn total_credit_hours(&self, key: &str) -> Option<f64> {
        self.get_semester(key).map(Semester::total_credit_hours)
    }

    /// Semester key to total credit hours, in declaration order
    #[must_use]
    pub fn credit_map(&self) -> Vec<(&str, f64)> {
        self.semesters
            .iter()
            .map(|s| (s.key.as_str(), s.total_credit_hours()))
            .collect()
    }

    /// Credit hours across the whole schedule
    #[must_use]
    pub fn offered_credit_total(&self) -> f64 {
        self.semesters.iter().map(Semester::total_credit_hours).sum()
    }

    /// Find a course by semester key and course code
    #[must_use]
    pub fn get_course(&self, semester_key: &str, code: &str) -> Option<&Course> {
        self.get_semester(semester_key)?.get_course(code)
    }

    /// Number of semesters
    #[must_use]
    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    /// Whether the schedule has no semesters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }
}
