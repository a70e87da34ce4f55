//! Semester model

use super::Course;
use serde::{Deserialize, Serialize};

/// One semester of the credit schedule and its ordered course list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester key (e.g., "1.1", "3.2")
    pub key: String,

    /// Courses in declaration order
    courses: Vec<Course>,
}

impl Semester {
    /// Create an empty semester
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            courses: Vec::new(),
        }
    }

    /// Add a course to the semester
    ///
    /// # Returns
    /// `true` if the course was added, `false` if a course with the same code
    /// is already part of this semester
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.get_course(&course.code).is_some() {
            return false;
        }
        self.courses.push(course);
        true
    }

    /// Courses in declaration order
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Look up a course by code
    #[must_use]
    pub fn get_course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code == code)
    }

    /// Sum of credit hours over every course in the semester
    #[must_use]
    pub fn total_credit_hours(&self) -> f64 {
        self.courses.iter().map(|c| c.credit_hours).sum()
    }

    /// Number of courses in the semester
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Display label, e.g. "Semester 1.1"
    #[must_use]
    pub fn label(&self) -> String {
        format!("Semester {}", self.key)
    }
}
