//! Course model

use serde::{Deserialize, Serialize};

/// A course offered in one semester of the credit schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, unique within its semester (e.g., "EEE 1101")
    pub code: String,

    /// Course title (e.g., "Electrical Circuits I")
    pub name: String,

    /// Credit-hour weight (strictly positive, can be fractional)
    #[serde(rename = "credits")]
    pub credit_hours: f64,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `code` - Course code
    /// * `name` - Course title
    /// * `credit_hours` - Credit hours (can be fractional)
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, credit_hours: f64) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credit_hours,
        }
    }

    /// Label used for report rows, e.g. "EEE 1101 - Electrical Circuits I"
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}
