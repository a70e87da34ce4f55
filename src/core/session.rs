//! Interactive calculation state over a loaded catalog
//!
//! A [`CalculationSession`] holds the user's current selections: the active
//! semester with its grades, and the entered semester GPAs. Every edit goes
//! through a validating setter; results are recomputed from scratch on
//! each query.

use crate::core::aggregate::AggregateResult;
use crate::core::catalog::Catalog;
use crate::core::cgpa::compute_cgpa;
use crate::core::models::{GradeAssignment, Semester, SemesterGpaAssignment};
use crate::core::report::{assemble_cgpa_report, assemble_sgpa_report, ReportPayload};
use crate::core::sgpa::{compute_sgpa, SemesterStats};
use crate::debug;

/// Current selections for the SGPA and CGPA calculators
#[derive(Debug)]
pub struct CalculationSession<'a> {
    catalog: &'a Catalog,
    active_semester: Option<&'a Semester>,
    grades: GradeAssignment,
    gpas: SemesterGpaAssignment,
    subtitle: String,
}

impl<'a> CalculationSession<'a> {
    /// Start an empty session over `catalog`
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            active_semester: None,
            grades: GradeAssignment::new(),
            gpas: SemesterGpaAssignment::new(),
            subtitle: String::new(),
        }
    }

    /// Subtitle line for assembled reports
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        subtitle.clone_into(&mut self.subtitle);
        self
    }

    /// The catalog this session reads from
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The selected semester, if any
    #[must_use]
    pub const fn active_semester(&self) -> Option<&'a Semester> {
        self.active_semester
    }

    /// Grades entered for the active semester
    #[must_use]
    pub const fn grades(&self) -> &GradeAssignment {
        &self.grades
    }

    /// Entered semester GPAs
    #[must_use]
    pub const fn gpas(&self) -> &SemesterGpaAssignment {
        &self.gpas
    }

    /// Make `key` the active semester.
    ///
    /// Switching to a different semester discards the grades entered so far;
    /// selecting the current one again keeps them. Unknown keys are rejected.
    pub fn select_semester(&mut self, key: &str) -> bool {
        let Some(semester) = self.catalog.schedule.get_semester(key) else {
            debug!("Rejected unknown semester '{}'", key);
            return false;
        };
        if self.active_semester.is_some_and(|active| active.key == key) {
            return true;
        }
        if !self.grades.is_empty() {
            debug!(
                "Switching to semester {} clears {} grade(s)",
                key,
                self.grades.len()
            );
        }
        self.grades.clear();
        self.active_semester = Some(semester);
        true
    }

    /// Assign `label` to course `code` of the active semester
    pub fn set_grade(&mut self, code: &str, label: &str) -> bool {
        let Some(semester) = self.active_semester else {
            debug!("Rejected grade for {}: no semester selected", code);
            return false;
        };
        let accepted = self.grades.set(semester, code, label, &self.catalog.scale);
        if !accepted {
            debug!(
                "Rejected grade '{}' for {} in semester {}",
                label,
                code,
                semester.key
            );
        }
        accepted
    }

    /// Enter raw GPA text for semester `key`; empty text clears the entry
    pub fn set_semester_gpa(&mut self, key: &str, text: &str) -> bool {
        let accepted = self.gpas.set(&self.catalog.schedule, key, text);
        if !accepted {
            debug!("Rejected GPA text '{}' for semester {}", text, key);
        }
        accepted
    }

    /// Remove the GPA entered for `key`
    pub fn clear_semester_gpa(&mut self, key: &str) -> bool {
        self.gpas.remove(key)
    }

    /// Remove every entered GPA
    pub fn clear_all_gpas(&mut self) {
        self.gpas.clear();
    }

    /// SGPA totals for the active semester, `None` before one is selected
    #[must_use]
    pub fn sgpa(&self) -> Option<SemesterStats> {
        self.active_semester
            .map(|semester| compute_sgpa(semester, &self.grades, &self.catalog.scale))
    }

    /// CGPA over the entered semester GPAs
    #[must_use]
    pub fn cgpa(&self) -> AggregateResult {
        compute_cgpa(&self.catalog.schedule, &self.gpas)
    }

    /// SGPA report payload, `None` when nothing in the active semester is graded
    #[must_use]
    pub fn sgpa_report(&self) -> Option<ReportPayload> {
        let semester = self.active_semester?;
        assemble_sgpa_report(semester, &self.grades, &self.catalog.scale, &self.subtitle)
    }

    /// CGPA report payload, `None` when no semester GPA is usable
    #[must_use]
    pub fn cgpa_report(&self) -> Option<ReportPayload> {
        assemble_cgpa_report(&self.catalog.schedule, &self.gpas, &self.subtitle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::parse_catalog_str;

    const CATALOG: &str = r#"
[grade_scale]
not_attempted = "N/A"
failing = "F"
grades = [
    { label = "A", points = 4.0 },
    { label = "B", points = 3.0 },
    { label = "F", points = 0.0 },
]

[[semesters]]
key = "1.1"
courses = [
    { code = "CS101", name = "Introduction to Programming", credits = 3.0 },
    { code = "CS102", name = "Discrete Mathematics", credits = 4.0 },
]

[[semesters]]
key = "1.2"
courses = [
    { code = "CS201", name = "Data Structures", credits = 4.0 },
]
"#;

    fn catalog() -> Catalog {
        parse_catalog_str(CATALOG).expect("valid catalog")
    }

    #[test]
    fn grade_requires_selected_semester() {
        let catalog = catalog();
        let mut session = CalculationSession::new(&catalog);
        assert!(!session.set_grade("CS101", "A"));
        assert!(session.sgpa().is_none());
        assert!(session.sgpa_report().is_none());
    }

    #[test]
    fn switching_semester_clears_grades() {
        let catalog = catalog();
        let mut session = CalculationSession::new(&catalog);
        assert!(session.select_semester("1.1"));
        assert!(session.set_grade("CS101", "A"));

        assert!(session.select_semester("1.1"));
        assert_eq!(session.grades().get("CS101"), Some("A"));

        assert!(session.select_semester("1.2"));
        assert!(session.grades().is_empty());
        assert!(!session.set_grade("CS101", "A"));
    }

    #[test]
    fn unknown_semester_keeps_selection() {
        let catalog = catalog();
        let mut session = CalculationSession::new(&catalog);
        assert!(session.select_semester("1.1"));
        assert!(!session.select_semester("9.9"));
        assert_eq!(session.active_semester().map(|s| s.key.as_str()), Some("1.1"));
    }

    #[test]
    fn rejected_gpa_keeps_previous_text() {
        let catalog = catalog();
        let mut session = CalculationSession::new(&catalog);
        assert!(session.set_semester_gpa("1.1", "3.5"));
        assert!(!session.set_semester_gpa("1.1", "3.5a"));
        assert_eq!(session.gpas().text("1.1"), Some("3.5"));

        assert!(session.clear_semester_gpa("1.1"));
        assert!(session.gpas().is_empty());
    }

    #[test]
    fn reports_follow_entries() {
        let catalog = catalog();
        let mut session = CalculationSession::new(&catalog).with_subtitle("Dept");
        assert!(session.cgpa_report().is_none());

        assert!(session.set_semester_gpa("1.1", "4.0"));
        assert!(session.set_semester_gpa("1.2", "3.0"));
        let cgpa = session.cgpa();
        assert!((cgpa.average_value - 40.0 / 11.0).abs() < 1e-9);

        let payload = session.cgpa_report().expect("payload");
        assert_eq!(payload.subtitle, "Dept");
        assert_eq!(payload.rows.len(), 2);

        session.clear_all_gpas();
        assert!(session.cgpa_report().is_none());
    }
}
