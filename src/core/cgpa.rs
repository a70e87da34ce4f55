//! Cumulative GPA aggregation

use crate::core::aggregate::AggregateResult;
use crate::core::models::{CreditSchedule, SemesterGpaAssignment};

/// A semester whose entered GPA counts towards the CGPA
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcceptedSemester<'a> {
    /// Semester key
    pub key: &'a str,
    /// Total credit hours of the semester
    pub credit_hours: f64,
    /// Entered GPA in `[0, 4]`
    pub gpa: f64,
}

impl AcceptedSemester<'_> {
    /// `gpa × credit hours`
    #[must_use]
    pub fn weighted_points(&self) -> f64 {
        self.gpa * self.credit_hours
    }
}

/// Semesters with a complete, in-range GPA and positive credit, in schedule order.
///
/// Walking the schedule rather than the entry map keeps the summation order
/// fixed, so results do not depend on hash iteration order.
pub fn accepted_semesters<'a>(
    schedule: &'a CreditSchedule,
    gpas: &'a SemesterGpaAssignment,
) -> impl Iterator<Item = AcceptedSemester<'a>> + 'a {
    schedule.semesters().iter().filter_map(move |semester| {
        let gpa = gpas.value(&semester.key)?;
        let credit_hours = semester.total_credit_hours();
        (credit_hours > 0.0).then_some(AcceptedSemester {
            key: semester.key.as_str(),
            credit_hours,
            gpa,
        })
    })
}

/// Compute the CGPA over every accepted semester.
///
/// There is no failing notion for a semester GPA, so secured credit equals
/// attempted credit.
#[must_use]
pub fn compute_cgpa(schedule: &CreditSchedule, gpas: &SemesterGpaAssignment) -> AggregateResult {
    let (weighted, attempted) = accepted_semesters(schedule, gpas)
        .fold((0.0, 0.0), |(weighted, attempted), accepted| {
            (
                weighted + accepted.weighted_points(),
                attempted + accepted.credit_hours,
            )
        });

    AggregateResult::from_totals(weighted, attempted, attempted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Semester};

    fn schedule() -> CreditSchedule {
        let mut schedule = CreditSchedule::new();
        let mut first = Semester::new("1.1");
        first.add_course(Course::new("A", "A", 20.0));
        let mut second = Semester::new("1.2");
        second.add_course(Course::new("B", "B", 22.0));
        schedule.add_semester(first);
        schedule.add_semester(second);
        schedule.add_semester(Semester::new("1.3"));
        schedule
    }

    #[test]
    fn weights_gpa_by_semester_credit() {
        let schedule = schedule();
        let mut gpas = SemesterGpaAssignment::new();
        gpas.set(&schedule, "1.1", "3.500");
        gpas.set(&schedule, "1.2", "3.800");

        let result = compute_cgpa(&schedule, &gpas);
        assert!((result.weighted_point_total - 153.6).abs() < 1e-9);
        assert!((result.attempted_credit_total - 42.0).abs() < 1e-9);
        assert!((result.average_value - 153.6 / 42.0).abs() < 1e-9);
    }

    #[test]
    fn excludes_out_of_range_and_partial_entries() {
        let schedule = schedule();
        let mut gpas = SemesterGpaAssignment::new();
        gpas.set(&schedule, "1.1", "4.5");
        gpas.set(&schedule, "1.2", "3.");

        let result = compute_cgpa(&schedule, &gpas);
        assert!(!result.has_attempted_credit());
        assert!(result.average_value.abs() < f64::EPSILON);
    }

    #[test]
    fn excludes_semester_without_credit() {
        let schedule = schedule();
        let mut gpas = SemesterGpaAssignment::new();
        gpas.set(&schedule, "1.3", "4.0");

        assert_eq!(accepted_semesters(&schedule, &gpas).count(), 0);
    }
}
