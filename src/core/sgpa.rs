//! Semester GPA aggregation

use crate::core::aggregate::AggregateResult;
use crate::core::models::{Course, GradeAssignment, GradeScale, Semester};

/// A course that counts towards the semester totals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradedCourse<'a> {
    /// The course
    pub course: &'a Course,
    /// Assigned grade label
    pub grade: &'a str,
    /// Point value of the grade
    pub points: f64,
}

impl GradedCourse<'_> {
    /// `points × credit hours`
    #[must_use]
    pub fn weighted_points(&self) -> f64 {
        self.points * self.course.credit_hours
    }
}

/// SGPA totals for one semester
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SemesterStats {
    /// Attempted/secured totals and the SGPA
    pub aggregate: AggregateResult,
    /// Credit hours of every course in the semester, graded or not
    pub offered_credit_total: f64,
}

impl SemesterStats {
    /// The SGPA
    #[must_use]
    pub const fn sgpa(&self) -> f64 {
        self.aggregate.average_value
    }
}

/// Courses of `semester` carrying a real grade, in declaration order.
///
/// Unassigned courses and sentinel selections are skipped. A label missing
/// from `scale` is skipped as well; the validating setter never stores one.
pub fn graded_courses<'a>(
    semester: &'a Semester,
    grades: &'a GradeAssignment,
    scale: &'a GradeScale,
) -> impl Iterator<Item = GradedCourse<'a>> + 'a {
    semester.courses().iter().filter_map(move |course| {
        let grade = grades.get(&course.code)?;
        let points = scale.points(grade)?;
        Some(GradedCourse {
            course,
            grade,
            points,
        })
    })
}

/// Compute SGPA totals for `semester`
#[must_use]
pub fn compute_sgpa(
    semester: &Semester,
    grades: &GradeAssignment,
    scale: &GradeScale,
) -> SemesterStats {
    let mut weighted = 0.0;
    let mut attempted = 0.0;
    let mut secured = 0.0;

    for graded in graded_courses(semester, grades, scale) {
        let credits = graded.course.credit_hours;
        attempted += credits;
        weighted += graded.weighted_points();
        if !scale.is_failing(graded.grade) {
            secured += credits;
        }
    }

    SemesterStats {
        aggregate: AggregateResult::from_totals(weighted, attempted, secured),
        offered_credit_total: semester.total_credit_hours(),
    }
}
