//! Build report payloads from the current assignments

use super::{ReportKind, ReportPayload, ReportRow};
use crate::core::cgpa::{accepted_semesters, compute_cgpa};
use crate::core::models::{CreditSchedule, GradeAssignment, GradeScale, Semester, SemesterGpaAssignment};
use crate::core::sgpa::{compute_sgpa, graded_courses};

/// Assemble the SGPA report for `semester`.
///
/// Rows follow course declaration order. Returns `None` when no course in
/// the semester carries a grade.
#[must_use]
pub fn assemble_sgpa_report(
    semester: &Semester,
    grades: &GradeAssignment,
    scale: &GradeScale,
    subtitle: &str,
) -> Option<ReportPayload> {
    let stats = compute_sgpa(semester, grades, scale);
    let rows = graded_courses(semester, grades, scale)
        .map(|graded| ReportRow {
            label: graded.course.label(),
            grade: Some(graded.grade.to_string()),
            credit_weight: graded.course.credit_hours,
            point_value: graded.points,
            weighted_points: graded.weighted_points(),
        })
        .collect();

    ReportPayload::assemble(ReportKind::Sgpa, &stats.aggregate, rows).map(|payload| {
        payload
            .with_subtitle(subtitle)
            .with_scope(semester.label())
            .with_offered_credits(stats.offered_credit_total)
    })
}

/// Assemble the CGPA report.
///
/// Rows follow semester declaration order. Returns `None` when no semester
/// has a usable GPA.
#[must_use]
pub fn assemble_cgpa_report(
    schedule: &CreditSchedule,
    gpas: &SemesterGpaAssignment,
    subtitle: &str,
) -> Option<ReportPayload> {
    let result = compute_cgpa(schedule, gpas);
    let rows = accepted_semesters(schedule, gpas)
        .map(|accepted| ReportRow {
            label: format!("Semester {}", accepted.key),
            grade: None,
            credit_weight: accepted.credit_hours,
            point_value: accepted.gpa,
            weighted_points: accepted.weighted_points(),
        })
        .collect();

    ReportPayload::assemble(ReportKind::Cgpa, &result, rows)
        .map(|payload| payload.with_subtitle(subtitle))
}
