//! SGPA command handler

use crate::args::Assignment;
use gradepoint::config::Config;
use gradepoint::core::catalog::Catalog;
use gradepoint::core::report::{format_average, format_credits, ReportGenerator, ReportPayload, TextReporter};
use gradepoint::core::session::CalculationSession;
use gradepoint::{error, verbose, warn};

/// Apply the grades to `semester_key`, print the summary and return the payload.
///
/// Rejected grades are reported and skipped. Returns `Err` with a user-facing
/// message only when the semester itself is unknown.
pub fn run(
    catalog: &Catalog,
    semester_key: &str,
    grades: &[Assignment],
    config: &Config,
) -> Result<Option<ReportPayload>, String> {
    let mut session = CalculationSession::new(catalog).with_subtitle(&config.report.department);

    if !session.select_semester(semester_key) {
        error!("Unknown semester '{semester_key}'");
        let keys: Vec<&str> = catalog.schedule.keys().collect();
        return Err(format!(
            "✗ Unknown semester '{semester_key}'. Available: {}",
            keys.join(", ")
        ));
    }

    for Assignment { key: code, value: label } in grades {
        if session.set_grade(code, label) {
            verbose!("Grade {label} recorded for {code}");
        } else {
            let reason = rejection_reason(catalog, semester_key, code);
            warn!("Skipping grade '{label}' for {code}: {reason}");
            eprintln!("⚠ Skipping grade '{label}' for {code}: {reason}");
        }
    }

    let payload = session.sgpa_report();
    print_summary(&session, payload.as_ref());
    Ok(payload)
}

fn rejection_reason(catalog: &Catalog, semester_key: &str, code: &str) -> String {
    if catalog.schedule.get_course(semester_key, code).is_none() {
        format!("no such course in semester {semester_key}")
    } else {
        format!(
            "unknown grade (expected one of: {})",
            catalog.scale.options().join(", ")
        )
    }
}

fn print_summary(session: &CalculationSession<'_>, payload: Option<&ReportPayload>) {
    if let Some(payload) = payload {
        match TextReporter::new().render(payload) {
            Ok(text) => print!("\n{text}"),
            Err(e) => eprintln!("✗ Failed to render summary: {e}"),
        }
        return;
    }

    let Some(stats) = session.sgpa() else {
        return;
    };
    let label = session
        .active_semester()
        .map(gradepoint::core::models::Semester::label)
        .unwrap_or_default();
    println!("\n=== {label} ===");
    println!("No graded courses.");
    println!("Credits Offered: {}", format_credits(stats.offered_credit_total));
    println!("SGPA: {}", format_average(stats.sgpa()));
}
