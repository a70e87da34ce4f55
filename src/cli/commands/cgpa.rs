//! CGPA command handler

use crate::args::Assignment;
use gradepoint::config::Config;
use gradepoint::core::catalog::Catalog;
use gradepoint::core::report::{format_average, ReportGenerator, ReportPayload, TextReporter};
use gradepoint::core::session::CalculationSession;
use gradepoint::core::validation::is_valid_gpa_text;
use gradepoint::{verbose, warn};

/// Apply the semester GPAs in order, print the summary and return the payload.
///
/// Entries for unknown semesters or with malformed text are skipped. Entries
/// that are well-formed but incomplete or above the maximum are kept and
/// excluded from the CGPA, with a warning.
pub fn run(catalog: &Catalog, gpas: &[Assignment], config: &Config) -> Option<ReportPayload> {
    let mut session = CalculationSession::new(catalog).with_subtitle(&config.report.department);

    for Assignment { key, value } in gpas {
        if session.set_semester_gpa(key, value) {
            verbose!("GPA '{value}' recorded for semester {key}");
            continue;
        }
        let reason = if catalog.schedule.get_semester(key).is_none() {
            "no such semester"
        } else if !is_valid_gpa_text(value) {
            "expected a number such as 3.75"
        } else {
            "rejected"
        };
        warn!("Skipping GPA '{value}' for semester {key}: {reason}");
        eprintln!("⚠ Skipping GPA '{value}' for semester {key}: {reason}");
    }

    for key in catalog.schedule.keys() {
        let excluded = session
            .gpas()
            .text(key)
            .filter(|_| session.gpas().value(key).is_none());
        if let Some(text) = excluded {
            warn!("GPA '{text}' for semester {key} is not counted");
            eprintln!("⚠ GPA '{text}' for semester {key} is incomplete or above 4.000; not counted");
        }
    }

    let payload = session.cgpa_report();
    print_summary(&session, payload.as_ref());
    payload
}

fn print_summary(session: &CalculationSession<'_>, payload: Option<&ReportPayload>) {
    match payload {
        Some(payload) => match TextReporter::new().render(payload) {
            Ok(text) => print!("\n{text}"),
            Err(e) => eprintln!("✗ Failed to render summary: {e}"),
        },
        None => {
            println!("\n=== Overall CGPA ===");
            println!("No semester GPA entered.");
            println!("CGPA: {}", format_average(session.cgpa().average_value));
        }
    }
}
