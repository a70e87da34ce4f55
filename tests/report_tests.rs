//! Integration tests for report assembly and export

use gradepoint::core::catalog::{parse_catalog_toml, Catalog};
use gradepoint::core::report::{
    HtmlReporter, MarkdownReporter, PdfReporter, ReportFormat, ReportGenerator, ReportKind,
    TextReporter, GENERATED_BY,
};
use gradepoint::core::session::CalculationSession;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/catalogs/two_semesters.toml");
    parse_catalog_toml(path).expect("sample catalog parses")
}

fn graded_session(catalog: &Catalog) -> CalculationSession<'_> {
    let mut session = CalculationSession::new(catalog).with_subtitle("Department of Computer Science");
    assert!(session.select_semester("1.1"));
    assert!(session.set_grade("CS103", "B"));
    assert!(session.set_grade("CS101", "A"));
    assert!(session.set_grade("CS102", "N/A"));
    session
}

#[test]
fn sgpa_payload_lists_graded_courses_in_declaration_order() {
    let catalog = catalog();
    let session = graded_session(&catalog);
    let payload = session.sgpa_report().expect("graded courses present");

    assert_eq!(payload.kind, ReportKind::Sgpa);
    assert_eq!(payload.title, "Semester GPA Report");
    assert_eq!(payload.subtitle, "Department of Computer Science");
    let labels: Vec<&str> = payload.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["CS101 - Introduction to Programming", "CS103 - Digital Logic"]
    );
    assert_eq!(payload.rows[1].grade.as_deref(), Some("B"));

    let lines = payload.summary_lines();
    assert_eq!(lines[0].value, "3.188");
    assert!(lines
        .iter()
        .any(|l| l.label == "Credits Offered" && l.value == "20.00"));
}

#[test]
fn cgpa_payload_matches_summary_layout() {
    let catalog = catalog();
    let mut session = CalculationSession::new(&catalog);
    assert!(session.set_semester_gpa("1.2", "3.800"));
    assert!(session.set_semester_gpa("1.1", "3.500"));
    let payload = session.cgpa_report().expect("semester GPAs present");

    assert_eq!(payload.title, "Overall CGPA Report");
    assert_eq!(
        payload.table_cells(),
        vec![
            vec!["Semester 1.1", "20.00", "3.500", "70.00"],
            vec!["Semester 1.2", "22.00", "3.800", "83.60"],
        ]
    );
    let summary: Vec<(&str, String)> = payload
        .summary_lines()
        .into_iter()
        .map(|l| (l.label, l.value))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Cumulative GPA (CGPA)", "3.657".to_string()),
            ("Total Credits Completed", "42.00".to_string()),
            ("Total Points Secured", "153.60".to_string()),
        ]
    );
}

#[test]
fn writes_reports_under_default_names() {
    let catalog = catalog();
    let session = graded_session(&catalog);
    let payload = session.sgpa_report().expect("graded courses present");
    let dir = TempDir::new().expect("Failed to create temp dir");

    let reporters: [(ReportFormat, Box<dyn ReportGenerator>); 3] = [
        (ReportFormat::Text, Box::new(TextReporter::new())),
        (ReportFormat::Markdown, Box::new(MarkdownReporter::new())),
        (ReportFormat::Html, Box::new(HtmlReporter::new())),
    ];
    for (format, reporter) in reporters {
        let path = dir.path().join(payload.kind.default_file_name(format));
        reporter.generate(&payload, &path).expect("report written");

        let content = fs::read_to_string(&path).expect("report readable");
        assert!(content.contains("Semester GPA Report"), "{format} title");
        assert!(content.contains("Digital Logic"), "{format} rows");
        assert!(content.contains(GENERATED_BY), "{format} footer");
    }

    assert!(dir.path().join("SGPA_Report.txt").exists());
    assert!(dir.path().join("SGPA_Report.md").exists());
    assert!(dir.path().join("SGPA_Report.html").exists());
}

#[test]
fn pdf_export_fails_cleanly_without_converter() {
    let catalog = catalog();
    let mut session = CalculationSession::new(&catalog);
    assert!(session.set_semester_gpa("1.1", "3.5"));
    let payload = session.cgpa_report().expect("semester GPA present");
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(ReportKind::Cgpa.default_file_name(ReportFormat::Pdf));

    let reporter = PdfReporter::with_converter("/nonexistent/gradepoint-chrome");
    assert!(reporter.generate(&payload, &path).is_err());
    assert!(!path.exists());
}

#[test]
fn nothing_to_export_without_attempted_credit() {
    let catalog = catalog();
    let mut session = CalculationSession::new(&catalog);
    assert!(session.select_semester("1.2"));
    assert!(session.set_grade("CS201", "N/A"));
    assert!(session.set_semester_gpa("1.1", "4.5"));

    assert!(session.sgpa_report().is_none());
    assert!(session.cgpa_report().is_none());
}
