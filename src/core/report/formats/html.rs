//! HTML report generator
//!
//! Generates a self-contained HTML page (embedded CSS, no scripts) from the
//! `report.html` template. Values are HTML-escaped by the template engine.

use crate::core::report::{ReportGenerator, ReportPayload, SummaryLine, GENERATED_BY};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlTemplate<'a> {
    title: &'a str,
    subtitle: &'a str,
    scope: &'a str,
    columns: &'a [&'static str],
    rows: Vec<Vec<String>>,
    summary: Vec<SummaryLine>,
    band: &'static str,
    footer: &'a str,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, payload: &ReportPayload, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let html = self.render(payload)?;
        fs::write(output_path, html)?;
        Ok(())
    }

    fn render(&self, payload: &ReportPayload) -> Result<String, Box<dyn Error>> {
        let template = HtmlTemplate {
            title: &payload.title,
            subtitle: &payload.subtitle,
            scope: payload.scope.as_deref().unwrap_or(""),
            columns: payload.kind.columns(),
            rows: payload.table_cells(),
            summary: payload.summary_lines(),
            band: payload.summary.band.as_str(),
            footer: GENERATED_BY,
        };
        Ok(template.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::AggregateResult;
    use crate::core::report::{ReportKind, ReportRow};

    #[test]
    fn escapes_course_names_and_colours_average() {
        let rows = vec![ReportRow {
            label: "CS101 - Circuits <I> & Labs".to_string(),
            grade: Some("A".to_string()),
            credit_weight: 3.0,
            point_value: 4.0,
            weighted_points: 12.0,
        }];
        let result = AggregateResult::from_totals(12.0, 3.0, 3.0);
        let payload = ReportPayload::assemble(ReportKind::Sgpa, &result, rows).expect("payload");

        let html = HtmlReporter::new().render(&payload).expect("render");
        assert!(html.contains("<title>Semester GPA Report</title>"));
        assert!(html.contains("&lt;I&gt; &amp; Labs"));
        assert!(!html.contains("<I>"));
        assert!(html.contains("class=\"average excellent\""));
        assert!(html.contains(GENERATED_BY));
    }
}
