//! Markdown report generator
//!
//! Renders the payload through the `report.md` template: header lines, a
//! pipe table of rows and a bulleted summary.

use crate::core::report::{ReportGenerator, ReportPayload, SummaryLine, GENERATED_BY};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Template)]
#[template(path = "report.md")]
struct MarkdownTemplate<'a> {
    title: &'a str,
    subtitle: &'a str,
    scope: &'a str,
    columns: &'a [&'static str],
    separator: String,
    rows: Vec<Vec<String>>,
    summary: Vec<SummaryLine>,
    footer: &'a str,
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// `---|---:|...`, the label column left-aligned and the rest right-aligned
    fn separator(column_count: usize) -> String {
        (0..column_count)
            .map(|i| if i == 0 { "---" } else { "---:" })
            .collect::<Vec<_>>()
            .join("|")
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, payload: &ReportPayload, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(payload)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, payload: &ReportPayload) -> Result<String, Box<dyn Error>> {
        let columns = payload.kind.columns();
        let template = MarkdownTemplate {
            title: &payload.title,
            subtitle: &payload.subtitle,
            scope: payload.scope.as_deref().unwrap_or(""),
            columns,
            separator: Self::separator(columns.len()),
            rows: payload.table_cells(),
            summary: payload.summary_lines(),
            footer: GENERATED_BY,
        };
        Ok(template.render()?)
    }
}
