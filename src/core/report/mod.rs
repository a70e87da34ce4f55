//! Report generation for SGPA and CGPA results
//!
//! The aggregators produce totals; this module turns them into a
//! [`ReportPayload`] (ordered rows plus a summary block) and hands the
//! payload to a [`ReportGenerator`] for a specific output format.

pub mod assembly;
pub mod formats;

use crate::core::aggregate::{AggregateResult, AverageKind, PerformanceBand};
use std::error::Error;
use std::path::Path;

pub use assembly::{assemble_cgpa_report, assemble_sgpa_report};
pub use formats::{HtmlReporter, MarkdownReporter, PdfReporter, ReportFormat, TextReporter};

/// Footer line printed at the bottom of every report
pub const GENERATED_BY: &str = "Generated by gradepoint";

/// Which calculation a report summarizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Semester GPA for one semester's courses
    Sgpa,
    /// Cumulative GPA over entered semester GPAs
    Cgpa,
}

impl ReportKind {
    /// Report title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Sgpa => "Semester GPA Report",
            Self::Cgpa => "Overall CGPA Report",
        }
    }

    /// Label of the headline average
    #[must_use]
    pub const fn average_label(self) -> &'static str {
        match self {
            Self::Sgpa => "Semester GPA (SGPA)",
            Self::Cgpa => "Cumulative GPA (CGPA)",
        }
    }

    /// Default file name without extension
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Sgpa => "SGPA_Report",
            Self::Cgpa => "CGPA_Report",
        }
    }

    /// Default file name for `format`, e.g. `CGPA_Report.pdf`
    #[must_use]
    pub fn default_file_name(self, format: ReportFormat) -> String {
        format!("{}.{}", self.file_stem(), format.extension())
    }

    /// Table column headings
    #[must_use]
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Sgpa => &["Course", "Grade", "Credits", "Grade Point", "Points Secured"],
            Self::Cgpa => &["Semester", "Semester Credits", "GPA", "Points Secured"],
        }
    }

    /// Average classification used for this kind
    #[must_use]
    pub const fn average_kind(self) -> AverageKind {
        match self {
            Self::Sgpa => AverageKind::Semester,
            Self::Cgpa => AverageKind::Cumulative,
        }
    }
}

/// One table row: a graded course or an entered semester
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// Row label ("EEE 1101 - Electrical Circuits I", "Semester 1.1")
    pub label: String,
    /// Grade label for course rows
    pub grade: Option<String>,
    /// Credit hours the row is weighted by
    pub credit_weight: f64,
    /// Grade point or semester GPA
    pub point_value: f64,
    /// `credit_weight × point_value`
    pub weighted_points: f64,
}

impl ReportRow {
    /// Cells in the order of [`ReportKind::columns`]
    #[must_use]
    pub fn cells(&self, kind: ReportKind) -> Vec<String> {
        match kind {
            ReportKind::Sgpa => vec![
                self.label.clone(),
                self.grade.clone().unwrap_or_default(),
                format_credits(self.credit_weight),
                format!("{:.2}", self.point_value),
                format_points(self.weighted_points),
            ],
            ReportKind::Cgpa => vec![
                self.label.clone(),
                format_credits(self.credit_weight),
                format_average(self.point_value),
                format_points(self.weighted_points),
            ],
        }
    }
}

/// Summary block under the table
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    /// SGPA or CGPA
    pub average_value: f64,
    /// Credit hours that counted
    pub total_credits_attempted: f64,
    /// Weighted point total
    pub total_points_secured: f64,
    /// Attempted credit excluding failing grades
    pub secured_credits: f64,
    /// Credit hours offered in the semester (SGPA only)
    pub offered_credits: Option<f64>,
    /// Display band of the average
    pub band: PerformanceBand,
}

/// A labelled summary value, formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    /// Label
    pub label: &'static str,
    /// Formatted value
    pub value: String,
}

/// Everything a renderer needs to lay out a report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPayload {
    /// Report kind
    pub kind: ReportKind,
    /// Title line
    pub title: String,
    /// Subtitle line (department)
    pub subtitle: String,
    /// Scope line, e.g. "Semester 1.1"
    pub scope: Option<String>,
    /// Rows in schedule declaration order
    pub rows: Vec<ReportRow>,
    /// Summary block
    pub summary: ReportSummary,
}

impl ReportPayload {
    /// Assemble a payload from aggregate totals and the accepted rows.
    ///
    /// Returns `None` when nothing was attempted: there is nothing to report.
    #[must_use]
    pub fn assemble(kind: ReportKind, result: &AggregateResult, rows: Vec<ReportRow>) -> Option<Self> {
        if !result.has_attempted_credit() {
            return None;
        }
        Some(Self {
            kind,
            title: kind.title().to_string(),
            subtitle: String::new(),
            scope: None,
            rows,
            summary: ReportSummary {
                average_value: result.average_value,
                total_credits_attempted: result.attempted_credit_total,
                total_points_secured: result.weighted_point_total,
                secured_credits: result.secured_credit_total,
                offered_credits: None,
                band: PerformanceBand::classify(kind.average_kind(), result.average_value),
            },
        })
    }

    /// Set the subtitle line
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        subtitle.clone_into(&mut self.subtitle);
        self
    }

    /// Set the scope line
    #[must_use]
    pub fn with_scope(mut self, scope: String) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Record the offered credit of the semester
    #[must_use]
    pub const fn with_offered_credits(mut self, offered: f64) -> Self {
        self.summary.offered_credits = Some(offered);
        self
    }

    /// Table rows as display cells
    #[must_use]
    pub fn table_cells(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|row| row.cells(self.kind)).collect()
    }

    /// Formatted summary lines, headline average first
    #[must_use]
    pub fn summary_lines(&self) -> Vec<SummaryLine> {
        let s = &self.summary;
        let mut lines = vec![SummaryLine {
            label: self.kind.average_label(),
            value: format_average(s.average_value),
        }];
        match self.kind {
            ReportKind::Sgpa => {
                if let Some(offered) = s.offered_credits {
                    lines.push(SummaryLine {
                        label: "Credits Offered",
                        value: format_credits(offered),
                    });
                }
                lines.push(SummaryLine {
                    label: "Credits Attempted",
                    value: format_credits(s.total_credits_attempted),
                });
                lines.push(SummaryLine {
                    label: "Credits Secured",
                    value: format_credits(s.secured_credits),
                });
            }
            ReportKind::Cgpa => lines.push(SummaryLine {
                label: "Total Credits Completed",
                value: format_credits(s.total_credits_attempted),
            }),
        }
        lines.push(SummaryLine {
            label: "Total Points Secured",
            value: format_points(s.total_points_secured),
        });
        lines
    }
}

/// Averages print with three decimals
#[must_use]
pub fn format_average(value: f64) -> String {
    format!("{value:.3}")
}

/// Credit hours print with two decimals
#[must_use]
pub fn format_credits(value: f64) -> String {
    format!("{value:.2}")
}

/// Point totals print with two decimals
#[must_use]
pub fn format_points(value: f64) -> String {
    format!("{value:.2}")
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, payload: &ReportPayload, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, payload: &ReportPayload) -> Result<String, Box<dyn Error>>;
}
