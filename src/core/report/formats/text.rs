//! Plain text report generator
//!
//! Lays the table out in fixed-width columns; the CLI prints this view to
//! the terminal after every calculation.

use crate::core::report::{ReportGenerator, ReportPayload, GENERATED_BY};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Fixed-width text reporter
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Column widths: the widest of heading and cells
    fn column_widths(columns: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
        columns
            .iter()
            .enumerate()
            .map(|(i, heading)| {
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .fold(heading.chars().count(), usize::max)
            })
            .collect()
    }

    /// First column left-aligned, numbers right-aligned
    fn write_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| {
                if i == 0 {
                    format!("{:<width$}", cell.as_ref())
                } else {
                    format!("{:>width$}", cell.as_ref())
                }
            })
            .collect();
        let _ = writeln!(out, "{}", line.join("  ").trim_end());
    }

    fn render_payload(payload: &ReportPayload) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", payload.title);
        if !payload.subtitle.is_empty() {
            let _ = writeln!(out, "{}", payload.subtitle);
        }
        if let Some(scope) = &payload.scope {
            let _ = writeln!(out, "{scope}");
        }
        out.push('\n');

        let columns = payload.kind.columns();
        let rows = payload.table_cells();
        let widths = Self::column_widths(columns, &rows);
        Self::write_row(&mut out, columns, &widths);
        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        let _ = writeln!(out, "{}", "-".repeat(rule_width));
        for row in &rows {
            Self::write_row(&mut out, row, &widths);
        }
        out.push('\n');

        let lines = payload.summary_lines();
        let label_width = lines.iter().map(|l| l.label.len()).max().unwrap_or(0);
        for line in &lines {
            let _ = writeln!(out, "{:<label_width$}  {}", line.label, line.value);
        }
        out.push('\n');
        let _ = writeln!(out, "{GENERATED_BY}");
        out
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, payload: &ReportPayload, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(payload)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, payload: &ReportPayload) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_payload(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::AggregateResult;
    use crate::core::report::{ReportKind, ReportRow};

    #[test]
    fn renders_rows_and_summary() {
        let rows = vec![ReportRow {
            label: "Semester 1.1".to_string(),
            grade: None,
            credit_weight: 20.0,
            point_value: 3.5,
            weighted_points: 70.0,
        }];
        let result = AggregateResult::from_totals(70.0, 20.0, 20.0);
        let payload = ReportPayload::assemble(ReportKind::Cgpa, &result, rows)
            .expect("payload")
            .with_subtitle("Dept");

        let text = TextReporter::new().render(&payload).expect("render");
        assert!(text.starts_with("Overall CGPA Report\nDept\n"));
        assert!(text.contains("Semester 1.1"));
        assert!(text.contains("3.500"));
        assert!(text.contains("Cumulative GPA (CGPA)"));
        assert!(text.trim_end().ends_with(GENERATED_BY));
    }
}
