//! Report export shared by the `sgpa` and `cgpa` commands
//!
//! Writes an assembled payload in the requested format, either to an explicit
//! path or to `<reports_dir>/<SGPA|CGPA>_Report.<ext>`.

use gradepoint::config::Config;
use gradepoint::core::report::{
    HtmlReporter, MarkdownReporter, PdfReporter, ReportFormat, ReportGenerator, ReportKind,
    ReportPayload, TextReporter,
};
use gradepoint::{error, info, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run an export and report the outcome.
///
/// # Arguments
/// * `payload` - Assembled report, `None` when nothing was attempted
/// * `kind` - Which report is being exported (for the default file name)
/// * `format_str` - Report format (text, markdown, html, pdf)
/// * `output_file` - Optional explicit output path
/// * `config` - Configuration holding `reports_dir` and the PDF converter
///
/// Returns `true` when the file was written.
pub fn run(
    payload: Option<&ReportPayload>,
    kind: ReportKind,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> bool {
    let Some(payload) = payload else {
        warn!("{} not exported: no credit attempted", kind.title());
        eprintln!(
            "✗ Nothing to export: no credit attempted for the {}",
            kind.title()
        );
        return false;
    };

    match export_report(payload, kind, format_str, output_file, config) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            info!("{} exported to: {}", kind.title(), path.display());
            true
        }
        Err(err) => {
            error!("{} export failed: {err}", kind.title());
            eprintln!("{err}");
            false
        }
    }
}

fn export_report(
    payload: &ReportPayload,
    kind: ReportKind,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: text, markdown, html, or pdf"))?;

    let output_path = resolve_output_path(kind, format, output_file, config)?;
    write_report(payload, format, &output_path, config)?;
    Ok(output_path)
}

/// Explicit path wins; otherwise the default file name inside `reports_dir`
fn resolve_output_path(
    kind: ReportKind,
    format: ReportFormat,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(output) = output_file {
        return Ok(output.to_path_buf());
    }

    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;
    Ok(reports_dir.join(kind.default_file_name(format)))
}

/// Write the report to a file in the specified format
fn write_report(
    payload: &ReportPayload,
    format: ReportFormat,
    output_path: &Path,
    config: &Config,
) -> Result<(), String> {
    let (reporter, label): (Box<dyn ReportGenerator>, &str) = match format {
        ReportFormat::Text => (Box::new(TextReporter::new()), "text"),
        ReportFormat::Markdown => (Box::new(MarkdownReporter::new()), "Markdown"),
        ReportFormat::Html => (Box::new(HtmlReporter::new()), "HTML"),
        ReportFormat::Pdf => (
            Box::new(PdfReporter::with_converter(&config.report.pdf_converter)),
            "PDF",
        ),
    };

    reporter
        .generate(payload, output_path)
        .map_err(|e| format!("✗ Failed to generate {label} report: {e}"))
}
