//! PDF report generator via HTML-to-PDF conversion
//!
//! Renders the HTML report to a temporary file and prints it to PDF with
//! headless Chrome/Chromium, or with a converter named in the configuration.

use super::html::HtmlReporter;
use crate::core::report::{ReportGenerator, ReportPayload};
use std::error::Error;
use std::path::Path;
use std::process::Command;

/// PDF report generator using HTML-to-PDF conversion
pub struct PdfReporter {
    /// Optional custom PDF converter command
    converter: Option<String>,
}

impl PdfReporter {
    /// Create a new PDF reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { converter: None }
    }

    /// Create a PDF reporter with a custom converter; an empty name means auto-detect
    #[must_use]
    pub fn with_converter(converter: &str) -> Self {
        Self {
            converter: (!converter.trim().is_empty()).then(|| converter.trim().to_owned()),
        }
    }

    /// Detect available Chrome/Chromium browser
    fn detect_chrome() -> Option<String> {
        // Try common Chrome/Chromium executables in order of preference
        let candidates = [
            "google-chrome",
            "chrome",
            "chromium",
            "chromium-browser",
            "google-chrome-stable",
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome", // macOS
            "C:\\Program Files\\Google\\Chrome\\Application\\chrome.exe",   // Windows
            "C:\\Program Files (x86)\\Google\\Chrome\\Application\\chrome.exe",
        ];

        for candidate in candidates {
            if let Ok(output) = Command::new(candidate).arg("--version").output() {
                if output.status.success() {
                    return Some(candidate.to_owned());
                }
            }
        }

        None
    }

    /// Generate PDF from HTML file using Chrome/Chromium
    fn html_to_pdf_chrome(
        chrome_cmd: &str,
        html_path: &Path,
        pdf_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        // Suppress DBus warnings by redirecting stderr to /dev/null
        use std::process::Stdio;

        let status = Command::new(chrome_cmd)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--run-all-compositor-stages-before-draw")
            .arg("--no-pdf-header-footer")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(format!("file://{}", html_path.canonicalize()?.display()))
            .stderr(Stdio::null())
            .stdout(Stdio::null())
            .status()?;

        if !status.success() {
            return Err("Chrome PDF conversion failed".into());
        }

        Ok(())
    }

    /// Convert HTML report to PDF
    fn convert_html_to_pdf(&self, html_path: &Path, pdf_path: &Path) -> Result<(), Box<dyn Error>> {
        // Use custom converter if provided
        if let Some(converter) = &self.converter {
            return Self::html_to_pdf_chrome(converter, html_path, pdf_path);
        }

        // Try to auto-detect Chrome/Chromium
        if let Some(chrome) = Self::detect_chrome() {
            return Self::html_to_pdf_chrome(&chrome, html_path, pdf_path);
        }

        // No converter available
        Err("PDF conversion failed: Chrome/Chromium not found.\n\
            \n\
            To generate PDF reports, install Chrome or Chromium:\n\
            \n\
            • Ubuntu/Debian:  sudo apt install chromium-browser\n\
            • Fedora/RHEL:    sudo dnf install chromium\n\
            • macOS:          brew install --cask google-chrome\n\
            • Windows:        Download from https://www.google.com/chrome/\n\
            \n\
            Alternatively, point the configuration at a browser binary:\n\
              gradepoint config set pdf-converter /path/to/chrome\n\
            "
        .into())
    }
}

impl Default for PdfReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for PdfReporter {
    /// Generate PDF report via HTML-to-PDF conversion
    fn generate(&self, payload: &ReportPayload, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let html_path = std::env::temp_dir().join(format!(
            "gradepoint_{}_{}.html",
            payload.kind.file_stem(),
            std::process::id()
        ));
        HtmlReporter::new().generate(payload, &html_path)?;

        let converted = self.convert_html_to_pdf(&html_path, output_path);
        let _ = std::fs::remove_file(&html_path);
        converted
    }

    /// PDF is binary; the textual form is the HTML it is printed from
    fn render(&self, payload: &ReportPayload) -> Result<String, Box<dyn Error>> {
        HtmlReporter::new().render(payload)
    }
}
