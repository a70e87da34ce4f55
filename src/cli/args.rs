//! CLI argument definitions for `gradepoint`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gradepoint::config::ConfigOverrides;
use gradepoint::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// A `KEY=VALUE` pair from the command line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// Course code or semester key
    pub key: String,
    /// Grade label or GPA text (may be empty)
    pub value: String,
}

/// Split on the last `=`, so course codes may contain spaces but not `=`
pub fn parse_assignment(raw: &str) -> Result<Assignment, String> {
    let (key, value) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    Ok(Assignment {
        key: key.to_string(),
        value: value.trim().to_string(),
    })
}

/// Report export options shared by `sgpa` and `cgpa`
#[derive(Debug, clap::Args)]
pub struct ExportArgs {
    /// Export a report: text (txt), markdown (md), html, or pdf
    #[arg(short, long, value_name = "FORMAT")]
    pub export: Option<String>,

    /// Output file path (defaults to `<reports_dir>/SGPA_Report.<ext>` or `CGPA_Report.<ext>`)
    #[arg(short, long, value_name = "FILE", requires = "export")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`, `reports_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (asks for confirmation unless `--yes`).
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show the credit schedule and grade scale.
    ///
    /// Without a SEMESTER, lists every semester with its credit total.
    Catalog {
        /// Semester key to list courses for (e.g., `1.1`)
        #[arg(value_name = "SEMESTER")]
        semester: Option<String>,
    },
    /// Compute the semester GPA from letter grades.
    Sgpa {
        /// Semester key (e.g., `1.1`)
        #[arg(short, long, value_name = "KEY")]
        semester: String,

        /// Grade for a course, e.g. `--grade "EEE 1101=A+"` (repeatable)
        #[arg(short, long = "grade", value_name = "CODE=GRADE", value_parser = parse_assignment)]
        grades: Vec<Assignment>,

        #[command(flatten)]
        export: ExportArgs,
    },
    /// Compute the cumulative GPA from semester GPAs.
    Cgpa {
        /// GPA for a semester, e.g. `--gpa 1.1=3.75` (repeatable)
        #[arg(short, long = "gpa", value_name = "KEY=VALUE", value_parser = parse_assignment)]
        gpas: Vec<Assignment>,

        #[command(flatten)]
        export: ExportArgs,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "gradepoint",
    about = "Semester and cumulative GPA calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Catalog TOML file to use instead of the configured or built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override the department line printed under report titles
    #[arg(long, value_name = "NAME")]
    pub department: Option<String>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            catalog: self.catalog.as_ref().map(path_string),
            reports_dir: self.reports_dir.as_ref().map(path_string),
            department: self.department.clone(),
        }
    }
}
