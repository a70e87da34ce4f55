//! Command-line interface entry point for `gradepoint`

mod args;
mod commands;

use args::{Cli, Command, ExportArgs};
use clap::Parser;
use gradepoint::config::Config;
use gradepoint::core::catalog::Catalog;
use gradepoint::core::report::{ReportKind, ReportPayload};
use gradepoint::error;
use gradepoint::info;
use gradepoint::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup; CLI overrides apply to this run only,
    // so `config` subcommands edit the stored values
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path =
        (!config.logging.file.is_empty()).then(|| PathBuf::from(&config.logging.file));
    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
            ExitCode::SUCCESS
        }
        Command::Catalog { semester } => {
            let Some(catalog) = load_catalog(&config) else {
                return ExitCode::FAILURE;
            };
            report_outcome(commands::catalog::run(&catalog, semester.as_deref()))
        }
        Command::Sgpa {
            semester,
            grades,
            export,
        } => {
            let Some(catalog) = load_catalog(&config) else {
                return ExitCode::FAILURE;
            };
            match commands::sgpa::run(&catalog, &semester, &grades, &config) {
                Ok(payload) => finish(payload.as_ref(), ReportKind::Sgpa, &export, &config),
                Err(err) => report_outcome(Err(err)),
            }
        }
        Command::Cgpa { gpas, export } => {
            let Some(catalog) = load_catalog(&config) else {
                return ExitCode::FAILURE;
            };
            let payload = commands::cgpa::run(&catalog, &gpas, &config);
            finish(payload.as_ref(), ReportKind::Cgpa, &export, &config)
        }
    }
}

/// Load the configured catalog, or the built-in one when none is configured
fn load_catalog(config: &Config) -> Option<Catalog> {
    let path = (!config.paths.catalog.is_empty()).then(|| Path::new(&config.paths.catalog));
    match Catalog::load(path) {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            error!("{e}");
            eprintln!("✗ {e}");
            None
        }
    }
}

/// Export when requested; the screen summary has already been printed
fn finish(
    payload: Option<&ReportPayload>,
    kind: ReportKind,
    export: &ExportArgs,
    config: &Config,
) -> ExitCode {
    let Some(format) = export.export.as_deref() else {
        return ExitCode::SUCCESS;
    };
    if commands::export::run(payload, kind, format, export.output.as_deref(), config) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn report_outcome(result: Result<(), String>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
