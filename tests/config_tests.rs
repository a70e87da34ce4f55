//! Integration tests for configuration management

use gradepoint::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert!(
        config.paths.catalog.is_empty(),
        "Default catalog should select the built-in one"
    );
    assert!(!config.report.department.is_empty());
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
catalog = "/data/catalog.toml"
reports_dir = "./reports"

[report]
department = "Department of Physics"
pdf_converter = "chromium"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.catalog, "/data/catalog.toml");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.report.department, "Department of Physics");
    assert_eq!(config.report.pdf_converter, "chromium");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.catalog, "");
    assert_eq!(config.report.department, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GRADEPOINT/gradepoint.log"

[paths]
catalog = "$GRADEPOINT/catalog.toml"
reports_dir = "$GRADEPOINT/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    for value in [
        &config.logging.file,
        &config.paths.catalog,
        &config.paths.reports_dir,
    ] {
        assert!(value.contains("gradepoint"));
        assert!(!value.contains("$GRADEPOINT"));
    }
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").as_deref(), Some("debug"));

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").as_deref(), Some("true"));
    assert!(config.logging.verbose);
    assert!(config.set("verbose", "sometimes").is_err());

    config
        .set("pdf-converter", "/usr/bin/chromium")
        .expect("Failed to set converter");
    assert_eq!(config.report.pdf_converter, "/usr/bin/chromium");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config
        .set("department", "Somewhere Else")
        .expect("Failed to set department");
    config
        .unset("department", &defaults)
        .expect("Failed to unset department");
    assert_eq!(config.report.department, defaults.report.department);

    assert!(config.unset("unknown_key", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config
        .set("catalog", "/data/catalog.toml")
        .expect("Failed to set catalog");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.paths.catalog, "/data/catalog.toml");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        catalog: Some("./catalog.toml".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
        department: Some("Department of Mathematics".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.catalog, "./catalog.toml");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
    assert_eq!(config.report.department, "Department of Mathematics");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(config.report.department, defaults.report.department);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[report]"));

    assert!(display_str.contains("level"));
    assert!(display_str.contains("reports_dir"));
    assert!(display_str.contains("pdf_converter"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
catalog = ""
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(config.report.department, defaults.report.department);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[paths]
reports_dir = "/my/reports"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.reports_dir, "/my/reports");
}

#[test]
fn test_get_gradepoint_dir() {
    let dir = Config::get_gradepoint_dir();

    assert!(dir.to_string_lossy().contains("gradepoint"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
