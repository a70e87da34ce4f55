//! Integration tests for logger behavior.

use gradepoint::logger::{init_file_logging, set_level, set_level_from_str, Level};
use gradepoint::{debug, error, info, warn};
use std::fs;
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_prefixed_lines() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("logs").join("gradepoint.log");
    assert!(init_file_logging(&path));

    error!("catalog missing");

    let content = fs::read_to_string(&path).expect("log file readable");
    assert!(content.contains("[ERROR] catalog missing"));
}
