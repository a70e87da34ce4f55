//! Core grade point aggregation: catalog, validation, aggregators, session and reports

pub mod aggregate;
pub mod catalog;
pub mod cgpa;
pub mod config;
pub mod models;
pub mod report;
pub mod session;
pub mod sgpa;
pub mod validation;

/// Returns the current version of the `gradepoint` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
