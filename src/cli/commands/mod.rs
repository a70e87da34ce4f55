//! CLI command handlers for `gradepoint`.
//!
//! Each subcommand is implemented in its own submodule; `export` holds the
//! report writing shared by `sgpa` and `cgpa`.

pub mod catalog;
pub mod cgpa;
pub mod config;
pub mod export;
pub mod sgpa;
