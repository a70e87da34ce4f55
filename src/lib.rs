//! Library for `gradepoint`
//! Computes semester (SGPA) and cumulative (CGPA) grade point averages from a
//! credit schedule and grade scale, and renders the results as reports.

pub mod core;
pub mod logger;

pub use core::{config, get_version};
