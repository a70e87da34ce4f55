//! TOML parser for catalog data

use super::Catalog;
use crate::core::models::{Course, CreditSchedule, Grade, GradeScale, Semester};
use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Raw `[grade_scale]` table
#[derive(Debug, Deserialize)]
struct RawGradeScale {
    not_attempted: String,
    failing: String,
    grades: Vec<Grade>,
}

/// Raw `[[semesters]]` entry
#[derive(Debug, Deserialize)]
struct RawSemester {
    key: String,
    #[serde(default)]
    courses: Vec<Course>,
}

/// Raw catalog document
#[derive(Debug, Deserialize)]
struct RawCatalog {
    grade_scale: RawGradeScale,
    #[serde(default)]
    semesters: Vec<RawSemester>,
}

/// Parse a catalog TOML file
///
/// # Arguments
/// * `path` - Path to the TOML file
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid TOML, or
/// describes an inconsistent catalog (see [`parse_catalog_str`]).
pub fn parse_catalog_toml<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_catalog_str(&content)
}

/// Parse catalog TOML text
///
/// # Errors
/// Returns an error if the text is not valid TOML, the grade scale is
/// inconsistent, a semester key repeats, a course code repeats within a
/// semester, or a course has non-positive credit hours.
pub fn parse_catalog_str(content: &str) -> Result<Catalog, Box<dyn Error>> {
    let raw: RawCatalog = toml::from_str(content)?;

    let scale = GradeScale::new(
        raw.grade_scale.not_attempted,
        raw.grade_scale.failing,
        raw.grade_scale.grades,
    )?;

    let mut schedule = CreditSchedule::new();
    for raw_semester in raw.semesters {
        let semester = build_semester(raw_semester)?;
        let key = semester.key.clone();
        if !schedule.add_semester(semester) {
            return Err(format!("Semester '{key}' is defined twice").into());
        }
    }

    Ok(Catalog { schedule, scale })
}

fn build_semester(raw: RawSemester) -> Result<Semester, String> {
    if raw.key.trim().is_empty() {
        return Err("Semester key must not be empty".to_string());
    }

    let mut semester = Semester::new(raw.key);
    for course in raw.courses {
        if !course.credit_hours.is_finite() || course.credit_hours <= 0.0 {
            return Err(format!(
                "Course '{}' in semester {} has non-positive credit hours ({})",
                course.code, semester.key, course.credit_hours
            ));
        }
        let code = course.code.clone();
        if !semester.add_course(course) {
            return Err(format!(
                "Course '{code}' appears twice in semester {}",
                semester.key
            ));
        }
    }
    Ok(semester)
}
