//! Catalog loading: the credit schedule and grade scale as one read-only unit

pub mod toml_parser;

use crate::core::models::{CreditSchedule, GradeScale};
use std::error::Error;
use std::path::Path;

pub use toml_parser::{parse_catalog_str, parse_catalog_toml};

/// Embedded default catalog
const BUILTIN_CATALOG: &str = include_str!("../../../assets/DefaultCatalog.toml");

/// Static configuration consumed by the aggregators
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Semesters, courses and credit hours
    pub schedule: CreditSchedule,
    /// Grade labels and point values
    pub scale: GradeScale,
}

impl Catalog {
    /// The compiled-in catalog
    ///
    /// # Panics
    /// Panics if the embedded catalog is invalid, which indicates a broken build.
    #[must_use]
    pub fn builtin() -> Self {
        parse_catalog_str(BUILTIN_CATALOG).expect("Failed to parse compiled-in catalog")
    }

    /// Load a catalog from `path`, or the built-in one when `path` is `None`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(path) => {
                let catalog = parse_catalog_toml(path)
                    .map_err(|e| format!("Failed to load catalog {}: {e}", path.display()))?;
                crate::info!(
                    "Catalog loaded from {} ({} semesters)",
                    path.display(),
                    catalog.schedule.len()
                );
                Ok(catalog)
            }
            None => {
                let catalog = Self::builtin();
                crate::debug!(
                    "Using built-in catalog ({} semesters)",
                    catalog.schedule.len()
                );
                Ok(catalog)
            }
        }
    }
}
