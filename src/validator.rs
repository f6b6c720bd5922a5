//! Lexical checks on Clarity contract source.
//!
//! No parsing happens here: each marker is a literal, case-sensitive
//! substring that has to appear somewhere in the file.

use crate::logging;
use crate::{MockError, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Where the contract source lives, relative to the project root.
pub const DEFAULT_SOURCE_PATH: &str = "contracts/property-verification.clar";

/// Markers every `property-verification` contract must contain.
pub const DEFAULT_MARKERS: [&str; 3] = [
    "define-map properties",
    "define-public (register-property",
    "define-public (verify-property",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.missing.is_empty()
    }

    /// First missing marker in declaration order.
    pub fn first_missing(&self) -> Option<&str> {
        self.missing.first().map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct SourceValidator {
    markers: Vec<String>,
}

impl Default for SourceValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceValidator {
    pub fn new() -> Self {
        Self::with_markers(DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect())
    }

    pub fn with_markers(markers: Vec<String>) -> Self {
        Self { markers }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Report which markers `source` contains. Never fails.
    pub fn check(&self, source: &str) -> ValidationReport {
        let (found, missing): (Vec<String>, Vec<String>) = self
            .markers
            .iter()
            .cloned()
            .partition(|marker| source.contains(marker.as_str()));
        ValidationReport { found, missing }
    }

    /// Read `path` and report which markers it contains.
    ///
    /// Only an unreadable file is an error here.
    pub fn read_report(&self, path: &Path) -> Result<ValidationReport> {
        logging::log_loading_source(&path.to_string_lossy());
        let source = fs::read_to_string(path).map_err(|e| {
            MockError::FileError(format!(
                "Failed to read contract source {:?}: {}",
                path, e
            ))
        })?;

        let report = self.check(&source);
        for marker in &report.missing {
            logging::log_marker_missing(marker);
        }
        logging::log_validation_complete(report.found.len(), report.missing.len());
        Ok(report)
    }

    /// Read `path` and require every marker to be present.
    ///
    /// An unreadable file is an error; so is the first missing marker.
    pub fn validate_source(&self, path: &Path) -> Result<ValidationReport> {
        let report = self.read_report(path)?;
        if let Some(marker) = report.first_missing() {
            return Err(MockError::MissingMarker(marker.to_string()).into());
        }
        Ok(report)
    }
}

/// Validate `path` against the default markers.
pub fn validate_source(path: impl AsRef<Path>) -> Result<ValidationReport> {
    SourceValidator::new().validate_source(path.as_ref())
}
