//! Error types for the planner core.
//!
//! Only the data-loading boundary (catalog and requirements files) returns
//! errors. The scheduling and progress computations themselves treat
//! malformed input as a recognized state (unscheduled/TBA, zero-credit) and
//! never fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading planner data files.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Reading a catalog or requirements file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON data file did not match the expected shape
    #[error("failed to parse {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A catalog CSV export did not match the expected columns
    #[error("failed to parse catalog {path}: {source}")]
    MalformedCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The requirements config has no plan for the requested major
    #[error("no requirement plan for major {major:?}")]
    UnknownMajor { major: String },
}

impl PlannerError {
    /// Returns true if this error means a data file was readable but
    /// structurally invalid (as opposed to missing or unreadable).
    pub fn is_malformed_data(&self) -> bool {
        matches!(
            self,
            PlannerError::MalformedJson { .. } | PlannerError::MalformedCsv { .. }
        )
    }
}
