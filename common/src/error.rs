//! # Error Types
//!
//! [`LoadError`] is the only failure a load reports to the user.
//! [`RowError`] explains why a single CSV row was dropped; those are never
//! shown on the user-facing streams.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found - {} ({source})", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("expected at least 16 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("{column} is not a number: {value:?}")]
    InvalidNumber { column: &'static str, value: String },

    #[error("{column} must be positive, got {value}")]
    NonPositive { column: &'static str, value: f64 },

    #[error("country name is empty")]
    EmptyCountry,

    #[error("{country} already loaded")]
    Duplicate { country: String },
}
