//! # Indicators Core
//!
//! The analysis pipeline: [`loader`] reads the CSV into a deduplicated
//! dataset, [`analysis`] computes the statistics shown in the report.

pub mod analysis;
pub mod loader;
