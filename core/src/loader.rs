//! # CSV Loader
//!
//! Turns the World Indicators CSV export into a [`Dataset`].
//!
//! Rows are split on every literal comma. Quoted fields are **not** supported:
//! a comma inside a country name shifts every later column, and the row is
//! then usually rejected by the numeric checks.
//!
//! Rejected rows never reach the user-facing streams. Their reason is traced at
//! `DEBUG` level.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use indicators_common::dataset::Dataset;
use indicators_common::error::{LoadError, RowError};
use indicators_common::record::Record;
use tracing::{debug, info, trace, warn};

/// Minimum number of fields a data row must have.
pub const MIN_FIELDS: usize = 16;

const COUNTRY_COLUMN: usize = 0;
const BIRTH_RATE_COLUMN: usize = 2;
const LIFE_EXPECTANCY_COLUMN: usize = 15;

/// Opens `path` and loads every valid, first-seen country from it.
pub fn load_countries(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Reading {}", path.display());
    Ok(read_countries(BufReader::new(file)))
}

/// Like [`load_countries`], but an unreadable file is reported as a single
/// `Error: ...` line on `err` and yields an empty dataset.
pub fn load_or_report<W: Write>(path: impl AsRef<Path>, err: &mut W) -> Dataset {
    match load_countries(path) {
        Ok(dataset) => dataset,
        Err(e) => {
            if let Err(write_err) = writeln!(err, "Error: {e}") {
                warn!("Could not report load failure ({e}): {write_err}");
            }
            Dataset::new()
        }
    }
}

/// Reads a header line followed by data rows.
///
/// Reading stops at the first I/O error (for example invalid UTF-8); rows
/// accepted before it are kept.
pub fn read_countries<R: BufRead>(reader: R) -> Dataset {
    let mut dataset = Dataset::new();
    let mut skipped: usize = 0;

    for (idx, line) in reader.lines().enumerate().skip(1) {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                debug!("Stopped reading at line {}: {e}", idx + 1);
                break;
            }
        };

        let outcome = parse_row(&line).and_then(|record| {
            let country = record.country().to_string();
            if dataset.push(record) {
                Ok(())
            } else {
                Err(RowError::Duplicate { country })
            }
        });

        if let Err(reason) = outcome {
            skipped += 1;
            debug!("Skipping line {}: {reason}", idx + 1);
        }
    }

    info!("Loaded {} countries, skipped {} rows", dataset.len(), skipped);
    dataset
}

/// Parses and validates one data row.
///
/// Does not check for duplicates; that is the job of the [`Dataset`].
pub fn parse_row(line: &str) -> Result<Record, RowError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return Err(RowError::TooFewFields { found: fields.len() });
    }

    let country = fields[COUNTRY_COLUMN];
    let birth_rate = parse_number(fields[BIRTH_RATE_COLUMN], "birth rate")?;
    let life_expectancy = parse_number(fields[LIFE_EXPECTANCY_COLUMN], "life expectancy")?;
    trace!(country, birth_rate, life_expectancy, "parsed row");

    Record::new(country, birth_rate, life_expectancy)
}

/// A blank field reads as `0.0`; anything else must be a finite `f64`.
///
/// `inf` and `nan` spellings are rejected like any other garbage.
fn parse_number(field: &str, column: &'static str) -> Result<f64, RowError> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(0.0);
    }
    match field.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RowError::InvalidNumber {
            column,
            value: field.to_string(),
        }),
    }
}
