//! # Indicators Common
//!
//! Types shared by every crate of the workspace.
//!
//! * **[`record`]**: the validated per-country [`record::Record`].
//! * **[`dataset`]**: the ordered, deduplicated record store.
//! * **[`config`]**: run configuration built by the CLI.
//! * **[`error`]**: load and row rejection errors.

pub mod config;
pub mod dataset;
pub mod error;
pub mod record;
