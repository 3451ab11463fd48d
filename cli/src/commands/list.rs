use std::io::{self, Write};

use indicators_common::config::Config;
use indicators_core::loader;
use tracing::debug;

use crate::terminal::print::Printer;

/// Prints every loaded country in dataset order, one per line.
pub fn list<W: Write, E: Write>(
    cfg: &Config,
    printer: &mut Printer<W>,
    err: &mut E,
) -> io::Result<()> {
    let dataset = loader::load_or_report(&cfg.input, err);
    debug!("Listing {} countries", dataset.len());

    for record in &dataset {
        printer.line(record)?;
    }
    printer.flush()
}
