use std::io::{self, Write};

use indicators_common::config::Config;
use indicators_core::analysis::Summary;
use indicators_core::loader;
use tracing::info_span;

use crate::terminal::print::Printer;

pub fn analyze<W: Write, E: Write>(
    cfg: &Config,
    printer: &mut Printer<W>,
    err: &mut E,
) -> io::Result<()> {
    let span = info_span!("analyze", input = %cfg.input.display());
    let _guard = span.enter();

    let dataset = loader::load_or_report(&cfg.input, err);
    let summary = Summary::compute(dataset.records(), cfg.top_n);

    print_report(&summary, printer)?;
    printer.flush()
}

pub fn print_report<W: Write>(summary: &Summary, printer: &mut Printer<W>) -> io::Result<()> {
    printer.header("World Indicators 2000 Data Analysis")?;
    printer.blank()?;
    printer.line(format_args!("Total countries loaded: {}", summary.total))?;
    printer.blank()?;

    printer.line(format_args!("Average Birth Rate: {:.4}", summary.average_birth_rate))?;
    printer.blank()?;

    printer.line(format_args!(
        "Countries with above-average birth rates: {} ({:.1}%)",
        summary.above_average, summary.above_average_pct
    ))?;
    printer.blank()?;

    print_ranking(summary, printer)?;
    printer.blank()?;

    print_findings(summary, printer)
}

fn print_ranking<W: Write>(summary: &Summary, printer: &mut Printer<W>) -> io::Result<()> {
    printer.line(format_args!("Top {} Countries by Birth Rate:", summary.requested_top))?;
    for (idx, record) in summary.top.iter().enumerate() {
        printer.ranked(
            idx + 1,
            record.country(),
            format_args!("Birth Rate: {:.4}", record.birth_rate()),
        )?;
    }
    Ok(())
}

fn print_findings<W: Write>(summary: &Summary, printer: &mut Printer<W>) -> io::Result<()> {
    printer.header("Answer to Guiding Question")?;
    printer.line("Question: What is the correlation between countries and birth rate?")?;
    printer.blank()?;
    printer.line("Findings:")?;
    printer.bullet("Birth rates vary significantly across countries, ranging from very low")?;
    printer.continuation("(developed nations) to quite high (developing nations).")?;
    printer.bullet(format_args!(
        "The data set shows an average birth rate of {:.4} across {} countries.",
        summary.average_birth_rate, summary.total
    ))?;
    printer.bullet(format_args!(
        "{} countries ({:.1}%) have birth rates above the average.",
        summary.above_average, summary.above_average_pct
    ))?;
    printer.bullet("Higher birth rates are generally associated with developing nations,")?;
    printer.continuation("while developed nations tend to have lower birth rates.")
}
