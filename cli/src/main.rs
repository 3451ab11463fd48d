mod commands;
mod terminal;

use std::io;

use anyhow::Context;
use commands::{CommandLine, Commands, analyze, list};
use terminal::{logging, print::Printer};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    if commands.no_color {
        colored::control::set_override(false);
    }
    logging::init_logging(commands.verbose).context("Failed to initialize logger")?;

    let cfg = commands.config();
    let mut printer = Printer::new(io::stdout().lock());
    let mut stderr = io::stderr();

    match commands.command.unwrap_or(Commands::Analyze) {
        Commands::Analyze => analyze::analyze(&cfg, &mut printer, &mut stderr),
        Commands::List => list::list(&cfg, &mut printer, &mut stderr),
    }
    .context("Failed to write to stdout")
}
