pub mod analyze;
pub mod list;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use indicators_common::config::{Config, DEFAULT_INPUT, DEFAULT_TOP_N};

#[derive(Parser)]
#[command(name = "indicators")]
#[command(about = "Birth rate statistics for the World Indicators 2000 dataset.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// CSV file to read
    #[arg(short, long, global = true, default_value = DEFAULT_INPUT)]
    pub file: PathBuf,

    /// Number of countries in the birth rate ranking
    #[arg(short = 'n', long = "top", global = true, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Raise diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored diagnostics
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print birth rate statistics (default)
    #[command(alias = "a")]
    Analyze,
    /// Print every loaded country
    #[command(alias = "l")]
    List,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            input: self.file.clone(),
            top_n: self.top,
        }
    }
}
