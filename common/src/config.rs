use std::path::PathBuf;

/// Input file read when none is given on the command line.
pub const DEFAULT_INPUT: &str = "WorldIndicators2000.csv";

/// Number of countries shown in the birth rate ranking by default.
pub const DEFAULT_TOP_N: usize = 5;

pub struct Config {
    /// Path of the CSV dataset to analyze.
    pub input: PathBuf,
    /// How many countries the ranking shows.
    ///
    /// Fewer are shown when the dataset is smaller.
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            top_n: DEFAULT_TOP_N,
        }
    }
}
