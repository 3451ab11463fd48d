//! # Birth Rate Analysis
//!
//! Pure statistics over a slice of [`Record`]s. Nothing here allocates more
//! than the ranking it returns, and nothing here fails: empty input gives
//! zeroed results instead of dividing by zero.

use indicators_common::record::Record;

/// Aggregated view of a dataset, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<'a> {
    pub total: usize,
    pub average_birth_rate: f64,
    pub above_average: usize,
    /// Share of `above_average` in `total`, in percent. `0.0` when empty.
    pub above_average_pct: f64,
    /// The ranking size that was asked for, which may exceed `top.len()`.
    pub requested_top: usize,
    pub top: Vec<&'a Record>,
}

impl<'a> Summary<'a> {
    pub fn compute(records: &'a [Record], top_n: usize) -> Self {
        let average_birth_rate = average_birth_rate(records);
        let above_average = count_above_average(records, average_birth_rate);

        Self {
            total: records.len(),
            average_birth_rate,
            above_average,
            above_average_pct: percentage(above_average, records.len()),
            requested_top: top_n,
            top: top_n_by_birth_rate(records, top_n),
        }
    }
}

/// Arithmetic mean of the birth rates, `0.0` for no records.
pub fn average_birth_rate(records: &[Record]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(Record::birth_rate).sum();
    sum / records.len() as f64
}

/// Records whose birth rate is strictly greater than `average`.
pub fn count_above_average(records: &[Record], average: f64) -> usize {
    records
        .iter()
        .filter(|record| record.birth_rate() > average)
        .count()
}

/// The `n` highest birth rates, highest first.
///
/// Equal rates keep their dataset order.
pub fn top_n_by_birth_rate(records: &[Record], n: usize) -> Vec<&Record> {
    let mut ranked: Vec<&Record> = records.iter().collect();
    ranked.sort_by(|a, b| b.birth_rate().total_cmp(&a.birth_rate()));
    ranked.truncate(n);
    ranked
}

/// `part` as a percentage of `total`; `0.0` when `total` is zero.
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / total as f64
}
