//! # Record Store
//!
//! An append-only list of [`Record`]s kept in insertion order and unique by
//! country name. The first record seen for a country wins.

use std::collections::HashSet;

use crate::record::Record;

#[derive(Debug, Default, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    seen: HashSet<String>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` unless its country is already present.
    ///
    /// Returns `true` when the record was stored.
    pub fn push(&mut self, record: Record) -> bool {
        if self.seen.contains(record.country()) {
            return false;
        }
        self.seen.insert(record.country().to_string());
        self.records.push(record);
        true
    }

    /// Case-sensitive lookup by trimmed country name.
    pub fn contains(&self, country: &str) -> bool {
        self.seen.contains(country)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
