//! Performance records and the keyed record set.

use chrono::NaiveDate;
use rowsplit_common::round_tenth;
use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};

/// One athlete's result for a piece.
///
/// All times are elapsed seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceRecord {
    /// Athlete name.
    pub name: String,
    /// Body weight, positive when present.
    pub weight: Option<f64>,
    /// Total piece time, weight adjusted when [`Self::adjusted`] is set.
    pub time: f64,
    /// Average split, weight adjusted when [`Self::adjusted`] is set.
    pub split: f64,
    /// Average split as rowed.
    pub raw_split: f64,
    /// Intermediate splits as rowed, in order. Never weight adjusted.
    pub splits: Vec<f64>,
    /// Whether `time` and `split` carry the weight adjustment.
    pub adjusted: bool,
    /// Practice date, for sources that record it.
    pub date: Option<NaiveDate>,
    /// Piece distance as written in the source, for sources that record it.
    pub distance: Option<String>,
}

impl PerformanceRecord {
    /// Seconds of split taken off by the weight adjustment, to a tenth.
    pub fn split_saving(&self) -> f64 {
        round_tenth(self.raw_split - self.split)
    }

    /// Whether the row had any intermediate splits.
    pub fn has_splits(&self) -> bool {
        !self.splits.is_empty()
    }
}

/// Records keyed by athlete name (or by date for one athlete's history).
///
/// Inserting an existing key replaces the earlier record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: BTreeMap<String, PerformanceRecord>,
}

impl RecordSet {
    /// Creates an empty record set.
    pub const fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Inserts a record, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        record: PerformanceRecord,
    ) -> Option<PerformanceRecord> {
        self.records.insert(key.into(), record)
    }

    /// Looks up a record by key.
    pub fn get(&self, key: &str) -> Option<&PerformanceRecord> {
        self.records.get(key)
    }

    /// Whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Key/record pairs in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, PerformanceRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = (&'a String, &'a PerformanceRecord);
    type IntoIter = btree_map::Iter<'a, String, PerformanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<(String, PerformanceRecord)> for RecordSet {
    fn from_iter<I: IntoIterator<Item = (String, PerformanceRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
