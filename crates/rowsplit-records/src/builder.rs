//! Record building: one table in, one keyed record set out.

use crate::cell::{cell_at, time_to_seconds, Cell, Table};
use crate::filter::RowFilter;
use crate::record::{PerformanceRecord, RecordSet};
use crate::weight::weight_adjusted;
use rowsplit_common::{parse_sheet_date, ColumnLayout, Result, RowsplitError, SourceFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// What a record set is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKey {
    /// The athlete name column.
    #[default]
    Athlete,
    /// The raw text of the date column.
    Date,
}

/// How to read a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Column positions.
    pub layout: ColumnLayout,
    /// Apply the weight adjustment to time and split.
    pub weight_adjusted: bool,
    /// Rows to keep.
    pub filter: RowFilter,
    /// Key override. Defaults to the filter's natural key, else the athlete.
    pub key: Option<RecordKey>,
}

impl BuildOptions {
    /// Options for a layout with no weighting, filtering or key override.
    pub const fn new(layout: ColumnLayout) -> Self {
        Self {
            layout,
            weight_adjusted: false,
            filter: RowFilter::All,
            key: None,
        }
    }

    /// Options using a source format's preset layout.
    pub const fn for_format(format: SourceFormat) -> Self {
        Self::new(ColumnLayout::for_format(format))
    }

    /// Sets weight adjustment.
    #[must_use]
    pub const fn with_weight_adjusted(mut self, weight_adjusted: bool) -> Self {
        self.weight_adjusted = weight_adjusted;
        self
    }

    /// Sets the row filter.
    #[must_use]
    pub fn with_filter(mut self, filter: RowFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Forces the record key.
    #[must_use]
    pub const fn keyed_by(mut self, key: RecordKey) -> Self {
        self.key = Some(key);
        self
    }

    /// The key in effect.
    pub fn effective_key(&self) -> RecordKey {
        self.key
            .or_else(|| self.filter.natural_key())
            .unwrap_or_default()
    }
}

/// Builds the record set for a table.
///
/// Header rows and fully blank rows are skipped. Any kept row with a missing
/// or unparseable name, time, split, weight or intermediate split aborts the
/// build with [`RowsplitError::MalformedRecord`]. A later row with the same
/// key replaces the earlier record. A layout whose fixed columns collide
/// is rejected with [`RowsplitError::InvalidParameter`] before any row is read.
pub fn build(table: &Table, options: &BuildOptions) -> Result<RecordSet> {
    options
        .layout
        .check()
        .map_err(|reason| RowsplitError::invalid_parameter("layout", reason))?;
    options.filter.check_layout(&options.layout)?;
    let key_kind = options.effective_key();
    if key_kind == RecordKey::Date && options.layout.date_col.is_none() {
        return Err(RowsplitError::invalid_parameter(
            "key",
            "records keyed by date need a date column",
        ));
    }

    let mut records = RecordSet::new();
    for (index, row) in table
        .rows()
        .iter()
        .enumerate()
        .skip(options.layout.header_rows)
    {
        if row.iter().all(Cell::is_blank) || !options.filter.matches(row, &options.layout) {
            continue;
        }

        let record = build_record(row, index, options)?;
        let key = match key_kind {
            RecordKey::Athlete => record.name.clone(),
            RecordKey::Date => required_text(row, options.layout.date_col, &record.name, "date")?,
        };

        debug!(key = %key, split = record.split, splits = record.splits.len(), "parsed row");
        if records.insert(key.clone(), record).is_some() {
            warn!(key = %key, row = index + 1, "duplicate key, keeping the later row");
        }
    }

    info!(
        records = records.len(),
        weight_adjusted = options.weight_adjusted,
        "built records"
    );
    Ok(records)
}

/// Reads one row into a record. `index` is the zero-based row position,
/// used to identify rows without a name.
pub fn build_record(
    row: &[Cell],
    index: usize,
    options: &BuildOptions,
) -> Result<PerformanceRecord> {
    let layout = &options.layout;
    let name = cell_at(row, layout.name_col)
        .text()
        .ok_or_else(|| RowsplitError::malformed(format!("row {}", index + 1), "missing name"))?;

    let weight = read_weight(cell_at(row, layout.weight_col), &name)?;
    let raw_time = read_time(cell_at(row, layout.time_col), &name, "time")?;
    let raw_split = read_time(cell_at(row, layout.split_col), &name, "split")?;

    let mut splits = Vec::new();
    for (offset, cell) in row.iter().enumerate().skip(layout.splits_start_col) {
        if cell.is_blank() {
            break;
        }
        let label = format!("intermediate split {}", offset - layout.splits_start_col + 1);
        splits.push(read_time(cell, &name, &label)?);
    }

    let applied_weight = if options.weight_adjusted { weight } else { None };

    let date = match layout.date_col.map(|col| cell_at(row, col)) {
        Some(cell) if !cell.is_blank() => Some(read_date(cell, &name)?),
        _ => None,
    };
    let distance = layout.distance_col.and_then(|col| cell_at(row, col).text());

    Ok(PerformanceRecord {
        time: weight_adjusted(raw_time, applied_weight),
        split: weight_adjusted(raw_split, applied_weight),
        raw_split,
        splits,
        adjusted: applied_weight.is_some(),
        weight,
        date,
        distance,
        name,
    })
}

fn read_time(cell: &Cell, key: &str, field: &str) -> Result<f64> {
    if cell.is_blank() {
        return Err(RowsplitError::malformed(key, format!("missing {field}")));
    }
    time_to_seconds(cell).ok_or_else(|| {
        RowsplitError::malformed(key, format!("unreadable {field} '{cell}'"))
    })
}

fn read_weight(cell: &Cell, key: &str) -> Result<Option<f64>> {
    if cell.is_blank() {
        return Ok(None);
    }
    match cell.number() {
        Some(weight) if weight.is_finite() && weight > 0.0 => Ok(Some(weight)),
        _ => Err(RowsplitError::malformed(
            key,
            format!("weight '{cell}' is not a positive number"),
        )),
    }
}

fn read_date(cell: &Cell, key: &str) -> Result<chrono::NaiveDate> {
    let text = cell.to_string();
    parse_sheet_date(&text)
        .ok_or_else(|| RowsplitError::malformed(key, format!("unreadable date '{text}'")))
}

fn required_text(row: &[Cell], col: Option<usize>, key: &str, field: &str) -> Result<String> {
    col.and_then(|col| cell_at(row, col).text())
        .ok_or_else(|| RowsplitError::malformed(key, format!("missing {field}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowsplit_common::test_utils::assert_approx_eq;

    fn workbook(rows: &[&[&str]]) -> Table {
        let mut all = vec![vec!["Name", "Weight", "Time", "Split"]];
        all.extend(rows.iter().map(|r| r.to_vec()));
        Table::from_text_rows(all)
    }

    #[test]
    fn test_parses_fields_and_splits() {
        let table = workbook(&[&["Alice", "150", "7:40.0", "1:55.0", "1:53.0", "1:56.0"]]);
        let records = build(&table, &BuildOptions::for_format(SourceFormat::Workbook)).unwrap();

        let alice = records.get("Alice").unwrap();
        assert_eq!(alice.weight, Some(150.0));
        assert_approx_eq(alice.time, 460.0, 1e-9);
        assert_approx_eq(alice.split, 115.0, 1e-9);
        assert_approx_eq(alice.raw_split, 115.0, 1e-9);
        assert_eq!(alice.splits.len(), 2);
        assert!(!alice.adjusted);
    }

    #[test]
    fn test_stops_at_first_blank_split() {
        let table = workbook(&[&["Alice", "", "7:40.0", "1:55.0", "1:53.0", "", "1:56.0"]]);
        let records = build(&table, &BuildOptions::for_format(SourceFormat::Workbook)).unwrap();
        assert_eq!(records.get("Alice").unwrap().splits.len(), 1);
    }

    #[test]
    fn test_weight_adjusts_aggregates_only() {
        let table = workbook(&[&["Alice", "150", "8:00.0", "2:00.0", "1:58.0"]]);
        let options = BuildOptions::for_format(SourceFormat::Workbook).with_weight_adjusted(true);
        let records = build(&table, &options).unwrap();

        let alice = records.get("Alice").unwrap();
        assert!(alice.adjusted);
        assert_approx_eq(alice.split, 105.3, 1e-9);
        assert_approx_eq(alice.raw_split, 120.0, 1e-9);
        assert_approx_eq(alice.splits[0], 118.0, 1e-9);
        assert_approx_eq(alice.split_saving(), 14.7, 1e-9);
    }

    #[test]
    fn test_missing_split_is_malformed() {
        let table = workbook(&[&["Alice", "150", "7:40.0", ""]]);
        let err = build(&table, &BuildOptions::for_format(SourceFormat::Workbook)).unwrap_err();
        match err {
            RowsplitError::MalformedRecord { key, reason } => {
                assert_eq!(key, "Alice");
                assert!(reason.contains("split"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_name_uses_row_number() {
        let table = workbook(&[&["", "150", "7:40.0", "1:55.0"]]);
        let err = build(&table, &BuildOptions::for_format(SourceFormat::Workbook)).unwrap_err();
        assert!(err.to_string().contains("row 2"), "{err}");
    }

    #[test]
    fn test_bad_weight_is_malformed() {
        for weight in ["-3", "heavy"] {
            let table = workbook(&[&["Alice", weight, "7:40.0", "1:55.0"]]);
            let result = build(&table, &BuildOptions::for_format(SourceFormat::Workbook));
            assert!(matches!(result, Err(RowsplitError::MalformedRecord { .. })));
        }
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let table = workbook(&[&["", "", "", ""], &["Bruno", "", "7:12.4", "1:48.1"]]);
        let records = build(&table, &BuildOptions::for_format(SourceFormat::Workbook)).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_overlapping_layout_is_rejected() {
        let table = workbook(&[&["Alice", "150", "7:40.0", "1:55.0", "1:53.0"]]);
        let layout = ColumnLayout {
            splits_start_col: 2,
            ..ColumnLayout::WORKBOOK
        };

        let err = build(&table, &BuildOptions::new(layout)).unwrap_err();
        assert!(matches!(
            err,
            RowsplitError::InvalidParameter { ref name, .. } if name == "layout"
        ));
    }

    #[test]
    fn test_date_key_requires_date_column() {
        let table = workbook(&[]);
        let options = BuildOptions::for_format(SourceFormat::Workbook).keyed_by(RecordKey::Date);
        assert!(matches!(
            build(&table, &options),
            Err(RowsplitError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_effective_key() {
        let options = BuildOptions::for_format(SourceFormat::SheetsExport);
        assert_eq!(options.effective_key(), RecordKey::Athlete);

        let options = options.with_filter(RowFilter::Athlete {
            name: "Alice".to_string(),
            distance: "2000".to_string(),
        });
        assert_eq!(options.effective_key(), RecordKey::Date);
        assert_eq!(
            options.keyed_by(RecordKey::Athlete).effective_key(),
            RecordKey::Athlete
        );
    }
}
