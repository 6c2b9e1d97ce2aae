//! Row selection for tables that hold many practices.

use crate::builder::{build, BuildOptions, RecordKey};
use crate::cell::{cell_at, Cell, Table};
use crate::record::RecordSet;
use rowsplit_common::{parse_sheet_date, ColumnLayout, Result, RowsplitError};

/// Which rows of a table take part in a build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowFilter {
    /// Every data row.
    #[default]
    All,
    /// One piece: every athlete's row on a date at a distance.
    Piece {
        /// Practice date as written in the sheet.
        date: String,
        /// Piece distance.
        distance: String,
    },
    /// One athlete's rows at a distance, across dates.
    Athlete {
        /// Athlete name.
        name: String,
        /// Piece distance.
        distance: String,
    },
}

impl RowFilter {
    /// The key that distinguishes the rows this filter keeps.
    pub const fn natural_key(&self) -> Option<RecordKey> {
        match self {
            Self::All => None,
            Self::Piece { .. } => Some(RecordKey::Athlete),
            Self::Athlete { .. } => Some(RecordKey::Date),
        }
    }

    /// Fails when the layout lacks a column this filter reads.
    pub fn check_layout(&self, layout: &ColumnLayout) -> Result<()> {
        match self {
            Self::All => Ok(()),
            Self::Piece { .. } if layout.date_col.is_none() => Err(
                RowsplitError::invalid_parameter("piece", "layout has no date column"),
            ),
            Self::Piece { .. } | Self::Athlete { .. } if layout.distance_col.is_none() => Err(
                RowsplitError::invalid_parameter("distance", "layout has no distance column"),
            ),
            Self::Piece { .. } | Self::Athlete { .. } => Ok(()),
        }
    }

    /// Whether a row is kept.
    pub fn matches(&self, row: &[Cell], layout: &ColumnLayout) -> bool {
        match self {
            Self::All => true,
            Self::Piece { date, distance } => {
                column_matches(row, layout.date_col, date, same_date)
                    && column_matches(row, layout.distance_col, distance, same_distance)
            }
            Self::Athlete { name, distance } => {
                cell_at(row, layout.name_col)
                    .text()
                    .is_some_and(|cell| cell == name.trim())
                    && column_matches(row, layout.distance_col, distance, same_distance)
            }
        }
    }
}

fn column_matches(
    row: &[Cell],
    col: Option<usize>,
    wanted: &str,
    same: fn(&str, &str) -> bool,
) -> bool {
    col.and_then(|col| cell_at(row, col).text())
        .is_some_and(|value| same(&value, wanted.trim()))
}

fn same_date(a: &str, b: &str) -> bool {
    match (parse_sheet_date(a), parse_sheet_date(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}

fn same_distance(a: &str, b: &str) -> bool {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(a), Ok(b)) => (a - b).abs() < f64::EPSILON,
        _ => a.eq_ignore_ascii_case(b),
    }
}

/// Records for one piece, keyed by athlete.
pub fn select_piece(
    table: &Table,
    options: &BuildOptions,
    date: &str,
    distance: &str,
) -> Result<RecordSet> {
    let options = options.clone().with_filter(RowFilter::Piece {
        date: date.to_string(),
        distance: distance.to_string(),
    });
    build(table, &options)
}

/// One athlete's records at a distance, keyed by date.
pub fn select_athlete(
    table: &Table,
    options: &BuildOptions,
    name: &str,
    distance: &str,
) -> Result<RecordSet> {
    let options = options.clone().with_filter(RowFilter::Athlete {
        name: name.to_string(),
        distance: distance.to_string(),
    });
    build(table, &options)
}
