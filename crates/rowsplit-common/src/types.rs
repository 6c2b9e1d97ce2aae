//! Common type definitions describing where fields live in an input table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of table a set of rows came from.
///
/// Each format has a fixed column layout; see [`ColumnLayout::for_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    /// A spreadsheet workbook: one header row, then
    /// `name | weight | time | split | split1 | ...` with time-typed cells.
    #[default]
    Workbook,
    /// An exported sheet of text rows without a header:
    /// `date | distance | name | weight | time | split | split1 | ...`.
    SheetsExport,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workbook => write!(f, "workbook"),
            Self::SheetsExport => write!(f, "sheets_export"),
        }
    }
}

impl FromStr for SourceFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "workbook" | "xlsx" => Ok(Self::Workbook),
            "sheets_export" | "sheets" | "csv" => Ok(Self::SheetsExport),
            other => Err(format!("unknown source format '{other}'")),
        }
    }
}

/// Zero-based column positions of each semantic field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Athlete name.
    pub name_col: usize,
    /// Body weight, may be blank.
    pub weight_col: usize,
    /// Total piece time.
    pub time_col: usize,
    /// Average split.
    pub split_col: usize,
    /// First intermediate split; later splits follow contiguously.
    pub splits_start_col: usize,
    /// Practice date, when the source records one.
    #[serde(default)]
    pub date_col: Option<usize>,
    /// Piece distance, when the source records one.
    #[serde(default)]
    pub distance_col: Option<usize>,
    /// Leading rows to skip.
    #[serde(default)]
    pub header_rows: usize,
}

impl ColumnLayout {
    /// Layout of a spreadsheet workbook.
    pub const WORKBOOK: Self = Self {
        name_col: 0,
        weight_col: 1,
        time_col: 2,
        split_col: 3,
        splits_start_col: 4,
        date_col: None,
        distance_col: None,
        header_rows: 1,
    };

    /// Layout of an exported sheet.
    pub const SHEETS_EXPORT: Self = Self {
        name_col: 2,
        weight_col: 3,
        time_col: 4,
        split_col: 5,
        splits_start_col: 6,
        date_col: Some(0),
        distance_col: Some(1),
        header_rows: 0,
    };

    /// The preset layout for a source format.
    pub const fn for_format(format: SourceFormat) -> Self {
        match format {
            SourceFormat::Workbook => Self::WORKBOOK,
            SourceFormat::SheetsExport => Self::SHEETS_EXPORT,
        }
    }

    /// Every fixed (non-split) column in use.
    pub fn fixed_columns(&self) -> Vec<usize> {
        let mut cols = vec![self.name_col, self.weight_col, self.time_col, self.split_col];
        cols.extend(self.date_col);
        cols.extend(self.distance_col);
        cols
    }

    /// Checks that fixed columns are distinct and precede the splits.
    pub fn check(&self) -> Result<(), String> {
        let fixed = self.fixed_columns();
        for (i, col) in fixed.iter().enumerate() {
            if fixed[i + 1..].contains(col) {
                return Err(format!("column {col} is assigned to more than one field"));
            }
            if *col >= self.splits_start_col {
                return Err(format!(
                    "column {col} overlaps the intermediate splits starting at column {}",
                    self.splits_start_col
                ));
            }
        }
        Ok(())
    }
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self::WORKBOOK
    }
}
