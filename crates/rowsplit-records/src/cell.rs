//! Tabular cell model shared by every input source.

use chrono::NaiveTime;
use rowsplit_common::{parse_clock, time_of_day_seconds};
use std::fmt;

static EMPTY_CELL: Cell = Cell::Empty;

/// A single input cell, already decoded by the loader.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// No value.
    Empty,
    /// Free text, including `M:SS.s` clock strings.
    Text(String),
    /// A plain number.
    Number(f64),
    /// A spreadsheet time value.
    Time(NaiveTime),
}

impl Cell {
    /// Whether the cell carries no value. Whitespace-only text counts as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Number(_) | Self::Time(_) => false,
        }
    }

    /// The cell as trimmed display text, `None` when blank.
    pub fn text(&self) -> Option<String> {
        if self.is_blank() {
            return None;
        }
        Some(self.to_string())
    }

    /// The cell as a number. Text is parsed; times are rejected.
    pub fn number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Empty | Self::Time(_) => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => write!(f, "{}", text.trim()),
            Self::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{value:.0}")
            }
            Self::Number(value) => write!(f, "{value}"),
            Self::Time(time) => write!(f, "{time}"),
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        if text.is_empty() {
            Self::Empty
        } else {
            Self::Text(text.to_string())
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        if text.is_empty() {
            Self::Empty
        } else {
            Self::Text(text)
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<NaiveTime> for Cell {
    fn from(time: NaiveTime) -> Self {
        Self::Time(time)
    }
}

/// Converts a time cell into elapsed seconds.
///
/// Spreadsheet times count hours, minutes, seconds and fractions; numbers are
/// taken as seconds; text is read as `M:SS.s`, `H:MM:SS.s` or bare seconds.
/// Returns `None` for blank, negative or unparseable cells.
pub fn time_to_seconds(cell: &Cell) -> Option<f64> {
    match cell {
        Cell::Empty => None,
        Cell::Text(text) => parse_clock(text),
        Cell::Number(value) if value.is_finite() && *value >= 0.0 => Some(*value),
        Cell::Number(_) => None,
        Cell::Time(time) => Some(time_of_day_seconds(*time)),
    }
}

/// Rows of cells with index access.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates a table from decoded rows.
    pub const fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Creates a table of text cells; empty strings become [`Cell::Empty`].
    pub fn from_text_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|s| Cell::from(s.as_ref())).collect())
                .collect(),
        }
    }

    /// Appends a row.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// All rows.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// A row by index.
    pub fn row(&self, index: usize) -> Option<&[Cell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// A cell by position; out-of-range positions read as [`Cell::Empty`].
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads a cell of a row, treating missing trailing cells as empty.
pub(crate) fn cell_at(row: &[Cell], col: usize) -> &Cell {
    row.get(col).unwrap_or(&EMPTY_CELL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_cells() {
        assert!(Cell::Empty.is_blank());
        assert!(Cell::from("   ").is_blank());
        assert!(!Cell::from("1:45.0").is_blank());
        assert!(!Cell::Number(0.0).is_blank());
    }

    #[test]
    fn test_display_numbers() {
        assert_eq!(Cell::Number(2000.0).to_string(), "2000");
        assert_eq!(Cell::Number(152.5).to_string(), "152.5");
        assert_eq!(Cell::from(" Alice ").text().as_deref(), Some("Alice"));
    }

    #[test]
    fn test_time_to_seconds() {
        let parsed = time_to_seconds(&Cell::from("1:52.6")).unwrap();
        assert!((parsed - 112.6).abs() < 1e-9);
        assert_eq!(time_to_seconds(&Cell::Number(95.0)), Some(95.0));
        assert_eq!(time_to_seconds(&Cell::Number(-1.0)), None);
        assert_eq!(time_to_seconds(&Cell::Empty), None);

        let time = NaiveTime::from_hms_milli_opt(0, 1, 52, 600).unwrap();
        let seconds = time_to_seconds(&Cell::Time(time)).unwrap();
        assert!((seconds - 112.6).abs() < 1e-9);
    }

    #[test]
    fn test_table_access() {
        let table = Table::from_text_rows(vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, 0), &Cell::from("c"));
        assert_eq!(table.cell(1, 5), &Cell::Empty);
        assert_eq!(table.cell(9, 0), &Cell::Empty);
        assert!(table.row(2).is_none());
    }
}
