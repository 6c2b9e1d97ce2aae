//! Reading practice tables from workbooks and CSV exports.

use crate::error::{AppError, AppResult};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use csv::{ReaderBuilder, Trim};
use rowsplit_records::{Cell, Table};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Loads a table, choosing the reader by file extension.
///
/// Workbooks read `sheet`, or their first worksheet when `sheet` is `None`.
pub fn load_table(path: &Path, sheet: Option<&str>) -> AppResult<Table> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let table = match extension.as_deref() {
        Some("csv") => read_csv(path)?,
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => read_workbook(path, sheet)?,
        _ => return Err(AppError::UnsupportedInput(path.to_path_buf())),
    };

    info!(rows = table.len(), path = %path.display(), "loaded table");
    Ok(table)
}

/// Reads one worksheet of a workbook.
pub fn read_workbook(path: &Path, sheet: Option<&str>) -> AppResult<Table> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names();

    let name = match sheet {
        Some(name) if sheet_names.iter().any(|candidate| candidate == name) => name.to_string(),
        Some(name) => {
            return Err(AppError::MissingSheet {
                path: path.to_path_buf(),
                name: name.to_string(),
            })
        }
        None => sheet_names.first().cloned().ok_or_else(|| AppError::MissingSheet {
            path: path.to_path_buf(),
            name: "(first sheet)".to_string(),
        })?,
    };

    debug!(sheet = %name, "reading worksheet");
    let range = workbook.worksheet_range(&name)?;
    Ok(range_to_table(&range))
}

/// Converts a worksheet range into a table indexed from the sheet's `A1`.
///
/// Calamine ranges start at the first used cell; the leading rows and
/// columns are padded back so configured column positions line up.
pub fn range_to_table(range: &Range<Data>) -> Table {
    let (row_offset, col_offset) = range
        .start()
        .map_or((0, 0), |(row, col)| (row as usize, col as usize));

    let mut table = Table::new(vec![Vec::new(); row_offset]);
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(row.iter().map(data_to_cell));
        table.push_row(cells);
    }
    table
}

/// Converts one workbook value into a cell.
///
/// Time-of-day values become [`Cell::Time`]; full dates become
/// `YYYY/MM/DD` text; durations become seconds.
#[allow(clippy::cast_precision_loss)]
pub fn data_to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => {
            Cell::from(text.as_str())
        }
        Data::Int(value) => Cell::Number(*value as f64),
        Data::Float(value) => Cell::Number(*value),
        Data::Bool(value) => Cell::Text(value.to_string()),
        Data::DateTime(value) => datetime_to_cell(value),
        Data::Error(error) => Cell::Text(format!("#{error:?}")),
    }
}

fn datetime_to_cell(value: &ExcelDateTime) -> Cell {
    let serial = value.as_f64();
    if value.is_duration() {
        return Cell::Number(serial * SECONDS_PER_DAY);
    }
    match value.as_datetime() {
        Some(datetime) if serial >= 1.0 => {
            Cell::Text(datetime.date().format("%Y/%m/%d").to_string())
        }
        Some(datetime) => Cell::Time(datetime.time()),
        None => Cell::Number(serial * SECONDS_PER_DAY),
    }
}

/// Reads a headerless CSV export from a file.
pub fn read_csv(path: &Path) -> AppResult<Table> {
    let reader = csv_builder().from_path(path)?;
    collect_csv(reader)
}

/// Reads a headerless CSV export from any reader.
pub fn read_csv_from<R: Read>(input: R) -> AppResult<Table> {
    collect_csv(csv_builder().from_reader(input))
}

fn csv_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(Trim::All);
    builder
}

fn collect_csv<R: Read>(mut reader: csv::Reader<R>) -> AppResult<Table> {
    let mut table = Table::new(Vec::new());
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(Cell::from).collect());
    }
    Ok(table)
}
