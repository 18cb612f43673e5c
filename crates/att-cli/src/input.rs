//! Ingestion of access-control exports.
//!
//! Reads XLSX/ODS workbooks via calamine or delimited text via csv into
//! a uniform string table, then maps the well-known columns onto the
//! record contract the core classifiers consume. Everything here is the
//! "external collaborator" side of the boundary: per-record validation
//! stays in att-core.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use thiserror::Error;

use att_core::AttendanceRecord;

/// Column titles expected in the export's header row.
const COL_PERSONNEL_ID: &str = "Personnel ID";
const COL_EMPLOYEE_NAME: &str = "Employee Name";
const COL_TIME: &str = "Time";
const COL_DEVICE: &str = "Device";

/// Structural ingestion failures. Per-record malformation is never an
/// error; it surfaces as absent fields that the core discards.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    #[error("workbook has no worksheets")]
    NoWorksheet,

    #[error(transparent)]
    Spreadsheet(#[from] calamine::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// The ingested export as a uniform string table.
///
/// An empty file yields an empty table, not an error.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One row of the export, reduced to the fields the classifiers use.
#[derive(Debug, Clone)]
pub struct SheetRecord {
    pub personnel_id: Option<String>,
    pub employee_name: Option<String>,
    pub time: Option<String>,
    pub device: Option<String>,
}

impl AttendanceRecord for SheetRecord {
    fn personnel_id(&self) -> Option<&str> {
        self.personnel_id.as_deref()
    }

    fn employee_name(&self) -> Option<&str> {
        self.employee_name.as_deref()
    }

    fn timestamp(&self) -> Option<&str> {
        self.time.as_deref()
    }

    fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }
}

impl SheetTable {
    /// Returns the index of a header column, matching trimmed titles.
    fn column(&self, title: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.trim() == title)
    }

    /// Maps the well-known columns onto attendance records.
    ///
    /// Missing columns yield absent fields; empty cells become `None`.
    pub fn records(&self) -> Vec<SheetRecord> {
        let personnel_id = self.column(COL_PERSONNEL_ID);
        let employee_name = self.column(COL_EMPLOYEE_NAME);
        let time = self.column(COL_TIME);
        let device = self.column(COL_DEVICE);

        let field = |row: &[String], index: Option<usize>| {
            index
                .and_then(|i| row.get(i))
                .filter(|cell| !cell.is_empty())
                .cloned()
        };

        self.rows
            .iter()
            .map(|row| SheetRecord {
                personnel_id: field(row, personnel_id),
                employee_name: field(row, employee_name),
                time: field(row, time),
                device: field(row, device),
            })
            .collect()
    }
}

/// Reads an export into a string table.
///
/// The format is chosen by file extension: workbooks go through
/// calamine (first worksheet), `.csv` through the csv reader. With
/// `start_row` (1-based), rows above it are skipped and the first
/// remaining row becomes the header.
pub fn read_table(path: &Path, start_row: Option<u32>) -> Result<SheetTable, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let mut raw_rows = match extension.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => read_workbook_rows(path)?,
        "csv" => read_csv_rows(path)?,
        other => return Err(InputError::UnsupportedFormat(other.to_string())),
    };

    let skip = start_row.map_or(0, |row| row.saturating_sub(1) as usize);
    if skip > 0 {
        raw_rows.drain(..skip.min(raw_rows.len()));
    }

    let mut rows = raw_rows.into_iter();
    let headers = rows.next().unwrap_or_default();
    let table = SheetTable {
        headers,
        rows: rows.collect(),
    };

    tracing::debug!(
        path = %path.display(),
        rows = table.rows.len(),
        "ingested attendance export"
    );
    Ok(table)
}

fn read_workbook_rows(path: &Path) -> Result<Vec<Vec<String>>, InputError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(InputError::NoWorksheet)??;

    Ok(range
        .rows()
        .map(|row| row.iter().map(render_cell).collect())
        .collect())
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Renders one workbook cell as text.
///
/// Datetime cells use the same `%Y-%m-%d %H:%M:%S` shape the exporters
/// emit in text columns, so both classifiers parse them identically.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => render_float(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
    }
}

/// Whole-valued floats render without the trailing `.0` so numeric id
/// columns survive the spreadsheet round trip.
fn render_float(f: f64) -> String {
    if f.fract().abs() > 0.0 || f.abs() >= 9e15 {
        f.to_string()
    } else {
        format!("{f:.0}")
    }
}
