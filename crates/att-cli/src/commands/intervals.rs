//! Implementation of the `att intervals` command.
//!
//! Reconstructs per-day work intervals and either prints them per
//! employee or writes a flattened CSV with one row per interval.

use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use att_core::{ShiftInterval, reconstruct_daily_intervals};

use crate::input::SheetRecord;

const CSV_HEADER: [&str; 4] = ["Personnel ID", "Employee Name", "Shift Start", "Shift End"];

/// Prints intervals to the writer, one line per employee that has at
/// least one reconstructed interval, or the whole mapping as JSON.
pub fn run<W: Write>(writer: &mut W, records: &[SheetRecord], json: bool) -> Result<()> {
    let intervals = reconstruct_daily_intervals(records);

    if json {
        serde_json::to_writer_pretty(&mut *writer, &intervals)
            .context("failed to serialize interval mapping")?;
        writeln!(writer)?;
        return Ok(());
    }

    for (personnel_id, employee) in &intervals {
        if employee.shifts.is_empty() {
            continue;
        }
        writeln!(
            writer,
            "Personnel ID: {personnel_id}, Employee Name: {}, Possible Shifts: {}",
            employee.name,
            format_intervals(&employee.shifts)
        )?;
    }

    Ok(())
}

/// Writes the flattened interval table as CSV.
///
/// Returns the number of interval rows written. When there is no
/// interval data at all, no file is created and 0 is returned.
pub fn write_csv(records: &[SheetRecord], output: &Path) -> Result<usize> {
    let intervals = reconstruct_daily_intervals(records);

    let rows: Vec<[String; 4]> = intervals
        .iter()
        .flat_map(|(personnel_id, employee)| {
            employee.shifts.iter().map(|interval| {
                [
                    personnel_id.clone(),
                    employee.name.clone(),
                    interval.start.format("%H:%M:%S").to_string(),
                    interval.end.format("%H:%M:%S").to_string(),
                ]
            })
        })
        .collect();

    if rows.is_empty() {
        return Ok(0);
    }

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    writer.write_record(CSV_HEADER)?;
    for row in &rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(rows.len())
}

/// Derives the default output path: input stem + configured suffix,
/// with a `.csv` extension (`report.xlsx` -> `report_shifts.csv`).
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{suffix}.csv"))
}

/// Renders intervals as a list of `("start", "end")` pairs.
fn format_intervals(shifts: &[ShiftInterval]) -> String {
    let mut out = String::from("[");
    for (i, interval) in shifts.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(
            out,
            "(\"{}\", \"{}\")",
            interval.start.format("%H:%M:%S"),
            interval.end.format("%H:%M:%S")
        );
    }
    out.push(']');
    out
}
