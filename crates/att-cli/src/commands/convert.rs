//! Implementation of the `att convert` command.
//!
//! Dumps the ingested table as CSV without any classification. Useful
//! for turning a terminal's XLSX export into something grep-able.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::input::SheetTable;

/// Writes the table as CSV. Returns the number of data rows written.
pub fn run(table: &SheetTable, output: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("failed to create {}", output.display()))?;

    if !table.headers.is_empty() {
        writer.write_record(&table.headers)?;
    }
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    Ok(table.rows.len())
}

/// Default output path: the input path with a `.csv` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("csv")
}
