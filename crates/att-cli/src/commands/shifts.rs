//! Implementation of the `att shifts` command.
//!
//! Classifies each employee's dominant shift from their check-in times
//! and prints one line per employee, or the whole mapping as JSON.

use std::io::Write;

use anyhow::{Context, Result};

use att_core::determine_dominant_shifts;

use crate::input::SheetRecord;

pub fn run<W: Write>(writer: &mut W, records: &[SheetRecord], json: bool) -> Result<()> {
    let shifts = determine_dominant_shifts(records);

    if json {
        serde_json::to_writer_pretty(&mut *writer, &shifts)
            .context("failed to serialize shift mapping")?;
        writeln!(writer)?;
        return Ok(());
    }

    for (personnel_id, assignment) in &shifts {
        writeln!(
            writer,
            "Personnel ID: {personnel_id}, Employee Name: {}, Shift: {}",
            assignment.name, assignment.shift
        )?;
    }

    Ok(())
}
