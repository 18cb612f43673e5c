//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Attendance shift detector.
///
/// Reads access-control exports (XLSX or CSV) and classifies employee
/// shifts or reconstructs per-day work intervals.
#[derive(Debug, Parser)]
#[command(name = "att", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify each employee's dominant shift (day vs night).
    Shifts {
        /// Path to the attendance export (XLSX or CSV).
        input: PathBuf,

        /// First spreadsheet row to read (1-based); rows above are skipped.
        #[arg(long)]
        start_row: Option<u32>,

        /// Emit the mapping as JSON instead of one line per employee.
        #[arg(long)]
        json: bool,
    },

    /// Reconstruct per-day work intervals (first check-in to last check-out).
    Intervals {
        /// Path to the attendance export (XLSX or CSV).
        input: PathBuf,

        /// First spreadsheet row to read (1-based); rows above are skipped.
        #[arg(long)]
        start_row: Option<u32>,

        /// Emit the mapping as JSON instead of one line per employee.
        #[arg(long)]
        json: bool,

        /// Write the intervals to a CSV file instead of printing them.
        #[arg(long)]
        csv: bool,

        /// Output CSV path (implies --csv). Defaults to the input name
        /// with the configured suffix.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Dump the ingested table as CSV without classification.
    Convert {
        /// Path to the attendance export (XLSX or CSV).
        input: PathBuf,

        /// First spreadsheet row to read (1-based); rows above are skipped.
        #[arg(long)]
        start_row: Option<u32>,

        /// Output CSV path. Defaults to the input name with a .csv extension.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
