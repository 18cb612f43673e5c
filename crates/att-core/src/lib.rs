//! Core domain logic for attendance shift detection.
//!
//! This crate contains the fundamental types and logic for:
//! - Direction classification: deriving check-in/check-out from device text
//! - Dominant shift: labelling each employee Day/Night/Undetermined
//! - Daily intervals: pairing first check-in with last check-out per date

pub mod daily;
pub mod direction;
mod dominant;
pub mod record;
pub mod timestamp;

pub use daily::{EmployeeShifts, ShiftInterval, reconstruct_daily_intervals};
pub use direction::Direction;
pub use dominant::{ShiftAssignment, ShiftLabel, determine_dominant_shifts};
pub use record::AttendanceRecord;
pub use timestamp::{UnrecognizedTimestamp, parse_timestamp};
