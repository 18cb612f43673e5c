//! CLI subcommand implementations.

pub mod convert;
pub mod intervals;
pub mod shifts;
