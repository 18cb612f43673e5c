//! Dominant shift classification.
//!
//! Aggregates check-in times per employee into day/night counts and
//! labels each employee by majority. Check-outs are irrelevant here:
//! they neither count nor disqualify.

use std::fmt;
use std::sync::OnceLock;

use chrono::NaiveTime;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::record::AttendanceRecord;

/// A dominant shift label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftLabel {
    #[serde(rename = "Day Shift")]
    Day,
    #[serde(rename = "Night Shift")]
    Night,
    Undetermined,
}

impl fmt::Display for ShiftLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Day => "Day Shift",
            Self::Night => "Night Shift",
            Self::Undetermined => "Undetermined",
        };
        write!(f, "{s}")
    }
}

/// The label assigned to one employee, with their display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub name: String,
    pub shift: ShiftLabel,
}

/// Day/night tallies for one employee while records are being consumed.
#[derive(Debug)]
struct ShiftProfile {
    name: String,
    day_check_ins: u32,
    night_check_ins: u32,
}

/// Day window boundaries, half-open: `[07:00:00, 19:00:00)`.
fn day_window() -> (NaiveTime, NaiveTime) {
    (
        NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
    )
}

/// Extracts a strict `HH:MM:SS` time of day from a raw timestamp field.
///
/// The final whitespace-delimited token must match the pattern exactly
/// and denote a valid time; anything else is rejected.
fn strict_check_in_time(raw: &str) -> Option<NaiveTime> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| Regex::new(r"^\d{2}:\d{2}:\d{2}$").unwrap());

    let token = raw.split_whitespace().next_back()?;
    if !pattern.is_match(token) {
        return None;
    }
    NaiveTime::parse_from_str(token, "%H:%M:%S").ok()
}

/// Determines the dominant shift for each employee.
///
/// A record contributes only if it carries a non-empty personnel id,
/// its device text classifies as a check-in, and its timestamp ends in
/// a strict `HH:MM:SS` token. Non-conforming records are silently
/// discarded. Employees with zero valid check-ins do not appear in the
/// output at all.
///
/// The returned map preserves the order in which employees were first
/// seen in the input.
pub fn determine_dominant_shifts<R: AttendanceRecord>(
    records: &[R],
) -> IndexMap<String, ShiftAssignment> {
    let (day_start, day_end) = day_window();
    let mut profiles: IndexMap<String, ShiftProfile> = IndexMap::new();

    for record in records {
        let Some(personnel_id) = record.personnel_id().filter(|id| !id.is_empty()) else {
            continue;
        };
        let device = record.device().unwrap_or_default();
        if Direction::classify(device) != Direction::CheckIn {
            continue;
        }
        let Some(check_in) = record.timestamp().and_then(strict_check_in_time) else {
            continue;
        };

        let profile = profiles
            .entry(personnel_id.to_string())
            .or_insert_with(|| ShiftProfile {
                name: record.employee_name().unwrap_or_default().to_string(),
                day_check_ins: 0,
                night_check_ins: 0,
            });

        if check_in >= day_start && check_in < day_end {
            profile.day_check_ins += 1;
        } else {
            profile.night_check_ins += 1;
        }
    }

    tracing::debug!(employees = profiles.len(), "tallied check-ins");

    profiles
        .into_iter()
        .map(|(personnel_id, profile)| {
            let shift = match profile.day_check_ins.cmp(&profile.night_check_ins) {
                std::cmp::Ordering::Greater => ShiftLabel::Day,
                std::cmp::Ordering::Less => ShiftLabel::Night,
                std::cmp::Ordering::Equal => ShiftLabel::Undetermined,
            };
            (
                personnel_id,
                ShiftAssignment {
                    name: profile.name,
                    shift,
                },
            )
        })
        .collect()
}
