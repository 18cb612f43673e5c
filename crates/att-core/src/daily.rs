//! Daily work-interval reconstruction.
//!
//! Groups events per employee per calendar date and pairs the earliest
//! check-in with the latest check-out of each date. A day with four
//! check-ins and three check-outs still yields exactly one interval;
//! a day missing either direction yields none.

use chrono::{NaiveDate, NaiveTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::record::AttendanceRecord;
use crate::timestamp::parse_timestamp;

/// One reconstructed work interval: first check-in to last check-out
/// of a single calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// All reconstructed intervals for one employee.
///
/// `shifts` is ordered by the first appearance of each date in the
/// input sequence, not chronologically. Callers relying on a sorted
/// view must sort themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeShifts {
    pub name: String,
    pub shifts: Vec<ShiftInterval>,
}

/// Check-in/check-out times collected for one (employee, date) group.
#[derive(Debug, Default)]
struct DailyActivity {
    check_ins: Vec<NaiveTime>,
    check_outs: Vec<NaiveTime>,
}

/// Per-employee accumulator keyed by first-seen date.
#[derive(Debug)]
struct EmployeeActivity {
    name: String,
    dates: IndexMap<NaiveDate, DailyActivity>,
}

/// Reconstructs per-day work intervals for each employee.
///
/// A record contributes only if it carries a non-empty personnel id and
/// a timestamp that parses as a combined date+time (see
/// [`parse_timestamp`]). Records whose device text matches neither
/// direction marker still open their (employee, date) group but join
/// neither list. Non-conforming records are silently discarded.
///
/// Both the employee map and each employee's date groups preserve
/// first-seen insertion order.
pub fn reconstruct_daily_intervals<R: AttendanceRecord>(
    records: &[R],
) -> IndexMap<String, EmployeeShifts> {
    let mut activity: IndexMap<String, EmployeeActivity> = IndexMap::new();

    for record in records {
        let Some(personnel_id) = record.personnel_id().filter(|id| !id.is_empty()) else {
            continue;
        };
        let Some(timestamp) = record.timestamp().map(parse_timestamp).and_then(Result::ok)
        else {
            continue;
        };

        let entry = activity
            .entry(personnel_id.to_string())
            .or_insert_with(|| EmployeeActivity {
                name: record.employee_name().unwrap_or_default().to_string(),
                dates: IndexMap::new(),
            });
        let daily = entry.dates.entry(timestamp.date()).or_default();

        match Direction::classify(record.device().unwrap_or_default()) {
            Direction::CheckIn => daily.check_ins.push(timestamp.time()),
            Direction::CheckOut => daily.check_outs.push(timestamp.time()),
            Direction::Unknown => {}
        }
    }

    tracing::debug!(employees = activity.len(), "grouped daily activity");

    activity
        .into_iter()
        .map(|(personnel_id, employee)| {
            let shifts = employee
                .dates
                .into_values()
                .filter_map(|mut daily| {
                    daily.check_ins.sort_unstable();
                    daily.check_outs.sort_unstable();
                    match (daily.check_ins.first(), daily.check_outs.last()) {
                        (Some(&start), Some(&end)) => Some(ShiftInterval { start, end }),
                        _ => None,
                    }
                })
                .collect();
            (
                personnel_id,
                EmployeeShifts {
                    name: employee.name,
                    shifts,
                },
            )
        })
        .collect()
}
