//! Direction classification from free-text device descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The direction of an attendance event.
///
/// Access-control exports encode direction inside a free-text device
/// descriptor such as `FAC1245200002(CHECK-IN(KITCHEN))` rather than a
/// structured field, so classification is a substring match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    CheckIn,
    CheckOut,
    /// Neither marker present. Such records are retained for grouping
    /// but never contribute to counts or intervals.
    Unknown,
}

impl Direction {
    /// Classifies a device descriptor by case-sensitive substring match.
    ///
    /// `CHECK-IN` is tested first, so a descriptor containing both
    /// markers classifies as a check-in.
    #[must_use]
    pub fn classify(device: &str) -> Self {
        if device.contains("CHECK-IN") {
            Self::CheckIn
        } else if device.contains("CHECK-OUT") {
            Self::CheckOut
        } else {
            Self::Unknown
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::CheckIn => "CHECK-IN",
            Self::CheckOut => "CHECK-OUT",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{s}")
    }
}
