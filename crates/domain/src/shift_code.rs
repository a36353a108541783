// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift code vocabulary and the hour value attached to each code.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A single roster entry for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftCode {
    /// Morning shift.
    #[serde(rename = "M")]
    Morning,
    /// Afternoon shift.
    #[serde(rename = "P")]
    Afternoon,
    /// Night shift.
    #[serde(rename = "N")]
    Night,
    /// Morning and afternoon on the same day.
    #[serde(rename = "MP")]
    MorningAfternoon,
    /// Afternoon and night on the same day.
    #[serde(rename = "PN")]
    AfternoonNight,
    /// Rest day.
    #[serde(rename = "R")]
    Rest,
    /// Post-night recovery ("smonto").
    #[serde(rename = "S")]
    PostNight,
    /// Approved leave ("ferie").
    #[serde(rename = "F")]
    Leave,
    /// Sick leave ("malattia").
    #[serde(rename = "MAL")]
    Sick,
    /// Accrued-leave deduction.
    #[serde(rename = "REC")]
    Recovery,
    /// Absence whose type has not been classified yet.
    #[serde(rename = "ASS")]
    Absence,
    /// No entry for the day.
    #[serde(rename = "")]
    Unassigned,
}

impl ShiftCode {
    /// Every code, in display order.
    pub const ALL: [Self; 12] = [
        Self::Morning,
        Self::Afternoon,
        Self::Night,
        Self::MorningAfternoon,
        Self::AfternoonNight,
        Self::Rest,
        Self::PostNight,
        Self::Leave,
        Self::Sick,
        Self::Recovery,
        Self::Absence,
        Self::Unassigned,
    ];

    /// Returns the roster token for this code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "M",
            Self::Afternoon => "P",
            Self::Night => "N",
            Self::MorningAfternoon => "MP",
            Self::AfternoonNight => "PN",
            Self::Rest => "R",
            Self::PostNight => "S",
            Self::Leave => "F",
            Self::Sick => "MAL",
            Self::Recovery => "REC",
            Self::Absence => "ASS",
            Self::Unassigned => "",
        }
    }

    /// Returns whether this code marks an absence (classified or not).
    ///
    /// Absences break night-shift adjacency.
    #[must_use]
    pub const fn is_absence(&self) -> bool {
        matches!(self, Self::Leave | Self::Sick | Self::Absence)
    }

    /// Returns whether the code is excluded from the worked-hours total.
    #[must_use]
    pub const fn is_excluded_from_worked(&self) -> bool {
        matches!(self, Self::Rest | Self::PostNight | Self::Recovery)
    }

    /// Merges two codes found on the same day.
    ///
    /// Only morning+afternoon and afternoon+night combine. The order of the
    /// arguments does not matter.
    #[must_use]
    pub const fn combine(self, other: Self) -> Option<Self> {
        match (self, other) {
            (Self::Morning, Self::Afternoon) | (Self::Afternoon, Self::Morning) => {
                Some(Self::MorningAfternoon)
            }
            (Self::Afternoon, Self::Night) | (Self::Night, Self::Afternoon) => {
                Some(Self::AfternoonNight)
            }
            _ => None,
        }
    }
}

impl FromStr for ShiftCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token: String = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == token)
            .ok_or_else(|| DomainError::InvalidShiftCode(s.to_string()))
    }
}

impl std::fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Signed hour value for each shift code.
///
/// Codes missing from the table are worth zero hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourTable {
    hours: BTreeMap<ShiftCode, i32>,
}

impl HourTable {
    /// Creates a table from explicit entries.
    #[must_use]
    pub const fn new(hours: BTreeMap<ShiftCode, i32>) -> Self {
        Self { hours }
    }

    /// Returns the hour value of a code.
    #[must_use]
    pub fn hours(&self, code: ShiftCode) -> i32 {
        self.hours.get(&code).copied().unwrap_or(0)
    }

    /// Overrides the hour value of a single code.
    pub fn set(&mut self, code: ShiftCode, hours: i32) {
        self.hours.insert(code, hours);
    }
}

impl Default for HourTable {
    fn default() -> Self {
        let hours: BTreeMap<ShiftCode, i32> = BTreeMap::from([
            (ShiftCode::Morning, 7),
            (ShiftCode::Afternoon, 7),
            (ShiftCode::Night, 10),
            (ShiftCode::MorningAfternoon, 14),
            (ShiftCode::AfternoonNight, 17),
            (ShiftCode::Rest, 0),
            (ShiftCode::PostNight, 0),
            (ShiftCode::Leave, 6),
            (ShiftCode::Sick, 6),
            (ShiftCode::Recovery, -6),
            (ShiftCode::Absence, 0),
            (ShiftCode::Unassigned, 0),
        ]);
        Self { hours }
    }
}
