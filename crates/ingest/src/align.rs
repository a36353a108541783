// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date-tagged entries and their alignment to day-of-month slots.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Month};
use tracing::warn;
use turni_domain::{DomainError, ShiftCode, ShiftSequence, days_in_month};

/// A shift code tagged with its calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedShift {
    /// The day the shift takes place.
    pub date: Date,
    /// The shift code.
    pub code: ShiftCode,
}

/// An absence whose type has not been classified yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedAbsence {
    /// The day of the absence.
    pub date: Date,
}

/// Classification of an absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbsenceKind {
    /// Approved leave ("ferie").
    Leave,
    /// Sick leave ("malattia").
    Sick,
}

impl AbsenceKind {
    /// Returns the shift code recorded for this kind of absence.
    #[must_use]
    pub const fn code(&self) -> ShiftCode {
        match self {
            Self::Leave => ShiftCode::Leave,
            Self::Sick => ShiftCode::Sick,
        }
    }
}

impl FromStr for AbsenceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LEAVE" | "FERIE" | "F" => Ok(Self::Leave),
            "SICK" | "MALATTIA" | "MAL" => Ok(Self::Sick),
            _ => Err(DomainError::InvalidShiftCode(s.to_string())),
        }
    }
}

/// Turns absences into dated entries using an external classification.
///
/// Absences the classifier cannot place keep the unresolved absence code.
pub fn resolve_absences<F>(absences: &[UnresolvedAbsence], classify: F) -> Vec<DatedShift>
where
    F: Fn(Date) -> Option<AbsenceKind>,
{
    absences
        .iter()
        .map(|absence| DatedShift {
            date: absence.date,
            code: classify(absence.date).map_or(ShiftCode::Absence, |kind| kind.code()),
        })
        .collect()
}

/// Places dated entries in the day slots of a month.
///
/// Entries are ordered by date, never by their position in the source.
/// Entries outside the month are skipped. When two entries fall on the same
/// day, morning+afternoon and afternoon+night merge into the combined code;
/// otherwise the later entry replaces the earlier one. Days without entries
/// are unassigned.
///
/// # Errors
///
/// Returns an error if the calendar month cannot be resolved.
pub fn align_to_month(
    entries: &[DatedShift],
    year: i32,
    month: Month,
) -> Result<ShiftSequence, DomainError> {
    let days: u8 = days_in_month(year, month)?;
    let mut slots: Vec<Option<ShiftCode>> = vec![None; usize::from(days)];

    let mut ordered: Vec<&DatedShift> = entries
        .iter()
        .filter(|entry| entry.date.year() == year && entry.date.month() == month)
        .collect();
    ordered.sort_by_key(|entry| entry.date);

    for entry in ordered {
        let idx: usize = usize::from(entry.date.day() - 1);
        let slot: &mut Option<ShiftCode> = &mut slots[idx];
        *slot = match *slot {
            None => Some(entry.code),
            Some(existing) => existing.combine(entry.code).or_else(|| {
                warn!(
                    date = %entry.date,
                    %existing,
                    replacement = %entry.code,
                    "Two shifts on the same day; keeping the later one"
                );
                Some(entry.code)
            }),
        };
    }

    Ok(slots
        .into_iter()
        .map(|slot| slot.unwrap_or(ShiftCode::Unassigned))
        .collect())
}
