// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Month;
use turni_domain::{DomainError, ShiftCode, ShiftSequence, days_in_month, parse_month};

/// The calendar month being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRequest {
    /// The month.
    pub month: Month,
    /// The calendar year.
    pub year: i32,
}

impl MonthRequest {
    /// Creates a request for a resolved month.
    #[must_use]
    pub const fn new(month: Month, year: i32) -> Self {
        Self { month, year }
    }

    /// Creates a request from an Italian or English month name, or a month number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownMonth` if the name is not recognized.
    pub fn parse(month: &str, year: i32) -> Result<Self, DomainError> {
        Ok(Self::new(parse_month(month)?, year))
    }

    /// Returns the number of days in the requested month.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported calendar range.
    pub fn days(&self) -> Result<u8, DomainError> {
        days_in_month(self.year, self.month)
    }
}

impl std::fmt::Display for MonthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// Manual corrections to a worker's month, keyed by day (1-based).
///
/// Corrections replace whatever the source said for that day and are
/// applied before night-shift adjustment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftOverrides {
    days: BTreeMap<u8, ShiftCode>,
}

impl ShiftOverrides {
    /// Creates an empty set of corrections.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// Sets the code for a day, replacing any earlier correction.
    pub fn set(&mut self, day: u8, code: ShiftCode) {
        self.days.insert(day, code);
    }

    /// Returns the correction for a day, if any.
    #[must_use]
    pub fn get(&self, day: u8) -> Option<ShiftCode> {
        self.days.get(&day).copied()
    }

    /// Returns whether there are no corrections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Returns the number of corrected days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Checks every corrected day against the month length.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDay` for the first day outside `1..=days_in_month`.
    pub fn validate(&self, days_in_month: u8) -> Result<(), DomainError> {
        match self
            .days
            .keys()
            .find(|&&day| day == 0 || day > days_in_month)
        {
            Some(&day) => Err(DomainError::InvalidDay { day, days_in_month }),
            None => Ok(()),
        }
    }

    /// Returns the sequence with every correction written into its day slot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDay` if a correction falls outside the month.
    pub fn apply(
        &self,
        shifts: &ShiftSequence,
        days_in_month: u8,
    ) -> Result<ShiftSequence, DomainError> {
        self.validate(days_in_month)?;

        let mut corrected: ShiftSequence = shifts.clone();
        for (&day, &code) in &self.days {
            corrected.set_day(usize::from(day), code);
        }
        Ok(corrected)
    }
}

impl FromIterator<(u8, ShiftCode)> for ShiftOverrides {
    fn from_iter<I: IntoIterator<Item = (u8, ShiftCode)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

