// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::shift_code::ShiftCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An ordered list of shift codes, one per calendar day.
///
/// Index 0 is day 1 of the month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftSequence {
    codes: Vec<ShiftCode>,
}

impl ShiftSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self { codes: Vec::new() }
    }

    /// Returns the codes as a slice.
    #[must_use]
    pub fn codes(&self) -> &[ShiftCode] {
        &self.codes
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns whether the sequence has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Appends a code.
    pub fn push(&mut self, code: ShiftCode) {
        self.codes.push(code);
    }

    /// Returns the code for a 1-based day, if present.
    #[must_use]
    pub fn day(&self, day: usize) -> Option<ShiftCode> {
        day.checked_sub(1).and_then(|idx| self.codes.get(idx).copied())
    }

    /// Replaces the code for a 1-based day, padding with unassigned days
    /// when the sequence is shorter.
    pub fn set_day(&mut self, day: usize, code: ShiftCode) {
        let Some(idx) = day.checked_sub(1) else {
            return;
        };
        if self.codes.len() <= idx {
            self.codes.resize(idx + 1, ShiftCode::Unassigned);
        }
        self.codes[idx] = code;
    }

    /// Truncates or pads the sequence to exactly `days` entries.
    ///
    /// Missing days become [`ShiftCode::Unassigned`].
    #[must_use]
    pub fn fit_to_month(mut self, days: usize) -> Self {
        self.codes.resize(days, ShiftCode::Unassigned);
        self
    }

    /// Counts how many times a code appears.
    #[must_use]
    pub fn count(&self, code: ShiftCode) -> usize {
        self.codes.iter().filter(|c| **c == code).count()
    }

    /// Iterates over the codes in day order.
    pub fn iter(&self) -> std::slice::Iter<'_, ShiftCode> {
        self.codes.iter()
    }
}

impl From<Vec<ShiftCode>> for ShiftSequence {
    fn from(codes: Vec<ShiftCode>) -> Self {
        Self { codes }
    }
}

impl FromIterator<ShiftCode> for ShiftSequence {
    fn from_iter<I: IntoIterator<Item = ShiftCode>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ShiftSequence {
    type Item = &'a ShiftCode;
    type IntoIter = std::slice::Iter<'a, ShiftCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

impl std::fmt::Display for ShiftSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tokens: Vec<&str> = self
            .codes
            .iter()
            .map(|code| match code {
                ShiftCode::Unassigned => "-",
                other => other.as_str(),
            })
            .collect();
        write!(f, "{}", tokens.join(" "))
    }
}

/// Canonical worker name to that worker's shift sequence.
pub type WorkerRoster = BTreeMap<String, ShiftSequence>;
