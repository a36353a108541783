// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Night-shift sequencing rules.
//!
//! A night shift is always followed by a post-night recovery day ("smonto").
//! A run of consecutive nights shares a single recovery day placed after
//! the last night of the run.

use crate::shift_code::ShiftCode;
use crate::types::ShiftSequence;

/// Lookback state of the adjustment pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Adjacency {
    /// The previous effective code was not a night.
    Idle,
    /// The previous effective code was a night that still owes a recovery day.
    InNightRun,
}

/// Inserts the post-night recovery day after every run of night shifts.
///
/// The pass walks the sequence once, left to right:
/// - a night following another night extends the current run
/// - when a run ends, an `S` is inserted after its last night, unless the
///   next code already is `S`
/// - an absence closes any open run and resets the lookback state
/// - every other code passes through unchanged
///
/// The `S` rule departs from a literal "insert after every run" reading: a
/// run already followed by a recorded `S` keeps that day and gets no second
/// one, so `N S R` stays `N S R` and the recovery is never counted twice.
///
/// Each inserted `S` lengthens the sequence by one; callers fit the result
/// back to the month length.
#[must_use]
pub fn adjust_shifts(shifts: &ShiftSequence) -> ShiftSequence {
    let mut adjusted: ShiftSequence = ShiftSequence::new();
    let mut state: Adjacency = Adjacency::Idle;

    for &code in shifts {
        if state == Adjacency::InNightRun && code != ShiftCode::Night {
            if code != ShiftCode::PostNight {
                adjusted.push(ShiftCode::PostNight);
            }
            state = Adjacency::Idle;
        }

        if code == ShiftCode::Night {
            state = Adjacency::InNightRun;
        }
        adjusted.push(code);
    }

    if state == Adjacency::InNightRun {
        adjusted.push(ShiftCode::PostNight);
    }

    adjusted
}
