// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod align;
mod calendar;
mod error;
mod grid;
mod source;
mod tabular;

#[cfg(test)]
mod tests;

use tracing::warn;
use turni_domain::{RosterConfig, WorkerRoster};

pub use align::{AbsenceKind, DatedShift, UnresolvedAbsence, align_to_month, resolve_absences};
pub use calendar::{CalendarExtraction, extract_calendar};
pub use error::IngestError;
pub use grid::{Grid, load_grid};
pub use source::{SourceFormat, detect_format};
pub use tabular::{CellClass, classify_cell, extract_roster, extract_roster_from_bytes};

/// Shift data extracted from a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Per-worker sequences from a spreadsheet or text export.
    Roster(WorkerRoster),
    /// Dated entries and pending absences from a calendar.
    Calendar(CalendarExtraction),
}

/// Extracts shift data from a source document of any supported format.
///
/// The format is detected from the content. Failures are logged as warnings
/// and returned to the caller; nothing panics past this boundary.
///
/// # Errors
///
/// Returns `IngestError::UnreadableSource` if the document cannot be parsed,
/// or `IngestError::NoRecognizableContent` if it holds no usable shifts.
pub fn extract(bytes: &[u8], config: &RosterConfig) -> Result<Extraction, IngestError> {
    let format: SourceFormat = detect_format(bytes);

    let result: Result<Extraction, IngestError> = match format {
        SourceFormat::Calendar => extract_calendar(bytes, config).map(Extraction::Calendar),
        _ if format.is_tabular() => {
            extract_roster_from_bytes(bytes, &config.known_names).map(Extraction::Roster)
        }
        _ => Err(IngestError::UnreadableSource {
            format,
            reason: String::from("empty or not a supported document"),
        }),
    };

    if let Err(err) = &result {
        warn!(%format, "{err}");
    }
    result
}
