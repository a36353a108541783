// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Worker roster extraction from a grid of cells.
//!
//! Ward rosters place a worker's name in one cell and that worker's daily
//! shift codes in the cells that follow it. The grid is scanned row-major;
//! every name cell moves a single cursor, and every shift code is credited
//! to whoever the cursor points at.

use crate::error::IngestError;
use crate::grid::{Grid, load_grid};
use crate::source::{SourceFormat, detect_format};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};
use turni_domain::{KnownNames, ShiftCode, WorkerRoster, canonical_worker_name};

// One or two letters from the roster alphabet, or a three-letter code.
#[allow(clippy::expect_used)]
static CODE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[MPNRECSF]{1,2}|MAL|REC|ASS)$").expect("valid pattern")
});

/// Classification of a single grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellClass {
    /// The cell names a worker (canonical form).
    Name(String),
    /// The cell holds a shift code.
    Code(ShiftCode),
    /// The cell is neither.
    Ignored,
}

/// Classifies one cell as a worker name, a shift code or noise.
///
/// Names take precedence. A code cell must look like a roster token and
/// parse as a known shift code; tokens such as `EC` that fit the alphabet
/// but name no code are ignored.
#[must_use]
pub fn classify_cell(raw: &str, known: &KnownNames) -> CellClass {
    if let Some(name) = canonical_worker_name(raw, known) {
        return CellClass::Name(name);
    }

    let token: String = raw.trim().to_uppercase();
    if !CODE_SHAPE.is_match(&token) {
        return CellClass::Ignored;
    }
    token
        .parse::<ShiftCode>()
        .map_or(CellClass::Ignored, CellClass::Code)
}

/// Extracts a worker roster from a grid.
///
/// Codes appearing before the first name are dropped. Only workers with at
/// least one code appear in the result.
///
/// # Errors
///
/// Returns `IngestError::NoRecognizableContent` if no worker received a code.
pub fn extract_roster(
    grid: &Grid,
    known: &KnownNames,
    format: SourceFormat,
) -> Result<WorkerRoster, IngestError> {
    let mut roster: WorkerRoster = WorkerRoster::new();
    let mut current: Option<String> = None;

    for cell in grid.cells() {
        match classify_cell(cell, known) {
            CellClass::Name(name) => current = Some(name),
            CellClass::Code(code) => match &current {
                Some(name) => roster.entry(name.clone()).or_default().push(code),
                None => debug!(cell, "Dropping shift code before any worker name"),
            },
            CellClass::Ignored => {}
        }
    }

    if roster.is_empty() {
        return Err(IngestError::NoRecognizableContent { format });
    }

    info!(%format, workers = roster.len(), "Extracted worker roster");
    Ok(roster)
}

/// Loads a spreadsheet-like source and extracts its worker roster.
///
/// # Errors
///
/// Returns `IngestError::UnreadableSource` if the bytes cannot be read as a
/// grid, or `IngestError::NoRecognizableContent` if no worker received a code.
pub fn extract_roster_from_bytes(
    bytes: &[u8],
    known: &KnownNames,
) -> Result<WorkerRoster, IngestError> {
    let grid: Grid = load_grid(bytes)?;
    extract_roster(&grid, known, detect_format(bytes))
}
