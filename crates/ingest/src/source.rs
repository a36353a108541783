// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Source format detection.
//!
//! Workbooks are recognized by their first four bytes. Text sources are
//! recognized by content: an iCalendar document starts with
//! `BEGIN:VCALENDAR`, anything else is read as delimited text.

use serde::{Deserialize, Serialize};

/// Compound file header of legacy binary workbooks (`.xls`).
const LEGACY_WORKBOOK_MAGIC: [u8; 4] = [0xD0, 0xCF, 0x11, 0xE0];

/// Zip local file header of modern workbooks (`.xlsx`).
const ZIPPED_WORKBOOK_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// The detected format of a source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceFormat {
    /// Legacy binary spreadsheet.
    LegacyWorkbook,
    /// Zipped XML spreadsheet.
    ZippedWorkbook,
    /// Delimited text export (comma or semicolon separated).
    DelimitedText,
    /// iCalendar document with `VEVENT` components.
    Calendar,
    /// Content that matches no supported format.
    Unknown,
}

impl SourceFormat {
    /// Returns whether the format holds a grid of cells.
    #[must_use]
    pub const fn is_tabular(&self) -> bool {
        matches!(
            self,
            Self::LegacyWorkbook | Self::ZippedWorkbook | Self::DelimitedText
        )
    }

    /// Returns a short display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LegacyWorkbook => "xls",
            Self::ZippedWorkbook => "xlsx",
            Self::DelimitedText => "csv",
            Self::Calendar => "ics",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detects the format of a source document from its content.
#[must_use]
pub fn detect_format(bytes: &[u8]) -> SourceFormat {
    if bytes.starts_with(&LEGACY_WORKBOOK_MAGIC) {
        return SourceFormat::LegacyWorkbook;
    }
    if bytes.starts_with(&ZIPPED_WORKBOOK_MAGIC) {
        return SourceFormat::ZippedWorkbook;
    }

    let text: &[u8] = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let Ok(text) = std::str::from_utf8(text) else {
        return SourceFormat::Unknown;
    };
    if text.trim().is_empty() {
        return SourceFormat::Unknown;
    }
    if text
        .trim_start()
        .get(..15)
        .is_some_and(|head| head.eq_ignore_ascii_case("BEGIN:VCALENDAR"))
    {
        return SourceFormat::Calendar;
    }
    SourceFormat::DelimitedText
}
