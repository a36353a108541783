// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading spreadsheet-like sources into a plain grid of cells.

use crate::error::IngestError;
use crate::source::{SourceFormat, detect_format};
use calamine::{Data, Range, Reader, Xls, Xlsx, open_workbook_from_rs};
use std::io::{Cursor, Read, Seek};
use tracing::debug;

/// Rows of optional cell text. Empty cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Option<String>>>,
}

impl Grid {
    /// Creates a grid from rows of optional cells.
    #[must_use]
    pub const fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Creates a grid where every cell is present.
    #[must_use]
    pub fn from_text_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| clean_cell(cell.as_ref())).collect())
                .collect(),
        }
    }

    /// Returns the rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Returns whether the grid has no non-empty cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(Option::is_none))
    }

    /// Iterates over non-empty cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .flat_map(|row| row.iter().filter_map(|cell| cell.as_deref()))
    }
}

fn clean_cell(text: &str) -> Option<String> {
    let trimmed: &str = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Loads a spreadsheet-like source into a grid.
///
/// The format is detected from the content: legacy and zipped workbooks by
/// their magic number (first worksheet only), anything else readable as
/// UTF-8 text as headerless delimited rows.
///
/// # Errors
///
/// Returns `IngestError::UnreadableSource` if the content matches no
/// tabular format or the reader rejects it.
pub fn load_grid(bytes: &[u8]) -> Result<Grid, IngestError> {
    let format: SourceFormat = detect_format(bytes);
    debug!(%format, size = bytes.len(), "Loading grid");

    match format {
        SourceFormat::LegacyWorkbook => read_first_sheet::<Xls<_>, _>(Cursor::new(bytes), format),
        SourceFormat::ZippedWorkbook => read_first_sheet::<Xlsx<_>, _>(Cursor::new(bytes), format),
        SourceFormat::DelimitedText => read_delimited(bytes),
        SourceFormat::Calendar | SourceFormat::Unknown => Err(IngestError::UnreadableSource {
            format,
            reason: String::from("not a spreadsheet or delimited text export"),
        }),
    }
}

fn read_first_sheet<R, RS>(source: RS, format: SourceFormat) -> Result<Grid, IngestError>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    let unreadable = |reason: String| IngestError::UnreadableSource { format, reason };

    let mut workbook: R = open_workbook_from_rs(source).map_err(|e: R::Error| unreadable(e.to_string()))?;
    let range: Range<Data> = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| unreadable(String::from("workbook has no worksheets")))?
        .map_err(|e| unreadable(e.to_string()))?;

    let rows: Vec<Vec<Option<String>>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    Ok(Grid::new(rows))
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) => clean_cell(text),
        other => clean_cell(&other.to_string()),
    }
}

/// Picks the field delimiter from the first line of a text export.
fn sniff_delimiter(text: &str) -> u8 {
    let first_line: &str = text.lines().next().unwrap_or_default();
    let semicolons: usize = first_line.matches(';').count();
    let commas: usize = first_line.matches(',').count();
    let tabs: usize = first_line.matches('\t').count();

    if tabs > semicolons && tabs > commas {
        b'\t'
    } else if semicolons > commas {
        b';'
    } else {
        b','
    }
}

fn read_delimited(bytes: &[u8]) -> Result<Grid, IngestError> {
    let format: SourceFormat = SourceFormat::DelimitedText;
    let text: &str = std::str::from_utf8(bytes).map_err(|e| IngestError::UnreadableSource {
        format,
        reason: e.to_string(),
    })?;
    let text: &str = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(sniff_delimiter(text))
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for record in reader.records() {
        let record: csv::StringRecord = record.map_err(|e| IngestError::UnreadableSource {
            format,
            reason: e.to_string(),
        })?;
        rows.push(record.iter().map(clean_cell).collect());
    }

    Ok(Grid::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semicolon_export() {
        let grid: Grid = load_grid(b"ROSSI MARIO;M;P;;N\nBIANCHI LUCA;R;S\n").unwrap();
        assert_eq!(grid.rows().len(), 2);
        assert_eq!(grid.rows()[0][3], None);
        let cells: Vec<&str> = grid.cells().collect();
        assert_eq!(cells, ["ROSSI MARIO", "M", "P", "N", "BIANCHI LUCA", "R", "S"]);
    }

    #[test]
    fn test_comma_export_with_quotes() {
        let grid: Grid = load_grid(b"\"Rossi, Mario\",M, P \n").unwrap();
        let cells: Vec<&str> = grid.cells().collect();
        assert_eq!(cells, ["Rossi, Mario", "M", "P"]);
    }

    #[test]
    fn test_sniff_delimiter() {
        assert_eq!(sniff_delimiter("a;b;c"), b';');
        assert_eq!(sniff_delimiter("a,b"), b',');
        assert_eq!(sniff_delimiter("a\tb\tc"), b'\t');
        assert_eq!(sniff_delimiter(""), b',');
    }

    #[test]
    fn test_corrupt_workbook_is_unreadable() {
        let bytes: [u8; 12] = [0xD0, 0xCF, 0x11, 0xE0, 0, 0, 0, 0, 0, 0, 0, 0];
        let result: Result<Grid, IngestError> = load_grid(&bytes);
        assert!(matches!(
            result,
            Err(IngestError::UnreadableSource {
                format: SourceFormat::LegacyWorkbook,
                ..
            })
        ));
    }

    #[test]
    fn test_corrupt_zip_is_unreadable() {
        let result: Result<Grid, IngestError> = load_grid(b"PK\x03\x04garbage");
        assert!(matches!(
            result,
            Err(IngestError::UnreadableSource {
                format: SourceFormat::ZippedWorkbook,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_input_is_unreadable() {
        assert!(matches!(
            load_grid(b""),
            Err(IngestError::UnreadableSource {
                format: SourceFormat::Unknown,
                ..
            })
        ));
    }

    #[test]
    fn test_grid_from_text_rows() {
        let grid: Grid = Grid::from_text_rows([vec!["A", " "], vec!["", "B"]]);
        assert_eq!(grid.cells().collect::<Vec<&str>>(), ["A", "B"]);
        assert!(!grid.is_empty());
        assert!(Grid::from_text_rows([vec![" ", ""]]).is_empty());
    }
}
