// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the extraction layer.

use crate::source::SourceFormat;
use thiserror::Error;
use turni_domain::DomainError;

/// Errors raised while turning a source document into shift data.
///
/// Both failure classes are non-fatal: the caller shows the message and
/// has nothing to display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    /// The source could not be parsed at all.
    #[error("Unreadable {format} source: {reason}")]
    UnreadableSource {
        /// The detected source format.
        format: SourceFormat,
        /// What went wrong while reading.
        reason: String,
    },
    /// The source parsed but held no worker/shift pairs or shift events.
    #[error("No recognizable shifts found in {format} source")]
    NoRecognizableContent {
        /// The detected source format.
        format: SourceFormat,
    },
    /// Aligning entries to a calendar month failed.
    #[error("Calendar alignment failed: {0}")]
    Domain(#[from] DomainError),
}
