// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use turni_domain::DomainError;
use turni_ingest::IngestError;

/// Errors that can occur while evaluating a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The month could not be resolved or an override is out of range.
    Domain(DomainError),
    /// The source document yielded no usable shifts.
    Ingest(IngestError),
    /// The requested worker does not appear in the roster.
    WorkerNotFound(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(err) => write!(f, "Domain violation: {err}"),
            Self::Ingest(err) => write!(f, "Extraction failed: {err}"),
            Self::WorkerNotFound(name) => write!(f, "Worker not found in roster: '{name}'"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(err) => Some(err),
            Self::Ingest(err) => Some(err),
            Self::WorkerNotFound(_) => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<IngestError> for CoreError {
    fn from(err: IngestError) -> Self {
        Self::Ingest(err)
    }
}
