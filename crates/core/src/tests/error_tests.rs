// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::CoreError;
use std::error::Error;
use turni_domain::DomainError;
use turni_ingest::{IngestError, SourceFormat};

#[test]
fn test_core_error_display() {
    let domain: CoreError = DomainError::UnknownMonth(String::from("Brumaio")).into();
    assert_eq!(domain.to_string(), "Domain violation: Unknown month: 'Brumaio'");

    let ingest: CoreError = IngestError::NoRecognizableContent {
        format: SourceFormat::Calendar,
    }
    .into();
    assert_eq!(
        ingest.to_string(),
        "Extraction failed: No recognizable shifts found in ics source"
    );

    let missing: CoreError = CoreError::WorkerNotFound(String::from("Verdi Anna"));
    assert_eq!(missing.to_string(), "Worker not found in roster: 'Verdi Anna'");
}

#[test]
fn test_core_error_source() {
    let domain: CoreError = DomainError::InvalidShiftCode(String::from("X")).into();
    assert!(domain.source().is_some());
    assert!(CoreError::WorkerNotFound(String::new()).source().is_none());
}
