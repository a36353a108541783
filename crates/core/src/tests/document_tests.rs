// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{ics, january_2024};
use crate::{
    CALENDAR_OWNER, CoreError, Evaluation, WorkerReport, evaluate_calendar, evaluate_document,
};
use turni_domain::{MonthlyMetrics, RosterConfig, ShiftCode};
use turni_ingest::{AbsenceKind, CalendarExtraction, IngestError, SourceFormat, extract_calendar};

#[test]
fn test_text_export_is_evaluated_per_worker() {
    let bytes: &[u8] = b"Gennaio;1;2;3\nRossi Mario;M;N;R\nBianchi Luca;P;P;P\n";
    let evaluation: Evaluation = Evaluation::new(january_2024(), RosterConfig::default());
    let reports: Vec<WorkerReport> = evaluate_document(bytes, &evaluation).unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].worker, "BIANCHI LUCA");
    assert_eq!(reports[0].metrics.worked_hours(), 21);
    assert_eq!(reports[1].metrics.count(ShiftCode::PostNight), 1);
}

#[test]
fn test_calendar_is_evaluated_for_its_owner() {
    let text: String = ics(&[
        ("20240103T210000Z", "Notte"),
        ("20240101T070000Z", "Mattina"),
        ("20240102", "Assenza"),
    ]);
    let mut evaluation: Evaluation = Evaluation::new(january_2024(), RosterConfig::default());
    evaluation.absence_kind = Some(AbsenceKind::Leave);

    let reports: Vec<WorkerReport> = evaluate_document(text.as_bytes(), &evaluation).unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].worker, CALENDAR_OWNER);
    let metrics: &MonthlyMetrics = &reports[0].metrics;
    assert_eq!(metrics.count(ShiftCode::Morning), 1);
    assert_eq!(metrics.count(ShiftCode::Leave), 1);
    assert_eq!(metrics.count(ShiftCode::Night), 1);
    assert_eq!(metrics.count(ShiftCode::PostNight), 1);
}

#[test]
fn test_calendar_owner_label_comes_from_worker() {
    let text: String = ics(&[("20240101", "Mattina")]);
    let mut evaluation: Evaluation = Evaluation::new(january_2024(), RosterConfig::default());
    evaluation.worker = Some(String::from("verdi anna"));

    let reports: Vec<WorkerReport> = evaluate_document(text.as_bytes(), &evaluation).unwrap();
    assert_eq!(reports[0].worker, "VERDI ANNA");
}

#[test]
fn test_unclassified_absences_keep_generic_code() {
    let text: String = ics(&[("20240108", "Assenza"), ("20240109", "Assenza")]);
    let extraction: CalendarExtraction =
        extract_calendar(text.as_bytes(), &RosterConfig::default()).unwrap();

    let metrics: MonthlyMetrics = evaluate_calendar(
        &extraction,
        |date| (date.day() == 9).then_some(AbsenceKind::Sick),
        january_2024(),
        &crate::ShiftOverrides::new(),
        &RosterConfig::default(),
    )
    .unwrap();

    assert_eq!(metrics.count(ShiftCode::Absence), 1);
    assert_eq!(metrics.count(ShiftCode::Sick), 1);
    assert_eq!(metrics.worked_hours(), 6);
}

#[test]
fn test_empty_document_is_an_ingest_error() {
    let evaluation: Evaluation = Evaluation::new(january_2024(), RosterConfig::default());
    let result: Result<Vec<WorkerReport>, CoreError> = evaluate_document(b"", &evaluation);

    assert!(matches!(
        result,
        Err(CoreError::Ingest(IngestError::UnreadableSource {
            format: SourceFormat::Unknown,
            ..
        }))
    ));
}

#[test]
fn test_document_without_shifts_is_an_ingest_error() {
    let evaluation: Evaluation = Evaluation::new(january_2024(), RosterConfig::default());
    let result: Result<Vec<WorkerReport>, CoreError> =
        evaluate_document(b"Reparto;Medicina\n", &evaluation);

    assert_eq!(
        result,
        Err(CoreError::Ingest(IngestError::NoRecognizableContent {
            format: SourceFormat::DelimitedText
        }))
    );
}
