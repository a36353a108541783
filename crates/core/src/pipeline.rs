// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::request::{MonthRequest, ShiftOverrides};
use serde::{Deserialize, Serialize};
use time::Date;
use tracing::{debug, info, warn};
use turni_domain::{
    MonthlyMetrics, RosterConfig, ShiftSequence, WorkerRoster, adjust_shifts,
    calculate_metrics_for, canonical_worker_name, normalize,
};
use turni_ingest::{
    AbsenceKind, CalendarExtraction, DatedShift, Extraction, align_to_month, extract,
};

/// Label used for the single worker of a personal calendar.
pub const CALENDAR_OWNER: &str = "CALENDARIO";

/// Metrics computed for one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerReport {
    /// Canonical worker name.
    pub worker: String,
    /// The worker's monthly metrics.
    pub metrics: MonthlyMetrics,
}

/// Everything needed to evaluate a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The month to evaluate.
    pub request: MonthRequest,
    /// Restricts a roster to one worker. For a calendar, labels the report.
    pub worker: Option<String>,
    /// Manual corrections for the selected worker.
    pub overrides: ShiftOverrides,
    /// How calendar absences are classified. Unclassified absences keep
    /// the generic absence code.
    pub absence_kind: Option<AbsenceKind>,
    /// Hour table, keywords, known names and daily target.
    pub config: RosterConfig,
}

impl Evaluation {
    /// Creates an evaluation of every worker with no corrections.
    #[must_use]
    pub fn new(request: MonthRequest, config: RosterConfig) -> Self {
        Self {
            request,
            worker: None,
            overrides: ShiftOverrides::new(),
            absence_kind: None,
            config,
        }
    }
}

/// Evaluates one worker's day-indexed sequence for a month.
///
/// Corrections are written into their day slots, night runs receive their
/// post-night day, and the adjusted sequence is fitted to the month before
/// the metrics are computed.
///
/// # Errors
///
/// Returns `CoreError::Domain` if the month cannot be resolved or a
/// correction falls outside it.
pub fn evaluate_sequence(
    shifts: &ShiftSequence,
    request: MonthRequest,
    overrides: &ShiftOverrides,
    config: &RosterConfig,
) -> Result<MonthlyMetrics, CoreError> {
    let days: u8 = request.days()?;
    let corrected: ShiftSequence = overrides.apply(shifts, days)?;
    let adjusted: ShiftSequence = adjust_shifts(&corrected);
    debug!(
        %request,
        source_days = shifts.len(),
        adjusted_days = adjusted.len(),
        overrides = overrides.len(),
        "Evaluating shift sequence"
    );

    Ok(calculate_metrics_for(
        &adjusted,
        request.month,
        request.year,
        config,
    )?)
}

/// Resolves a requested worker name against the roster keys.
fn find_worker<'a>(
    roster: &'a WorkerRoster,
    name: &str,
    config: &RosterConfig,
) -> Result<(&'a String, &'a ShiftSequence), CoreError> {
    let key: String =
        canonical_worker_name(name, &config.known_names).unwrap_or_else(|| normalize(name));
    roster
        .get_key_value(&key)
        .ok_or_else(|| CoreError::WorkerNotFound(name.to_string()))
}

/// Evaluates a roster, either for every worker or for one.
///
/// Corrections only apply when a single worker is selected; they are
/// ignored with a warning otherwise.
///
/// # Errors
///
/// Returns `CoreError::WorkerNotFound` if the selected worker is not in the
/// roster, or `CoreError::Domain` if the month cannot be resolved.
pub fn evaluate_roster(
    roster: &WorkerRoster,
    worker: Option<&str>,
    request: MonthRequest,
    overrides: &ShiftOverrides,
    config: &RosterConfig,
) -> Result<Vec<WorkerReport>, CoreError> {
    if let Some(name) = worker {
        let (worker, shifts) = find_worker(roster, name, config)?;
        let metrics: MonthlyMetrics = evaluate_sequence(shifts, request, overrides, config)?;
        return Ok(vec![WorkerReport {
            worker: worker.clone(),
            metrics,
        }]);
    }

    if !overrides.is_empty() {
        warn!(
            overrides = overrides.len(),
            "Ignoring day corrections: no worker selected"
        );
    }

    let none: ShiftOverrides = ShiftOverrides::new();
    roster
        .iter()
        .map(|(worker, shifts)| -> Result<WorkerReport, CoreError> {
            Ok(WorkerReport {
                worker: worker.clone(),
                metrics: evaluate_sequence(shifts, request, &none, config)?,
            })
        })
        .collect()
}

/// Evaluates the shifts of a personal calendar.
///
/// Absences are classified with `classify`, entries are aligned to the
/// month's day slots by date, and the result is evaluated as a sequence.
///
/// # Errors
///
/// Returns `CoreError::Domain` if the month cannot be resolved or a
/// correction falls outside it.
pub fn evaluate_calendar<F>(
    extraction: &CalendarExtraction,
    classify: F,
    request: MonthRequest,
    overrides: &ShiftOverrides,
    config: &RosterConfig,
) -> Result<MonthlyMetrics, CoreError>
where
    F: Fn(Date) -> Option<AbsenceKind>,
{
    let entries: Vec<DatedShift> = extraction.dated_entries(classify);
    let aligned: ShiftSequence = align_to_month(&entries, request.year, request.month)?;
    evaluate_sequence(&aligned, request, overrides, config)
}

/// Extracts a source document and evaluates it.
///
/// # Errors
///
/// Returns `CoreError::Ingest` if nothing usable could be extracted, plus
/// any error of [`evaluate_roster`] or [`evaluate_calendar`].
pub fn evaluate_document(
    bytes: &[u8],
    evaluation: &Evaluation,
) -> Result<Vec<WorkerReport>, CoreError> {
    let Evaluation {
        request,
        worker,
        overrides,
        absence_kind,
        config,
    } = evaluation;

    let reports: Vec<WorkerReport> = match extract(bytes, config)? {
        Extraction::Roster(roster) => {
            evaluate_roster(&roster, worker.as_deref(), *request, overrides, config)?
        }
        Extraction::Calendar(calendar) => {
            let metrics: MonthlyMetrics = evaluate_calendar(
                &calendar,
                |_| *absence_kind,
                *request,
                overrides,
                config,
            )?;
            let owner: String = worker
                .as_deref()
                .map_or_else(|| String::from(CALENDAR_OWNER), normalize);
            vec![WorkerReport {
                worker: owner,
                metrics,
            }]
        }
    };

    info!(%request, workers = reports.len(), "Evaluated roster");
    Ok(reports)
}
