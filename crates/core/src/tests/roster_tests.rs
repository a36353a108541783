// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_roster, january_2024};
use crate::{CoreError, ShiftOverrides, WorkerReport, evaluate_roster};
use turni_domain::{KnownNames, RosterConfig, ShiftCode};

#[test]
fn test_every_worker_is_evaluated_in_name_order() {
    let reports: Vec<WorkerReport> = evaluate_roster(
        &create_test_roster(),
        None,
        january_2024(),
        &ShiftOverrides::new(),
        &RosterConfig::default(),
    )
    .unwrap();

    let names: Vec<&str> = reports.iter().map(|r| r.worker.as_str()).collect();
    assert_eq!(names, ["BIANCHI LUCA", "ROSSI MARIO"]);

    // M P N R gains a post-night day before the rest day.
    let rossi: &WorkerReport = &reports[1];
    assert_eq!(rossi.metrics.count(ShiftCode::PostNight), 1);
    assert_eq!(rossi.metrics.worked_hours(), 7 + 7 + 10);

    let bianchi: &WorkerReport = &reports[0];
    assert_eq!(bianchi.metrics.worked_hours(), 14 + 6);
}

#[test]
fn test_selected_worker_is_matched_after_normalization() {
    let reports: Vec<WorkerReport> = evaluate_roster(
        &create_test_roster(),
        Some("  rossi   mario "),
        january_2024(),
        &ShiftOverrides::new(),
        &RosterConfig::default(),
    )
    .unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].worker, "ROSSI MARIO");
}

#[test]
fn test_selected_worker_snaps_to_known_name() {
    let config: RosterConfig = RosterConfig {
        known_names: KnownNames::new(["Bianchi Luca"]),
        ..RosterConfig::default()
    };
    let reports: Vec<WorkerReport> = evaluate_roster(
        &create_test_roster(),
        Some("Bianchi Luca Antonio"),
        january_2024(),
        &ShiftOverrides::new(),
        &config,
    )
    .unwrap();

    assert_eq!(reports[0].worker, "BIANCHI LUCA");
}

#[test]
fn test_unknown_worker_is_reported() {
    let result: Result<Vec<WorkerReport>, CoreError> = evaluate_roster(
        &create_test_roster(),
        Some("Verdi Anna"),
        january_2024(),
        &ShiftOverrides::new(),
        &RosterConfig::default(),
    );

    assert_eq!(
        result,
        Err(CoreError::WorkerNotFound(String::from("Verdi Anna")))
    );
}

#[test]
fn test_overrides_apply_only_to_selected_worker() {
    let overrides: ShiftOverrides = [(2, ShiftCode::Leave)].into_iter().collect();

    let selected: Vec<WorkerReport> = evaluate_roster(
        &create_test_roster(),
        Some("Bianchi Luca"),
        january_2024(),
        &overrides,
        &RosterConfig::default(),
    )
    .unwrap();
    assert_eq!(selected[0].metrics.count(ShiftCode::Leave), 2);
    assert_eq!(selected[0].metrics.count(ShiftCode::Rest), 0);

    let everyone: Vec<WorkerReport> = evaluate_roster(
        &create_test_roster(),
        None,
        january_2024(),
        &overrides,
        &RosterConfig::default(),
    )
    .unwrap();
    assert_eq!(everyone[0].metrics.count(ShiftCode::Leave), 1);
    assert_eq!(everyone[0].metrics.count(ShiftCode::Rest), 1);
}
