// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::MonthRequest;
use turni_domain::{Month, ShiftCode, ShiftSequence, WorkerRoster};

pub fn seq(tokens: &[&str]) -> ShiftSequence {
    tokens.iter().map(|t| t.parse::<ShiftCode>().unwrap()).collect()
}

pub const fn january_2024() -> MonthRequest {
    MonthRequest::new(Month::January, 2024)
}

pub fn create_test_roster() -> WorkerRoster {
    let mut roster: WorkerRoster = WorkerRoster::new();
    roster.insert(String::from("ROSSI MARIO"), seq(&["M", "P", "N", "R"]));
    roster.insert(String::from("BIANCHI LUCA"), seq(&["MP", "R", "F"]));
    roster
}

pub fn ics(events: &[(&str, &str)]) -> String {
    let mut text: String = String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n");
    for (idx, (start, summary)) in events.iter().enumerate() {
        text.push_str(&format!(
            "BEGIN:VEVENT\r\nUID:{idx}@ward\r\nDTSTART:{start}\r\nSUMMARY:{summary}\r\nEND:VEVENT\r\n"
        ));
    }
    text.push_str("END:VCALENDAR\r\n");
    text
}
