// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use turni_domain::{ShiftCode, ShiftSequence};

pub fn seq(tokens: &[&str]) -> ShiftSequence {
    tokens.iter().map(|t| t.parse::<ShiftCode>().unwrap()).collect()
}

/// Builds an iCalendar document from `(dtstart, summary)` pairs.
pub fn ics(events: &[(&str, &str)]) -> String {
    let mut text: String =
        String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Ward//Roster//IT\r\n");
    for (idx, (start, summary)) in events.iter().enumerate() {
        text.push_str("BEGIN:VEVENT\r\n");
        text.push_str(&format!("UID:event-{idx}@ward\r\n"));
        text.push_str(&format!("DTSTART:{start}\r\n"));
        text.push_str(&format!("SUMMARY:{summary}\r\n"));
        text.push_str("END:VEVENT\r\n");
    }
    text.push_str("END:VCALENDAR\r\n");
    text
}
