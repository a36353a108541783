// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift extraction from iCalendar documents.
//!
//! Each `VEVENT` carries a free-text `SUMMARY` and a `DTSTART`. The summary
//! is matched against the configured keywords to pick a shift code; absence
//! events are kept apart until someone classifies them.

use crate::align::{AbsenceKind, DatedShift, UnresolvedAbsence, resolve_absences};
use crate::error::IngestError;
use crate::source::SourceFormat;
use ical::IcalParser;
use ical::parser::ical::component::IcalEvent;
use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::{debug, info};
use turni_domain::RosterConfig;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year][month][day]");

/// Shift entries and pending absences read from a calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarExtraction {
    /// One entry per recognized shift event, in source order.
    pub entries: Vec<DatedShift>,
    /// Absence events awaiting classification, in source order.
    pub absences: Vec<UnresolvedAbsence>,
}

impl CalendarExtraction {
    /// Returns the shift entries together with the classified absences.
    pub fn dated_entries<F>(&self, classify: F) -> Vec<DatedShift>
    where
        F: Fn(Date) -> Option<AbsenceKind>,
    {
        let mut entries: Vec<DatedShift> = self.entries.clone();
        entries.extend(resolve_absences(&self.absences, classify));
        entries
    }
}

/// What a single event turned out to be.
enum EventClass {
    Shift(DatedShift),
    Absence(UnresolvedAbsence),
}

fn property<'a>(event: &'a IcalEvent, name: &str) -> Option<&'a str> {
    event
        .properties
        .iter()
        .find(|property| property.name.eq_ignore_ascii_case(name))
        .and_then(|property| property.value.as_deref())
}

/// Reads the calendar date from a `DTSTART` value.
///
/// Accepts plain dates (`20240105`) and date-times with or without a zone
/// suffix (`20240105T070000Z`); only the date part is kept.
fn parse_start_date(value: &str) -> Option<Date> {
    let date_part: &str = value.trim().get(..8)?;
    Date::parse(date_part, DATE_FORMAT).ok()
}

fn classify_event(event: &IcalEvent, config: &RosterConfig) -> Option<EventClass> {
    let summary: &str = property(event, "SUMMARY").unwrap_or_default();
    let Some(date) = property(event, "DTSTART").and_then(parse_start_date) else {
        debug!(summary, "Dropping event without a usable start date");
        return None;
    };

    if config.is_absence(summary) {
        return Some(EventClass::Absence(UnresolvedAbsence { date }));
    }
    if let Some(code) = config.match_keyword(summary) {
        return Some(EventClass::Shift(DatedShift { date, code }));
    }

    debug!(summary, %date, "Dropping event matching no shift keyword");
    None
}

/// Extracts shift entries and absences from an iCalendar document.
///
/// # Errors
///
/// Returns `IngestError::UnreadableSource` if the document cannot be parsed
/// or holds no calendar, and `IngestError::NoRecognizableContent` if no event
/// matched a shift or absence keyword.
pub fn extract_calendar(
    bytes: &[u8],
    config: &RosterConfig,
) -> Result<CalendarExtraction, IngestError> {
    let format: SourceFormat = SourceFormat::Calendar;
    let mut extraction: CalendarExtraction = CalendarExtraction::default();
    let mut calendars: usize = 0;

    for calendar in IcalParser::new(bytes) {
        let calendar = calendar.map_err(|e| IngestError::UnreadableSource {
            format,
            reason: e.to_string(),
        })?;
        calendars += 1;

        for event in &calendar.events {
            match classify_event(event, config) {
                Some(EventClass::Shift(entry)) => extraction.entries.push(entry),
                Some(EventClass::Absence(absence)) => extraction.absences.push(absence),
                None => {}
            }
        }
    }

    if calendars == 0 {
        return Err(IngestError::UnreadableSource {
            format,
            reason: String::from("no VCALENDAR component found"),
        });
    }
    if extraction.entries.is_empty() && extraction.absences.is_empty() {
        return Err(IngestError::NoRecognizableContent { format });
    }

    info!(
        shifts = extraction.entries.len(),
        absences = extraction.absences.len(),
        "Extracted calendar events"
    );
    Ok(extraction)
}
