// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month-level calendar helpers.

use crate::error::DomainError;
use time::{Date, Month, Weekday};

const ITALIAN_MONTHS: [(&str, Month); 12] = [
    ("GENNAIO", Month::January),
    ("FEBBRAIO", Month::February),
    ("MARZO", Month::March),
    ("APRILE", Month::April),
    ("MAGGIO", Month::May),
    ("GIUGNO", Month::June),
    ("LUGLIO", Month::July),
    ("AGOSTO", Month::August),
    ("SETTEMBRE", Month::September),
    ("OTTOBRE", Month::October),
    ("NOVEMBRE", Month::November),
    ("DICEMBRE", Month::December),
];

const ENGLISH_MONTHS: [(&str, Month); 12] = [
    ("JANUARY", Month::January),
    ("FEBRUARY", Month::February),
    ("MARCH", Month::March),
    ("APRIL", Month::April),
    ("MAY", Month::May),
    ("JUNE", Month::June),
    ("JULY", Month::July),
    ("AUGUST", Month::August),
    ("SEPTEMBER", Month::September),
    ("OCTOBER", Month::October),
    ("NOVEMBER", Month::November),
    ("DECEMBER", Month::December),
];

/// Parses a month from its Italian name, English name or number (1-12).
///
/// Names are matched case-insensitively.
///
/// # Errors
///
/// Returns `DomainError::UnknownMonth` if the value matches no month.
pub fn parse_month(value: &str) -> Result<Month, DomainError> {
    let token: String = value.trim().to_uppercase();

    if let Ok(number) = token.parse::<u8>() {
        return Month::try_from(number).map_err(|_| DomainError::UnknownMonth(value.to_string()));
    }

    ITALIAN_MONTHS
        .iter()
        .chain(ENGLISH_MONTHS.iter())
        .find(|(name, _)| *name == token)
        .map(|(_, month)| *month)
        .ok_or_else(|| DomainError::UnknownMonth(value.to_string()))
}

/// Returns the Italian display name of a month.
#[must_use]
pub const fn italian_month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Gennaio",
        Month::February => "Febbraio",
        Month::March => "Marzo",
        Month::April => "Aprile",
        Month::May => "Maggio",
        Month::June => "Giugno",
        Month::July => "Luglio",
        Month::August => "Agosto",
        Month::September => "Settembre",
        Month::October => "Ottobre",
        Month::November => "Novembre",
        Month::December => "Dicembre",
    }
}

/// Returns the first day of a month.
///
/// # Errors
///
/// Returns `DomainError::InvalidCalendarDate` if the year is out of the
/// supported calendar range.
pub fn first_day(year: i32, month: Month) -> Result<Date, DomainError> {
    Date::from_calendar_date(year, month, 1).map_err(|e| DomainError::InvalidCalendarDate {
        year,
        month: u8::from(month),
        reason: e.to_string(),
    })
}

/// Returns the number of days in a month.
///
/// # Errors
///
/// Returns `DomainError::InvalidCalendarDate` if the year is out of the
/// supported calendar range.
pub fn days_in_month(year: i32, month: Month) -> Result<u8, DomainError> {
    first_day(year, month)?;
    Ok(month.length(year))
}

/// Returns every date of a month in order.
///
/// # Errors
///
/// Returns `DomainError::InvalidCalendarDate` if the month cannot be built.
pub fn month_dates(year: i32, month: Month) -> Result<Vec<Date>, DomainError> {
    let days: u8 = days_in_month(year, month)?;
    (1..=days)
        .map(|day| {
            Date::from_calendar_date(year, month, day).map_err(|e| {
                DomainError::InvalidCalendarDate {
                    year,
                    month: u8::from(month),
                    reason: e.to_string(),
                }
            })
        })
        .collect()
}

/// Counts the Sundays in a month.
///
/// # Errors
///
/// Returns `DomainError::InvalidCalendarDate` if the month cannot be built.
pub fn count_sundays(year: i32, month: Month) -> Result<u8, DomainError> {
    let sundays: usize = month_dates(year, month)?
        .iter()
        .filter(|date| date.weekday() == Weekday::Sunday)
        .count();
    Ok(u8::try_from(sundays).unwrap_or(u8::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_italian() {
        assert_eq!(parse_month("Gennaio").unwrap(), Month::January);
        assert_eq!(parse_month("dicembre").unwrap(), Month::December);
    }

    #[test]
    fn test_parse_month_english_and_number() {
        assert_eq!(parse_month("March").unwrap(), Month::March);
        assert_eq!(parse_month("7").unwrap(), Month::July);
    }

    #[test]
    fn test_parse_month_rejects_unknown() {
        assert_eq!(
            parse_month("Brumaio"),
            Err(DomainError::UnknownMonth(String::from("Brumaio")))
        );
        assert!(parse_month("13").is_err());
        assert!(parse_month("0").is_err());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, Month::February).unwrap(), 29);
        assert_eq!(days_in_month(2023, Month::February).unwrap(), 28);
        assert_eq!(days_in_month(1900, Month::February).unwrap(), 28);
        assert_eq!(days_in_month(2000, Month::February).unwrap(), 29);
        assert_eq!(days_in_month(2024, Month::April).unwrap(), 30);
        assert_eq!(days_in_month(2024, Month::January).unwrap(), 31);
    }

    #[test]
    fn test_days_in_month_rejects_out_of_range_year() {
        let result: Result<u8, DomainError> = days_in_month(100_000, Month::January);
        assert!(matches!(
            result,
            Err(DomainError::InvalidCalendarDate { year: 100_000, month: 1, .. })
        ));
    }

    #[test]
    fn test_count_sundays() {
        // January 2024 starts on a Monday.
        assert_eq!(count_sundays(2024, Month::January).unwrap(), 4);
        // September 2024 starts on a Sunday and has 30 days.
        assert_eq!(count_sundays(2024, Month::September).unwrap(), 5);
        assert_eq!(count_sundays(2026, Month::February).unwrap(), 4);
    }

    #[test]
    fn test_month_name_round_trip() {
        for (_, month) in ITALIAN_MONTHS {
            assert_eq!(parse_month(italian_month_name(month)).unwrap(), month);
        }
    }
}
