// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Holiday, Month, easter_monday, easter_sunday, holidays_in_month, italian_holidays};
use time::{Date, Duration, Weekday};

fn to_date(year: i32, (month, day): (Month, u8)) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

#[test]
fn test_every_year_has_eleven_holidays() {
    for year in 1900..=2200 {
        assert_eq!(italian_holidays(year).len(), 11, "year {year}");
    }
}

#[test]
fn test_easter_sunday_is_a_sunday() {
    for year in 1900..=2200 {
        let sunday: Date = to_date(year, easter_sunday(year));
        assert_eq!(sunday.weekday(), Weekday::Sunday, "year {year}");
    }
}

#[test]
fn test_easter_monday_is_day_after_easter_sunday() {
    for year in 1900..=2200 {
        let sunday: Date = to_date(year, easter_sunday(year));
        let monday: Date = to_date(year, easter_monday(year));
        assert_eq!(monday, sunday + Duration::days(1), "year {year}");
    }
}

#[test]
fn test_known_easter_dates() {
    assert_eq!(easter_sunday(2008), (Month::March, 23));
    assert_eq!(easter_sunday(2019), (Month::April, 21));
    assert_eq!(easter_sunday(2023), (Month::April, 9));
    assert_eq!(easter_sunday(2024), (Month::March, 31));
    assert_eq!(easter_sunday(2038), (Month::April, 25));
    assert_eq!(easter_sunday(2285), (Month::March, 22));
}

#[test]
fn test_pasquetta_rolls_over_into_april() {
    // Easter 2024 is March 31.
    assert_eq!(easter_monday(2024), (Month::April, 1));
    let april: Vec<Holiday> = holidays_in_month(2024, Month::April);
    let names: Vec<&str> = april.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, ["Pasquetta", "Liberazione"]);
}

#[test]
fn test_holidays_are_in_calendar_order() {
    let holidays: Vec<Holiday> = italian_holidays(2025);
    let keys: Vec<(u8, u8)> = holidays
        .iter()
        .map(|h| (u8::from(h.month), h.day))
        .collect();
    let mut sorted: Vec<(u8, u8)> = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
    assert_eq!(holidays[0].name, "Capodanno");
    assert_eq!(holidays[10].name, "S.Stefano");
}

#[test]
fn test_holidays_in_january() {
    let january: Vec<Holiday> = holidays_in_month(2024, Month::January);
    assert_eq!(january.len(), 2);
    assert_eq!(january[0].day, 1);
    assert_eq!(january[1].name, "Epifania");
}

#[test]
fn test_month_without_holidays() {
    assert!(holidays_in_month(2025, Month::February).is_empty());
}
