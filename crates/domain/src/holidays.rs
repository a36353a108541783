// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Italian national public holidays.
//!
//! Ten holidays fall on fixed dates. Easter Monday ("Pasquetta") moves with
//! the Western Easter date of the year.

use serde::{Deserialize, Serialize};
use time::Month;

/// A public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The month the holiday falls in.
    pub month: Month,
    /// The day of month (1-based).
    pub day: u8,
    /// The Italian name of the holiday.
    pub name: String,
}

impl Holiday {
    fn new(month: Month, day: u8, name: &str) -> Self {
        Self {
            month,
            day,
            name: name.to_string(),
        }
    }
}

const FIXED_HOLIDAYS: [(Month, u8, &str); 10] = [
    (Month::January, 1, "Capodanno"),
    (Month::January, 6, "Epifania"),
    (Month::April, 25, "Liberazione"),
    (Month::May, 1, "Lavoro"),
    (Month::June, 2, "Repubblica"),
    (Month::August, 15, "Ferragosto"),
    (Month::November, 1, "Ognissanti"),
    (Month::December, 8, "Immacolata"),
    (Month::December, 25, "Natale"),
    (Month::December, 26, "S.Stefano"),
];

/// Computes the Western (Gregorian) Easter Sunday for a year.
///
/// Uses the anonymous Gregorian algorithm. The result always falls between
/// March 22 and April 25.
#[must_use]
pub const fn easter_sunday(year: i32) -> (Month, u8) {
    let a: i32 = year.rem_euclid(19);
    let b: i32 = year.div_euclid(100);
    let c: i32 = year.rem_euclid(100);
    let d: i32 = b / 4;
    let e: i32 = b % 4;
    let f: i32 = (b + 8) / 25;
    let g: i32 = (b - f + 1) / 3;
    let h: i32 = (19 * a + b - d - g + 15).rem_euclid(30);
    let i: i32 = c / 4;
    let k: i32 = c % 4;
    let l: i32 = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m: i32 = (a + 11 * h + 22 * l) / 451;
    let month: i32 = (h + l - 7 * m + 114) / 31;
    let day: i32 = (h + l - 7 * m + 114) % 31 + 1;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day: u8 = day as u8;
    if month == 3 {
        (Month::March, day)
    } else {
        (Month::April, day)
    }
}

/// Computes Easter Monday, the day after Easter Sunday.
#[must_use]
pub const fn easter_monday(year: i32) -> (Month, u8) {
    match easter_sunday(year) {
        (Month::March, 31) => (Month::April, 1),
        (month, day) => (month, day + 1),
    }
}

/// Returns the eleven Italian national holidays for a year, in calendar order.
#[must_use]
pub fn italian_holidays(year: i32) -> Vec<Holiday> {
    let mut holidays: Vec<Holiday> = FIXED_HOLIDAYS
        .iter()
        .map(|(month, day, name)| Holiday::new(*month, *day, name))
        .collect();

    let (month, day): (Month, u8) = easter_monday(year);
    holidays.push(Holiday::new(month, day, "Pasquetta"));

    holidays.sort_by_key(|holiday| (u8::from(holiday.month), holiday.day));
    holidays
}

/// Returns the holidays of a year that fall in the given month.
#[must_use]
pub fn holidays_in_month(year: i32, month: Month) -> Vec<Holiday> {
    italian_holidays(year)
        .into_iter()
        .filter(|holiday| holiday.month == month)
        .collect()
}
