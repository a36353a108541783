// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::UnknownMonth(String::from("Brumaio"));
    assert_eq!(format!("{err}"), "Unknown month: 'Brumaio'");

    let err: DomainError = DomainError::InvalidCalendarDate {
        year: 100_000,
        month: 1,
        reason: String::from("year out of range"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid calendar month 1/100000: year out of range"
    );

    let err: DomainError = DomainError::InvalidShiftCode(String::from("XY"));
    assert_eq!(format!("{err}"), "Invalid shift code: 'XY'");

    let err: DomainError = DomainError::InvalidDay {
        day: 31,
        days_in_month: 30,
    };
    assert_eq!(format!("{err}"), "Invalid day 31: month has 30 days");

    let err: DomainError = DomainError::HourOverflow {
        quantity: "worked hours",
    };
    assert_eq!(format!("{err}"), "Hour overflow while computing worked hours");
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::UnknownMonth(String::from("x")));
    assert_eq!(err.to_string(), "Unknown month: 'x'");
}
