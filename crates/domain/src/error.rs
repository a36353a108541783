// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while resolving calendars or shift codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The month name or number could not be recognized.
    UnknownMonth(String),
    /// The year/month combination cannot be represented as a calendar date.
    InvalidCalendarDate {
        /// The requested year.
        year: i32,
        /// The requested month (1-based).
        month: u8,
        /// The underlying calendar error message.
        reason: String,
    },
    /// A token does not name a known shift code.
    InvalidShiftCode(String),
    /// A day-of-month is outside the month being evaluated.
    InvalidDay {
        /// The invalid day (1-based).
        day: u8,
        /// The number of days in the month.
        days_in_month: u8,
    },
    /// An hour total does not fit the hour type with the configured values.
    HourOverflow {
        /// The total being computed.
        quantity: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMonth(value) => write!(f, "Unknown month: '{value}'"),
            Self::InvalidCalendarDate {
                year,
                month,
                reason,
            } => {
                write!(f, "Invalid calendar month {month}/{year}: {reason}")
            }
            Self::InvalidShiftCode(value) => write!(f, "Invalid shift code: '{value}'"),
            Self::InvalidDay { day, days_in_month } => {
                write!(f, "Invalid day {day}: month has {days_in_month} days")
            }
            Self::HourOverflow { quantity } => {
                write!(f, "Hour overflow while computing {quantity}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
