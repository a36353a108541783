// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly hour metrics for a single worker.
//!
//! This module provides a pure, deterministic calculation of worked hours
//! against the contractual target for one calendar month. The result is a
//! read-only snapshot: any change to the inputs requires computing a new one.

use crate::calendar::{count_sundays, days_in_month, first_day, parse_month};
use crate::config::RosterConfig;
use crate::error::DomainError;
use crate::holidays::{Holiday, holidays_in_month};
use crate::shift_code::ShiftCode;
use crate::types::ShiftSequence;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Month;

/// One day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlot {
    /// Day of month (1-based).
    pub day: u8,
    /// The shift assigned to the day.
    pub code: ShiftCode,
}

/// A Monday-first calendar week. Days outside the month are `None`.
pub type Week = [Option<DaySlot>; 7];

/// Computed hour metrics for one worker and one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyMetrics {
    year: i32,
    month: Month,
    days_in_month: u8,
    sundays: u8,
    holidays: Vec<Holiday>,
    shift_counts: BTreeMap<ShiftCode, u32>,
    hours_by_code: BTreeMap<ShiftCode, i32>,
    worked_hours: i32,
    target_hours: i32,
    hours_missing: i32,
    hours_overtime: i32,
    weeks: Vec<Week>,
}

impl MonthlyMetrics {
    /// Returns the evaluated year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the evaluated month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the number of days in the month.
    #[must_use]
    pub const fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    /// Returns the number of Sundays in the month.
    #[must_use]
    pub const fn sundays(&self) -> u8 {
        self.sundays
    }

    /// Returns the public holidays that fall in the month.
    #[must_use]
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Returns the number of public holidays in the month.
    #[must_use]
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }

    /// Returns the names of the public holidays in the month.
    #[must_use]
    pub fn holiday_names(&self) -> Vec<&str> {
        self.holidays.iter().map(|h| h.name.as_str()).collect()
    }

    /// Returns how many days carry each shift code.
    #[must_use]
    pub const fn shift_counts(&self) -> &BTreeMap<ShiftCode, u32> {
        &self.shift_counts
    }

    /// Returns the number of days carrying a code.
    #[must_use]
    pub fn count(&self, code: ShiftCode) -> u32 {
        self.shift_counts.get(&code).copied().unwrap_or(0)
    }

    /// Returns the hours credited per shift code.
    #[must_use]
    pub const fn hours_by_code(&self) -> &BTreeMap<ShiftCode, i32> {
        &self.hours_by_code
    }

    /// Returns the total worked hours.
    #[must_use]
    pub const fn worked_hours(&self) -> i32 {
        self.worked_hours
    }

    /// Returns the contractual target hours.
    #[must_use]
    pub const fn target_hours(&self) -> i32 {
        self.target_hours
    }

    /// Returns the hours short of the target (zero when on or above target).
    #[must_use]
    pub const fn hours_missing(&self) -> i32 {
        self.hours_missing
    }

    /// Returns the hours above the target (zero when on or below target).
    #[must_use]
    pub const fn hours_overtime(&self) -> i32 {
        self.hours_overtime
    }

    /// Returns the signed deviation, worked minus target.
    #[must_use]
    pub const fn deviation(&self) -> i32 {
        self.worked_hours - self.target_hours
    }

    /// Returns the Monday-first month grid.
    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }
}

/// Calculates monthly metrics for a month given by name.
///
/// # Arguments
///
/// * `shifts` - Day-indexed sequence, already adjusted
/// * `month` - Italian or English month name, or month number
/// * `year` - The calendar year
/// * `config` - Hour table and daily target
///
/// # Errors
///
/// Returns an error if the month name is not recognized, the calendar
/// month cannot be resolved, or an hour total overflows.
pub fn calculate_metrics(
    shifts: &ShiftSequence,
    month: &str,
    year: i32,
    config: &RosterConfig,
) -> Result<MonthlyMetrics, DomainError> {
    let month: Month = parse_month(month)?;
    calculate_metrics_for(shifts, month, year, config)
}

/// Calculates monthly metrics for a resolved month.
///
/// This is a pure, deterministic calculation that:
/// - Fits the sequence to the month length, padding with unassigned days
/// - Counts each shift code and multiplies by its hour value
/// - Sums worked hours, leaving out rest, post-night and accrual codes
/// - Derives the target from working days (days minus Sundays minus holidays)
/// - Splits the deviation into missing hours and overtime
///
/// Unassigned days are working days against the target; they are not excused.
///
/// # Errors
///
/// Returns an error if the calendar month cannot be resolved, or
/// `DomainError::HourOverflow` if the configured hour values push a total
/// out of range.
pub fn calculate_metrics_for(
    shifts: &ShiftSequence,
    month: Month,
    year: i32,
    config: &RosterConfig,
) -> Result<MonthlyMetrics, DomainError> {
    let days: u8 = days_in_month(year, month)?;
    let sundays: u8 = count_sundays(year, month)?;
    let holidays: Vec<Holiday> = holidays_in_month(year, month);

    let fitted: ShiftSequence = shifts.clone().fit_to_month(usize::from(days));

    let overflow = |quantity: &'static str| DomainError::HourOverflow { quantity };

    let mut shift_counts: BTreeMap<ShiftCode, u32> = BTreeMap::new();
    let mut hours_by_code: BTreeMap<ShiftCode, i32> = BTreeMap::new();
    for code in ShiftCode::ALL {
        let count: u32 = u32::try_from(fitted.count(code)).unwrap_or(u32::MAX);
        let per_shift: i32 = config.hour_table.hours(code);
        let count_signed: i32 = i32::try_from(count).unwrap_or(i32::MAX);
        let hours: i32 = count_signed
            .checked_mul(per_shift)
            .ok_or_else(|| overflow("hours per code"))?;
        shift_counts.insert(code, count);
        hours_by_code.insert(code, hours);
    }

    let worked_hours: i32 = hours_by_code
        .iter()
        .filter(|(code, _)| !code.is_excluded_from_worked())
        .try_fold(0_i32, |total, (_, hours)| total.checked_add(*hours))
        .ok_or_else(|| overflow("worked hours"))?;

    let holiday_count: i32 = i32::try_from(holidays.len()).unwrap_or(i32::MAX);
    let working_days: i32 = i32::from(days) - i32::from(sundays) - holiday_count;
    let target_hours: i32 = working_days
        .checked_mul(config.daily_target_hours)
        .ok_or_else(|| overflow("target hours"))?;

    let deviation: i32 = worked_hours
        .checked_sub(target_hours)
        .ok_or_else(|| overflow("deviation"))?;
    let shortfall: i32 = deviation
        .checked_neg()
        .ok_or_else(|| overflow("missing hours"))?;
    let hours_missing: i32 = shortfall.max(0);
    let hours_overtime: i32 = deviation.max(0);

    let weeks: Vec<Week> = month_grid(year, month, &fitted)?;

    Ok(MonthlyMetrics {
        year,
        month,
        days_in_month: days,
        sundays,
        holidays,
        shift_counts,
        hours_by_code,
        worked_hours,
        target_hours,
        hours_missing,
        hours_overtime,
        weeks,
    })
}

/// Lays the sequence out as Monday-first calendar weeks.
///
/// # Errors
///
/// Returns an error if the calendar month cannot be resolved.
pub fn month_grid(
    year: i32,
    month: Month,
    shifts: &ShiftSequence,
) -> Result<Vec<Week>, DomainError> {
    let days: u8 = days_in_month(year, month)?;
    let offset: usize = usize::from(first_day(year, month)?.weekday().number_days_from_monday());

    let mut weeks: Vec<Week> = Vec::new();
    let mut week: Week = [None; 7];
    let mut column: usize = offset;

    for day in 1..=days {
        let code: ShiftCode = shifts
            .day(usize::from(day))
            .unwrap_or(ShiftCode::Unassigned);
        week[column] = Some(DaySlot { day, code });
        column += 1;
        if column == 7 {
            weeks.push(week);
            week = [None; 7];
            column = 0;
        }
    }
    if column > 0 {
        weeks.push(week);
    }

    Ok(weeks)
}
