// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod adjust;
mod calendar;
mod config;
mod error;
mod holidays;
mod metrics;
mod normalize;
mod shift_code;
mod types;

#[cfg(test)]
mod tests;

pub use adjust::adjust_shifts;
pub use calendar::{count_sundays, days_in_month, italian_month_name, month_dates, parse_month};
pub use config::{KeywordRule, RosterConfig};
pub use error::DomainError;
pub use holidays::{Holiday, easter_monday, easter_sunday, holidays_in_month, italian_holidays};
pub use metrics::{
    DaySlot, MonthlyMetrics, Week, calculate_metrics, calculate_metrics_for, month_grid,
};
pub use normalize::{KnownNames, canonical_worker_name, looks_like_name, normalize};
pub use shift_code::{HourTable, ShiftCode};
pub use types::{ShiftSequence, WorkerRoster};

// Calendar types that appear in the public API.
pub use time::{Date, Month};
