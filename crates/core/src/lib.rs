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
#![allow(clippy::multiple_crate_versions)]

mod error;
mod pipeline;
mod request;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use pipeline::{
    CALENDAR_OWNER, Evaluation, WorkerReport, evaluate_calendar, evaluate_document,
    evaluate_roster, evaluate_sequence,
};
pub use request::{MonthRequest, ShiftOverrides};
