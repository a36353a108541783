// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Plain-text rendering of a worker's monthly report.

use std::fmt;
use turni::WorkerReport;
use turni_domain::{DaySlot, MonthlyMetrics, ShiftCode, Week, italian_month_name};

const WEEKDAYS: [&str; 7] = ["Lun", "Mar", "Mer", "Gio", "Ven", "Sab", "Dom"];

fn cell(slot: Option<&DaySlot>) -> String {
    match slot {
        Some(slot) if slot.code == ShiftCode::Unassigned => format!("{:>2} {:<3}", slot.day, "-"),
        Some(slot) => format!("{:>2} {:<3}", slot.day, slot.code.as_str()),
        None => " ".repeat(6),
    }
}

fn render_week(week: &Week) -> String {
    week.iter()
        .map(|slot| cell(slot.as_ref()))
        .collect::<Vec<String>>()
        .join(" ")
        .trim_end()
        .to_string()
}

/// Displays one report as a block of text ending in a blank line.
pub struct ReportText<'a>(pub &'a WorkerReport);

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report: &WorkerReport = self.0;
        let metrics: &MonthlyMetrics = &report.metrics;

        writeln!(
            f,
            "{} ({} {})",
            report.worker,
            italian_month_name(metrics.month()),
            metrics.year()
        )?;

        let holidays: String = if metrics.holiday_count() == 0 {
            String::from("none")
        } else {
            metrics.holiday_names().join(", ")
        };
        writeln!(
            f,
            "Days: {}  Sundays: {}  Holidays: {}",
            metrics.days_in_month(),
            metrics.sundays(),
            holidays
        )?;
        writeln!(f)?;

        let header: Vec<String> = WEEKDAYS.iter().map(|day| format!("{day:<6}")).collect();
        writeln!(f, "{}", header.join(" ").trim_end())?;
        for week in metrics.weeks() {
            writeln!(f, "{}", render_week(week))?;
        }
        writeln!(f)?;

        for (code, count) in metrics.shift_counts() {
            if *count == 0 || *code == ShiftCode::Unassigned {
                continue;
            }
            let hours: i32 = metrics.hours_by_code().get(code).copied().unwrap_or_default();
            writeln!(f, "{:<4}{count:>3} days {hours:>5} h", code.as_str())?;
        }
        let unassigned: u32 = metrics.count(ShiftCode::Unassigned);
        if unassigned > 0 {
            writeln!(f, "{:<4}{unassigned:>3} days", "-")?;
        }
        writeln!(f)?;

        writeln!(f, "Worked:   {:>5} h", metrics.worked_hours())?;
        writeln!(f, "Target:   {:>5} h", metrics.target_hours())?;
        if metrics.hours_overtime() > 0 {
            writeln!(f, "Overtime: {:>5} h", metrics.hours_overtime())?;
        } else {
            writeln!(f, "Missing:  {:>5} h", metrics.hours_missing())?;
        }
        writeln!(f)
    }
}
