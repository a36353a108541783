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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod report;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use report::ReportText;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;
use turni::{Evaluation, MonthRequest, ShiftOverrides, WorkerReport, evaluate_document};
use turni_domain::{RosterConfig, ShiftCode};
use turni_ingest::AbsenceKind;

/// Turni - monthly worked hours against the contractual target
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Roster spreadsheet (xls, xlsx, csv) or personal calendar (ics)
    file: PathBuf,

    /// Month to evaluate: Italian or English name, or number
    #[arg(short, long)]
    month: String,

    /// Calendar year
    #[arg(short, long)]
    year: i32,

    /// Only report this worker
    #[arg(short, long)]
    worker: Option<String>,

    /// JSON configuration (hour table, keywords, known names, daily target)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Classify every calendar absence as `leave` or `sick`
    #[arg(long, value_name = "KIND")]
    absences: Option<AbsenceKind>,

    /// Correct one day of the selected worker, e.g. `--set 12=MAL`
    #[arg(long = "set", value_name = "DAY=CODE", value_parser = parse_day_override)]
    overrides: Vec<(u8, ShiftCode)>,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn run(self) -> Result<()> {
        let config: RosterConfig = match &self.config {
            Some(path) => load_config(path)?,
            None => RosterConfig::default(),
        };
        let request: MonthRequest = MonthRequest::parse(&self.month, self.year)?;
        let bytes: Vec<u8> = std::fs::read(&self.file)
            .with_context(|| format!("Failed to read {}", self.file.display()))?;

        let evaluation: Evaluation = Evaluation {
            request,
            worker: self.worker,
            overrides: self.overrides.into_iter().collect::<ShiftOverrides>(),
            absence_kind: self.absences,
            config,
        };
        let reports: Vec<WorkerReport> = evaluate_document(&bytes, &evaluation)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for worker_report in &reports {
                print!("{}", ReportText(worker_report));
            }
        }
        Ok(())
    }
}

fn load_config(path: &Path) -> Result<RosterConfig> {
    let text: String = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: RosterConfig = serde_json::from_str(&text)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    info!(path = %path.display(), "Loaded roster configuration");
    Ok(config)
}

fn parse_day_override(value: &str) -> Result<(u8, ShiftCode), String> {
    let (day, code) = value
        .split_once('=')
        .ok_or_else(|| format!("expected DAY=CODE, got '{value}'"))?;
    let day: u8 = day
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a day of the month", day.trim()))?;
    let code: ShiftCode = code.parse().map_err(|e| format!("{e}"))?;
    Ok((day, code))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    if let Err(err) = args.run() {
        error!("{err}");
        std::process::exit(1);
    }
    Ok(())
}
