// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Injected roster configuration.
//!
//! Every table the extractors and the metrics engine consult lives here
//! so a ward can override it without touching code. Missing fields fall
//! back to the built-in defaults when deserializing.

use crate::normalize::KnownNames;
use crate::shift_code::{HourTable, ShiftCode};
use serde::{Deserialize, Serialize};

/// Maps a calendar event keyword to a shift code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    /// Text searched for (case-insensitive) in the event summary.
    pub keyword: String,
    /// Code assigned when the keyword is found.
    pub code: ShiftCode,
}

impl KeywordRule {
    /// Creates a rule.
    #[must_use]
    pub fn new(keyword: &str, code: ShiftCode) -> Self {
        Self {
            keyword: keyword.to_string(),
            code,
        }
    }
}

/// Configuration shared by extraction and metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Hours credited per shift code.
    pub hour_table: HourTable,
    /// Canonical full names that extracted names snap to.
    pub known_names: KnownNames,
    /// Ordered keyword rules for calendar summaries; the first match wins.
    pub keyword_rules: Vec<KeywordRule>,
    /// Keywords that mark a calendar event as an absence.
    pub absence_keywords: Vec<String>,
    /// Contractual hours per working day.
    pub daily_target_hours: i32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            hour_table: HourTable::default(),
            known_names: KnownNames::default(),
            keyword_rules: vec![
                KeywordRule::new("MATTINA", ShiftCode::Morning),
                KeywordRule::new("POMERIGGIO", ShiftCode::Afternoon),
                KeywordRule::new("SMONTO", ShiftCode::PostNight),
                KeywordRule::new("NOTTE", ShiftCode::Night),
                KeywordRule::new("RIPOSO", ShiftCode::Rest),
            ],
            absence_keywords: vec![String::from("ASSENZA")],
            daily_target_hours: 6,
        }
    }
}

impl RosterConfig {
    /// Returns the code of the first keyword rule found in the summary.
    #[must_use]
    pub fn match_keyword(&self, summary: &str) -> Option<ShiftCode> {
        let summary: String = summary.to_uppercase();
        self.keyword_rules
            .iter()
            .find(|rule| summary.contains(&rule.keyword.to_uppercase()))
            .map(|rule| rule.code)
    }

    /// Returns whether the summary contains an absence keyword.
    #[must_use]
    pub fn is_absence(&self, summary: &str) -> bool {
        let summary: String = summary.to_uppercase();
        self.absence_keywords
            .iter()
            .any(|keyword| summary.contains(&keyword.to_uppercase()))
    }
}
