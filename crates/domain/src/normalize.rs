// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Canonicalization of free-text roster cells and worker names.
//!
//! Roster exports mix worker names, shift codes and decoration in the same
//! cells. Names are compared in a canonical uppercase form that keeps only
//! Latin letters (including the accented Italian capitals) and single spaces.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// Patterns are literals; compilation cannot fail.
#[allow(clippy::expect_used)]
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-ZÀÈÉÌÒÙ\s]").expect("valid pattern"));

#[allow(clippy::expect_used)]
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid pattern"));

#[allow(clippy::expect_used)]
static NAME_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-ZÀÈÉÌÒÙ]{2,}(\s+[A-ZÀÈÉÌÒÙ]{2,})+$").expect("valid pattern")
});

/// Normalizes free text into a comparable uppercase token.
///
/// Uppercases, removes every character that is not a Latin capital, an
/// accented Italian capital or whitespace, collapses whitespace runs to a
/// single space and trims. Applying it twice gives the same result.
#[must_use]
pub fn normalize(text: &str) -> String {
    let upper: String = text.to_uppercase();
    let letters_only = DISALLOWED.replace_all(&upper, "");
    WHITESPACE
        .replace_all(&letters_only, " ")
        .trim()
        .to_string()
}

/// Returns whether a normalized token has the shape of a person's name.
///
/// A name is two or more whitespace-separated groups of at least two letters.
#[must_use]
pub fn looks_like_name(token: &str) -> bool {
    NAME_SHAPE.is_match(token)
}

/// A fixed list of canonical full names that extraction snaps to.
///
/// Rosters often split names across cells or add/drop a middle token. When
/// a normalized cell contains one of these names, the canonical spelling is
/// used instead of the raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KnownNames {
    names: Vec<String>,
}

impl KnownNames {
    /// Creates the list, normalizing every entry.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| normalize(name.as_ref()))
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    /// Returns the configured names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the first known name contained in the normalized token.
    #[must_use]
    pub fn snap(&self, token: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|name| token.contains(name.as_str()))
            .map(String::as_str)
    }
}

impl From<Vec<String>> for KnownNames {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<KnownNames> for Vec<String> {
    fn from(known: KnownNames) -> Self {
        known.names
    }
}

/// Resolves raw cell text to a canonical worker name.
///
/// Returns `None` when the normalized text does not look like a name.
#[must_use]
pub fn canonical_worker_name(text: &str, known: &KnownNames) -> Option<String> {
    let token: String = normalize(text);
    if !looks_like_name(&token) {
        return None;
    }
    Some(known.snap(&token).map_or(token, str::to_string))
}
