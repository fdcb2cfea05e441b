use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::tables;

// ── Token classes ───────────────────────────────────────────────

/// 3, 12, 3rd, 8th, 29th.
static RE_DAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{1,2}[A-Za-z]{0,2}$").unwrap());

static RE_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

pub fn is_day(token: &str) -> bool {
    RE_DAY.is_match(token)
}

pub fn is_month(token: &str) -> bool {
    tables::is_month(token)
}

pub fn is_year(token: &str) -> bool {
    RE_YEAR.is_match(token)
}

// ── Field extraction ────────────────────────────────────────────

/// Two-digit day from a day token: "22nd" -> "22", "3rd" -> "03", "4" -> "04".
pub fn extract_day(token: &str) -> String {
    let digits = token.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    format!("{digits:0>2}")
}

/// Two-digit month from a month token, `None` if it is not a month name.
pub fn extract_month(token: &str) -> Option<&'static str> {
    tables::month_number(token)
}

/// A publication date in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalDate {
    year: String,
    month: &'static str,
    day: String,
}

impl CanonicalDate {
    /// Assemble a date from the three tokens of a matched cluster.
    ///
    /// Returns `None` unless the tokens classify as day, month, and year.
    pub fn from_tokens(day: &str, month: &str, year: &str) -> Option<Self> {
        if !is_day(day) || !is_year(year) {
            return None;
        }
        Some(Self {
            year: year.to_string(),
            month: extract_month(month)?,
            day: extract_day(day),
        })
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn month(&self) -> &str {
        self.month
    }

    pub fn day(&self) -> &str {
        &self.day
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

impl Serialize for CanonicalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
