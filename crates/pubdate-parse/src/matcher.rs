//! Positional date-cluster matching.
//!
//! Each pattern names where a day, month, and year token sit, counted back
//! from the end of the token sequence (the extension is the last token).
//! Patterns are tried most specific first and the first hit wins.

use tracing::debug;

use crate::extract::{is_day, is_month, is_year, CanonicalDate};

/// A positional date layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePattern {
    pub name: &'static str,
    /// The token sequence must be strictly longer than this.
    pub longer_than: usize,
    pub day: usize,
    pub month: usize,
    pub year: usize,
    /// Tokens from `len - title_end` onwards belong to the date cluster.
    pub title_end: usize,
}

/// All recognized layouts in priority order.
pub const PATTERNS: &[DatePattern] = &[
    // The Mercantilist (UK) - Vol. 444 No. 9314 [24 Sep 2022] (TruePDF).pdf
    DatePattern {
        name: "bracketed",
        longer_than: 11,
        day: 5,
        month: 4,
        year: 3,
        title_end: 9,
    },
    // The.Mercantilist.11TH.July.17TH.TruePDF-July.2015.pdf
    DatePattern {
        name: "reissue",
        longer_than: 7,
        day: 7,
        month: 6,
        year: 2,
        title_end: 7,
    },
    // The.Mercantilist.Europe.July.29.TruePDF-4.August.2017.pdf
    DatePattern {
        name: "reissue-mdy",
        longer_than: 7,
        day: 6,
        month: 7,
        year: 2,
        title_end: 7,
    },
    // The.Mercantilist.Europe.April.1.7.TruePDF-2017.pdf
    DatePattern {
        name: "split-mdy",
        longer_than: 6,
        day: 5,
        month: 6,
        year: 2,
        title_end: 6,
    },
    // The.Old.Yorker.TruePDF-22.29.December.2014.pdf
    DatePattern {
        name: "range",
        longer_than: 5,
        day: 5,
        month: 3,
        year: 2,
        title_end: 5,
    },
    // The.Mercantilist-09.August.2014.pdf
    DatePattern {
        name: "common",
        longer_than: 4,
        day: 4,
        month: 3,
        year: 2,
        title_end: 4,
    },
];

/// A located date cluster and the title tokens in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch<'a> {
    pub pattern: &'static str,
    pub title: &'a [String],
    pub date: CanonicalDate,
}

impl DatePattern {
    pub fn try_match<'a>(&self, tokens: &'a [String]) -> Option<DateMatch<'a>> {
        let len = tokens.len();
        if len <= self.longer_than {
            return None;
        }

        let day = &tokens[len - self.day];
        let month = &tokens[len - self.month];
        let year = &tokens[len - self.year];
        if !(is_day(day) && is_month(month) && is_year(year)) {
            return None;
        }

        Some(DateMatch {
            pattern: self.name,
            title: &tokens[..len - self.title_end],
            date: CanonicalDate::from_tokens(day, month, year)?,
        })
    }
}

/// Find the first pattern that matches the token sequence.
pub fn match_date(tokens: &[String]) -> Option<DateMatch<'_>> {
    let found = PATTERNS.iter().find_map(|p| p.try_match(tokens));
    match &found {
        Some(m) => debug!(pattern = m.pattern, date = %m.date, ?tokens, "Matched date cluster"),
        None => debug!(?tokens, "No date pattern matched"),
    }
    found
}
