use std::collections::HashSet;
use std::path;

use serde::Serialize;
use tracing::debug;

use crate::detect;
use crate::error::ParseError;
use crate::extract::CanonicalDate;
use crate::matcher;
use crate::tables;
use crate::tokenizer;

/// A successfully parsed periodical file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parsed {
    /// Title tokens with banned tokens removed and a leading "the" moved last.
    pub title: Vec<String>,
    pub date: CanonicalDate,
    /// Lowercase extension without the dot.
    pub extension: String,
    /// Name of the date pattern that matched.
    pub pattern: &'static str,
}

impl Parsed {
    /// The canonical file name: `title.tokens.YYYY-MM-DD.ext`.
    pub fn file_name(&self) -> String {
        let mut parts: Vec<String> = self.title.clone();
        parts.push(self.date.to_string());
        parts.push(self.extension.clone());
        parts.join(".")
    }
}

/// Filename normalizer.
///
/// The built-in banned tokens always apply; `with_banned` can add more.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    extra_banned: HashSet<String>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A normalizer that also drops the given tokens (matched case-insensitively).
    pub fn with_banned<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra_banned: extra
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn is_banned(&self, token: &str) -> bool {
        tables::is_banned(token) || self.extra_banned.contains(token)
    }

    /// Parse a file name into title, date, and extension.
    ///
    /// Returns `None` when no date cluster is found, when the name has no
    /// extension to carry over, or when nothing is left of the title.
    pub fn parse(&self, name: &str) -> Option<Parsed> {
        let tokens = tokenizer::tokenize(name);
        let extension = extension_of(name, &tokens)?;
        let found = matcher::match_date(&tokens)?;

        let mut title: Vec<String> = found
            .title
            .iter()
            .filter(|token| !self.is_banned(token))
            .cloned()
            .collect();

        if title.is_empty() {
            debug!(name, "Title is empty after removing banned tokens");
            return None;
        }

        // If there's a "the" on the front, move it to the back.
        if title[0] == "the" {
            title.rotate_left(1);
        }

        Some(Parsed {
            title,
            date: found.date,
            extension,
            pattern: found.pattern,
        })
    }

    /// Rename a bare file name into canonical form.
    ///
    /// Names that are already canonical or cannot be parsed come back
    /// unchanged. Passing a path instead of a bare name is an error.
    pub fn normalize(&self, name: &str) -> Result<String, ParseError> {
        if name.contains(path::is_separator) {
            return Err(ParseError::PathGiven(name.to_string()));
        }

        if detect::is_already_normalized(name) {
            debug!(name, "Already normalized");
            return Ok(name.to_string());
        }

        Ok(self
            .parse(name)
            .map(|parsed| parsed.file_name())
            .unwrap_or_else(|| name.to_string()))
    }
}

/// The lowercase text after the final dot, provided it is also the last token.
fn extension_of(name: &str, tokens: &[String]) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.to_lowercase();
    if ext.is_empty() || tokens.last() != Some(&ext) {
        return None;
    }
    Some(ext)
}

/// Parse with the built-in rules.
pub fn parse(name: &str) -> Option<Parsed> {
    Normalizer::default().parse(name)
}

/// Normalize with the built-in rules.
pub fn normalize_filename(name: &str) -> Result<String, ParseError> {
    Normalizer::default().normalize(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: &[(&str, &str)] = &[
        // empty
        ("", ""),
        // unrelated
        ("hello", "hello"),
        ("hello.pdf", "hello.pdf"),
        ("2016", "2016"),
        ("2016.pdf", "2016.pdf"),
        ("hello.2016.pdf", "hello.2016.pdf"),
        // already renamed
        ("economist.the.2014-08-09.pdf", "economist.the.2014-08-09.pdf"),
        ("new.yorker.the.2015-10-12.pdf", "new.yorker.the.2015-10-12.pdf"),
        // renamed
        ("The.Economist-09.August.2014.pdf", "economist.the.2014-08-09.pdf"),
        ("The.Economist-25.July.2015.pdf", "economist.the.2015-07-25.pdf"),
        ("The.Economist-30.January.2016.pdf", "economist.the.2016-01-30.pdf"),
        ("The.Economist.TruePDF-16.January.2016.pdf", "economist.the.2016-01-16.pdf"),
        (
            "The.Economist.Europe.TruePDF-30.July.2016.pdf",
            "economist.europe.the.2016-07-30.pdf",
        ),
        ("The.Economist.USA-3.September.2016.pdf", "economist.usa.the.2016-09-03.pdf"),
        (
            "The.Economist.USA.TruePDF-10.September.2016.pdf",
            "economist.usa.the.2016-09-10.pdf",
        ),
        (
            "The.Economist.11TH.July.17TH.TruePDF-July.2015.pdf",
            "economist.the.2015-07-11.pdf",
        ),
        (
            "The.Economist.1ST.November.7TH.TruePDF-November.2014.pdf",
            "economist.the.2014-11-01.pdf",
        ),
        (
            "The.Economist.28TH.November.4TH.TruePDF-December.2015.pdf",
            "economist.the.2015-11-28.pdf",
        ),
        ("The.New.Yorker-01.September.2014.pdf", "new.yorker.the.2014-09-01.pdf"),
        ("The.New.Yorker-18.January.2016.pdf", "new.yorker.the.2016-01-18.pdf"),
        ("The.New.Yorker.TruePDF-12.October.2015.pdf", "new.yorker.the.2015-10-12.pdf"),
        (
            "The.New.Yorker.TruePDF-22.29.December.2014.pdf",
            "new.yorker.the.2014-12-22.pdf",
        ),
        (
            "The Mercantilist (UK) - Vol. 444 No. 9314 [24 Sep 2022] (TruePDF).pdf",
            "mercantilist.uk.the.2022-09-24.pdf",
        ),
    ];

    #[test]
    fn test_rename_table() {
        for (original, expected) in CASES {
            let actual = normalize_filename(original).unwrap();
            assert_eq!(&actual, expected, "renaming {original:?}");
        }
    }

    #[test]
    fn test_idempotent() {
        for (original, _) in CASES {
            let once = normalize_filename(original).unwrap();
            let twice = normalize_filename(&once).unwrap();
            assert_eq!(once, twice, "second pass over {original:?}");
        }
    }

    #[test]
    fn test_path_is_rejected() {
        let err = normalize_filename("mags/The.Economist-09.August.2014.pdf").unwrap_err();
        assert!(matches!(err, ParseError::PathGiven(_)));
    }

    #[test]
    fn test_the_only_moves_from_the_front() {
        assert_eq!(
            normalize_filename("Economist.The.Weekly-09.August.2014.pdf").unwrap(),
            "economist.the.weekly.2014-08-09.pdf"
        );
        assert_eq!(
            normalize_filename("TruePDF.The.Economist-09.August.2014.pdf").unwrap(),
            "economist.the.2014-08-09.pdf"
        );
    }

    #[test]
    fn test_only_banned_title_is_left_alone() {
        let name = "TruePDF-09.August.2014.pdf";
        assert_eq!(normalize_filename(name).unwrap(), name);
    }

    #[test]
    fn test_extension_is_lowercased() {
        assert_eq!(
            normalize_filename("The Economist 09 Aug 2014.PDF").unwrap(),
            "economist.the.2014-08-09.pdf"
        );
    }

    #[test]
    fn test_name_without_extension_is_left_alone() {
        let name = "The Economist 09 August 2014 final";
        assert_eq!(normalize_filename(name).unwrap(), name);
    }

    #[test]
    fn test_extra_banned_tokens() {
        let normalizer = Normalizer::with_banned(["Scan", " "]);
        assert_eq!(
            normalizer.normalize("The.Economist.Scan-09.August.2014.pdf").unwrap(),
            "economist.the.2014-08-09.pdf"
        );
        // Built-in tokens still apply.
        assert!(normalizer.is_banned("truepdf"));
        assert!(!normalizer.is_banned(""));
    }

    #[test]
    fn test_parse_exposes_fields() {
        let parsed = parse("The.New.Yorker.TruePDF-22.29.December.2014.pdf").unwrap();
        assert_eq!(parsed.title, ["new", "yorker", "the"]);
        assert_eq!(parsed.date.to_string(), "2014-12-22");
        assert_eq!(parsed.extension, "pdf");
        assert_eq!(parsed.pattern, "range");
    }

    #[test]
    fn test_parsed_json() {
        let parsed = parse("The.Economist-09.August.2014.pdf").unwrap();
        let json: serde_json::Value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["date"], "2014-08-09");
        assert_eq!(json["extension"], "pdf");
        assert_eq!(json["pattern"], "common");
        assert_eq!(json["title"][0], "economist");
    }
}
