// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Era detection.
//!
//! An era is written either as a leading sign or as a trailing marker:
//!
//! | Era | Sign | Suffixes (case-insensitive) |
//! |-----|------|-----------------------------|
//! | [`Era::BeforeCommonEra`] | `-` | `BC`, `B.C.`, `BCE`, `B.C.E.`, `Before Christ`, `Before Common Era`, `Before Current Era`, `Before Christian Era` |
//! | [`Era::CommonEra`] | `+` | `CE`, `C.E.`, `AD`, `A.D.`, `Common Era`, `Current Era`, `Christian Era`, `After Christ`, `Anno Domini` |
//!
//! Writing both is an error, even when they agree.

use crate::error::{ParseError, ParseErrorKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static BCE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:B\.?\s*C\.?(?:\s*E\.?)?|Before\s+C(?:hrist|(?:ommon|urrent|hristian)\s+Era))$",
    )
    .expect("BCE suffix pattern")
});

static CE_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:C\.?\s*E\.?|A\.?\s*D\.?|C(?:ommon|urrent|hristian)\s+Era|After\s+Christ|Anno\s+Domini)$",
    )
    .expect("CE suffix pattern")
});

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Era {
    BeforeCommonEra,
    #[default]
    CommonEra,
}

impl Era {
    /// `'-'` or `'+'`.
    #[inline]
    pub const fn sign(self) -> char {
        match self {
            Era::BeforeCommonEra => '-',
            Era::CommonEra => '+',
        }
    }

    #[inline]
    pub const fn is_before_common_era(self) -> bool {
        matches!(self, Era::BeforeCommonEra)
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Era::BeforeCommonEra => "BCE",
            Era::CommonEra => "CE",
        })
    }
}

/// Splits era information off a piece of text.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EraSignExtractor;

impl EraSignExtractor {
    pub const FORMAT: &'static str = "era";

    /// Returns the era and the remaining text, defaulting to the common era.
    ///
    /// ```
    /// use deeptime::{Era, EraSignExtractor};
    ///
    /// let (era, rest) = EraSignExtractor::extract(" 100 B.C.E. ")?;
    /// assert_eq!((era, rest.as_str()), (Era::BeforeCommonEra, "100"));
    /// # Ok::<(), deeptime::ParseError>(())
    /// ```
    pub fn extract(input: &str) -> Result<(Era, String), ParseError> {
        let (era, rest) = Self::extract_marker(input)?;
        Ok((era.unwrap_or_default(), rest))
    }

    /// Like [`extract`](Self::extract), but `None` when the text carries no
    /// era marker at all.
    pub fn extract_marker(input: &str) -> Result<(Option<Era>, String), ParseError> {
        let trimmed = input.trim();

        let (sign_era, unsigned) = match trimmed.chars().next() {
            Some('-') => (Some(Era::BeforeCommonEra), trimmed[1..].trim_start()),
            Some('+') => (Some(Era::CommonEra), trimmed[1..].trim_start()),
            _ => (None, trimmed),
        };

        match (sign_era, Self::split_suffix(unsigned)) {
            (Some(_), Some(_)) => Err(ParseError::new(
                ParseErrorKind::AmbiguousEra,
                input,
                Self::FORMAT,
            )),
            (Some(era), None) => Ok((Some(era), unsigned.to_owned())),
            (None, Some((era, rest))) => Ok((Some(era), rest.to_owned())),
            (None, None) => Ok((None, unsigned.to_owned())),
        }
    }

    /// Detects a trailing era marker only; leading signs stay in the text.
    ///
    /// Returns the era and the text before the marker, right-trimmed.
    pub fn split_suffix(input: &str) -> Option<(Era, &str)> {
        let trimmed = input.trim();
        let (era, found) = if let Some(m) = BCE_SUFFIX.find(trimmed) {
            (Era::BeforeCommonEra, m)
        } else {
            (Era::CommonEra, CE_SUFFIX.find(trimmed)?)
        };
        Some((era, trimmed[..found.start()].trim_end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(input: &str) -> (Era, String) {
        EraSignExtractor::extract(input).unwrap()
    }

    #[test]
    fn test_signs() {
        assert_eq!(extract("+100"), (Era::CommonEra, "100".into()));
        assert_eq!(extract("-100"), (Era::BeforeCommonEra, "100".into()));
        assert_eq!(extract("   -100"), (Era::BeforeCommonEra, "100".into()));
        assert_eq!(extract("-1 000 000"), (Era::BeforeCommonEra, "1 000 000".into()));
        assert_eq!(extract("100"), (Era::CommonEra, "100".into()));
    }

    #[test]
    fn test_bce_suffixes() {
        for input in [
            "100 BC",
            "100 BCE",
            "100 B.C.",
            "100 B.C.E.",
            "100bc",
            "   100   B.   C.   ",
            "100 Before Christ",
            "100 before common era",
            "100 Before Current Era",
            "100 Before Christian Era",
        ] {
            assert_eq!(extract(input), (Era::BeforeCommonEra, "100".into()), "{input:?}");
        }
        assert_eq!(extract("FooBefore Common Era"), (Era::BeforeCommonEra, "Foo".into()));
    }

    #[test]
    fn test_ce_suffixes() {
        for input in [
            "100 CE",
            "100 C.E.",
            "100 AD",
            "100 A.D.",
            "100 ad",
            "100 Common Era",
            "100 Current Era",
            "100 Christian Era",
            "100 After Christ",
            "100 Anno Domini",
        ] {
            assert_eq!(extract(input), (Era::CommonEra, "100".into()), "{input:?}");
        }
    }

    #[test]
    fn test_sign_and_suffix_conflict() {
        for input in ["-100BC", "+100CE", "+100 BC", "-100 Anno Domini"] {
            let err = EraSignExtractor::extract(input).unwrap_err();
            assert_eq!(err.kind(), &ParseErrorKind::AmbiguousEra, "{input:?}");
            assert_eq!(err.input(), input);
        }
    }

    #[test]
    fn test_marker_presence() {
        assert_eq!(
            EraSignExtractor::extract_marker("2015 12 31").unwrap(),
            (None, "2015 12 31".into())
        );
        assert_eq!(
            EraSignExtractor::extract_marker("2015 AD").unwrap(),
            (Some(Era::CommonEra), "2015".into())
        );
    }

    #[test]
    fn test_split_suffix_keeps_leading_sign() {
        assert_eq!(
            EraSignExtractor::split_suffix("-4 1999 BCE"),
            Some((Era::BeforeCommonEra, "-4 1999"))
        );
        assert_eq!(EraSignExtractor::split_suffix("-4 1999"), None);
    }

    #[test]
    fn test_era_sign() {
        assert_eq!(Era::BeforeCommonEra.sign(), '-');
        assert_eq!(Era::default().sign(), '+');
    }
}
