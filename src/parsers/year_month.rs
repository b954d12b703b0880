// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Year and month, in either order.
//!
//! Two tokens separated by `/`, `-`, `.`, `,` or whitespace, one of them a
//! month given as a number (`1 1999`, `13/12`) or a name (`January 1999`,
//! `1999 jan`). When both are numbers, an unsigned one- or two-digit value
//! up to 12 is the month, the first token winning ties.
//!
//! A trailing era marker applies to the year. A leading minus sign is part
//! of the year token, so `-4 1999` has no month and is refused.

use crate::era::{Era, EraSignExtractor};
use crate::error::{ParseError, ParseErrorKind};
use crate::month_names::{EnglishMonthNames, MonthNameProvider};
use crate::options::ParserOptions;
use crate::parsers::{CanonicalTimestampParser, TimeParser};
use crate::value::TimeValue;
use once_cell::sync::Lazy;
use regex::Regex;

static TWO_TOKENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?[0-9\p{L}]+)\s*?[/\-\s.,]\s*(-?[0-9\p{L}]+)$").expect("year-month pattern")
});

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").expect("integer pattern"));

#[derive(Debug)]
pub struct YearMonthParser {
    month_names: Box<dyn MonthNameProvider + Send + Sync>,
}

impl Default for YearMonthParser {
    fn default() -> Self {
        Self::new(EnglishMonthNames)
    }
}

impl YearMonthParser {
    pub const FORMAT: &'static str = "year-month";

    pub fn new(month_names: impl MonthNameProvider + Send + Sync + 'static) -> Self {
        Self {
            month_names: Box::new(month_names),
        }
    }

    /// Month number for a name, case-insensitively, longest names first.
    fn month_number(&self, name: &str, language: &str) -> Option<u8> {
        let mut numbers = self.month_names.month_numbers(language);
        numbers.sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()));
        let name = name.to_lowercase();
        numbers
            .into_iter()
            .find(|(candidate, _)| candidate.to_lowercase() == name)
            .map(|(_, month)| month)
    }
}

/// Unsigned, one or two digits, 0 to 12.
fn can_be_month(token: &str) -> bool {
    (1..=2).contains(&token.len())
        && token.bytes().all(|b| b.is_ascii_digit())
        && token.parse::<u8>().is_ok_and(|m| m <= 12)
}

impl TimeParser for YearMonthParser {
    fn format_name(&self) -> &'static str {
        Self::FORMAT
    }

    fn parse(&self, input: &str, options: &ParserOptions) -> Result<TimeValue, ParseError> {
        let fail = |kind: ParseErrorKind| ParseError::new(kind, input, Self::FORMAT);

        let (era, rest) = match EraSignExtractor::split_suffix(input) {
            Some((era, rest)) => (Some(era), rest),
            None => (None, input.trim()),
        };

        let caps = TWO_TOKENS
            .captures(rest)
            .ok_or_else(|| fail(ParseErrorKind::NotYearMonth))?;
        let (a, b) = (
            caps.get(1).map_or("", |m| m.as_str()),
            caps.get(2).map_or("", |m| m.as_str()),
        );

        let (year, month) = match (INTEGER.is_match(a), INTEGER.is_match(b)) {
            (true, true) => {
                // "1 234 BC" is more likely a digit-grouped year.
                if era == Some(Era::BeforeCommonEra) {
                    return Err(fail(ParseErrorKind::NotYearMonth));
                }
                if can_be_month(a) {
                    (b, a.parse::<u8>().unwrap_or(0))
                } else if can_be_month(b) {
                    (a, b.parse::<u8>().unwrap_or(0))
                } else {
                    return Err(fail(ParseErrorKind::NotYearMonth));
                }
            }
            (true, false) => (
                a,
                self.month_number(b, options.language())
                    .ok_or_else(|| fail(ParseErrorKind::UnrecognizedMonth(b.to_owned())))?,
            ),
            (false, true) => (
                b,
                self.month_number(a, options.language())
                    .ok_or_else(|| fail(ParseErrorKind::UnrecognizedMonth(a.to_owned())))?,
            ),
            (false, false) => return Err(fail(ParseErrorKind::NotYearMonth)),
        };

        let (negative, digits) = match year.strip_prefix('-') {
            Some(_) if era.is_some() => return Err(fail(ParseErrorKind::TwoEras)),
            Some(digits) => (true, digits),
            None => (era == Some(Era::BeforeCommonEra), year),
        };

        let composed = format!(
            "{}{digits}-{month:02}-00T00:00:00Z",
            if negative { '-' } else { '+' }
        );
        CanonicalTimestampParser
            .parse(&composed, options)
            .map_err(|e| e.reframe(input, Self::FORMAT))
    }
}
