// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Bare years.
//!
//! A year is a run of digits with an optional era: `1999`, `-44`, `44 BC`.
//! Years before the common era may use digit groups (`-1 000 000`,
//! `-19_000`, `-1,99,999`), separated by the configured digit-group
//! separator, whitespace or `_`. Positive years may not, since `1 000` may
//! well be a month and a year.

use crate::era::EraSignExtractor;
use crate::error::{ParseError, ParseErrorKind};
use crate::options::ParserOptions;
use crate::parsers::{CanonicalTimestampParser, TimeParser};
use crate::value::TimeValue;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct YearOnlyParser;

impl YearOnlyParser {
    pub const FORMAT: &'static str = "year";
}

impl TimeParser for YearOnlyParser {
    fn format_name(&self) -> &'static str {
        Self::FORMAT
    }

    fn parse(&self, input: &str, options: &ParserOptions) -> Result<TimeValue, ParseError> {
        let (era, rest) =
            EraSignExtractor::extract(input).map_err(|e| e.reframe(input, Self::FORMAT))?;

        let year = if era.is_before_common_era() {
            strip_digit_groups(rest.trim(), options.digit_group_separator())
        } else {
            rest.trim().to_owned()
        };

        if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::new(ParseErrorKind::NotYear, input, Self::FORMAT));
        }

        let composed = format!("{}{year}-00-00T00:00:00Z", era.sign());
        CanonicalTimestampParser
            .parse(&composed, options)
            .map_err(|e| e.reframe(input, Self::FORMAT))
    }
}

/// Removes separators that sit between two digits.
fn strip_digit_groups(text: &str, separator: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let sep_len = if !separator.is_empty() && rest.starts_with(separator) {
            separator.len()
        } else if c.is_whitespace() || c == '_' {
            c.len_utf8()
        } else {
            0
        };

        let between_digits = sep_len > 0
            && out.ends_with(|p: char| p.is_ascii_digit())
            && rest[sep_len..].starts_with(|n: char| n.is_ascii_digit());
        if between_digits {
            rest = &rest[sep_len..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}
