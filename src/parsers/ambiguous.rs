// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Three-number dates in unknown field order.
//!
//! The input must hold exactly three numbers `a b c`, separated by anything
//! that is not a digit (`31.12.2015`, `12/31/60`, `day 31, month 12, year
//! 2015`). Only the first and last may carry a minus sign, and a negative
//! number is always the year. Field order is decided by value ranges:
//!
//! | Year | Condition | Then |
//! |------|-----------|------|
//! | `a` | `a` outside 1..=31 | `c > 12` or `b == c` → `a-b-c`; `b > 12` → `a-c-b` |
//! | `c` | `c` outside 1..=59, or outside 1..=31 with `a > 24` | `a > 12` or `a == b` → `c-b-a`; `b > 12` → `c-a-b` |
//!
//! Anything else is refused, including inputs that read as a time of day
//! (`23:12:59`). The year may also be qualified by an era marker, but not by
//! a marker and a minus sign at once.

use crate::era::EraSignExtractor;
use crate::error::{ParseError, ParseErrorKind};
use crate::options::ParserOptions;
use crate::parsers::{CanonicalTimestampParser, TimeParser};
use crate::value::TimeValue;
use once_cell::sync::Lazy;
use regex::Regex;

static THREE_NUMBERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^0-9]*?(-?[0-9]+)[^0-9]+([0-9]+)[^0-9]+?(-?[0-9]+)[^0-9]*$")
        .expect("three number pattern")
});

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct AmbiguousNumericDateParser;

impl AmbiguousNumericDateParser {
    pub const FORMAT: &'static str = "ambiguous-numeric";
}

/// Numbers as written, with their values.
struct Group<'a> {
    text: &'a str,
    value: i128,
}

impl<'a> Group<'a> {
    fn new(text: &'a str) -> Option<Self> {
        Some(Self {
            text,
            value: text.parse().ok()?,
        })
    }

    #[inline]
    fn within(&self, lower: i128, upper: i128) -> bool {
        (lower..=upper).contains(&self.value)
    }
}

impl TimeParser for AmbiguousNumericDateParser {
    fn format_name(&self) -> &'static str {
        Self::FORMAT
    }

    fn parse(&self, input: &str, options: &ParserOptions) -> Result<TimeValue, ParseError> {
        let fail = |kind: ParseErrorKind| ParseError::new(kind, input, Self::FORMAT);

        let (marker, rest) =
            EraSignExtractor::extract_marker(input).map_err(|e| e.reframe(input, Self::FORMAT))?;

        let caps = THREE_NUMBERS
            .captures(&rest)
            .ok_or_else(|| fail(ParseErrorKind::NotThreeNumbers))?;
        let groups = (1..=3)
            .map(|i| Group::new(caps.get(i).map_or("", |m| m.as_str())))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| fail(ParseErrorKind::NotThreeNumbers))?;
        let (a, b, c) = (&groups[0], &groups[1], &groups[2]);

        let (year, month, day) = if !a.within(1, 31) {
            if c.value > 12 || b.value == c.value {
                (a, b, c)
            } else if b.value > 12 {
                (a, c, b)
            } else {
                return Err(fail(ParseErrorKind::AmbiguousOrder("YMD and YDM")));
            }
        } else if !c.within(1, 59) || (!c.within(1, 31) && a.value > 24) {
            if a.value > 12 || a.value == b.value {
                (c, b, a)
            } else if b.value > 12 {
                (c, a, b)
            } else {
                return Err(fail(ParseErrorKind::AmbiguousOrder("DMY and MDY")));
            }
        } else {
            return Err(fail(ParseErrorKind::UnidentifiableYear));
        };

        check_field("month", month, 12).map_err(fail)?;
        check_field("day", day, 31).map_err(fail)?;

        let (negative, digits) = match year.text.strip_prefix('-') {
            Some(_) if marker.is_some() => return Err(fail(ParseErrorKind::TwoEras)),
            Some(digits) => (true, digits),
            None => (marker.is_some_and(|era| era.is_before_common_era()), year.text),
        };

        let composed = format!(
            "{}{digits:0>4}-{:02}-{:02}T00:00:00Z",
            if negative { '-' } else { '+' },
            month.value,
            day.value,
        );
        log::trace!("{input:?} read as {composed}");
        CanonicalTimestampParser
            .parse(&composed, options)
            .map_err(|e| e.reframe(input, Self::FORMAT))
    }
}

/// Month and day: one or two digits, unsigned, within `1..=max`.
fn check_field(field: &'static str, group: &Group<'_>, max: i128) -> Result<(), ParseErrorKind> {
    if group.text.len() <= 2 && group.within(1, max) {
        Ok(())
    } else {
        Err(ParseErrorKind::OutOfRange {
            field,
            value: group.text.to_owned(),
        })
    }
}
