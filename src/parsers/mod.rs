// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Text → [`TimeValue`] parsers.
//!
//! Every parser implements [`TimeParser`]. [`ParserChain`] tries a list of
//! them in order and returns the first success.
//!
//! | Parser | Format name | Accepts |
//! |--------|-------------|---------|
//! | [`CanonicalTimestampParser`] | `canonical` | `+2013-07-16T10:15Z (Gregorian)` |
//! | [`AmbiguousNumericDateParser`] | `ambiguous-numeric` | `31.12.2015`, `12/31/60` |
//! | [`YearMonthParser`] | `year-month` | `January 1999`, `4 -1998` |
//! | [`YearOnlyParser`] | `year` | `-1 000 000`, `1999 BCE` |
//!
//! The derived parsers compose a canonical timestamp and hand it to
//! [`CanonicalTimestampParser`], so precision inference and calendar
//! resolution behave the same everywhere.

mod ambiguous;
mod canonical;
mod year;
mod year_month;

pub use ambiguous::AmbiguousNumericDateParser;
pub use canonical::CanonicalTimestampParser;
pub use year::YearOnlyParser;
pub use year_month::YearMonthParser;

use crate::error::{ParseError, ParseErrorKind};
use crate::options::ParserOptions;
use crate::value::TimeValue;

/// A strategy turning text into a [`TimeValue`].
pub trait TimeParser: std::fmt::Debug + Send + Sync {
    /// Short name used in [`ParseError::format`].
    fn format_name(&self) -> &'static str;

    fn parse(&self, input: &str, options: &ParserOptions) -> Result<TimeValue, ParseError>;
}

/// Ordered list of parsers; the first that succeeds wins.
///
/// ```
/// use deeptime::{ParserChain, ParserOptions, Precision};
///
/// let chain = ParserChain::default();
/// let v = chain.parse("January 1999", &ParserOptions::default())?;
/// assert_eq!(v.time(), "+1999-01-00T00:00:00Z");
/// assert_eq!(v.precision(), Precision::Month);
/// # Ok::<(), deeptime::ParseError>(())
/// ```
#[derive(Debug)]
pub struct ParserChain {
    parsers: Vec<Box<dyn TimeParser>>,
}

impl ParserChain {
    pub const FORMAT: &'static str = "time";

    pub fn new(parsers: Vec<Box<dyn TimeParser>>) -> Self {
        Self { parsers }
    }

    /// Appends a parser to the end of the chain.
    pub fn with(mut self, parser: impl TimeParser + 'static) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Format names in trial order.
    pub fn format_names(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.format_name()).collect()
    }

    pub fn parse(&self, input: &str, options: &ParserOptions) -> Result<TimeValue, ParseError> {
        let mut attempts = Vec::with_capacity(self.parsers.len());
        for parser in &self.parsers {
            match parser.parse(input, options) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    log::debug!("{} parser rejected {input:?}: {}", parser.format_name(), err.kind());
                    attempts.push(err);
                }
            }
        }
        Err(ParseError::new(
            ParseErrorKind::UndeterminedFormat { attempts },
            input,
            Self::FORMAT,
        ))
    }
}

impl Default for ParserChain {
    /// Canonical, ambiguous-numeric, year-month, then year-only.
    fn default() -> Self {
        Self::new(vec![
            Box::new(CanonicalTimestampParser),
            Box::new(AmbiguousNumericDateParser),
            Box::new(YearMonthParser::default()),
            Box::new(YearOnlyParser),
        ])
    }
}

impl TimeParser for ParserChain {
    fn format_name(&self) -> &'static str {
        Self::FORMAT
    }

    fn parse(&self, input: &str, options: &ParserOptions) -> Result<TimeValue, ParseError> {
        ParserChain::parse(self, input, options)
    }
}
