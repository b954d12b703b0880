// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Extended-precision points in time.
//!
//! A [`TimeValue`] is a calendrical value known to anything from one second
//! to a billion years, with an explicit uncertainty, a calendar model and
//! signed years of up to sixteen digits:
//!
//! ```
//! use deeptime::{Precision, TimeValue};
//!
//! let v: TimeValue = "-1 000 000".parse()?;
//! assert_eq!(v.time(), "-1000000-00-00T00:00:00Z");
//! assert_eq!(v.precision(), Precision::Year1M);
//! # Ok::<(), deeptime::ParseError>(())
//! ```
//!
//! # Core types
//!
//! - [`TimeValue`]: timestamp, timezone, uncertainty, precision, calendar.
//! - [`Timestamp`]: the canonical `±YYYY-MM-DDThh:mm:ssZ` representation.
//! - [`Precision`]: fifteen levels from `1Gyr` to `second`.
//! - [`CalendarModel`]: Gregorian, Julian, or any other identifier.
//! - [`EpochInterval`]: the seconds a value covers.
//!
//! # Parsing
//!
//! | Component | Role |
//! |-----------|------|
//! | [`ParserChain`] | tries parsers in order |
//! | [`CanonicalTimestampParser`] | lenient canonical grammar, precision and calendar inference |
//! | [`AmbiguousNumericDateParser`] | three numbers in YMD, DMY, MDY or YDM order |
//! | [`YearMonthParser`] | year and month, numeric or by name |
//! | [`YearOnlyParser`] | bare years, digit groups for BCE years |
//! | [`EraSignExtractor`] | sign and era-marker detection |
//! | [`CalendarModelResolver`] | calendar tokens, options and defaults |
//!
//! All parsers take a [`ParserOptions`] per call and hold no other state.
//!
//! # Arithmetic
//!
//! [`TimeValueCalculator`] maps values onto seconds since the Unix epoch,
//! on the proleptic Gregorian axis without a year zero, and widens them to
//! the interval covered by their precision and uncertainty.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`TimeValue`] (through
//!   [`TimeValueRecord`]), [`Precision`] and [`EpochInterval`].

mod calculator;
mod calendar;
mod era;
mod error;
mod interval;
mod month_names;
mod options;
pub mod parsers;
mod precision;
mod timestamp;
mod value;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calculator::TimeValueCalculator;
pub use calendar::{CalendarModel, CalendarModelResolver, GREGORIAN_URI, JULIAN_URI};
pub use era::{Era, EraSignExtractor};
pub use error::{ParseError, ParseErrorKind, ValueError};
pub use interval::EpochInterval;
pub use month_names::{
    EnglishMonthNames, MonolingualMonthNameProvider, MonthNameProvider, MonthNameUnlocalizer,
};
pub use options::{ParserOptions, DEFAULT_DIGIT_GROUP_SEPARATOR, DEFAULT_LANGUAGE};
pub use parsers::{
    AmbiguousNumericDateParser, CanonicalTimestampParser, ParserChain, TimeParser, YearMonthParser,
    YearOnlyParser,
};
pub use precision::{Precision, SECONDS_PER_GREGORIAN_YEAR, SECONDS_PER_MONTH};
pub use timestamp::{Timestamp, MAX_YEAR_DIGITS};
pub use value::{TimeValue, TimeValueRecord, MAX_TIMEZONE, MIN_TIMEZONE};
