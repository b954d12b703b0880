// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.
//!
//! | Type | Raised by |
//! |------|-----------|
//! | [`ValueError`] | [`Timestamp`](crate::Timestamp) and [`TimeValue`](crate::TimeValue) construction |
//! | [`ParseError`] | every [`TimeParser`](crate::TimeParser) |
//!
//! A [`ParseError`] always carries the input text it was given and the name
//! of the format that rejected it; the [`ParseErrorKind`] says why.

use thiserror::Error;

/// A timestamp or time value violated one of its construction invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("timestamp must resemble ISO 8601, given {0:?}")]
    MalformedTimestamp(String),
    #[error("{field} {value} out of allowed bounds in {timestamp:?}")]
    FieldOutOfRange {
        field: &'static str,
        value: u8,
        timestamp: String,
    },
    #[error("cannot have a day with no month in {0:?}")]
    DayWithoutMonth(String),
    #[error("cannot have hour, minute or second with no day in {0:?}")]
    TimeWithoutDay(String),
    #[error("timezone offset {0} minutes out of allowed bounds [-720, 840]")]
    TimezoneOutOfRange(i32),
    #[error("precision level {0} out of allowed bounds [0, 14]")]
    PrecisionOutOfRange(u8),
    #[error("calendar model must be a non-empty identifier")]
    EmptyCalendarModel,
}

/// Why a parser rejected its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("malformed time")]
    Malformed,
    #[error("not enough information to decide if the format is YMD")]
    InsufficientInformation,
    #[error(transparent)]
    InvalidValue(#[from] ValueError),
    #[error("parsed two eras from the same string")]
    AmbiguousEra,
    #[error("two eras found")]
    TwoEras,
    #[error("cannot parse calendar model {0:?}")]
    UnrecognizedCalendar(String),
    #[error("unrecognized month name {0:?}")]
    UnrecognizedMonth(String),
    #[error("can not find three numbers")]
    NotThreeNumbers,
    #[error("can not distinguish {0}")]
    AmbiguousOrder(&'static str),
    #[error("can not identify year")]
    UnidentifiableYear,
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
    #[error("failed to parse year and month")]
    NotYearMonth,
    #[error("failed to parse year")]
    NotYear,
    #[error("the format of the time could not be determined ({} attempts)", .attempts.len())]
    UndeterminedFormat { attempts: Vec<ParseError> },
}

/// A parse failure: what was rejected, by which format, and why.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} (format {format}, input {input:?})")]
pub struct ParseError {
    input: String,
    format: &'static str,
    kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, input: impl Into<String>, format: &'static str) -> Self {
        Self {
            input: input.into(),
            format,
            kind,
        }
    }

    /// The text handed to the parser that failed.
    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Name of the format that failed.
    #[inline]
    pub fn format(&self) -> &'static str {
        self.format
    }

    #[inline]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Re-attributes a failure from a delegated parse to the outer parser,
    /// keeping the reason.
    pub(crate) fn reframe(self, input: &str, format: &'static str) -> Self {
        Self::new(self.kind, input, format)
    }
}
