// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lenient parser for the canonical timestamp grammar.
//!
//! Accepted on top of the strict [`Timestamp`] grammar:
//!
//! - a missing sign (`2015-01-01`), or the Unicode minus `−`;
//! - a shortened time of day (`T10:15`, `T1015`) and a missing `Z`;
//! - lower-case `t` and `z`;
//! - a trailing calendar token, with or without parentheses
//!   (`2015-01-01 (Julian)`).
//!
//! Precision is inferred from the finest non-zero field. Years written
//! with one or two digits below 60 and no time of day are refused, since
//! `31-12-30` reads as well as a day-first date.

use crate::calendar::CalendarModelResolver;
use crate::error::{ParseError, ParseErrorKind};
use crate::options::ParserOptions;
use crate::parsers::TimeParser;
use crate::precision::Precision;
use crate::timestamp::Timestamp;
use crate::value::TimeValue;
use once_cell::sync::Lazy;
use regex::Regex;

static PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?xi)
        ^ ([-+\x{2212}]?) \s*
        ([0-9]{1,16}) - ([0-9]{2}) - ([0-9]{2})
        (?: T ([0-9]{2}) :? ([0-9]{2}) (?: :? ([0-9]{2}) )? )?
        Z?
        \s* \(? \s* ([^()\s]*) \s* \)? $",
    )
    .expect("canonical timestamp pattern")
});

/// Years written with fewer digits and below this value need a time of day.
const AMBIGUOUS_YEAR_LIMIT: u64 = 60;

/// Years up to this value keep year precision even with trailing zeros.
const PLAIN_YEAR_LIMIT: u64 = 4000;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CanonicalTimestampParser;

impl CanonicalTimestampParser {
    pub const FORMAT: &'static str = "canonical";

    fn error(kind: ParseErrorKind, input: &str) -> ParseError {
        ParseError::new(kind, input, Self::FORMAT)
    }
}

impl TimeParser for CanonicalTimestampParser {
    fn format_name(&self) -> &'static str {
        Self::FORMAT
    }

    fn parse(&self, input: &str, options: &ParserOptions) -> Result<TimeValue, ParseError> {
        let caps = PATTERN
            .captures(input.trim())
            .ok_or_else(|| Self::error(ParseErrorKind::Malformed, input))?;

        let negative = matches!(&caps[1], "-" | "\u{2212}");
        let year = &caps[2];
        let has_time_of_day = caps.get(5).is_some();

        if year.len() < 3 && parse_digits(year) < AMBIGUOUS_YEAR_LIMIT && !has_time_of_day {
            return Err(Self::error(ParseErrorKind::InsufficientInformation, input));
        }

        let field = |i: usize| caps.get(i).map_or(0, |m| parse_digits(m.as_str()) as u8);
        let timestamp = Timestamp::from_parts(
            negative,
            year,
            field(3),
            field(4),
            field(5),
            field(6),
            field(7),
        )
        .map_err(|e| Self::error(e.into(), input))?;

        let precision = resolve_precision(infer_precision(&timestamp), options.precision());
        let calendar_model = CalendarModelResolver::resolve(
            caps.get(8).map(|m| m.as_str()),
            negative,
            timestamp.year_digits(),
            options,
        )
        .map_err(|e| e.reframe(input, Self::FORMAT))?;

        TimeValue::from_timestamp(timestamp, 0, 0, 0, precision, calendar_model)
            .map_err(|e| Self::error(e.into(), input))
    }
}

/// Value of at most sixteen ASCII digits.
fn parse_digits(digits: &str) -> u64 {
    digits.bytes().fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
}

/// Finest non-zero field, or a year precision from the trailing zeros.
fn infer_precision(timestamp: &Timestamp) -> Precision {
    if timestamp.second() > 0 {
        Precision::Second
    } else if timestamp.minute() > 0 {
        Precision::Minute
    } else if timestamp.hour() > 0 {
        Precision::Hour
    } else if timestamp.day() > 0 {
        Precision::Day
    } else if timestamp.month() > 0 {
        Precision::Month
    } else {
        year_precision(timestamp.year_digits())
    }
}

/// `2000` is a year, `8000` a millennium, `2000000` a million years.
fn year_precision(year_digits: &str) -> Precision {
    if parse_digits(year_digits) <= PLAIN_YEAR_LIMIT {
        return Precision::Year;
    }
    let zeros = year_digits.len() - year_digits.trim_end_matches('0').len();
    let level = Precision::Year.level().saturating_sub(zeros as u8);
    Precision::from_level(level).unwrap_or(Precision::Year1G)
}

/// A requested precision may coarsen the inferred one. When day
/// information is present it is taken as given.
fn resolve_precision(inferred: Precision, requested: Option<Precision>) -> Precision {
    match requested {
        Some(requested) if requested <= inferred || inferred >= Precision::Day => requested,
        Some(requested) => {
            log::trace!("precision {requested} ignored, input only supports {inferred}");
            inferred
        }
        None => inferred,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CalendarModel, GREGORIAN_URI, JULIAN_URI};

    fn parse_with(input: &str, options: &ParserOptions) -> Result<TimeValue, ParseError> {
        CanonicalTimestampParser.parse(input, options)
    }

    fn parse(input: &str) -> TimeValue {
        parse_with(input, &ParserOptions::default()).unwrap_or_else(|e| panic!("{input:?}: {e}"))
    }

    fn assert_parses(input: &str, time: &str, precision: Precision, calendar: CalendarModel) {
        let v = parse(input);
        assert_eq!(v.time(), time, "{input:?}");
        assert_eq!(v.precision(), precision, "{input:?}");
        assert_eq!(v.calendar_model(), &calendar, "{input:?}");
        assert_eq!((v.timezone(), v.before(), v.after()), (0, 0, 0));
    }

    #[test]
    fn test_precision_from_fields() {
        use CalendarModel::Gregorian;
        assert_parses("+0000000000002013-07-16T00:00:00Z", "+2013-07-16T00:00:00Z", Precision::Day, Gregorian);
        assert_parses("+0000000000002013-07-00T00:00:00Z", "+2013-07-00T00:00:00Z", Precision::Month, Gregorian);
        assert_parses("+0000000000002013-00-00T00:00:00Z", "+2013-00-00T00:00:00Z", Precision::Year, Gregorian);
        assert_parses("+2013-07-16T10:00:00Z", "+2013-07-16T10:00:00Z", Precision::Hour, Gregorian);
        assert_parses("+2013-07-16T10:15:00Z", "+2013-07-16T10:15:00Z", Precision::Minute, Gregorian);
        assert_parses("+2013-07-16T10:15:42Z", "+2013-07-16T10:15:42Z", Precision::Second, Gregorian);
        assert_parses("+2015-01-01T00:00:60Z", "+2015-01-01T00:00:60Z", Precision::Second, Gregorian);
    }

    #[test]
    fn test_precision_from_trailing_zeros() {
        for (year, precision) in [
            ("0000000000000000", Precision::Year),
            ("0000000000002000", Precision::Year),
            ("0000000000004000", Precision::Year),
            ("0000000000008000", Precision::Year1K),
            ("0000000000020000", Precision::Year10K),
            ("0000000000200000", Precision::Year100K),
            ("0000000002000000", Precision::Year1M),
            ("0000000020000000", Precision::Year10M),
            ("0000000200000000", Precision::Year100M),
            ("0000002000000000", Precision::Year1G),
            ("0000020000000000", Precision::Year1G),
            ("2000000000000000", Precision::Year1G),
        ] {
            let v = parse(&format!("+{year}-00-00T00:00:00Z"));
            assert_eq!(v.precision(), precision, "{year}");
        }
    }

    #[test]
    fn test_optional_parts() {
        use CalendarModel::Gregorian;
        assert_parses("2015-01-01T00:00:00Z", "+2015-01-01T00:00:00Z", Precision::Day, Gregorian);
        assert_parses("2015-01-01T00:00:00", "+2015-01-01T00:00:00Z", Precision::Day, Gregorian);
        assert_parses("2015-01-01T00:00", "+2015-01-01T00:00:00Z", Precision::Day, Gregorian);
        assert_parses("2015-01-01T1015", "+2015-01-01T10:15:00Z", Precision::Minute, Gregorian);
        assert_parses("2015-01-01t10:15:30z", "+2015-01-01T10:15:30Z", Precision::Second, Gregorian);
        assert_parses("2015-01-01", "+2015-01-01T00:00:00Z", Precision::Day, Gregorian);
        assert_parses("  2015-01-00  ", "+2015-01-00T00:00:00Z", Precision::Month, Gregorian);
        assert_parses("2015-00-00", "+2015-00-00T00:00:00Z", Precision::Year, Gregorian);
    }

    #[test]
    fn test_unicode_minus() {
        assert_parses(
            "\u{2212}2015-01-01T00:00:00",
            "-2015-01-01T00:00:00Z",
            Precision::Day,
            CalendarModel::Julian,
        );
    }

    #[test]
    fn test_short_years_need_time_or_three_digits() {
        assert_parses("60-01-01", "+0060-01-01T00:00:00Z", Precision::Day, CalendarModel::Julian);
        assert_parses("1-01-01T00:00", "+0001-01-01T00:00:00Z", Precision::Day, CalendarModel::Julian);
        assert_parses("001-01-01", "+0001-01-01T00:00:00Z", Precision::Day, CalendarModel::Julian);
        for input in ["59-01-01", "+59-01-01", "-5-01-01", "32-12-31"] {
            let err = parse_with(input, &ParserOptions::default()).unwrap_err();
            assert_eq!(err.kind(), &ParseErrorKind::InsufficientInformation, "{input:?}");
        }
    }

    #[test]
    fn test_explicit_calendar() {
        use CalendarModel::{Gregorian, Julian};
        assert_parses("+0000000000002013-07-16T00:00:00Z (Gregorian)", "+2013-07-16T00:00:00Z", Precision::Day, Gregorian);
        assert_parses("+0000000000000000-01-01T00:00:00Z (Gregorian)", "+0000-01-01T00:00:00Z", Precision::Day, Gregorian);
        assert_parses("+0000000000000001-01-14T00:00:00Z (Julian)", "+0001-01-14T00:00:00Z", Precision::Day, Julian);
        assert_parses("+0000000000010000-01-01T00:00:00Z (Gregorian)", "+10000-01-01T00:00:00Z", Precision::Day, Gregorian);
        assert_parses("-00000000001-01-01T00:00:00Z (Gregorian)", "-0001-01-01T00:00:00Z", Precision::Day, Gregorian);
        assert_parses("-1-01-01T00:00:00Z(gregorian)", "-0001-01-01T00:00:00Z", Precision::Day, Gregorian);
        assert_parses("2015-01-01 Julian", "+2015-01-01T00:00:00Z", Precision::Day, Julian);
        assert_parses(&format!("2015-01-01 ({JULIAN_URI})"), "+2015-01-01T00:00:00Z", Precision::Day, Julian);
    }

    #[test]
    fn test_default_calendar_by_year() {
        assert_eq!(parse("1582-08-01").calendar_model(), &CalendarModel::Julian);
        assert_eq!(parse("1583-01-01").calendar_model(), &CalendarModel::Gregorian);
        assert_eq!(parse("-2015-01-01").calendar_model(), &CalendarModel::Julian);
    }

    #[test]
    fn test_unknown_calendar_token() {
        let err = parse_with("2015-01-01 (Greece)", &ParserOptions::default()).unwrap_err();
        assert_eq!(err.kind(), &ParseErrorKind::UnrecognizedCalendar("Greece".into()));
        assert_eq!(err.format(), "canonical");
        assert_eq!(err.input(), "2015-01-01 (Greece)");
    }

    #[test]
    fn test_calendar_option() {
        let julian = ParserOptions::default().with_calendar(JULIAN_URI);
        let gregorian = ParserOptions::default().with_calendar(GREGORIAN_URI);
        let v = parse_with("-1-01-02T00:00:00Z", &gregorian).unwrap();
        assert_eq!(v.calendar_model(), &CalendarModel::Gregorian);
        let v = parse_with("2015-01-03", &julian).unwrap();
        assert_eq!(v.calendar_model(), &CalendarModel::Julian);
        let v = parse_with("2015-01-03 (Gregorian)", &julian).unwrap();
        assert_eq!(v.calendar_model(), &CalendarModel::Gregorian);
    }

    #[test]
    fn test_precision_option() {
        let decade = ParserOptions::default().with_precision(Precision::Year10);
        let day = ParserOptions::default().with_precision(Precision::Day);
        let second = ParserOptions::default().with_precision(Precision::Second);

        let v = parse_with("-1-01-04T00:00:00Z", &decade).unwrap();
        assert_eq!(v.precision(), Precision::Year10);
        // Cannot claim day precision without a day.
        let v = parse_with("+0000000000000012-12-00T00:00:00Z", &day).unwrap();
        assert_eq!(v.precision(), Precision::Month);
        // Day information allows raising.
        let v = parse_with("2015-01-01", &second).unwrap();
        assert_eq!(v.precision(), Precision::Second);
    }

    #[test]
    fn test_field_bounds() {
        for input in [
            "+2015-13-01T00:00:00Z",
            "+2015-01-32T00:00:00Z",
            "+2015-01-01T24:00:00Z",
            "+2015-01-01T00:60:00Z",
            "+2015-01-01T00:00:62Z",
            "+2015-00-01T00:00:00Z",
            "+2015-01-00T10:00:00Z",
        ] {
            let err = parse_with(input, &ParserOptions::default()).unwrap_err();
            assert!(matches!(err.kind(), ParseErrorKind::InvalidValue(_)), "{input:?}: {err}");
        }
    }

    #[test]
    fn test_malformed() {
        for input in ["foooooooooo", "1 June 2014", "1234567890873", "", "+12345678901234567-01-01"] {
            let err = parse_with(input, &ParserOptions::default()).unwrap_err();
            assert_eq!(err.kind(), &ParseErrorKind::Malformed, "{input:?}");
        }
    }
}
