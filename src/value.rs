// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The extended-precision point in time.
//!
//! [`TimeValue`] couples a canonical [`Timestamp`] with everything needed to
//! interpret it:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `timestamp` | signed year (up to 16 digits), month, day, time of day |
//! | `timezone` | offset from UTC in minutes, `[-720, 840]` |
//! | `before` / `after` | uncertainty, in units of `precision` |
//! | `precision` | the unit the value is known to |
//! | `calendar_model` | calendar the digits are written in |
//!
//! Values are immutable: the `with_*` methods build new instances and
//! re-run validation where a field can be invalid.

use crate::calculator::TimeValueCalculator;
use crate::calendar::CalendarModel;
use crate::error::{ParseError, ValueError};
use crate::interval::EpochInterval;
use crate::options::ParserOptions;
use crate::parsers::ParserChain;
use crate::precision::Precision;
use crate::timestamp::Timestamp;
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Smallest timezone offset, in minutes (UTC−12:00).
pub const MIN_TIMEZONE: i32 = -12 * 60;
/// Largest timezone offset, in minutes (UTC+14:00).
pub const MAX_TIMEZONE: i32 = 14 * 60;

/// Loosely typed wire shape of a [`TimeValue`].
///
/// Field names follow the interchange format. [`TimeValue::from_record`]
/// validates; [`TimeValue::to_record`] always produces a valid record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeValueRecord {
    pub time: String,
    pub timezone: i32,
    pub before: u64,
    pub after: u64,
    pub precision: u8,
    pub calendarmodel: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeValue
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeValue {
    timestamp: Timestamp,
    timezone: i32,
    before: u64,
    after: u64,
    precision: Precision,
    calendar_model: CalendarModel,
}

impl TimeValue {
    /// Builds a value from a timestamp in the strict canonical grammar.
    ///
    /// ```
    /// use deeptime::{CalendarModel, Precision, TimeValue};
    ///
    /// let v = TimeValue::new("+2013-07-16", 0, 0, 0, Precision::Day, CalendarModel::Gregorian)?;
    /// assert_eq!(v.time(), "+2013-07-16T00:00:00Z");
    /// # Ok::<(), deeptime::ValueError>(())
    /// ```
    pub fn new(
        timestamp: &str,
        timezone: i32,
        before: u64,
        after: u64,
        precision: Precision,
        calendar_model: impl Into<CalendarModel>,
    ) -> Result<Self, ValueError> {
        Self::from_timestamp(
            timestamp.parse()?,
            timezone,
            before,
            after,
            precision,
            calendar_model,
        )
    }

    pub fn from_timestamp(
        timestamp: Timestamp,
        timezone: i32,
        before: u64,
        after: u64,
        precision: Precision,
        calendar_model: impl Into<CalendarModel>,
    ) -> Result<Self, ValueError> {
        let calendar_model = calendar_model.into();
        check_timezone(timezone)?;
        check_calendar_model(&calendar_model)?;
        Ok(Self {
            timestamp,
            timezone,
            before,
            after,
            precision,
            calendar_model,
        })
    }

    /// Builds a value from its wire record, validating every field.
    pub fn from_record(record: &TimeValueRecord) -> Result<Self, ValueError> {
        Self::new(
            &record.time,
            record.timezone,
            record.before,
            record.after,
            Precision::try_from(record.precision)?,
            record.calendarmodel.as_str(),
        )
    }

    pub fn to_record(&self) -> TimeValueRecord {
        TimeValueRecord {
            time: self.time(),
            timezone: self.timezone,
            before: self.before,
            after: self.after,
            precision: self.precision.level(),
            calendarmodel: self.calendar_model.as_str().to_owned(),
        }
    }

    /// Second-precision Gregorian value for a UTC instant.
    ///
    /// Sub-second parts are truncated. chrono counts years astronomically
    /// (year 0 is 1 BCE), so years up to 0 become negative years without a
    /// year zero.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let year = i64::from(datetime.year());
        let (negative, magnitude) = if year <= 0 { (true, 1 - year) } else { (false, year) };
        let timestamp = Timestamp::from_parts(
            negative,
            &magnitude.to_string(),
            datetime.month() as u8,
            datetime.day() as u8,
            datetime.hour() as u8,
            datetime.minute() as u8,
            datetime.second() as u8,
        )
        .expect("chrono yields in-range civil fields");
        Self {
            timestamp,
            timezone: 0,
            before: 0,
            after: 0,
            precision: Precision::Second,
            calendar_model: CalendarModel::Gregorian,
        }
    }

    /// The instant at [`epoch_seconds`](Self::epoch_seconds), if chrono can
    /// represent it.
    ///
    /// The digits are read on the proleptic Gregorian axis whatever the
    /// calendar model, as in all epoch arithmetic of this crate.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds = i64::try_from(self.epoch_seconds()).ok()?;
        DateTime::<Utc>::from_timestamp(seconds, 0)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Canonical timestamp string, e.g. `+2013-07-16T00:00:00Z`.
    pub fn time(&self) -> String {
        self.timestamp.to_string()
    }

    /// Offset from UTC in minutes.
    #[inline]
    pub fn timezone(&self) -> i32 {
        self.timezone
    }

    #[inline]
    pub fn before(&self) -> u64 {
        self.before
    }

    #[inline]
    pub fn after(&self) -> u64 {
        self.after
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    #[inline]
    pub fn calendar_model(&self) -> &CalendarModel {
        &self.calendar_model
    }

    // ── derived values ────────────────────────────────────────────────

    pub fn with_precision(&self, precision: Precision) -> Self {
        Self {
            precision,
            ..self.clone()
        }
    }

    pub fn with_uncertainty(&self, before: u64, after: u64) -> Self {
        Self {
            before,
            after,
            ..self.clone()
        }
    }

    pub fn with_timezone(&self, timezone: i32) -> Result<Self, ValueError> {
        check_timezone(timezone)?;
        Ok(Self {
            timezone,
            ..self.clone()
        })
    }

    pub fn with_calendar_model(&self, calendar_model: impl Into<CalendarModel>) -> Result<Self, ValueError> {
        let calendar_model = calendar_model.into();
        check_calendar_model(&calendar_model)?;
        Ok(Self {
            calendar_model,
            ..self.clone()
        })
    }

    /// Seconds since 1970-01-01T00:00:00Z, see [`TimeValueCalculator::epoch_seconds`].
    #[inline]
    pub fn epoch_seconds(&self) -> i128 {
        TimeValueCalculator::epoch_seconds(self)
    }

    /// Earliest and latest second covered, see [`TimeValueCalculator::bounds`].
    #[inline]
    pub fn bounds(&self) -> EpochInterval {
        TimeValueCalculator::bounds(self)
    }
}

fn check_timezone(timezone: i32) -> Result<(), ValueError> {
    if (MIN_TIMEZONE..=MAX_TIMEZONE).contains(&timezone) {
        Ok(())
    } else {
        Err(ValueError::TimezoneOutOfRange(timezone))
    }
}

fn check_calendar_model(model: &CalendarModel) -> Result<(), ValueError> {
    if model.as_str().is_empty() {
        Err(ValueError::EmptyCalendarModel)
    } else {
        Ok(())
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.timestamp, f)
    }
}

impl FromStr for TimeValue {
    type Err = ParseError;

    /// Parses through the default [`ParserChain`] with default options.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParserChain::default().parse(s, &ParserOptions::default())
    }
}

impl TryFrom<TimeValueRecord> for TimeValue {
    type Error = ValueError;

    fn try_from(record: TimeValueRecord) -> Result<Self, Self::Error> {
        Self::from_record(&record)
    }
}

impl From<&TimeValue> for TimeValueRecord {
    fn from(value: &TimeValue) -> Self {
        value.to_record()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for TimeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_record().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = TimeValueRecord::deserialize(deserializer)?;
        TimeValue::from_record(&record).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{GREGORIAN_URI, JULIAN_URI};

    fn record(time: &str, precision: u8, calendar: &str) -> TimeValueRecord {
        TimeValueRecord {
            time: time.to_owned(),
            timezone: 0,
            before: 0,
            after: 0,
            precision,
            calendarmodel: calendar.to_owned(),
        }
    }

    #[test]
    fn test_record_roundtrip() {
        for r in [
            record("+2013-07-16T00:00:00Z", 11, GREGORIAN_URI),
            record("-0001-01-01T00:00:00Z", 9, JULIAN_URI),
            record("+9999999999999999-12-31T23:59:61Z", 14, GREGORIAN_URI),
            record("-0000-00-00T00:00:00Z", 0, "http://www.wikidata.org/entity/Q12138"),
            TimeValueRecord {
                timezone: -720,
                before: 7,
                after: u64::MAX,
                ..record("+1000-05-00T00:00:00Z", 10, JULIAN_URI)
            },
        ] {
            let value = TimeValue::from_record(&r).unwrap();
            assert_eq!(value.to_record(), r);
        }
    }

    #[test]
    fn test_record_normalizes_timestamp() {
        let value = TimeValue::from_record(&record("+00002013-07-16", 11, GREGORIAN_URI)).unwrap();
        assert_eq!(value.time(), "+2013-07-16T00:00:00Z");
    }

    #[test]
    fn test_invalid_records() {
        assert_eq!(
            TimeValue::from_record(&record("+2013-07-16T00:00:00Z", 15, GREGORIAN_URI)),
            Err(ValueError::PrecisionOutOfRange(15))
        );
        assert_eq!(
            TimeValue::from_record(&record("+2013-07-16T00:00:00Z", 11, "")),
            Err(ValueError::EmptyCalendarModel)
        );
        assert_eq!(
            TimeValue::from_record(&TimeValueRecord {
                timezone: 841,
                ..record("+2013-07-16T00:00:00Z", 11, GREGORIAN_URI)
            }),
            Err(ValueError::TimezoneOutOfRange(841))
        );
        assert!(TimeValue::from_record(&record("2013-07-16T00:00:00Z", 11, GREGORIAN_URI)).is_err());
    }

    #[test]
    fn test_timezone_bounds_inclusive() {
        let v = TimeValue::new("+2013-07-16", 0, 0, 0, Precision::Day, CalendarModel::Gregorian).unwrap();
        assert!(v.with_timezone(-720).is_ok());
        assert!(v.with_timezone(840).is_ok());
        assert!(v.with_timezone(-721).is_err());
    }

    #[test]
    fn test_with_methods_build_new_values() {
        let v = TimeValue::new("+2013-07-16", 0, 0, 0, Precision::Day, CalendarModel::Gregorian).unwrap();
        let coarse = v.with_precision(Precision::Year).with_uncertainty(1, 2);
        assert_eq!(v.precision(), Precision::Day);
        assert_eq!(coarse.precision(), Precision::Year);
        assert_eq!((coarse.before(), coarse.after()), (1, 2));
        assert_eq!(
            v.with_calendar_model(JULIAN_URI).unwrap().calendar_model(),
            &CalendarModel::Julian
        );
        assert_eq!(v.with_calendar_model(""), Err(ValueError::EmptyCalendarModel));
    }

    #[test]
    fn test_utc_roundtrip() {
        let datetime = DateTime::from_timestamp(1_398_861_355, 0).unwrap();
        let value = TimeValue::from_utc(datetime);
        assert_eq!(value.time(), "+2014-04-30T12:35:55Z");
        assert_eq!(value.precision(), Precision::Second);
        assert_eq!(value.to_utc(), Some(datetime));
    }

    #[test]
    fn test_to_utc_out_of_range() {
        let v = TimeValue::new(
            "+9999999999999999-00-00",
            0,
            0,
            0,
            Precision::Year1G,
            CalendarModel::Gregorian,
        )
        .unwrap();
        assert_eq!(v.to_utc(), None);
    }

    #[test]
    fn test_from_str_uses_parser_chain() {
        let v: TimeValue = "31/12/2015".parse().unwrap();
        assert_eq!(v.time(), "+2015-12-31T00:00:00Z");
        assert_eq!(v.precision(), Precision::Day);
        assert!("12 12 12".parse::<TimeValue>().is_err());
    }

    #[test]
    fn test_display_is_canonical_time() {
        let v = TimeValue::new("-44-03-15", 0, 0, 0, Precision::Day, CalendarModel::Julian).unwrap();
        assert_eq!(v.to_string(), "-0044-03-15T00:00:00Z");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_record_shape() {
        let v = TimeValue::new("+2013-07-16", 60, 1, 0, Precision::Day, CalendarModel::Gregorian).unwrap();
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["time"], "+2013-07-16T00:00:00Z");
        assert_eq!(json["timezone"], 60);
        assert_eq!(json["precision"], 11);
        assert_eq!(json["calendarmodel"], GREGORIAN_URI);
        let back: TimeValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_invalid_record() {
        let json = serde_json::json!({
            "time": "+2013-13-16T00:00:00Z",
            "timezone": 0,
            "before": 0,
            "after": 0,
            "precision": 11,
            "calendarmodel": GREGORIAN_URI,
        });
        assert!(serde_json::from_value::<TimeValue>(json).is_err());
    }
}
