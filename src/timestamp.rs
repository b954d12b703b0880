// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Canonical extended-year timestamps.
//!
//! A [`Timestamp`] is the `time` field of a [`TimeValue`](crate::TimeValue):
//! an explicitly signed year of up to sixteen digits followed by month, day
//! and time of day.
//!
//! ```text
//! +2013-07-16T10:15:42Z
//! -0000000001000000-00-00T00:00:00Z
//! ```
//!
//! Month and day may be `00`, meaning unknown. The year is stored without
//! leading zeros beyond a minimum of four digits, so `+00000000000002013`
//! and `+2013` are the same timestamp. Both `+0000` and `-0000` are
//! accepted.

use crate::error::ValueError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Maximum number of year digits.
pub const MAX_YEAR_DIGITS: usize = 16;

const MIN_YEAR_DIGITS: usize = 4;

static STRICT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([-+])([0-9]{1,16})-([0-9]{2})-([0-9]{2})(?:T([0-9]{2}):([0-9]{2}):([0-9]{2}))?Z?$",
    )
    .expect("strict timestamp grammar")
});

/// A validated, canonically normalized timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Timestamp {
    negative: bool,
    year: String,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl Timestamp {
    /// Builds a timestamp from its fields.
    ///
    /// `year_digits` must be 1 to 16 ASCII digits; it is normalized to the
    /// four-digit minimum. Field bounds are month ≤ 12, day ≤ 31, hour ≤ 23,
    /// minute ≤ 59 and second ≤ 61 (leap seconds). A day needs a month and a
    /// time of day needs a day.
    pub fn from_parts(
        negative: bool,
        year_digits: &str,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ValueError> {
        if year_digits.is_empty()
            || year_digits.len() > MAX_YEAR_DIGITS
            || !year_digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ValueError::MalformedTimestamp(format!(
                "{}{year_digits}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}Z",
                if negative { '-' } else { '+' }
            )));
        }

        let timestamp = Self {
            negative,
            year: normalize_year(year_digits),
            month,
            day,
            hour,
            minute,
            second,
        };
        timestamp.validate()?;
        Ok(timestamp)
    }

    fn validate(&self) -> Result<(), ValueError> {
        let out_of_range = |field: &'static str, value: u8| ValueError::FieldOutOfRange {
            field,
            value,
            timestamp: self.to_string(),
        };

        if self.month > 12 {
            return Err(out_of_range("month", self.month));
        }
        if self.day > 31 {
            return Err(out_of_range("day", self.day));
        }
        if self.hour > 23 {
            return Err(out_of_range("hour", self.hour));
        }
        if self.minute > 59 {
            return Err(out_of_range("minute", self.minute));
        }
        if self.second > 61 {
            return Err(out_of_range("second", self.second));
        }
        if self.day > 0 && self.month == 0 {
            return Err(ValueError::DayWithoutMonth(self.to_string()));
        }
        if self.has_time_of_day() && self.day == 0 {
            return Err(ValueError::TimeWithoutDay(self.to_string()));
        }
        Ok(())
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Year digits without sign, at least four of them.
    #[inline]
    pub fn year_digits(&self) -> &str {
        &self.year
    }

    /// Unsigned year value. Sixteen digits always fit.
    pub fn year_magnitude(&self) -> u64 {
        self.year.bytes().fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'))
    }

    #[inline]
    pub fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub fn second(&self) -> u8 {
        self.second
    }

    #[inline]
    pub fn has_time_of_day(&self) -> bool {
        self.hour > 0 || self.minute > 0 || self.second > 0
    }

    /// Year digits left-padded with zeros to [`MAX_YEAR_DIGITS`].
    pub(crate) fn padded_year(&self) -> String {
        format!("{:0>width$}", self.year, width = MAX_YEAR_DIGITS)
    }
}

fn normalize_year(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    format!("{trimmed:0>width$}", width = MIN_YEAR_DIGITS)
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            if self.negative { '-' } else { '+' },
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}

impl FromStr for Timestamp {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = STRICT
            .captures(s)
            .ok_or_else(|| ValueError::MalformedTimestamp(s.to_owned()))?;
        let field = |i: usize| -> u8 {
            caps.get(i)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0)
        };
        Self::from_parts(
            &caps[1] == "-",
            &caps[2],
            field(3),
            field(4),
            field(5),
            field(6),
            field(7),
        )
    }
}
