// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Epoch arithmetic for [`TimeValue`]s.
//!
//! All results are whole seconds relative to `1970-01-01T00:00:00Z` on the
//! proleptic Gregorian axis, held in `i128` so that sixteen-digit years and
//! `u64` uncertainties never overflow.
//!
//! # Year numbering
//!
//! Timestamps have no year zero: `-0001` is directly followed by `+0001`.
//! Internally the signed year is mapped onto the astronomical axis
//! (`-0001` → 0, `-0005` → −4) before applying the 4/100/400 leap rule.
//! `+0000` and `-0000` are both read as the year before `+0001`.
//!
//! # Bounds
//!
//! [`lower_bound`](TimeValueCalculator::lower_bound) and
//! [`upper_bound`](TimeValueCalculator::upper_bound) widen a value to the
//! whole interval its precision covers, then by `before`/`after` units of
//! that precision:
//!
//! | Precision | Lower | Upper |
//! |-----------|-------|-------|
//! | `10yr` on `+1987-…` | `+1980-01-01T00:00:00Z` | `+1989-12-31T23:59:59Z` |
//! | `month` on `+2001-02-…` | `+2001-02-01T00:00:00Z` | `+2001-02-28T23:59:59Z` |
//! | `1kyr` on `-1500-…` | `-1999-01-01T00:00:00Z` | `-1000-12-31T23:59:59Z` |

use crate::interval::EpochInterval;
use crate::precision::Precision;
use crate::timestamp::Timestamp;
use crate::value::TimeValue;

const SECONDS_PER_DAY: i128 = 86_400;

/// Days from 0000-03-01 to 1970-01-01 on the astronomical axis.
const DAYS_TO_UNIX_EPOCH: i128 = 719_468;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Edge {
    Lower,
    Upper,
}

/// Stateless calculator over [`TimeValue`]s.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TimeValueCalculator;

impl TimeValueCalculator {
    /// Seconds since the Unix epoch of the value's timestamp.
    ///
    /// Unknown month or day (`00`) count as the first month or day. Leap
    /// seconds are counted linearly, so `12:13:61` equals `12:14:01`. The
    /// timezone offset is subtracted.
    ///
    /// ```
    /// use deeptime::{CalendarModel, Precision, TimeValue, TimeValueCalculator};
    ///
    /// let v = TimeValue::new("+2014-04-30T12:35:55Z", 0, 0, 0, Precision::Second, CalendarModel::Gregorian)?;
    /// assert_eq!(TimeValueCalculator::epoch_seconds(&v), 1_398_861_355);
    /// # Ok::<(), deeptime::ValueError>(())
    /// ```
    pub fn epoch_seconds(value: &TimeValue) -> i128 {
        Self::timestamp_epoch_seconds(value.timestamp(), value.timezone())
    }

    /// [`epoch_seconds`](Self::epoch_seconds) for a bare timestamp and a
    /// timezone offset in minutes.
    pub fn timestamp_epoch_seconds(timestamp: &Timestamp, timezone: i32) -> i128 {
        civil_seconds(
            astronomical_year(timestamp.is_negative(), i128::from(timestamp.year_magnitude())),
            timestamp.month(),
            timestamp.day(),
            timestamp.hour(),
            timestamp.minute(),
            timestamp.second(),
        ) - i128::from(timezone) * 60
    }

    /// Nominal length of one unit of `precision` in seconds.
    #[inline]
    pub fn seconds_for_precision(precision: Precision) -> i128 {
        precision.unit_seconds()
    }

    /// Earliest second covered by the value, including `before` uncertainty.
    pub fn lower_bound(value: &TimeValue) -> i128 {
        let unit = Self::seconds_for_precision(value.precision());
        edge_seconds(value, Edge::Lower) - i128::from(value.before()) * unit
    }

    /// Latest second covered by the value, including `after` uncertainty.
    pub fn upper_bound(value: &TimeValue) -> i128 {
        let unit = Self::seconds_for_precision(value.precision());
        edge_seconds(value, Edge::Upper) + i128::from(value.after()) * unit
    }

    /// Both bounds as an interval.
    pub fn bounds(value: &TimeValue) -> EpochInterval {
        EpochInterval::new(Self::lower_bound(value), Self::upper_bound(value))
    }

    /// Gregorian leap-year test on a signed year without year zero.
    ///
    /// Negative years are shifted by one (−1 and −5 are leap years), and
    /// fractional years are rounded towards zero first.
    pub fn is_leap_year(year: f64) -> bool {
        let year = shift_signed_year(year);
        year % 4.0 == 0.0 && (year % 100.0 != 0.0 || year % 400.0 == 0.0)
    }

    /// Leap years between year 0 and `year`, negative for negative years.
    pub fn leap_year_count(year: f64) -> f64 {
        let year = shift_signed_year(year);
        (year / 4.0).floor() - (year / 100.0).floor() + (year / 400.0).floor()
    }

    /// Days in `month` (1–12) of an astronomical year, by the Gregorian rule.
    pub fn days_in_month(astronomical_year: i128, month: u8) -> u8 {
        match month {
            2 if is_leap_astronomical(astronomical_year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }
}

fn shift_signed_year(year: f64) -> f64 {
    if year < 0.0 {
        year.ceil() + 1.0
    } else {
        year.floor()
    }
}

fn is_leap_astronomical(year: i128) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[inline]
fn astronomical_year(negative: bool, magnitude: i128) -> i128 {
    if negative && magnitude > 0 {
        1 - magnitude
    } else {
        magnitude
    }
}

/// Civil date to days since 1970-01-01 (Hinnant's algorithm).
fn days_from_civil(year: i128, month: u8, day: u8) -> i128 {
    let month = i128::from(month);
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let month_from_march = (month + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + i128::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - DAYS_TO_UNIX_EPOCH
}

fn civil_seconds(year: i128, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> i128 {
    days_from_civil(year, month.max(1), day.max(1)) * SECONDS_PER_DAY
        + i128::from(hour) * 3_600
        + i128::from(minute) * 60
        + i128::from(second)
}

/// Epoch seconds of the first or last second inside the precision window,
/// before uncertainty.
fn edge_seconds(value: &TimeValue, edge: Edge) -> i128 {
    let timestamp = value.timestamp();
    let precision = value.precision();
    let negative = timestamp.is_negative();

    // Digits below the precision are unknown. For negative years a larger
    // magnitude is earlier, so the fill digits swap.
    let fill = match (edge, negative) {
        (Edge::Lower, false) | (Edge::Upper, true) => b'0',
        (Edge::Lower, true) | (Edge::Upper, false) => b'9',
    };
    let magnitude = year_with_filled_digits(
        &timestamp.padded_year(),
        precision.year_digits_affected(),
        fill,
    );
    let year = astronomical_year(negative, magnitude);

    let seconds = match edge {
        Edge::Lower => civil_seconds(
            year,
            if precision < Precision::Month { 1 } else { timestamp.month() },
            if precision < Precision::Day { 1 } else { timestamp.day() },
            if precision < Precision::Hour { 0 } else { timestamp.hour() },
            if precision < Precision::Minute { 0 } else { timestamp.minute() },
            if precision < Precision::Second { 0 } else { timestamp.second() },
        ),
        Edge::Upper => {
            let month = if precision < Precision::Month || timestamp.month() == 0 {
                12
            } else {
                timestamp.month()
            };
            let day = if precision < Precision::Day || timestamp.day() == 0 {
                TimeValueCalculator::days_in_month(year, month).max(timestamp.day())
            } else {
                timestamp.day()
            };
            civil_seconds(
                year,
                month,
                day,
                if precision < Precision::Hour { 23 } else { timestamp.hour() },
                if precision < Precision::Minute { 59 } else { timestamp.minute() },
                if precision < Precision::Second {
                    timestamp.second().max(59)
                } else {
                    timestamp.second()
                },
            )
        }
    };
    seconds - i128::from(value.timezone()) * 60
}

fn year_with_filled_digits(padded: &str, affected: usize, fill: u8) -> i128 {
    let keep = padded.len().saturating_sub(affected);
    padded
        .bytes()
        .enumerate()
        .map(|(i, b)| if i < keep { b } else { fill })
        .fold(0i128, |acc, b| acc * 10 + i128::from(b - b'0'))
}
