// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Precision levels of a [`TimeValue`](crate::TimeValue).
//!
//! Fifteen ordinal levels, coarsest first:
//!
//! | Level | Variant | Label | Unit |
//! |-------|---------|-------|------|
//! | 0 | [`Precision::Year1G`] | `1Gyr` | 10⁹ years |
//! | 1 | [`Precision::Year100M`] | `100Myr` | 10⁸ years |
//! | 2 | [`Precision::Year10M`] | `10Myr` | 10⁷ years |
//! | 3 | [`Precision::Year1M`] | `1Myr` | 10⁶ years |
//! | 4 | [`Precision::Year100K`] | `100kyr` | 10⁵ years |
//! | 5 | [`Precision::Year10K`] | `10kyr` | 10⁴ years |
//! | 6 | [`Precision::Year1K`] | `1kyr` | 10³ years |
//! | 7 | [`Precision::Year100`] | `100yr` | century |
//! | 8 | [`Precision::Year10`] | `10yr` | decade |
//! | 9 | [`Precision::Year`] | `year` | year |
//! | 10 | [`Precision::Month`] | `month` | month |
//! | 11 | [`Precision::Day`] | `day` | day |
//! | 12 | [`Precision::Hour`] | `hour` | hour |
//! | 13 | [`Precision::Minute`] | `minute` | minute |
//! | 14 | [`Precision::Second`] | `second` | second |
//!
//! Ordering follows the level: `Year1G < Year < Second`.

use crate::error::ValueError;
use qtty::Seconds;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Nominal Gregorian year length in seconds (365.2425 days).
pub const SECONDS_PER_GREGORIAN_YEAR: i128 = 31_556_952;

/// Nominal month length in seconds (a twelfth of a Gregorian year).
pub const SECONDS_PER_MONTH: i128 = SECONDS_PER_GREGORIAN_YEAR / 12;

/// The unit a time value is known to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Precision {
    Year1G = 0,
    Year100M = 1,
    Year10M = 2,
    Year1M = 3,
    Year100K = 4,
    Year10K = 5,
    Year1K = 6,
    Year100 = 7,
    Year10 = 8,
    Year = 9,
    Month = 10,
    Day = 11,
    Hour = 12,
    Minute = 13,
    Second = 14,
}

impl Precision {
    /// All levels, coarsest first.
    pub const ALL: [Precision; 15] = [
        Precision::Year1G,
        Precision::Year100M,
        Precision::Year10M,
        Precision::Year1M,
        Precision::Year100K,
        Precision::Year10K,
        Precision::Year1K,
        Precision::Year100,
        Precision::Year10,
        Precision::Year,
        Precision::Month,
        Precision::Day,
        Precision::Hour,
        Precision::Minute,
        Precision::Second,
    ];

    #[inline]
    pub const fn from_level(level: u8) -> Option<Self> {
        if level as usize >= Self::ALL.len() {
            None
        } else {
            Some(Self::ALL[level as usize])
        }
    }

    #[inline]
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// One level coarser, saturating at [`Precision::Year1G`].
    #[inline]
    pub const fn coarser(self) -> Self {
        match Self::from_level(self.level().saturating_sub(1)) {
            Some(p) => p,
            None => Precision::Year1G,
        }
    }

    /// One level finer, saturating at [`Precision::Second`].
    #[inline]
    pub const fn finer(self) -> Self {
        match Self::from_level(self.level() + 1) {
            Some(p) => p,
            None => Precision::Second,
        }
    }

    #[inline]
    pub const fn is_year_or_coarser(self) -> bool {
        self.level() <= Precision::Year.level()
    }

    /// Number of low-order year digits this precision leaves unknown:
    /// 0 for year and finer, 9 for [`Precision::Year1G`].
    #[inline]
    pub const fn year_digits_affected(self) -> usize {
        if self.is_year_or_coarser() {
            (Precision::Year.level() - self.level()) as usize
        } else {
            0
        }
    }

    /// Length of one unit of this precision in whole seconds.
    pub const fn unit_seconds(self) -> i128 {
        match self {
            Precision::Second => 1,
            Precision::Minute => 60,
            Precision::Hour => 3_600,
            Precision::Day => 86_400,
            Precision::Month => SECONDS_PER_MONTH,
            _ => SECONDS_PER_GREGORIAN_YEAR * 10i128.pow(self.year_digits_affected() as u32),
        }
    }

    /// Nominal length of one unit of this precision.
    ///
    /// ```
    /// use deeptime::Precision;
    /// use qtty::Seconds;
    ///
    /// assert_eq!(Precision::Day.duration(), Seconds::new(86_400.0));
    /// ```
    #[inline]
    pub fn duration(self) -> Seconds {
        Seconds::new(self.unit_seconds() as f64)
    }

    /// Short label, as printed by `Display`.
    pub const fn label(self) -> &'static str {
        match self {
            Precision::Year1G => "1Gyr",
            Precision::Year100M => "100Myr",
            Precision::Year10M => "10Myr",
            Precision::Year1M => "1Myr",
            Precision::Year100K => "100kyr",
            Precision::Year10K => "10kyr",
            Precision::Year1K => "1kyr",
            Precision::Year100 => "100yr",
            Precision::Year10 => "10yr",
            Precision::Year => "year",
            Precision::Month => "month",
            Precision::Day => "day",
            Precision::Hour => "hour",
            Precision::Minute => "minute",
            Precision::Second => "second",
        }
    }
}

impl TryFrom<u8> for Precision {
    type Error = ValueError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::from_level(level).ok_or(ValueError::PrecisionOutOfRange(level))
    }
}

impl From<Precision> for u8 {
    #[inline]
    fn from(precision: Precision) -> Self {
        precision.level()
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Precision {
    type Err = ValueError;

    /// Accepts a label (`"10kyr"`, `"day"`) or a numeric level (`"11"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(p) = Self::ALL.iter().find(|p| p.label().eq_ignore_ascii_case(s)) {
            return Ok(*p);
        }
        match s.parse::<u8>() {
            Ok(level) => Self::try_from(level),
            Err(_) => Err(ValueError::PrecisionOutOfRange(u8::MAX)),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Precision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.level())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Precision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level = u8::deserialize(deserializer)?;
        Precision::try_from(level).map_err(serde::de::Error::custom)
    }
}
