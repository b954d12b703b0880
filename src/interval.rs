// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Closed epoch-second intervals.
//!
//! [`EpochInterval`] is what [`TimeValue::bounds`](crate::TimeValue::bounds)
//! returns: the first and last second a value covers, both inclusive.

use qtty::{Day, Days, Seconds};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inclusive range `[lower, upper]` of seconds since 1970-01-01T00:00:00Z.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EpochInterval {
    pub lower: i128,
    pub upper: i128,
}

impl EpochInterval {
    /// Creates a new interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use deeptime::EpochInterval;
    ///
    /// let day = EpochInterval::new(0, 86_399);
    /// assert!(day.contains(43_200));
    /// ```
    #[inline]
    pub const fn new(lower: i128, upper: i128) -> Self {
        EpochInterval { lower, upper }
    }

    /// Length from `lower` to `upper`.
    ///
    /// A single-day interval `[0, 86_399]` lasts 86 399 s; add one second for
    /// the count of seconds covered.
    #[inline]
    pub fn duration(&self) -> Seconds {
        Seconds::new((self.upper - self.lower) as f64)
    }

    /// [`duration`](Self::duration) in days.
    #[inline]
    pub fn duration_days(&self) -> Days {
        self.duration().to::<Day>()
    }

    #[inline]
    pub const fn contains(&self, seconds: i128) -> bool {
        self.lower <= seconds && seconds <= self.upper
    }

    /// Overlap of two intervals. Touching intervals share their edge second.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let lower = self.lower.max(other.lower);
        let upper = self.upper.min(other.upper);

        if lower <= upper {
            Some(Self::new(lower, upper))
        } else {
            None
        }
    }
}

impl fmt::Display for EpochInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
