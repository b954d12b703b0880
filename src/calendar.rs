// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar models and their resolution from text.
//!
//! A calendar model is an opaque identifier. Two are known by name:
//!
//! | Variant | Identifier |
//! |---------|------------|
//! | [`CalendarModel::Gregorian`] | `http://www.wikidata.org/entity/Q1985727` |
//! | [`CalendarModel::Julian`] | `http://www.wikidata.org/entity/Q1985786` |
//!
//! Any other non-empty identifier is carried verbatim as
//! [`CalendarModel::Other`].

use crate::error::{ParseError, ParseErrorKind};
use crate::options::ParserOptions;
use std::fmt;

pub const GREGORIAN_URI: &str = "http://www.wikidata.org/entity/Q1985727";
pub const JULIAN_URI: &str = "http://www.wikidata.org/entity/Q1985786";

/// Last year that defaults to the Julian calendar.
pub const LAST_JULIAN_DEFAULT_YEAR: u64 = 1582;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CalendarModel {
    Gregorian,
    Julian,
    Other(String),
}

impl CalendarModel {
    /// The identifier string.
    pub fn as_str(&self) -> &str {
        match self {
            CalendarModel::Gregorian => GREGORIAN_URI,
            CalendarModel::Julian => JULIAN_URI,
            CalendarModel::Other(id) => id,
        }
    }

    #[inline]
    pub fn is_gregorian(&self) -> bool {
        matches!(self, CalendarModel::Gregorian)
    }

    #[inline]
    pub fn is_julian(&self) -> bool {
        matches!(self, CalendarModel::Julian)
    }
}

impl From<&str> for CalendarModel {
    fn from(id: &str) -> Self {
        match id {
            GREGORIAN_URI => CalendarModel::Gregorian,
            JULIAN_URI => CalendarModel::Julian,
            other => CalendarModel::Other(other.to_owned()),
        }
    }
}

impl From<String> for CalendarModel {
    fn from(id: String) -> Self {
        match id.as_str() {
            GREGORIAN_URI => CalendarModel::Gregorian,
            JULIAN_URI => CalendarModel::Julian,
            _ => CalendarModel::Other(id),
        }
    }
}

impl fmt::Display for CalendarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Resolution
// ═══════════════════════════════════════════════════════════════════════════

/// Decides which calendar model a parsed value belongs to.
///
/// Order of precedence:
///
/// 1. a calendar token written in the input ([`resolve_token`](Self::resolve_token));
/// 2. the `calendar` option;
/// 3. the structural default: Julian for negative years and years up to
///    1582, Gregorian after.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CalendarModelResolver;

impl CalendarModelResolver {
    const FORMAT: &'static str = "calendar model";

    /// Resolves a single calendar token.
    ///
    /// Localized names from [`ParserOptions::calendar_names`] match exactly
    /// and win. Then the two canonical identifiers, then a small
    /// case-insensitive alias table. Matching is on the whole token.
    pub fn resolve_token(token: &str, options: &ParserOptions) -> Result<CalendarModel, ParseError> {
        let trimmed = token.trim();
        if let Some(model) = options.calendar_names().get(trimmed) {
            return Ok(model.clone());
        }
        match trimmed {
            GREGORIAN_URI => return Ok(CalendarModel::Gregorian),
            JULIAN_URI => return Ok(CalendarModel::Julian),
            _ => {}
        }
        match trimmed.to_lowercase().as_str() {
            "" | "gregorian" | "western" | "christian" => Ok(CalendarModel::Gregorian),
            "julian" => Ok(CalendarModel::Julian),
            _ => Err(ParseError::new(
                ParseErrorKind::UnrecognizedCalendar(trimmed.to_owned()),
                token,
                Self::FORMAT,
            )),
        }
    }

    /// Structural default for a year written as `sign` + `year_digits`.
    pub fn default_for_year(negative: bool, year_digits: &str) -> CalendarModel {
        if negative {
            return CalendarModel::Julian;
        }
        let significant = year_digits.trim_start_matches('0');
        // More than four significant digits is always past 1582.
        let early = significant.len() <= 4
            && significant.parse::<u64>().unwrap_or(0) <= LAST_JULIAN_DEFAULT_YEAR;
        if early {
            CalendarModel::Julian
        } else {
            CalendarModel::Gregorian
        }
    }

    /// Applies the full precedence order.
    pub fn resolve(
        token: Option<&str>,
        negative: bool,
        year_digits: &str,
        options: &ParserOptions,
    ) -> Result<CalendarModel, ParseError> {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            return Self::resolve_token(token, options);
        }
        if let Some(option) = options.calendar() {
            return Self::resolve_token(option, options);
        }
        let model = Self::default_for_year(negative, year_digits);
        log::trace!("calendar model defaulted to {model} for year {year_digits}");
        Ok(model)
    }
}
