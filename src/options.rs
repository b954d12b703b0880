// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Parser configuration.
//!
//! [`ParserOptions`] is an immutable value handed by reference to every
//! [`TimeParser::parse`](crate::TimeParser::parse) call. Parsers never keep
//! options between calls, so one parser instance can serve callers with
//! different settings concurrently.

use crate::calendar::CalendarModel;
use crate::precision::Precision;
use std::collections::BTreeMap;

/// Digit-group separator assumed when none is configured.
pub const DEFAULT_DIGIT_GROUP_SEPARATOR: &str = ",";

/// Language whose month names are used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Settings shared by all parsers.
///
/// ```
/// use deeptime::{CalendarModel, ParserOptions, Precision};
///
/// let options = ParserOptions::default()
///     .with_precision(Precision::Year)
///     .with_calendar_name("gregoriano", CalendarModel::Gregorian);
/// assert_eq!(options.precision(), Some(Precision::Year));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    precision: Option<Precision>,
    calendar: Option<String>,
    digit_group_separator: String,
    language: String,
    calendar_names: BTreeMap<String, CalendarModel>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            precision: None,
            calendar: None,
            digit_group_separator: DEFAULT_DIGIT_GROUP_SEPARATOR.to_owned(),
            language: DEFAULT_LANGUAGE.to_owned(),
            calendar_names: BTreeMap::new(),
        }
    }
}

impl ParserOptions {
    /// Requested precision. May only make an inferred precision coarser,
    /// unless day information is present.
    #[inline]
    pub fn precision(&self) -> Option<Precision> {
        self.precision
    }

    /// Calendar model token used when the input names none.
    #[inline]
    pub fn calendar(&self) -> Option<&str> {
        self.calendar.as_deref()
    }

    #[inline]
    pub fn digit_group_separator(&self) -> &str {
        &self.digit_group_separator
    }

    /// Language tag selecting month names, e.g. `"en"`.
    #[inline]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Localized calendar names, matched exactly before any alias.
    #[inline]
    pub fn calendar_names(&self) -> &BTreeMap<String, CalendarModel> {
        &self.calendar_names
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_calendar(mut self, calendar: impl Into<String>) -> Self {
        self.calendar = Some(calendar.into());
        self
    }

    pub fn with_digit_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.digit_group_separator = separator.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_calendar_name(mut self, name: impl Into<String>, model: CalendarModel) -> Self {
        self.calendar_names.insert(name.into(), model);
        self
    }
}
