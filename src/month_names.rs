// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Month-name tables.
//!
//! | Type | Role |
//! |------|------|
//! | [`MonthNameProvider`] | month names per language tag |
//! | [`EnglishMonthNames`] | built-in English table, used by default |
//! | [`MonolingualMonthNameProvider`] | a fixed caller-supplied table |
//! | [`MonthNameUnlocalizer`] | rewrites a localized month name into its canonical one |

use std::collections::BTreeMap;

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Source of month names for a language.
pub trait MonthNameProvider: std::fmt::Debug {
    /// Month names keyed by month number (1–12).
    fn localized_month_names(&self, language: &str) -> BTreeMap<u8, String>;

    /// Every accepted spelling with its month number. Several spellings may
    /// map to the same month.
    fn month_numbers(&self, language: &str) -> Vec<(String, u8)>;
}

/// English month names, full and abbreviated, for every language tag.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EnglishMonthNames;

impl MonthNameProvider for EnglishMonthNames {
    fn localized_month_names(&self, _language: &str) -> BTreeMap<u8, String> {
        (1u8..).zip(ENGLISH_MONTHS.iter().map(|m| (*m).to_owned())).collect()
    }

    fn month_numbers(&self, _language: &str) -> Vec<(String, u8)> {
        let mut numbers: Vec<(String, u8)> = Vec::with_capacity(25);
        for (month, name) in (1u8..).zip(ENGLISH_MONTHS) {
            numbers.push((name.to_owned(), month));
            if name.len() > 3 {
                numbers.push((name[..3].to_owned(), month));
            }
        }
        numbers.push(("Sept".to_owned(), 9));
        numbers
    }
}

/// A single table, whatever language is asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonolingualMonthNameProvider {
    month_names: BTreeMap<u8, String>,
}

impl MonolingualMonthNameProvider {
    pub fn new<I, S>(month_names: I) -> Self
    where
        I: IntoIterator<Item = (u8, S)>,
        S: Into<String>,
    {
        Self {
            month_names: month_names.into_iter().map(|(n, s)| (n, s.into())).collect(),
        }
    }
}

impl MonthNameProvider for MonolingualMonthNameProvider {
    fn localized_month_names(&self, _language: &str) -> BTreeMap<u8, String> {
        self.month_names.clone()
    }

    fn month_numbers(&self, _language: &str) -> Vec<(String, u8)> {
        self.month_names.iter().map(|(n, s)| (s.clone(), *n)).collect()
    }
}

/// Replaces one localized month name in a date string.
///
/// Search strings are tried longest first, and matching is case-sensitive
/// and ignores word boundaries (`1Jul2015` → `1July2015`). The text is
/// returned untouched when:
///
/// - the matching search string occurs more than once;
/// - the replacement is already present and not shorter than the search
///   string (`Jul` → `July` leaves `July` alone);
/// - the search string contains a digit, as some languages spell months as
///   numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthNameUnlocalizer {
    replacements: Vec<(String, String)>,
}

impl MonthNameUnlocalizer {
    pub fn new<I, K, V>(replacements: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut replacements: Vec<(String, String)> = replacements
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        replacements.sort_by(|(a, _), (b, _)| b.chars().count().cmp(&a.chars().count()));
        Self { replacements }
    }

    /// Maps every name the provider knows for `language` onto the English
    /// full month name.
    pub fn from_provider(provider: &dyn MonthNameProvider, language: &str) -> Self {
        Self::new(
            provider
                .month_numbers(language)
                .into_iter()
                .filter_map(|(name, month)| {
                    let canonical = ENGLISH_MONTHS.get(usize::from(month).checked_sub(1)?)?;
                    Some((name, *canonical))
                }),
        )
    }

    pub fn unlocalize(&self, date: &str) -> String {
        for (search, replace) in &self.replacements {
            if search.chars().any(|c| c.is_ascii_digit()) {
                continue;
            }
            match date.matches(search.as_str()).count() {
                0 => continue,
                1 => {}
                _ => break,
            }
            if date.contains(replace.as_str()) && replace.len() >= search.len() {
                break;
            }
            return date.replacen(search.as_str(), replace, 1);
        }
        date.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocalize(date: &str, replacements: &[(&str, &str)]) -> String {
        MonthNameUnlocalizer::new(replacements.iter().copied()).unlocalize(date)
    }

    #[test]
    fn test_english_numbers_include_abbreviations() {
        let numbers = EnglishMonthNames.month_numbers("en");
        assert!(numbers.contains(&("January".to_owned(), 1)));
        assert!(numbers.contains(&("Jan".to_owned(), 1)));
        assert!(numbers.contains(&("May".to_owned(), 5)));
        assert!(numbers.contains(&("Sept".to_owned(), 9)));
        assert_eq!(numbers.iter().filter(|(_, m)| *m == 5).count(), 1);
    }

    #[test]
    fn test_english_localized_names() {
        let names = EnglishMonthNames.localized_month_names("fr");
        assert_eq!(names.len(), 12);
        assert_eq!(names[&12], "December");
    }

    #[test]
    fn test_monolingual_provider_flips_table() {
        let provider = MonolingualMonthNameProvider::new([(1, "leden"), (3, "březen")]);
        assert_eq!(provider.localized_month_names("cs")[&3], "březen");
        assert_eq!(
            provider.month_numbers("xx"),
            vec![("leden".to_owned(), 1), ("březen".to_owned(), 3)]
        );
    }

    #[test]
    fn test_unlocalize_without_replacements() {
        assert_eq!(unlocalize("", &[]), "");
        assert_eq!(unlocalize("Jul", &[]), "Jul");
    }

    #[test]
    fn test_unlocalize_prefers_longer_search() {
        assert_eq!(unlocalize("Juli", &[("Jul", "bad"), ("Juli", "July")]), "July");
        assert_eq!(unlocalize("Juli", &[("Juli", "July"), ("Jul", "bad")]), "July");
    }

    #[test]
    fn test_unlocalize_refuses_repeated_names() {
        assert_eq!(unlocalize("July July", &[("July", "bad")]), "July July");
    }

    #[test]
    fn test_unlocalize_keeps_unlocalized_names() {
        assert_eq!(unlocalize("July", &[("Jul", "July")]), "July");
        assert_eq!(unlocalize("July", &[("July", "Jul")]), "Jul");
    }

    #[test]
    fn test_unlocalize_ignores_word_boundaries() {
        assert_eq!(unlocalize("1Jul2015", &[("Jul", "July")]), "1July2015");
        assert_eq!(unlocalize("1stJulLastYear", &[("Jul", "July")]), "1stJulyLastYear");
    }

    #[test]
    fn test_unlocalize_is_case_sensitive() {
        assert_eq!(unlocalize("jul", &[("Jul", "bad")]), "jul");
    }

    #[test]
    fn test_unlocalize_skips_numeric_names() {
        assert_eq!(unlocalize("2000", &[("2", "February")]), "2000");
        assert_eq!(unlocalize("5. 4. 1891", &[("5.", "May")]), "5. 4. 1891");
    }

    #[test]
    fn test_unlocalizer_from_provider() {
        let provider = MonolingualMonthNameProvider::new([(3, "březen")]);
        let unlocalizer = MonthNameUnlocalizer::from_provider(&provider, "cs");
        assert_eq!(unlocalizer.unlocalize("5. březen 1891"), "5. March 1891");
    }
}
