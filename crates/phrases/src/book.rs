// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered, per-locale phrase collection

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use timeago_core::{NumberFormat, PhraseKey, PhraseSet, PhraseTable};

/// Phrases and number formatting for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleEntry {
    #[serde(flatten)]
    pub number: NumberFormat,
    #[serde(flatten)]
    pub phrases: PhraseSet,
}

impl LocaleEntry {
    pub fn new(phrases: PhraseSet, number: NumberFormat) -> Self {
        Self { number, phrases }
    }
}

/// A phrase table backed by an ordered map of locale code to entry.
///
/// Locales keep their declaration order, which is also the order reported by
/// [`PhraseTable::locales`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseBook {
    #[serde(default, alias = "locale")]
    pub locales: IndexMap<String, LocaleEntry>,
}

impl PhraseBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace `locale`, returning the entry it replaced.
    pub fn insert(&mut self, locale: impl Into<String>, entry: LocaleEntry) -> Option<LocaleEntry> {
        self.locales.insert(locale.into(), entry)
    }

    pub fn with_locale(mut self, locale: impl Into<String>, entry: LocaleEntry) -> Self {
        self.insert(locale, entry);
        self
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleEntry> {
        self.locales.get(locale)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Layer `other` over this book.
    ///
    /// Locales present in both are replaced wholesale by `other`'s entry and
    /// keep their original position; new locales are appended.
    pub fn merge(&mut self, other: PhraseBook) {
        for (locale, entry) in other.locales {
            if self.locales.contains_key(&locale) {
                tracing::debug!(locale = %locale, "replacing phrases for locale");
            }
            self.locales.insert(locale, entry);
        }
    }
}

impl PhraseTable for PhraseBook {
    fn locales(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    fn phrase(&self, locale: &str, key: PhraseKey) -> Option<&str> {
        self.locales
            .get(locale)
            .map(|entry| entry.phrases.get(key))
            .filter(|template| !template.is_empty())
    }

    fn number_format(&self, locale: &str) -> NumberFormat {
        self.locales
            .get(locale)
            .map(|entry| entry.number.clone())
            .unwrap_or_default()
    }

    fn supports(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }
}

#[cfg(test)]
#[path = "book_tests.rs"]
mod tests;
