// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::compose::NumberFormat;
use crate::phrase::{PhraseKey, PhraseSet, PhraseTable};
use std::collections::HashMap;

/// English phrases with an "ago" / "from now" suffix pair.
pub fn english_phrases() -> PhraseSet {
    PhraseSet {
        prefix_ago: String::new(),
        prefix_from_now: String::new(),
        suffix_ago: "ago".to_string(),
        suffix_from_now: "from now".to_string(),
        seconds: "less than a minute".to_string(),
        minute: "about a minute".to_string(),
        minutes: "{0} minutes".to_string(),
        hour: "about an hour".to_string(),
        hours: "about {0} hours".to_string(),
        day: "a day".to_string(),
        days: "{0} days".to_string(),
        month: "about a month".to_string(),
        months: "{0} months".to_string(),
        year: "about a year".to_string(),
        years: "{0} years".to_string(),
    }
}

/// Spanish phrases, decorated with prefixes instead of suffixes.
pub fn spanish_phrases() -> PhraseSet {
    PhraseSet {
        prefix_ago: "hace".to_string(),
        prefix_from_now: "dentro de".to_string(),
        suffix_ago: String::new(),
        suffix_from_now: String::new(),
        seconds: "menos de un minuto".to_string(),
        minute: "un minuto".to_string(),
        minutes: "unos {0} minutos".to_string(),
        hour: "una hora".to_string(),
        hours: "{0} horas".to_string(),
        day: "un día".to_string(),
        days: "{0} días".to_string(),
        month: "un mes".to_string(),
        months: "{0} meses".to_string(),
        year: "un año".to_string(),
        years: "{0} años".to_string(),
    }
}

/// In-memory phrase table with per-key control, for exercising the
/// formatter's lookup and error paths.
#[derive(Debug, Default, Clone)]
pub struct FakeTable {
    locales: Vec<String>,
    phrases: HashMap<(String, PhraseKey), String>,
    numbers: HashMap<String, NumberFormat>,
}

impl FakeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table declaring `en` and `es`.
    pub fn en_es() -> Self {
        Self::new()
            .with_locale("en", &english_phrases())
            .with_locale("es", &spanish_phrases())
            .with_number_format("es", NumberFormat::new("."))
    }

    /// Declare `locale` and register every non-empty slot of `phrases`.
    pub fn with_locale(mut self, locale: &str, phrases: &PhraseSet) -> Self {
        self.locales.push(locale.to_string());
        for key in PhraseKey::ALL {
            let template = phrases.get(key);
            if !template.is_empty() {
                self.phrases
                    .insert((locale.to_string(), key), template.to_string());
            }
        }
        self
    }

    pub fn with_number_format(mut self, locale: &str, numbers: NumberFormat) -> Self {
        self.numbers.insert(locale.to_string(), numbers);
        self
    }

    /// Drop one entry so lookups for it miss.
    pub fn without(mut self, locale: &str, key: PhraseKey) -> Self {
        self.phrases.remove(&(locale.to_string(), key));
        self
    }

    /// Set one entry verbatim, including empty templates.
    pub fn with_entry(mut self, locale: &str, key: PhraseKey, template: &str) -> Self {
        self.phrases
            .insert((locale.to_string(), key), template.to_string());
        self
    }
}

impl PhraseTable for FakeTable {
    fn locales(&self) -> Vec<&str> {
        self.locales.iter().map(String::as_str).collect()
    }

    fn phrase(&self, locale: &str, key: PhraseKey) -> Option<&str> {
        self.phrases
            .get(&(locale.to_string(), key))
            .map(String::as_str)
    }

    fn number_format(&self, locale: &str) -> NumberFormat {
        self.numbers.get(locale).cloned().unwrap_or_default()
    }
}
