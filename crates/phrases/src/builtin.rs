// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phrases shipped with the library: English, Spanish, and Italian.

use crate::book::{LocaleEntry, PhraseBook};
use timeago_core::{NumberFormat, PhraseKey, PhraseSet};

struct BuiltinLocale {
    code: &'static str,
    grouping: &'static str,
    /// Templates in [`PhraseKey::ALL`] order.
    templates: [&'static str; 15],
}

const BUILTIN: [BuiltinLocale; 3] = [
    BuiltinLocale {
        code: "en",
        grouping: ",",
        templates: [
            "",
            "",
            "ago",
            "from now",
            "less than a minute",
            "about a minute",
            "{0} minutes",
            "about an hour",
            "about {0} hours",
            "a day",
            "{0} days",
            "about a month",
            "{0} months",
            "about a year",
            "{0} years",
        ],
    },
    BuiltinLocale {
        code: "es",
        grouping: ".",
        templates: [
            "hace",
            "dentro de",
            "",
            "",
            "menos de un minuto",
            "un minuto",
            "unos {0} minutos",
            "una hora",
            "{0} horas",
            "un día",
            "{0} días",
            "un mes",
            "{0} meses",
            "un año",
            "{0} años",
        ],
    },
    BuiltinLocale {
        code: "it",
        grouping: ".",
        templates: [
            "",
            "tra",
            "fa",
            "",
            "meno di un minuto",
            "circa un minuto",
            "{0} minuti",
            "circa un'ora",
            "circa {0} ore",
            "un giorno",
            "{0} giorni",
            "circa un mese",
            "{0} mesi",
            "circa un anno",
            "{0} anni",
        ],
    },
];

/// Locale codes of the built-in bundle, in order.
pub fn builtin_locales() -> Vec<&'static str> {
    BUILTIN.iter().map(|locale| locale.code).collect()
}

/// The built-in phrase bundle.
pub fn builtin() -> PhraseBook {
    let mut book = PhraseBook::new();
    for locale in &BUILTIN {
        let mut phrases = PhraseSet::default();
        for (key, template) in PhraseKey::ALL.into_iter().zip(locale.templates) {
            phrases.set(key, template);
        }
        book.insert(
            locale.code,
            LocaleEntry::new(phrases, NumberFormat::new(locale.grouping)),
        );
    }
    book
}

#[cfg(test)]
#[path = "builtin_tests.rs"]
mod tests;
