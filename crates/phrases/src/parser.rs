// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phrase table parsing (TOML, HCL, and JSON)

use crate::book::PhraseBook;
use std::path::Path;
use thiserror::Error;
use timeago_core::compose::COUNT_PATTERN;
use timeago_core::PhraseKey;

/// Phrase table file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Hcl,
    Json,
}

impl Format {
    /// Pick a format from a file extension.
    pub fn for_path(path: &Path) -> Option<Format> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Some(Format::Toml),
            Some("hcl") => Some(Format::Hcl),
            Some("json") => Some(Format::Json),
            _ => None,
        }
    }
}

/// Errors that can occur during phrase table parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("locale '{locale}' is missing a template for '{key}'")]
    MissingPhrase { locale: String, key: PhraseKey },

    #[error("invalid format for {location}: {message}")]
    InvalidFormat { location: String, message: String },
}

/// Parse a phrase table from TOML content (convenience wrapper)
pub fn parse_phrase_book(content: &str) -> Result<PhraseBook, ParseError> {
    parse_phrase_book_with_format(content, Format::Toml)
}

/// Parse a phrase table from the given content in the specified format
pub fn parse_phrase_book_with_format(
    content: &str,
    format: Format,
) -> Result<PhraseBook, ParseError> {
    let book: PhraseBook = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Hcl => hcl::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    validate_book(&book)?;
    Ok(book)
}

/// Check every locale of `book`.
///
/// - locale codes are non-empty and contain no whitespace
/// - every duration slot has a non-empty template
/// - counted slots carry exactly one count placeholder
pub fn validate_book(book: &PhraseBook) -> Result<(), ParseError> {
    for (locale, entry) in &book.locales {
        if locale.is_empty() || locale.chars().any(char::is_whitespace) {
            return Err(ParseError::InvalidFormat {
                location: format!("locales.{:?}", locale),
                message: "locale code must be non-empty and contain no whitespace".to_string(),
            });
        }

        if let Some(key) = entry.phrases.missing_templates().first() {
            return Err(ParseError::MissingPhrase {
                locale: locale.clone(),
                key: *key,
            });
        }

        for key in PhraseKey::ALL.into_iter().filter(|k| k.takes_count()) {
            let placeholders = COUNT_PATTERN.find_iter(entry.phrases.get(key)).count();
            if placeholders != 1 {
                return Err(ParseError::InvalidFormat {
                    location: format!("locales.{}.{}", locale, key),
                    message: format!(
                        "expected exactly one {{0}} placeholder, found {}",
                        placeholders
                    ),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
