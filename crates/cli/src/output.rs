// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;
use timeago_core::{PhraseKey, PhraseSet, Rendered};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct RenderedJson<'a> {
    locale: &'a str,
    #[serde(flatten)]
    rendered: &'a Rendered,
}

/// Format a rendered relative time.
pub fn format_rendered(
    locale: &str,
    rendered: &Rendered,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(rendered.text.clone()),
        OutputFormat::Json => Ok(serde_json::to_string(&RenderedJson { locale, rendered })?),
    }
}

/// Format a locale listing, one code per line in text mode.
pub fn format_locales(locales: &[&str], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(locales.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string(locales)?),
    }
}

/// Format a phrase set as `key = "template"` lines, or as a JSON object.
pub fn format_phrases(phrases: &PhraseSet, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let width = PhraseKey::ALL
                .iter()
                .map(|k| k.as_str().len())
                .max()
                .unwrap_or(0);
            let lines: Vec<String> = PhraseKey::ALL
                .iter()
                .map(|key| format!("{:<width$} = {:?}", key.as_str(), phrases.get(*key)))
                .collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(phrases)?),
    }
}
