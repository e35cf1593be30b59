// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Count substitution and prefix/suffix composition.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Count placeholder: `{0}` or `{count}`.
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
pub static COUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?:0|count)\}").expect("constant regex pattern is valid"));

/// Locale-specific rendering of integer counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Inserted between groups of three digits. Empty disables grouping.
    #[serde(default = "default_grouping")]
    pub grouping: String,
}

fn default_grouping() -> String {
    ",".to_string()
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            grouping: default_grouping(),
        }
    }
}

impl NumberFormat {
    pub fn new(grouping: impl Into<String>) -> Self {
        Self {
            grouping: grouping.into(),
        }
    }

    /// Render `n` with digit grouping, e.g. `1234567` → `"1,234,567"`.
    pub fn format(&self, n: u64) -> String {
        let digits = n.to_string();
        if self.grouping.is_empty() || digits.len() <= 3 {
            return digits;
        }
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 * self.grouping.len());
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(&self.grouping);
            }
            out.push(c);
        }
        out
    }
}

/// Substitute `count` into `template`'s placeholder.
///
/// Templates without a placeholder are returned unchanged, as are templates
/// filled without a count.
pub fn fill(template: &str, count: Option<u64>, numbers: &NumberFormat) -> String {
    match count {
        Some(n) if COUNT_PATTERN.is_match(template) => {
            let rendered = numbers.format(n);
            COUNT_PATTERN
                .replace_all(template, regex::NoExpand(&rendered))
                .into_owned()
        }
        _ => template.to_string(),
    }
}

/// Join a phrase with its prefix and suffix.
///
/// Empty affixes are omitted along with their separating space.
pub fn join(prefix: &str, phrase: &str, suffix: &str) -> String {
    let mut joined = String::with_capacity(prefix.len() + phrase.len() + suffix.len() + 2);
    if !prefix.is_empty() {
        joined.push_str(prefix);
        joined.push(' ');
    }
    joined.push_str(phrase);
    if !suffix.is_empty() {
        joined.push(' ');
        joined.push_str(suffix);
    }
    joined
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
