// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phrase keys, per-locale phrase sets, and the phrase-table seam.

use crate::compose::NumberFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Semantic slot of a phrase set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseKey {
    PrefixAgo,
    PrefixFromNow,
    SuffixAgo,
    SuffixFromNow,
    Seconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Month,
    Months,
    Year,
    Years,
}

impl PhraseKey {
    pub const ALL: [PhraseKey; 15] = [
        PhraseKey::PrefixAgo,
        PhraseKey::PrefixFromNow,
        PhraseKey::SuffixAgo,
        PhraseKey::SuffixFromNow,
        PhraseKey::Seconds,
        PhraseKey::Minute,
        PhraseKey::Minutes,
        PhraseKey::Hour,
        PhraseKey::Hours,
        PhraseKey::Day,
        PhraseKey::Days,
        PhraseKey::Month,
        PhraseKey::Months,
        PhraseKey::Year,
        PhraseKey::Years,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhraseKey::PrefixAgo => "prefix_ago",
            PhraseKey::PrefixFromNow => "prefix_from_now",
            PhraseKey::SuffixAgo => "suffix_ago",
            PhraseKey::SuffixFromNow => "suffix_from_now",
            PhraseKey::Seconds => "seconds",
            PhraseKey::Minute => "minute",
            PhraseKey::Minutes => "minutes",
            PhraseKey::Hour => "hour",
            PhraseKey::Hours => "hours",
            PhraseKey::Day => "day",
            PhraseKey::Days => "days",
            PhraseKey::Month => "month",
            PhraseKey::Months => "months",
            PhraseKey::Year => "year",
            PhraseKey::Years => "years",
        }
    }

    /// Prefix and suffix slots may be empty; duration slots may not.
    pub fn is_affix(self) -> bool {
        matches!(
            self,
            PhraseKey::PrefixAgo
                | PhraseKey::PrefixFromNow
                | PhraseKey::SuffixAgo
                | PhraseKey::SuffixFromNow
        )
    }

    /// Whether the slot's template carries a count placeholder.
    pub fn takes_count(self) -> bool {
        matches!(
            self,
            PhraseKey::Minutes
                | PhraseKey::Hours
                | PhraseKey::Days
                | PhraseKey::Months
                | PhraseKey::Years
        )
    }
}

impl fmt::Display for PhraseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown phrase key: {0}")]
pub struct UnknownPhraseKey(pub String);

impl FromStr for PhraseKey {
    type Err = UnknownPhraseKey;

    /// Accepts the snake_case name, or the camelCase spelling (`prefixAgo`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .flat_map(|c| {
                if c.is_ascii_uppercase() {
                    vec!['_', c.to_ascii_lowercase()]
                } else {
                    vec![c]
                }
            })
            .collect();
        PhraseKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| UnknownPhraseKey(s.to_string()))
    }
}

/// The fifteen phrase templates of one locale.
///
/// Affix slots hold an empty string when the locale uses no prefix or suffix
/// in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseSet {
    #[serde(default)]
    pub prefix_ago: String,
    #[serde(default)]
    pub prefix_from_now: String,
    #[serde(default)]
    pub suffix_ago: String,
    #[serde(default)]
    pub suffix_from_now: String,
    pub seconds: String,
    pub minute: String,
    pub minutes: String,
    pub hour: String,
    pub hours: String,
    pub day: String,
    pub days: String,
    pub month: String,
    pub months: String,
    pub year: String,
    pub years: String,
}

impl PhraseSet {
    pub fn get(&self, key: PhraseKey) -> &str {
        match key {
            PhraseKey::PrefixAgo => &self.prefix_ago,
            PhraseKey::PrefixFromNow => &self.prefix_from_now,
            PhraseKey::SuffixAgo => &self.suffix_ago,
            PhraseKey::SuffixFromNow => &self.suffix_from_now,
            PhraseKey::Seconds => &self.seconds,
            PhraseKey::Minute => &self.minute,
            PhraseKey::Minutes => &self.minutes,
            PhraseKey::Hour => &self.hour,
            PhraseKey::Hours => &self.hours,
            PhraseKey::Day => &self.day,
            PhraseKey::Days => &self.days,
            PhraseKey::Month => &self.month,
            PhraseKey::Months => &self.months,
            PhraseKey::Year => &self.year,
            PhraseKey::Years => &self.years,
        }
    }

    pub fn set(&mut self, key: PhraseKey, template: impl Into<String>) {
        let slot = match key {
            PhraseKey::PrefixAgo => &mut self.prefix_ago,
            PhraseKey::PrefixFromNow => &mut self.prefix_from_now,
            PhraseKey::SuffixAgo => &mut self.suffix_ago,
            PhraseKey::SuffixFromNow => &mut self.suffix_from_now,
            PhraseKey::Seconds => &mut self.seconds,
            PhraseKey::Minute => &mut self.minute,
            PhraseKey::Minutes => &mut self.minutes,
            PhraseKey::Hour => &mut self.hour,
            PhraseKey::Hours => &mut self.hours,
            PhraseKey::Day => &mut self.day,
            PhraseKey::Days => &mut self.days,
            PhraseKey::Month => &mut self.month,
            PhraseKey::Months => &mut self.months,
            PhraseKey::Year => &mut self.year,
            PhraseKey::Years => &mut self.years,
        };
        *slot = template.into();
    }

    /// Duration slots whose template is empty, in key order.
    pub fn missing_templates(&self) -> Vec<PhraseKey> {
        PhraseKey::ALL
            .into_iter()
            .filter(|key| !key.is_affix() && self.get(*key).is_empty())
            .collect()
    }
}

/// Source of phrase templates keyed by locale.
///
/// A table declares its own locale list; a formatter can only be built for a
/// locale the table lists.
pub trait PhraseTable {
    /// Locale codes this table covers, in declaration order.
    fn locales(&self) -> Vec<&str>;

    /// Template for `key` in `locale`, or `None` when the table has no entry.
    fn phrase(&self, locale: &str, key: PhraseKey) -> Option<&str>;

    /// How counts are rendered for `locale`.
    fn number_format(&self, _locale: &str) -> NumberFormat {
        NumberFormat::default()
    }

    fn supports(&self, locale: &str) -> bool {
        self.locales().contains(&locale)
    }
}

#[cfg(test)]
#[path = "phrase_tests.rs"]
mod tests;
