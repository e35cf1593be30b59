// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Localized relative-time formatter.

use crate::bucket::{classify, Classification};
use crate::clock::{system_time_to_epoch_ms, Clock, SystemClock};
use crate::compose::{fill, join, NumberFormat};
use crate::error::FormatterError;
use crate::phrase::{PhraseKey, PhraseSet, PhraseTable};
use serde::Serialize;
use std::time::SystemTime;

/// A formatted relative time together with how it was classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub text: String,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Formats millisecond distances as localized relative-time phrases.
///
/// Holds its own copy of one locale's phrases, taken from a [`PhraseTable`]
/// at construction. Overrides go through the consuming `with_*` methods and
/// yield a new formatter, so a built formatter is immutable and can be shared
/// freely between threads for formatting.
#[derive(Debug, Clone)]
pub struct TimeAgo<C: Clock = SystemClock> {
    locale: String,
    phrases: PhraseSet,
    numbers: NumberFormat,
    clock: C,
}

impl TimeAgo {
    /// Build a formatter for `locale` using the system clock.
    pub fn new(table: &impl PhraseTable, locale: &str) -> Result<Self, FormatterError> {
        Self::with_clock(table, locale, SystemClock)
    }
}

macro_rules! phrase_accessors {
    ($($field:ident, $with:ident => $key:ident;)*) => {
        $(
            #[doc = concat!("Current `", stringify!($field), "` template.")]
            pub fn $field(&self) -> &str {
                &self.phrases.$field
            }

            #[doc = concat!("Replace the `", stringify!($field), "` template.")]
            pub fn $with(self, template: impl Into<String>) -> Self {
                self.with_phrase(PhraseKey::$key, template)
            }
        )*
    };
}

impl<C: Clock> TimeAgo<C> {
    /// Build a formatter for `locale`, reading "now" from `clock`.
    ///
    /// Fails when the table does not list `locale`, or lacks a template for
    /// any duration slot. Absent prefixes and suffixes are left empty.
    pub fn with_clock(
        table: &impl PhraseTable,
        locale: &str,
        clock: C,
    ) -> Result<Self, FormatterError> {
        if !table.supports(locale) {
            return Err(FormatterError::UnsupportedLocale {
                locale: locale.to_string(),
                supported: table.locales().into_iter().map(String::from).collect(),
            });
        }

        let mut phrases = PhraseSet::default();
        for key in PhraseKey::ALL {
            match table.phrase(locale, key) {
                Some(template) if key.is_affix() || !template.is_empty() => {
                    phrases.set(key, template);
                }
                _ if key.is_affix() => {}
                _ => {
                    return Err(FormatterError::MissingPhrase {
                        locale: locale.to_string(),
                        key,
                    });
                }
            }
        }

        tracing::debug!(locale, "built relative-time formatter");
        Ok(Self::from_parts(
            locale,
            phrases,
            table.number_format(locale),
            clock,
        ))
    }

    /// Assemble a formatter from an already resolved phrase set.
    ///
    /// No validation is applied.
    pub fn from_parts(
        locale: impl Into<String>,
        phrases: PhraseSet,
        numbers: NumberFormat,
        clock: C,
    ) -> Self {
        Self {
            locale: locale.into(),
            phrases,
            numbers,
            clock,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn phrases(&self) -> &PhraseSet {
        &self.phrases
    }

    pub fn number_format(&self) -> &NumberFormat {
        &self.numbers
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Format how long ago `epoch_ms` was.
    ///
    /// Timestamps in the future are not turned around: they render as the
    /// smallest past bucket.
    pub fn time_ago(&self, epoch_ms: i64) -> String {
        self.render_ago(epoch_ms).text
    }

    /// Format the signed distance `epoch_ms - now` with future rendering on.
    ///
    /// The distance is not negated: a timestamp ahead of the clock yields a
    /// positive distance and reads with the "ago" affixes, while one behind
    /// it reads as "from now" by magnitude.
    pub fn time_until(&self, epoch_ms: i64) -> String {
        self.render_until(epoch_ms).text
    }

    pub fn render_ago(&self, epoch_ms: i64) -> Rendered {
        self.render(self.now_ms().saturating_sub(epoch_ms), false)
    }

    pub fn render_until(&self, epoch_ms: i64) -> Rendered {
        self.render(epoch_ms.saturating_sub(self.now_ms()), true)
    }

    pub fn time_ago_at(&self, time: SystemTime) -> String {
        self.time_ago(system_time_to_epoch_ms(time))
    }

    pub fn time_until_at(&self, time: SystemTime) -> String {
        self.time_until(system_time_to_epoch_ms(time))
    }

    /// Format a signed millisecond distance.
    ///
    /// Negative distances read as "from now" only when `allow_future` is set.
    pub fn time(&self, distance_ms: i64, allow_future: bool) -> String {
        self.render(distance_ms, allow_future).text
    }

    /// Like [`TimeAgo::time`], also reporting the bucket that was chosen.
    pub fn render(&self, distance_ms: i64, allow_future: bool) -> Rendered {
        let classification = classify(distance_ms, allow_future);
        let phrase = fill(
            self.phrases.get(classification.bucket.phrase_key()),
            classification.count,
            &self.numbers,
        );
        let (prefix, suffix) = classification.direction.affix_keys();
        let text = join(self.phrases.get(prefix), &phrase, self.phrases.get(suffix));
        Rendered {
            text,
            classification,
        }
    }

    pub fn phrase(&self, key: PhraseKey) -> &str {
        self.phrases.get(key)
    }

    /// Replace the template for `key`. The new template is used as given.
    pub fn with_phrase(mut self, key: PhraseKey, template: impl Into<String>) -> Self {
        self.phrases.set(key, template);
        self
    }

    pub fn with_number_format(mut self, numbers: NumberFormat) -> Self {
        self.numbers = numbers;
        self
    }

    phrase_accessors! {
        prefix_ago, with_prefix_ago => PrefixAgo;
        prefix_from_now, with_prefix_from_now => PrefixFromNow;
        suffix_ago, with_suffix_ago => SuffixAgo;
        suffix_from_now, with_suffix_from_now => SuffixFromNow;
        seconds, with_seconds => Seconds;
        minute, with_minute => Minute;
        minutes, with_minutes => Minutes;
        hour, with_hour => Hour;
        hours, with_hours => Hours;
        day, with_day => Day;
        days, with_days => Days;
        month, with_month => Month;
        months, with_months => Months;
        year, with_year => Year;
        years, with_years => Years;
    }

    fn now_ms(&self) -> i64 {
        i64::try_from(self.clock.epoch_ms()).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
