// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classification of a millisecond distance into a relative-time bucket.
//!
//! Months are a fixed 30 days and years a fixed 365 days.

use crate::phrase::PhraseKey;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SECOND_MS: i64 = 1000;
pub const MINUTE_MS: i64 = 60 * SECOND_MS;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;
pub const DAY_MS: i64 = 24 * HOUR_MS;
pub const MONTH_MS: i64 = 30 * DAY_MS;
pub const YEAR_MS: i64 = 365 * DAY_MS;

/// Which side of "now" the distance lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ago,
    FromNow,
}

impl Direction {
    /// The (prefix, suffix) slots decorating phrases in this direction.
    pub fn affix_keys(self) -> (PhraseKey, PhraseKey) {
        match self {
            Direction::Ago => (PhraseKey::PrefixAgo, PhraseKey::SuffixAgo),
            Direction::FromNow => (PhraseKey::PrefixFromNow, PhraseKey::SuffixFromNow),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ago => write!(f, "ago"),
            Direction::FromNow => write!(f, "from_now"),
        }
    }
}

/// Granularity a distance is rendered at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
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

impl Bucket {
    pub fn phrase_key(self) -> PhraseKey {
        match self {
            Bucket::Seconds => PhraseKey::Seconds,
            Bucket::Minute => PhraseKey::Minute,
            Bucket::Minutes => PhraseKey::Minutes,
            Bucket::Hour => PhraseKey::Hour,
            Bucket::Hours => PhraseKey::Hours,
            Bucket::Day => PhraseKey::Day,
            Bucket::Days => PhraseKey::Days,
            Bucket::Month => PhraseKey::Month,
            Bucket::Months => PhraseKey::Months,
            Bucket::Year => PhraseKey::Year,
            Bucket::Years => PhraseKey::Years,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase_key().as_str())
    }
}

/// Result of [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub bucket: Bucket,
    /// Present only for the plural buckets.
    pub count: Option<u64>,
    pub direction: Direction,
}

impl Classification {
    fn new(bucket: Bucket, count: Option<f64>, direction: Direction) -> Self {
        Self {
            bucket,
            // Counts are non-negative here: only the seconds bucket can see a
            // negative distance.
            count: count.map(|c| c as u64),
            direction,
        }
    }
}

/// Classify a signed millisecond distance.
///
/// With `allow_future`, a negative distance is treated as lying in the future
/// and measured by magnitude. Without it, the distance is compared as-is, so
/// any negative value lands in [`Bucket::Seconds`].
pub fn classify(distance_ms: i64, allow_future: bool) -> Classification {
    let (distance, direction) = if allow_future && distance_ms < 0 {
        (distance_ms.unsigned_abs() as f64, Direction::FromNow)
    } else {
        (distance_ms as f64, Direction::Ago)
    };

    let seconds = distance / 1000.0;
    let minutes = seconds / 60.0;
    let hours = minutes / 60.0;
    let days = hours / 24.0;
    let years = days / 365.0;

    let (bucket, count) = if seconds < 45.0 {
        (Bucket::Seconds, None)
    } else if seconds < 90.0 {
        (Bucket::Minute, None)
    } else if minutes < 45.0 {
        (Bucket::Minutes, Some(minutes.round()))
    } else if minutes < 90.0 {
        (Bucket::Hour, None)
    } else if hours < 24.0 {
        (Bucket::Hours, Some(hours.round()))
    } else if hours < 48.0 {
        (Bucket::Day, None)
    } else if days < 30.0 {
        (Bucket::Days, Some(days.floor()))
    } else if days < 60.0 {
        (Bucket::Month, None)
    } else if days < 365.0 {
        (Bucket::Months, Some((days / 30.0).floor()))
    } else if years < 2.0 {
        (Bucket::Year, None)
    } else {
        (Bucket::Years, Some(years.floor()))
    };

    Classification::new(bucket, count, direction)
}

#[cfg(test)]
#[path = "bucket_tests.rs"]
mod tests;
