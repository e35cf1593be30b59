// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction so "now" can be pinned in tests.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of the current wall-clock time.
pub trait Clock: Clone + Send + Sync {
    /// Milliseconds since the UNIX epoch.
    fn epoch_ms(&self) -> u64;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// A manually driven clock. Clones share the same instant.
#[derive(Debug, Clone, Default)]
pub struct FakeClock {
    epoch_ms: Arc<Mutex<u64>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock pinned at `epoch_ms`.
    pub fn at(epoch_ms: u64) -> Self {
        let clock = Self::new();
        clock.set_epoch_ms(epoch_ms);
        clock
    }

    pub fn set_epoch_ms(&self, epoch_ms: u64) {
        *self.epoch_ms.lock() = epoch_ms;
    }

    /// Move the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.epoch_ms.lock();
        *now = now.saturating_add(by.as_millis() as u64);
    }
}

impl Clock for FakeClock {
    fn epoch_ms(&self) -> u64 {
        *self.epoch_ms.lock()
    }
}

/// Signed milliseconds between the epoch and `time`.
///
/// Instants before the epoch map to negative values.
pub fn system_time_to_epoch_ms(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_millis())
            .map(|ms| -ms)
            .unwrap_or(i64::MIN),
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
