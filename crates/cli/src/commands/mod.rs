// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod phrases;
pub mod relative;

use anyhow::{Context as _, Result};
use timeago_core::{Clock, PhraseKey, SystemClock, TimeAgo};
use timeago_phrases::{builtin, load_path, PhraseBook};

use crate::config::Settings;
use crate::output::OutputFormat;

/// Everything a command needs, resolved from flags, environment, and config.
pub struct Context {
    pub settings: Settings,
    pub overrides: Vec<(PhraseKey, String)>,
    pub now_ms: Option<u64>,
    pub format: OutputFormat,
}

/// Clock for CLI formatting: the system clock, or a pinned instant.
#[derive(Debug, Clone, Copy)]
pub enum CliClock {
    System(SystemClock),
    Pinned(u64),
}

impl Clock for CliClock {
    fn epoch_ms(&self) -> u64 {
        match self {
            CliClock::System(clock) => clock.epoch_ms(),
            CliClock::Pinned(epoch_ms) => *epoch_ms,
        }
    }
}

impl Context {
    /// The built-in bundle with any configured phrase tables merged on top.
    pub fn phrase_book(&self) -> Result<PhraseBook> {
        let mut book = builtin();
        if let Some(path) = &self.settings.phrases {
            let loaded = load_path(path)
                .with_context(|| format!("failed to load phrases from {}", path.display()))?;
            book.merge(loaded);
        }
        Ok(book)
    }

    pub fn clock(&self) -> CliClock {
        match self.now_ms {
            Some(epoch_ms) => CliClock::Pinned(epoch_ms),
            None => CliClock::System(SystemClock),
        }
    }

    /// Build the formatter for the configured locale, with overrides applied.
    pub fn formatter(&self) -> Result<TimeAgo<CliClock>> {
        let book = self.phrase_book()?;
        let formatter = TimeAgo::with_clock(&book, &self.settings.locale, self.clock())?;
        Ok(self
            .overrides
            .iter()
            .fold(formatter, |f, (key, template)| f.with_phrase(*key, template.clone())))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
