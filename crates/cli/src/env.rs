// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;
use thiserror::Error;

/// An environment variable set to a value that cannot be used.
#[derive(Debug, Error)]
#[error("invalid {var} value '{value}': {expected}")]
pub struct InvalidEnv {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

// --- Config file ---

/// Resolve config file: TIMEAGO_CONFIG > <config_dir>/timeago/config.toml
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = non_empty("TIMEAGO_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("timeago").join("config.toml"))
}

// --- Phrases ---

pub fn locale() -> Option<String> {
    non_empty("TIMEAGO_LOCALE")
}

pub fn phrases() -> Option<PathBuf> {
    non_empty("TIMEAGO_PHRASES").map(PathBuf::from)
}

// --- Clock ---

/// Pinned "now" in epoch milliseconds, for reproducible output.
///
/// Empty means unset; anything else must parse.
pub fn now_ms() -> Result<Option<u64>, InvalidEnv> {
    let Some(value) = non_empty("TIMEAGO_NOW_MS") else {
        return Ok(None);
    };
    value
        .trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|_| InvalidEnv {
            var: "TIMEAGO_NOW_MS",
            value,
            expected: "expected milliseconds since the UNIX epoch",
        })
}

// --- Logging ---

pub const LOG_FILTER_VAR: &str = "TIMEAGO_LOG";

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
