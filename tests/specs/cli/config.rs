//! Config file specs
//!
//! Precedence: flag > environment > config file > default.

use crate::prelude::*;

#[test]
fn missing_config_defaults_to_english() {
    let ws = Workspace::empty();
    ws.timeago()
        .args(&["delta", "0"])
        .passes()
        .stdout_eq("less than a minute ago\n");
}

#[test]
fn config_sets_locale() {
    let ws = Workspace::empty();
    ws.file("config.toml", "locale = \"es\"\n");
    ws.timeago()
        .args(&["delta", "0"])
        .passes()
        .stdout_eq("hace menos de un minuto\n");
}

#[test]
fn env_beats_config() {
    let ws = Workspace::empty();
    ws.file("config.toml", "locale = \"es\"\n");
    ws.timeago()
        .env("TIMEAGO_LOCALE", "it")
        .args(&["delta", "0"])
        .passes()
        .stdout_eq("meno di un minuto fa\n");
}

#[test]
fn flag_beats_env() {
    let ws = Workspace::empty();
    ws.file("config.toml", "locale = \"es\"\n");
    ws.timeago()
        .env("TIMEAGO_LOCALE", "it")
        .args(&["-l", "en", "delta", "0"])
        .passes()
        .stdout_eq("less than a minute ago\n");
}

#[test]
fn config_phrases_resolve_relative_to_config() {
    let ws = Workspace::empty();
    ws.file("pirate.toml", PIRATE_TOML);
    ws.file(
        "config.toml",
        "locale = \"pirate\"\nphrases = \"pirate.toml\"\n",
    );
    ws.timeago()
        .args(&["delta", "0"])
        .passes()
        .stdout_eq("a blink ago, matey\n");
}

#[test]
fn malformed_config_fails() {
    let ws = Workspace::empty();
    ws.file("config.toml", "locale = \n");
    ws.timeago()
        .args(&["delta", "0"])
        .fails()
        .stderr_has("invalid config");
}
