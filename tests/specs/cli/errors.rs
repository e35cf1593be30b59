//! CLI error handling specs

use crate::prelude::*;

#[test]
fn unsupported_locale_lists_supported() {
    cli()
        .args(&["-l", "fr", "delta", "0"])
        .fails()
        .stderr_has("Error: unsupported locale 'fr' (supported: en, es, it)");
}

#[test]
fn unknown_override_key() {
    cli()
        .args(&["--set", "weeks={0} weeks", "delta", "0"])
        .fails()
        .stderr_has("unknown phrase key: weeks");
}

#[test]
fn missing_phrase_file() {
    let ws = Workspace::empty();
    let path = ws.path().join("absent.toml");
    cli()
        .args(&["-p", path.to_str().unwrap(), "locales"])
        .fails()
        .stderr_has("failed to load phrases");
}

#[test]
fn incomplete_phrase_file_names_missing_slot() {
    let ws = Workspace::empty();
    let path = ws.file("broken.toml", "[locales.xx]\nseconds = \"now\"\n");
    cli()
        .args(&["-p", path.to_str().unwrap(), "locales"])
        .fails()
        .stderr_has("missing field `minute`");
}

#[test]
fn empty_template_names_slot() {
    let ws = Workspace::empty();
    let path = ws.file("broken.toml", &PIRATE_TOML.replace("\"a moon\"", "\"\""));
    cli()
        .args(&["-p", path.to_str().unwrap(), "locales"])
        .fails()
        .stderr_has("locale 'pirate' is missing a template for 'month'");
}

#[test]
fn counted_slot_without_placeholder() {
    let ws = Workspace::empty();
    let path = ws.file(
        "broken.toml",
        &PIRATE_TOML.replace("{0} bells", "many bells"),
    );
    cli()
        .args(&["-p", path.to_str().unwrap(), "locales"])
        .fails()
        .stderr_has("expected exactly one {0} placeholder, found 0");
}

#[test]
fn non_numeric_timestamp() {
    cli()
        .args(&["ago", "yesterday"])
        .fails()
        .stderr_has("invalid value 'yesterday'");
}

#[test]
fn no_subcommand_prints_help() {
    cli().passes().stdout_has("Usage: timeago");
}

#[test]
fn malformed_pinned_clock_fails() {
    cli()
        .env("TIMEAGO_NOW_MS", "yesterday")
        .args(&["delta", "0"])
        .fails()
        .stderr_has("invalid TIMEAGO_NOW_MS value 'yesterday'");
}
