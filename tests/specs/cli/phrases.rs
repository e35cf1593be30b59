//! Phrase table specs
//!
//! `show` and user-supplied phrase files.

use crate::prelude::*;

#[test]
fn show_prints_resolved_templates() {
    cli()
        .args(&["show", "-l", "it"])
        .passes()
        .stdout_eq(
            r#"prefix_ago      = ""
prefix_from_now = "tra"
suffix_ago      = "fa"
suffix_from_now = ""
seconds         = "meno di un minuto"
minute          = "circa un minuto"
minutes         = "{0} minuti"
hour            = "circa un'ora"
hours           = "circa {0} ore"
day             = "un giorno"
days            = "{0} giorni"
month           = "circa un mese"
months          = "{0} mesi"
year            = "circa un anno"
years           = "{0} anni"
"#,
        );
}

#[test]
fn show_reflects_overrides() {
    cli()
        .args(&["show", "--set", "day=yesterday"])
        .passes()
        .stdout_has(r#"day             = "yesterday""#);
}

#[test]
fn custom_locale_from_file() {
    let ws = Workspace::empty();
    let path = ws.file("pirate.toml", PIRATE_TOML);
    let millennium = (1000 * 365 * DAY).to_string();
    cli()
        .args(&["-l", "pirate", "-p", path.to_str().unwrap()])
        .args(&["delta", &millennium])
        .passes()
        .stdout_eq("1_000 voyages ago, matey\n");
}

#[test]
fn custom_locale_from_now_prefix() {
    let ws = Workspace::empty();
    let path = ws.file("pirate.toml", PIRATE_TOML);
    cli()
        .args(&["-l", "pirate", "-p", path.to_str().unwrap()])
        .args(&["until", &(NOW_MS - 3 * HOUR).to_string()])
        .passes()
        .stdout_eq("in 3 bells\n");
}

#[test]
fn phrase_directory_merges_files() {
    let ws = Workspace::empty();
    ws.file("locales/pirate.toml", PIRATE_TOML);
    ws.file(
        "locales/xx.json",
        r#"{"locales": {"en": {
            "suffix_ago": "back",
            "seconds": "moments",
            "minute": "a minute",
            "minutes": "{0} minutes",
            "hour": "an hour",
            "hours": "{0} hours",
            "day": "a day",
            "days": "{0} days",
            "month": "a month",
            "months": "{0} months",
            "year": "a year",
            "years": "{0} years"
        }}}"#,
    );
    cli()
        .env("TIMEAGO_PHRASES", ws.path().join("locales"))
        .args(&["delta", "0"])
        .passes()
        .stdout_eq("moments back\n");
    cli()
        .env("TIMEAGO_PHRASES", ws.path().join("locales"))
        .args(&["locales"])
        .passes()
        .stdout_eq("en\nes\nit\npirate\n");
}

#[test]
fn hcl_phrase_file() {
    let ws = Workspace::empty();
    let path = ws.file(
        "pirate.hcl",
        r#"
locale "pirate" {
  suffix_ago = "ago, matey"
  seconds    = "a blink"
  minute     = "a minute"
  minutes    = "{0} minutes"
  hour       = "a bell"
  hours      = "{0} bells"
  day        = "a day"
  days       = "{0} days"
  month      = "a moon"
  months     = "{0} moons"
  year       = "a voyage"
  years      = "{0} voyages"
}
"#,
    );
    cli()
        .args(&["-l", "pirate", "-p", path.to_str().unwrap()])
        .args(&["delta", &(2 * 30 * DAY).to_string()])
        .passes()
        .stdout_eq("2 moons ago, matey\n");
}
