//! Locale listing specs

use crate::prelude::*;

#[test]
fn lists_builtin_locales() {
    cli().args(&["locales"]).passes().stdout_eq("en\nes\nit\n");
}

#[test]
fn lists_builtin_locales_as_json() {
    cli()
        .args(&["locales", "-o", "json"])
        .passes()
        .stdout_eq("[\"en\",\"es\",\"it\"]\n");
}

#[test]
fn extra_phrase_tables_add_locales() {
    let ws = Workspace::empty();
    let path = ws.file("pirate.toml", PIRATE_TOML);
    cli()
        .args(&["locales", "--phrases"])
        .args(&[path.to_str().unwrap()])
        .passes()
        .stdout_eq("en\nes\nit\npirate\n");
}
