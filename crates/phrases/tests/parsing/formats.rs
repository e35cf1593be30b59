// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The same table in every supported format.

use super::parse;
use timeago_core::{FakeClock, PhraseTable, TimeAgo};
use timeago_phrases::{builtin, Format, PhraseBook};

const DAY: i64 = 24 * 60 * 60 * 1000;
const YEAR: i64 = 365 * DAY;

fn assert_nordic(book: &PhraseBook) {
    assert!(book.supports("nb"));
    assert!(book.supports("sv"));
    assert_eq!(book.len(), 2);

    let nb = TimeAgo::with_clock(book, "nb", FakeClock::new()).unwrap();
    assert_eq!(nb.time(3 * DAY, false), "3 dager siden");
    assert_eq!(nb.time(-3 * DAY, true), "om 3 dager");
    assert_eq!(nb.time(1_200 * YEAR, false), "1 200 år siden");

    let sv = TimeAgo::with_clock(book, "sv", FakeClock::new()).unwrap();
    assert_eq!(sv.time(45_000, false), "en minut sedan");
}

// ============================================================================
// TOML
// ============================================================================

#[test]
fn toml_fixture() {
    let book = parse(include_str!("../fixtures/nordic.toml"), Format::Toml);
    assert_nordic(&book);
    assert_eq!(book.locales(), vec!["nb", "sv"]);
}

// ============================================================================
// HCL
// ============================================================================

#[test]
fn hcl_fixture() {
    assert_nordic(&parse(include_str!("../fixtures/nordic.hcl"), Format::Hcl));
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn json_fixture() {
    let book = parse(include_str!("../fixtures/nordic.json"), Format::Json);
    assert_nordic(&book);
    assert_eq!(book.locales(), vec!["nb", "sv"]);
}

#[test]
fn json_round_trips_builtin() {
    let json = serde_json::to_string(&builtin()).unwrap();
    assert_eq!(parse(&json, Format::Json), builtin());
}

#[test]
fn formats_agree() {
    let toml = parse(include_str!("../fixtures/nordic.toml"), Format::Toml);
    let json = parse(include_str!("../fixtures/nordic.json"), Format::Json);
    let hcl = parse(include_str!("../fixtures/nordic.hcl"), Format::Hcl);
    for locale in ["nb", "sv"] {
        assert_eq!(toml.get(locale), json.get(locale));
        assert_eq!(toml.get(locale), hcl.get(locale));
    }
}

#[test]
fn file_overrides_builtin() {
    let mut book = builtin();
    book.merge(parse(include_str!("../fixtures/nordic.toml"), Format::Toml));
    assert_eq!(book.locales(), vec!["en", "es", "it", "nb", "sv"]);
}
