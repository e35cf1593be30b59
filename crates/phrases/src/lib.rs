// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Phrase tables: the built-in locale bundle and table files

mod book;
mod builtin;
mod find;
mod parser;

pub use book::{LocaleEntry, PhraseBook};
pub use builtin::{builtin, builtin_locales};
pub use find::{load_dir, load_file, load_path, LoadError};
pub use parser::{
    parse_phrase_book, parse_phrase_book_with_format, validate_book, Format, ParseError,
};
