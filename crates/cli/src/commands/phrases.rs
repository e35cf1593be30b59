// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `timeago locales`, `timeago show`

use anyhow::Result;
use timeago_core::PhraseTable;

use super::Context;
use crate::output::{format_locales, format_phrases};

pub fn locales(ctx: &Context) -> Result<String> {
    let book = ctx.phrase_book()?;
    format_locales(&book.locales(), ctx.format)
}

pub fn show(ctx: &Context) -> Result<String> {
    let f = ctx.formatter()?;
    format_phrases(f.phrases(), ctx.format)
}
