// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `timeago ago`, `timeago until`, `timeago delta`

use anyhow::Result;

use super::Context;
use crate::output::format_rendered;

pub fn ago(ctx: &Context, epoch_ms: i64) -> Result<String> {
    let f = ctx.formatter()?;
    format_rendered(f.locale(), &f.render_ago(epoch_ms), ctx.format)
}

pub fn until(ctx: &Context, epoch_ms: i64) -> Result<String> {
    let f = ctx.formatter()?;
    format_rendered(f.locale(), &f.render_until(epoch_ms), ctx.format)
}

pub fn delta(ctx: &Context, millis: i64, future: bool) -> Result<String> {
    let f = ctx.formatter()?;
    format_rendered(f.locale(), &f.render(millis, future), ctx.format)
}
