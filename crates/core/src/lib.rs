// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! timeago-core: relative-time classification and localized formatting

pub mod bucket;
pub mod clock;
pub mod compose;
pub mod error;
pub mod formatter;
pub mod phrase;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use bucket::{classify, Bucket, Classification, Direction};
pub use clock::{Clock, FakeClock, SystemClock};
pub use compose::{fill, join, NumberFormat};
pub use error::FormatterError;
pub use formatter::{Rendered, TimeAgo};
pub use phrase::{PhraseKey, PhraseSet, PhraseTable, UnknownPhraseKey};
