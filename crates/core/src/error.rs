// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::phrase::PhraseKey;
use thiserror::Error;

/// Errors that can occur while building a formatter.
///
/// Formatting itself never fails; every error surfaces at construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatterError {
    #[error("unsupported locale '{locale}' (supported: {})", supported.join(", "))]
    UnsupportedLocale {
        locale: String,
        supported: Vec<String>,
    },

    #[error("phrase table has no '{key}' template for locale '{locale}'")]
    MissingPhrase { locale: String, key: PhraseKey },
}
