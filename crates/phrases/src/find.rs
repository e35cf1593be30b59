// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phrase table file loading

use crate::book::PhraseBook;
use crate::parser::{parse_phrase_book_with_format, Format, ParseError};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading phrase table files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },
    #[error("{}: unrecognized phrase table format (expected .toml, .hcl, or .json)", .0.display())]
    UnknownFormat(PathBuf),
}

/// Load a single phrase table file, picking the format from its extension.
pub fn load_file(path: &Path) -> Result<PhraseBook, LoadError> {
    let format = Format::for_path(path).ok_or_else(|| LoadError::UnknownFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_phrase_book_with_format(&content, format).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every phrase table file under `dir` and merge them.
///
/// Files merge in path order, so a later file replaces an earlier file's
/// entry for the same locale. Unreadable or invalid files are skipped with a
/// warning. A missing directory yields an empty book.
pub fn load_dir(dir: &Path) -> Result<PhraseBook, LoadError> {
    let mut book = PhraseBook::new();
    if !dir.exists() {
        return Ok(book);
    }
    let files = collect_phrase_files(dir).map_err(|source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for path in files {
        match load_file(&path) {
            Ok(loaded) => {
                tracing::debug!(path = %path.display(), locales = loaded.len(), "loaded phrase table");
                book.merge(loaded);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping invalid phrase table");
            }
        }
    }
    Ok(book)
}

/// Load `path` as a directory of tables or as a single table file.
pub fn load_path(path: &Path) -> Result<PhraseBook, LoadError> {
    if path.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

/// Recursively collect all phrase table files (`.hcl`, `.toml`, `.json`) under `dir`.
fn collect_phrase_files(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current)?.flatten() {
            let path = entry.path();
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                stack.push(path);
            } else if file_type.is_symlink() && path.is_dir() {
                // Symlinked directories are not followed; they may form cycles.
                tracing::debug!(path = %path.display(), "skipping symlinked directory");
            } else if Format::for_path(&path).is_some() {
                files.push(path);
            }
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
