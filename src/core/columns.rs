//! Two-column word lists (`languages.txt`, `multiple.txt`, color lists).
//!
//! The files are plain whitespace-delimited tokens; even tokens form the left
//! column and odd tokens the right column. Line structure is irrelevant.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColumnsError {
    #[error("Failed to read {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(
        "{path} does not have an equal number of left and right column entries, or is empty ({tokens} token(s))"
    )]
    ColumnMismatch { path: PathBuf, tokens: usize },
}

/// Token count of a column text that cannot be split into pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("column mismatch: {tokens} token(s)")]
pub struct ColumnMismatch {
    pub tokens: usize,
}

/// Split `text` into (left, right) pairs.
///
/// Fails when the token count is odd or zero; no pairs are produced then.
pub fn parse_columns(text: &str) -> Result<Vec<(String, String)>, ColumnMismatch> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() % 2 != 0 {
        return Err(ColumnMismatch {
            tokens: tokens.len(),
        });
    }

    Ok(tokens
        .chunks_exact(2)
        .map(|pair| (pair[0].to_string(), pair[1].to_string()))
        .collect())
}

/// Read and split a two-column file.
pub fn load_columns(path: &Path) -> Result<Vec<(String, String)>, ColumnsError> {
    let content = fs::read_to_string(path).map_err(|source| ColumnsError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_columns(&content).map_err(|ColumnMismatch { tokens }| ColumnsError::ColumnMismatch {
        path: path.to_path_buf(),
        tokens,
    })
}
