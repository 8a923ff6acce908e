use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use super::error::StoreError;

/// A flat source locale file: one JSON object mapping keys to strings.
///
/// Keys are looked up verbatim; dots in keys carry no nesting meaning.
#[derive(Debug, Clone, Default)]
pub struct SourceStore {
    file_path: PathBuf,
    entries: Map<String, Value>,
}

impl SourceStore {
    /// Read and parse a source locale file.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse JSON text that was read from `path`.
    pub fn parse(content: &str, path: &Path) -> Result<Self, StoreError> {
        let value: Value = serde_json::from_str(content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        match value {
            Value::Object(entries) => Ok(Self {
                file_path: path.to_path_buf(),
                entries,
            }),
            _ => Err(StoreError::NotAnObject {
                path: path.to_path_buf(),
            }),
        }
    }

    /// String value stored under `key`. Non-string values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}
