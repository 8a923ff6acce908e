use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use super::error::StoreError;

/// The lines of a target `.lang` file at one point in time.
///
/// Text is split on `\n`; a final newline terminates the last line rather
/// than starting an empty one, and an empty file has no lines. Carriage
/// returns stay part of their line. An image is never edited in place;
/// merging produces a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFileImage {
    lines: Vec<String>,
}

impl TargetFileImage {
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self { lines: Vec::new() };
        }
        let body = text.strip_suffix('\n').unwrap_or(text);
        Self {
            lines: body.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Read a target file from disk.
    pub fn read(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// File text with every line terminated by `\n`.
    pub fn render(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    /// Replace the file at `path` with the rendered image.
    ///
    /// The text goes to a temporary file next to `path` first and is then
    /// renamed over it, so a failed write leaves the old file intact. The
    /// permissions of an existing file are carried over.
    pub fn write_atomic(&self, path: &Path) -> Result<(), StoreError> {
        let write_error = |source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut file = NamedTempFile::new_in(&dir).map_err(write_error)?;
        file.write_all(self.render().as_bytes())
            .map_err(write_error)?;
        file.as_file().sync_all().map_err(write_error)?;

        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(file.path(), metadata.permissions()).map_err(write_error)?;
        }

        file.persist(path).map_err(|err| write_error(err.error))?;
        Ok(())
    }
}
