//! Sorted merge-insertion of new entries into a target file image.
//!
//! ## Pipeline
//!
//! 1. Duplicate detection over every line of the original image
//! 2. Cursor split into head and tail (see [`cursor`])
//! 3. Trailing-blank trim of the tail
//! 4. Assembly: head body, new entries and boundary line, tail
//!
//! The engine never removes an existing line for a duplicate key. The
//! duplicate is reported and the new line is inserted anyway.

mod anchor;
mod cursor;

use std::ops::Range;

pub use anchor::SortAnchor;

use super::image::TargetFileImage;
use super::types::ResolvedEntry;
use crate::diagnostics::Diagnostic;

/// Separator between an entry line and its annotation marker.
pub const ANNOTATION_SEPARATOR: char = '\t';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub anchor: SortAnchor,
    /// Marker appended after a tab on every written line, `None` for the
    /// default locale.
    pub annotation: Option<String>,
}

impl MergeOptions {
    pub fn new(anchor: SortAnchor) -> Self {
        Self {
            anchor,
            annotation: None,
        }
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Format one entry as it is written to the target file.
    pub fn format_entry(&self, key: &str, value: &str) -> String {
        match &self.annotation {
            Some(marker) => format!("{}={}{}{}", key, value, ANNOTATION_SEPARATOR, marker),
            None => format!("{}={}", key, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub image: TargetFileImage,
    pub diagnostics: Vec<Diagnostic>,
    /// No insertion point was found; entries were appended.
    pub insert_at_end: bool,
    /// Indices of the written entries within `image`.
    pub inserted: Range<usize>,
}

impl MergeOutcome {
    pub fn inserted_lines(&self) -> &[String] {
        &self.image.lines()[self.inserted.clone()]
    }

    pub fn duplicate_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::DuplicateKey { .. }))
            .count()
    }
}

/// Splice `entries` into `image`.
///
/// The first entry's target identifier decides the insertion point; all
/// entries are written there in order. Entries without a value are skipped.
pub fn merge(
    image: &TargetFileImage,
    entries: &[ResolvedEntry],
    options: &MergeOptions,
) -> MergeOutcome {
    let Some(first) = entries.first() else {
        return MergeOutcome {
            image: image.clone(),
            diagnostics: Vec::new(),
            insert_at_end: false,
            inserted: 0..0,
        };
    };

    let lines = image.lines();
    let keys: Vec<&str> = entries
        .iter()
        .map(|entry| entry.target_identifier.as_str())
        .collect();
    let mut diagnostics = find_duplicates(lines, &keys);

    let split = cursor::split(lines, &options.anchor, &first.target_identifier);
    let (head, tail) = lines.split_at(split.head_len);
    let tail = trim_trailing_blank(tail);

    if split.insert_at_end {
        diagnostics.push(Diagnostic::InsertedAtEnd {
            anchor: options.anchor.clone(),
        });
    }

    let mut output: Vec<String> = Vec::with_capacity(lines.len() + entries.len() + 1);
    let (body, boundary) = match head.split_last() {
        Some((last, body)) => (body, Some(last)),
        None => (head, None),
    };
    output.extend(body.iter().cloned());

    if split.insert_at_end {
        output.extend(boundary.cloned());
        output.push(String::new());
    }

    let start = output.len();
    for entry in entries {
        match &entry.value {
            Some(value) => output.push(options.format_entry(&entry.target_identifier, value)),
            None => diagnostics.push(Diagnostic::SkippedEntry {
                source_identifier: entry.source_identifier.clone(),
                target_identifier: entry.target_identifier.clone(),
            }),
        }
    }
    let inserted = start..output.len();

    if !split.insert_at_end {
        output.extend(boundary.cloned());
        output.extend(tail.iter().cloned());
    }

    MergeOutcome {
        image: TargetFileImage::from_lines(output),
        diagnostics,
        insert_at_end: split.insert_at_end,
        inserted,
    }
}

/// Report every line whose key (text before the first `=`) is one of `keys`.
///
/// One diagnostic is produced per matching key, with 1-based line numbers.
fn find_duplicates(lines: &[String], keys: &[&str]) -> Vec<Diagnostic> {
    lines
        .iter()
        .enumerate()
        .flat_map(move |(index, line)| {
            let line_key = line.split_once('=').map_or(line.as_str(), |(key, _)| key);
            keys.iter()
                .filter(move |key| **key == line_key)
                .map(move |key| Diagnostic::DuplicateKey {
                    key: key.to_string(),
                    line: index + 1,
                })
        })
        .collect()
}

fn trim_trailing_blank(lines: &[String]) -> &[String] {
    let len = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |index| index + 1);
    &lines[..len]
}
