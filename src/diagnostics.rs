//! Recoverable conditions reported while merging.
//!
//! Diagnostics never stop a locale job on their own. Each one is
//! self-contained so the reporter can print it without extra lookups.

use crate::core::SortAnchor;

/// Identifier for each diagnostic kind, printed next to the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingSourceKey,
    SkippedEntry,
    DuplicateKey,
    InsertedAtEnd,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingSourceKey => write!(f, "missing-source-key"),
            Rule::SkippedEntry => write!(f, "skipped-entry"),
            Rule::DuplicateKey => write!(f, "duplicate-key"),
            Rule::InsertedAtEnd => write!(f, "inserted-at-end"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A source identifier has no string value in the source store.
    MissingSourceKey { key: String },
    /// An entry was not written because its value is missing.
    SkippedEntry {
        source_identifier: String,
        target_identifier: String,
    },
    /// A key being inserted already exists in the target file.
    DuplicateKey {
        key: String,
        /// 1-based line number in the original target file.
        line: usize,
    },
    /// No insertion point was found before the end of the target file.
    InsertedAtEnd { anchor: SortAnchor },
}

impl Diagnostic {
    pub fn rule(&self) -> Rule {
        match self {
            Diagnostic::MissingSourceKey { .. } => Rule::MissingSourceKey,
            Diagnostic::SkippedEntry { .. } => Rule::SkippedEntry,
            Diagnostic::DuplicateKey { .. } => Rule::DuplicateKey,
            Diagnostic::InsertedAtEnd { .. } => Rule::InsertedAtEnd,
        }
    }

    /// Line in the target file the diagnostic points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Diagnostic::DuplicateKey { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Diagnostic::MissingSourceKey { key } => format!("no source definition for {}", key),
            Diagnostic::SkippedEntry {
                source_identifier,
                target_identifier,
            } => format!(
                "skipped missing definition {} -> {}",
                source_identifier, target_identifier
            ),
            Diagnostic::DuplicateKey { key, .. } => format!("duplicate definition of {}", key),
            Diagnostic::InsertedAtEnd { anchor } => match anchor {
                SortAnchor::Override(text) => format!(
                    "no existing identifiers found matching sort override \"{}\"; inserting at end of file",
                    text
                ),
                SortAnchor::Derived(_) => {
                    "no similar identifiers found; inserting at end of file".to_string()
                }
            },
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
