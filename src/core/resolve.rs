//! Value resolution: look up every source identifier of a locale and decorate
//! the hits with the configured prefix and suffix.

use thiserror::Error;

use super::source::SourceStore;
use super::types::{IdentifierPair, ResolvedEntry};
use crate::diagnostics::Diagnostic;

/// Text wrapped around every resolved value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoration {
    pub prefix: String,
    pub suffix: String,
}

impl Decoration {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn apply(&self, value: &str) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no matching definitions found ({searched} identifier(s) searched)")]
    NoMatches { searched: usize },
}

/// Entries for one locale, parallel to the identifier pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub entries: Vec<ResolvedEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    pub fn found(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.is_missing()).count()
    }
}

/// Resolve every pair against `store`.
///
/// Partial results are tolerated; a locale in which nothing resolves fails
/// with [`ResolveError::NoMatches`].
pub fn resolve(
    store: &SourceStore,
    pairs: &[IdentifierPair],
    decoration: &Decoration,
) -> Result<Resolution, ResolveError> {
    let mut diagnostics = Vec::new();
    let entries: Vec<ResolvedEntry> = pairs
        .iter()
        .map(|pair| {
            let value = store
                .get(&pair.source_identifier)
                .map(|value| decoration.apply(value));
            if value.is_none() {
                diagnostics.push(Diagnostic::MissingSourceKey {
                    key: pair.source_identifier.clone(),
                });
            }
            ResolvedEntry::new(pair, value)
        })
        .collect();

    let resolution = Resolution {
        entries,
        diagnostics,
    };

    if resolution.found() == 0 {
        return Err(ResolveError::NoMatches {
            searched: pairs.len(),
        });
    }

    Ok(resolution)
}
