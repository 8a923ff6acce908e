//! Plain data passed between the loaders, the resolver and the merge engine.

/// One supported language: where its strings come from and where they go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleJob {
    pub source_locale: String,
    pub target_locale: String,
}

impl LocaleJob {
    pub fn new(source_locale: impl Into<String>, target_locale: impl Into<String>) -> Self {
        Self {
            source_locale: source_locale.into(),
            target_locale: target_locale.into(),
        }
    }
}

impl From<(String, String)> for LocaleJob {
    fn from((source_locale, target_locale): (String, String)) -> Self {
        Self {
            source_locale,
            target_locale,
        }
    }
}

/// A source identifier and the target identifier its value is written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierPair {
    pub source_identifier: String,
    pub target_identifier: String,
}

impl IdentifierPair {
    pub fn new(source_identifier: impl Into<String>, target_identifier: impl Into<String>) -> Self {
        Self {
            source_identifier: source_identifier.into(),
            target_identifier: target_identifier.into(),
        }
    }
}

/// An identifier pair with its decorated value, or `None` when the source
/// store has no definition for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry {
    pub source_identifier: String,
    pub target_identifier: String,
    pub value: Option<String>,
}

impl ResolvedEntry {
    pub fn new(pair: &IdentifierPair, value: Option<String>) -> Self {
        Self {
            source_identifier: pair.source_identifier.clone(),
            target_identifier: pair.target_identifier.clone(),
            value,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}
