//! Identifier expansion.
//!
//! A base identifier such as `block.minecraft.VAR_wool` is turned into one
//! concrete identifier per word of an expansion list by substituting the
//! placeholder token. Source and target identifiers are expanded with the two
//! columns of the same list and then paired index by index.

use std::str::FromStr;

use thiserror::Error;

use super::types::IdentifierPair;
use crate::utils::replace_first;

/// How the base identifiers are turned into identifier lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpansionMode {
    /// No expansion, one identifier pair.
    Single,
    /// Expand with the generic `multiple` word list.
    Multiple,
    /// Expand with the 16 colors under their original names.
    ClassicColor,
    /// Expand with the 16 colors under their new names.
    NewColor,
}

impl ExpansionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpansionMode::Single => "single",
            ExpansionMode::Multiple => "multiple",
            ExpansionMode::ClassicColor => "classic-color",
            ExpansionMode::NewColor => "new-color",
        }
    }

    pub fn expands(&self) -> bool {
        !matches!(self, ExpansionMode::Single)
    }
}

impl std::fmt::Display for ExpansionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Expansion type \"{0}\" not recognized. Valid types are single (s), multiple (m), classic-color (c) or new-color (n)."
)]
pub struct UnknownMode(pub String);

impl FromStr for ExpansionMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s" | "single" => Ok(ExpansionMode::Single),
            "m" | "multiple" => Ok(ExpansionMode::Multiple),
            "c" | "classic-color" => Ok(ExpansionMode::ClassicColor),
            "n" | "new-color" => Ok(ExpansionMode::NewColor),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    #[error("Text \"{placeholder}\" not found in \"{template}\"")]
    PlaceholderNotFound {
        template: String,
        placeholder: String,
    },
    #[error("{sources} source identifier(s) but {targets} target identifier(s)")]
    SizeDesync { sources: usize, targets: usize },
}

/// Substitute each word for the first `placeholder` in `template`.
///
/// Output order follows `substitutions`. An empty substitution list yields
/// an empty result as long as the placeholder is present.
pub fn expand(
    template: &str,
    placeholder: &str,
    substitutions: &[String],
) -> Result<Vec<String>, ExpandError> {
    if !template.contains(placeholder) {
        return Err(ExpandError::PlaceholderNotFound {
            template: template.to_string(),
            placeholder: placeholder.to_string(),
        });
    }

    Ok(substitutions
        .iter()
        .filter_map(|word| replace_first(template, placeholder, word))
        .collect())
}

/// Pair source and target identifiers index by index.
///
/// Both sequences must have the same length.
pub fn pair_identifiers(
    sources: Vec<String>,
    targets: Vec<String>,
) -> Result<Vec<IdentifierPair>, ExpandError> {
    if sources.len() != targets.len() {
        return Err(ExpandError::SizeDesync {
            sources: sources.len(),
            targets: targets.len(),
        });
    }

    Ok(sources
        .into_iter()
        .zip(targets)
        .map(|(source, target)| IdentifierPair::new(source, target))
        .collect())
}
