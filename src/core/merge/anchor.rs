/// Prefix used to find the block of lines a new entry belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortAnchor {
    /// Derived from the base target identifier.
    Derived(String),
    /// Given explicitly by the user. An empty line also ends the
    /// alphabetical search, keeping insertions inside the section.
    Override(String),
}

impl SortAnchor {
    /// Derive the anchor from a base target identifier.
    ///
    /// When the identifier is a template, everything from the placeholder on
    /// is dropped first. The anchor is what remains up to the first `.`.
    ///
    /// ```
    /// use langmerge::core::SortAnchor;
    ///
    /// let anchor = SortAnchor::derive("tile.wool.VAR.name", Some("VAR"));
    /// assert_eq!(anchor, SortAnchor::Derived("tile".to_string()));
    /// ```
    pub fn derive(base_identifier: &str, placeholder: Option<&str>) -> Self {
        let clean = placeholder
            .and_then(|token| base_identifier.find(token))
            .map_or(base_identifier, |at| &base_identifier[..at]);
        let anchor = clean.split_once('.').map_or(clean, |(head, _)| head);
        SortAnchor::Derived(anchor.to_string())
    }

    pub fn text(&self) -> &str {
        match self {
            SortAnchor::Derived(text) | SortAnchor::Override(text) => text,
        }
    }

    pub fn is_override(&self) -> bool {
        matches!(self, SortAnchor::Override(_))
    }
}
