//! Common utility functions shared across the codebase.

/// Replaces the first occurrence of `token` in `text` with `with`.
///
/// Returns `None` when `token` does not occur in `text`.
///
/// # Examples
///
/// ```
/// use langmerge::utils::replace_first;
///
/// assert_eq!(replace_first("foo.VAR.bar", "VAR", "red").as_deref(), Some("foo.red.bar"));
/// assert_eq!(replace_first("VAR.VAR", "VAR", "x").as_deref(), Some("x.VAR"));
/// assert_eq!(replace_first("foo.bar", "VAR", "red"), None);
/// ```
pub fn replace_first(text: &str, token: &str, with: &str) -> Option<String> {
    let at = text.find(token)?;
    let mut replaced = String::with_capacity(text.len() - token.len() + with.len());
    replaced.push_str(&text[..at]);
    replaced.push_str(with);
    replaced.push_str(&text[at + token.len()..]);
    Some(replaced)
}
