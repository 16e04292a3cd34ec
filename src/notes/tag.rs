//! Tag grammar: whitespace-separated `#tag` tokens.

use std::collections::BTreeSet;

/// A tag is `#` followed by at least one character, with no whitespace
/// anywhere and no `#` after the first position.
pub fn is_tag(token: &str) -> bool {
    let Some(rest) = token.strip_prefix('#') else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }
    !rest.chars().any(|c| c.is_whitespace() || c == '#')
}

/// Parse a whitespace-separated tag list. Any invalid token invalidates the
/// whole parse; there is no partial result. Empty input is an empty set.
pub fn parse_tags(text: &str) -> Option<BTreeSet<String>> {
    let mut tags = BTreeSet::new();
    for token in text.split_whitespace() {
        if !is_tag(token) {
            return None;
        }
        tags.insert(token.to_string());
    }
    Some(tags)
}

/// Render a tag set as a single-space-separated list, sorted, no trailing
/// space.
pub fn print_tags(tags: &BTreeSet<String>) -> String {
    let parts: Vec<&str> = tags.iter().map(String::as_str).collect();
    parts.join(" ")
}
