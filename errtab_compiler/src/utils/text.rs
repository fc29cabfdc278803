//! Text normalization helpers shared by the definition parser and renderer
//!
//! Description strings travel from free-form documentation text into C string
//! literals, so they are whitespace-collapsed and quote-escaped exactly once,
//! at parse time.

/// Collapse all runs of whitespace (including newlines) into single spaces,
/// trimming leading and trailing whitespace.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escape double quotes for embedding in a C string literal.
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Collapse and escape in one step - the canonical normalization applied to
/// every description string entering the model.
pub fn normalize_description(s: &str) -> String {
    escape_quotes(&collapse_whitespace(s))
}

/// Match the `E[A-Z0-9]+` error symbol pattern shared by the header sources
/// and the documentation headings.
pub fn is_error_symbol(token: &str) -> bool {
    let mut chars = token.chars();
    if chars.next() != Some('E') {
        return false;
    }
    let rest = chars.as_str();
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}
