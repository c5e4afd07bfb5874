//! Validation helpers for option values.

use miette::SourceSpan;

/// Find the span of a quoted string value in the TOML source.
///
/// Searches for `"value"` and `'value'`, returning the span of the text
/// between the quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    let patterns = [format!("\"{}\"", value), format!("'{}'", value)];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Validate a `::`-separated module path.
///
/// Returns the reason the path is invalid, or `None` if it is valid.
pub(crate) fn validate_module_path(path: &str) -> Option<&'static str> {
    if path.is_empty() {
        return Some("module path cannot be empty");
    }
    if path.ends_with("::") {
        return Some("module path cannot end with '::'");
    }

    for segment in path.split("::") {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            Some(_) => return Some("each segment must start with a letter or underscore"),
            None => return Some("module path cannot contain empty segments"),
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Some("segments may only contain letters, numbers, and underscores");
        }
    }
    None
}
