//! Building blocks for [`NamePipeline`](super::NamePipeline) stages.
//!
//! The `no_*` functions are the language-neutral defaults. Languages with
//! their own exclude sets or keyword lists wrap the parameterized helpers
//! ([`strip_special`], [`prefix_reserved`]) in plain `fn` items.

use morphgen_core::{is_reserved_keyword, json_value_to_string, quote_literal, strip_special_chars};
use serde_json::Value;

use super::DuplicateCheck;

/// Prefix for names starting with a digit.
pub const NUMBER_PREFIX: &str = "number_";
/// Prefix for reserved or duplicated names.
pub const RESERVED_PREFIX: &str = "reserved_";
/// Replacement for names that end up empty.
pub const EMPTY_VALUE: &str = "empty";

/// Strip special characters, keeping spaces and underscores.
pub fn no_special_char(name: &str) -> String {
    strip_special(name, &[' ', '_'])
}

/// Strip every character that is neither alphanumeric nor in `exclude`.
pub fn strip_special(name: &str, exclude: &[char]) -> String {
    strip_special_chars(name, exclude)
}

/// Prefix names that start with a digit.
pub fn no_number_start_char(name: &str) -> String {
    match name.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("{NUMBER_PREFIX}{name}"),
        _ => name.to_string(),
    }
}

/// Replace an empty name.
pub fn no_empty_value(name: &str) -> String {
    if name.is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        name.to_string()
    }
}

/// No reserved keywords.
pub fn no_reserved_keywords(name: &str) -> String {
    name.to_string()
}

/// Prefix `name` if it matches one of `keywords`, ignoring case.
pub fn prefix_reserved(name: &str, keywords: &[&str]) -> String {
    if is_reserved_keyword(name, keywords, true) {
        format!("{RESERVED_PREFIX}{name}")
    } else {
        name.to_string()
    }
}

/// Prefix the candidate until its formatted form is not taken.
pub fn no_duplicates(check: &DuplicateCheck<'_>) -> String {
    let mut candidate = check.candidate.to_string();
    while check.is_taken(&candidate) {
        candidate = format!("{RESERVED_PREFIX}{candidate}");
    }
    candidate
}

/// Keep the name as is.
pub fn keep_case(name: &str) -> String {
    name.to_string()
}

/// Render an enum value as a literal: strings quoted, everything else as JSON.
pub fn quote_enum_value(value: &Value) -> String {
    match value {
        Value::String(s) => quote_literal(s, '"'),
        other => json_value_to_string(other),
    }
}

#[cfg(test)]
mod tests {
    use morphgen_core::to_snake_case;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_no_special_char() {
        assert_eq!(no_special_char("a-b"), "ab");
        assert_eq!(no_special_char("user name_1!"), "user name_1");
        assert_eq!(strip_special("$ref", &['$']), "$ref");
    }

    #[test]
    fn test_no_number_start_char() {
        assert_eq!(no_number_start_char("1st"), "number_1st");
        assert_eq!(no_number_start_char("first"), "first");
        assert_eq!(no_number_start_char(""), "");
    }

    #[test]
    fn test_no_empty_value() {
        assert_eq!(no_empty_value(""), "empty");
        assert_eq!(no_empty_value("x"), "x");
    }

    #[test]
    fn test_prefix_reserved_ignores_case() {
        assert_eq!(prefix_reserved("Return", &["return"]), "reserved_Return");
        assert_eq!(prefix_reserved("returns", &["return"]), "returns");
    }

    #[test]
    fn test_no_duplicates_prefixes_until_free() {
        let taken = vec!["user".to_string(), "reserved_user".to_string()];
        let check = DuplicateCheck {
            candidate: "user",
            taken: &taken,
            formatter: to_snake_case,
        };
        assert_eq!(no_duplicates(&check), "reserved_reserved_user");
    }

    #[test]
    fn test_quote_enum_value() {
        assert_eq!(quote_enum_value(&json!("red")), "\"red\"");
        assert_eq!(quote_enum_value(&json!(r#"a"b\c"#)), r#""a\"b\\c""#);
        assert_eq!(quote_enum_value(&json!(2)), "2");
        assert_eq!(quote_enum_value(&json!(true)), "true");
        assert_eq!(quote_enum_value(&json!({"a": 1})), "{\"a\":1}");
    }
}
