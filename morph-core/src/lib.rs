//! Core utilities for the morph model generator.
//!
//! This crate provides the identifier helpers shared by the constraint
//! pipeline and the language backends: word splitting, case conversion,
//! special character handling and reserved keyword lookup.

mod utils;

// Case conversion
pub use utils::{
    split_words, to_camel_case, to_constant_case, to_pascal_case, to_snake_case, upper_first,
};
// Identifier and value helpers
pub use utils::{is_reserved_keyword, json_value_to_string, quote_literal, strip_special_chars};
