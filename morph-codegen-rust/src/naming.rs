//! Rust naming conventions.

use morphgen_codegen::constraints::{NamePipeline, stages};
use morphgen_core::{is_reserved_keyword, to_pascal_case, to_snake_case};

/// Rust keywords, strict and reserved.
pub const RUST_RESERVED_WORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "macro",
    "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Check if `word` is a Rust keyword, ignoring case.
pub fn is_reserved_rust_word(word: &str) -> bool {
    is_reserved_keyword(word, RUST_RESERVED_WORDS, true)
}

fn no_special_char(name: &str) -> String {
    stages::strip_special(name, &[' ', '_'])
}

fn no_reserved_keywords(name: &str) -> String {
    stages::prefix_reserved(name, RUST_RESERVED_WORDS)
}

fn rust_pipeline(formatter: fn(&str) -> String) -> NamePipeline {
    NamePipeline::builder()
        .no_special_char(no_special_char)
        .no_reserved_keywords(no_reserved_keywords)
        .naming_formatter(formatter)
        .build()
}

/// Struct, enum and type alias names: `PascalCase`.
pub fn model_name_pipeline() -> NamePipeline {
    rust_pipeline(to_pascal_case)
}

/// Struct fields: `snake_case`.
pub fn property_key_pipeline() -> NamePipeline {
    rust_pipeline(to_snake_case)
}

/// Enum variants: `PascalCase`.
pub fn enum_key_pipeline() -> NamePipeline {
    rust_pipeline(to_pascal_case)
}
