//! TypeScript naming conventions.

use morphgen_codegen::constraints::{NamePipeline, stages};
use morphgen_core::{is_reserved_keyword, to_camel_case, to_constant_case, to_pascal_case};

/// JavaScript and TypeScript reserved words.
pub const TS_RESERVED_WORDS: &[&str] = &[
    // JavaScript reserved words
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // TypeScript reserved words
    "any",
    "as",
    "async",
    "await",
    "boolean",
    "constructor",
    "declare",
    "get",
    "implements",
    "interface",
    "module",
    "namespace",
    "never",
    "number",
    "object",
    "package",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "set",
    "static",
    "string",
    "symbol",
    "type",
    "undefined",
    "unknown",
];

/// Check if `word` is a TypeScript keyword, ignoring case.
pub fn is_reserved_typescript_word(word: &str) -> bool {
    is_reserved_keyword(word, TS_RESERVED_WORDS, true)
}

fn no_reserved_keywords(name: &str) -> String {
    stages::prefix_reserved(name, TS_RESERVED_WORDS)
}

// `$` is a legal identifier character.
fn keep_spaces_and_dollars(name: &str) -> String {
    stages::strip_special(name, &[' ', '_', '$'])
}

fn keep_dollars(name: &str) -> String {
    stages::strip_special(name, &['_', '$'])
}

/// Class, interface and enum names: `PascalCase`.
pub fn model_name_pipeline() -> NamePipeline {
    NamePipeline::builder()
        .no_special_char(keep_spaces_and_dollars)
        .no_reserved_keywords(no_reserved_keywords)
        .naming_formatter(to_pascal_case)
        .build()
}

/// Properties: `camelCase`.
pub fn property_key_pipeline() -> NamePipeline {
    NamePipeline::builder()
        .no_special_char(keep_spaces_and_dollars)
        .no_reserved_keywords(no_reserved_keywords)
        .naming_formatter(to_camel_case)
        .build()
}

/// Enum members: `CONSTANT_CASE`.
pub fn enum_key_pipeline() -> NamePipeline {
    NamePipeline::builder()
        .no_special_char(keep_dollars)
        .no_reserved_keywords(no_reserved_keywords)
        .naming_formatter(to_constant_case)
        .build()
}
