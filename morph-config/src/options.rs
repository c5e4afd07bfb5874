//! Per-language generator options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Options for the Rust target.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RustOptions {
    /// Module path that generated models live under. Defaults to `crate`;
    /// set it to e.g. `crate::models` when models live in a submodule.
    ///
    /// Used for `use` statements between models and for fully qualified
    /// references inside containers.
    pub module_path: String,
    /// Type used for unconstrained values.
    pub any_type: String,
}

impl Default for RustOptions {
    fn default() -> Self {
        Self {
            module_path: "crate".to_string(),
            any_type: "serde_json::Value".to_string(),
        }
    }
}

/// How TypeScript dictionaries are typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapType {
    /// `Map<K, V>`
    #[default]
    Map,
    /// `Record<K, V>`
    Record,
    /// `{ [name: K]: V }`
    IndexedObject,
}

impl MapType {
    /// Returns the option value as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MapType::Map => "map",
            MapType::Record => "record",
            MapType::IndexedObject => "indexed_object",
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How TypeScript enums are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumType {
    /// A TypeScript `enum`; constants refer to `Enum.KEY`.
    #[default]
    Enum,
    /// A union of literal types; constants are the literal values.
    Union,
}

/// Options for the TypeScript target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeScriptOptions {
    pub map_type: MapType,
    pub enum_type: EnumType,
    /// Keep raw property names instead of constraining them.
    ///
    /// Properties then have to be accessed as `obj["name"]`.
    pub raw_property_names: bool,
}
