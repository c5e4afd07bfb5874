//! Generator configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    Error, Result, RustOptions, TypeScriptOptions, error::SourceContext,
    validate::{find_value_span, validate_module_path},
};

/// Root of a generator options document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Options for the Rust target.
    pub rust: RustOptions,
    /// Options for the TypeScript target.
    pub typescript: TypeScriptOptions,
}

impl FromStr for GeneratorConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "morph.toml")
    }
}

impl GeneratorConfig {
    /// Parse an options file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse options from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse a configuration from content with the given filename for error reporting.
fn parse_config(content: &str, filename: &str) -> Result<GeneratorConfig> {
    let source_ctx = SourceContext::new(content, filename);
    let config: GeneratorConfig =
        toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_config(&config, &source_ctx)?;
    Ok(config)
}

/// Validate the configuration after parsing.
fn validate_config(config: &GeneratorConfig, ctx: &SourceContext) -> Result<()> {
    let module_path = &config.rust.module_path;
    if let Some(reason) = validate_module_path(module_path) {
        let span = find_value_span(ctx.src(), module_path);
        return Err(ctx.invalid_module_path_error(module_path, reason, span));
    }

    if config.rust.any_type.trim().is_empty() {
        return Err(ctx.validation_error("rust.any_type cannot be empty"));
    }
    Ok(())
}
