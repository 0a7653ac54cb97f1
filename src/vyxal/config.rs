//! Configuration loader
//!
//! `defaults/vyxal.default.toml` is embedded into the crate so the documented
//! defaults and the runtime defaults cannot drift apart. Callers layer their own
//! files and overrides on top with [`Loader`] before deserializing into
//! [`VyxalConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

use crate::vyxal::parser::{MissingOperands, ParserOptions};

const DEFAULT_TOML: &str = include_str!("../../defaults/vyxal.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct VyxalConfig {
    pub parser: ParserOptions,
    pub inspect: InspectOptions,
}

/// Controls how parsed programs are displayed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InspectOptions {
    pub label_width: usize,
    pub default_format: String,
}

/// Layers user configuration over the built-in defaults.
///
/// Sources apply in the order they are added; later ones win. The parser
/// overrides are meant for command-line flags and always go on top.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        self.builder = self.builder.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(required),
        );
        self
    }

    /// Layer a TOML file; building fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Force the operand starvation policy regardless of any layered file.
    pub fn with_missing_operands(self, policy: MissingOperands) -> Result<Self, ConfigError> {
        self.set_override("parser.missing_operands", policy.as_str())
    }

    /// Force the arity of `λ...;` lambdas written without an arity branch.
    pub fn with_default_lambda_arity(self, arity: &str) -> Result<Self, ConfigError> {
        self.set_override("parser.default_lambda_arity", arity)
    }

    pub fn build(self) -> Result<VyxalConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<VyxalConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parser, ParserOptions::default());
        assert_eq!(config.inspect.label_width, 30);
        assert_eq!(config.inspect.default_format, "ast-treeviz");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("parser.missing_operands", "pad")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parser.missing_operands, MissingOperands::Pad);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[parser]\ndefault_lambda_arity = \"2\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.parser.default_lambda_arity, "2");
        assert_eq!(config.parser.missing_operands, MissingOperands::Error);
    }

    #[test]
    fn parser_overrides_beat_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(
            file,
            "[parser]\nmissing_operands = \"pad\"\ndefault_lambda_arity = \"3\""
        )
        .expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .with_missing_operands(MissingOperands::Error)
            .and_then(|loader| loader.with_default_lambda_arity("2"))
            .expect("overrides to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parser.missing_operands, MissingOperands::Error);
        assert_eq!(config.parser.default_lambda_arity, "2");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/vyxal.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.inspect.label_width, 30);
    }
}
