//! Processing API for Vyxal programs
//!
//! A processing spec is a `<stage>-<format>` string. The `token` stage stops after
//! lexing, the `ast` stage runs the structural parser as well.
//!
//! | Spec | Output |
//! |---|---|
//! | `token-simple` | one `<kind:text>` tag per token |
//! | `token-json` | the token list as pretty JSON |
//! | `ast-treeviz` | box-drawing tree of the parsed program |
//! | `ast-json` | the program as pretty JSON |
//! | `ast-yaml` | the program as YAML |
//! | `ast-source` | the program rendered back to Vyxal source |

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::vyxal::ast::{to_source, to_treeviz_str_with_width, treeviz::DEFAULT_LABEL_WIDTH};
use crate::vyxal::config::VyxalConfig;
use crate::vyxal::lexer::{tokenize, Token};
use crate::vyxal::parser::{ParseError, Parser, ParserOptions};

/// What data to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// How to render it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Yaml,
    Treeviz,
    Source,
}

impl ProcessingStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Source => "source",
        }
    }
}

/// A stage together with an output format valid for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "treeviz" => OutputFormat::Treeviz,
            "source" => OutputFormat::Source,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        let spec = ProcessingSpec { stage, format };
        if !Self::available_specs().contains(&spec) {
            return Err(ProcessingError::InvalidFormatType(format!(
                "format '{}' is not supported for the {} stage",
                format.as_str(),
                stage.as_str()
            )));
        }
        Ok(spec)
    }

    /// Every supported stage/format combination
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Treeviz,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Yaml,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Source,
            },
        ]
    }

    pub fn name(&self) -> String {
        format!("{}-{}", self.stage.as_str(), self.format.as_str())
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Knobs that affect processing output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingOptions {
    pub parser: ParserOptions,
    pub label_width: usize,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            parser: ParserOptions::default(),
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl From<&VyxalConfig> for ProcessingOptions {
    fn from(config: &VyxalConfig) -> Self {
        Self {
            parser: config.parser.clone(),
            label_width: config.inspect.label_width,
        }
    }
}

/// Process program text according to the given processing spec
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    options: &ProcessingOptions,
) -> Result<String, ProcessingError> {
    let tokens = tokenize(source);
    debug!(spec = %spec.name(), tokens = tokens.len(), "processing source");

    match spec.stage {
        ProcessingStage::Token => format_tokens(&tokens, spec.format),
        ProcessingStage::Ast => {
            let program = Parser::new(options.parser.clone()).parse(tokens)?;
            match spec.format {
                OutputFormat::Treeviz => {
                    Ok(to_treeviz_str_with_width(&program, options.label_width))
                }
                OutputFormat::Json => serde_json::to_string_pretty(&program)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::Yaml => serde_yaml::to_string(&program)
                    .map_err(|e| ProcessingError::Serialization(e.to_string())),
                OutputFormat::Source => Ok(to_source(&program)),
                OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
                    "simple format only works with the token stage".to_string(),
                )),
            }
        }
    }
}

/// Read a program file and process it
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: &ProcessingOptions,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())?;
    process_source(&content, spec, options)
}

fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for token in tokens {
                result.push_str(&token.to_string());
                if token.text == "\n" {
                    result.push('\n');
                }
            }
            Ok(result)
        }
        OutputFormat::Json => serde_json::to_string_pretty(tokens)
            .map_err(|e| ProcessingError::Serialization(e.to_string())),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{} format only works with the ast stage",
            other.as_str()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vyxal::parser::MissingOperands;

    fn run(source: &str, format: &str) -> Result<String, ProcessingError> {
        let spec = ProcessingSpec::from_string(format)?;
        process_source(source, &spec, &ProcessingOptions::default())
    }

    #[test]
    fn test_spec_parsing() {
        let spec = ProcessingSpec::from_string("ast-treeviz").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Ast);
        assert_eq!(spec.format, OutputFormat::Treeviz);
        assert_eq!(spec.name(), "ast-treeviz");
    }

    #[test]
    fn test_invalid_specs() {
        assert!(matches!(
            ProcessingSpec::from_string("treeviz"),
            Err(ProcessingError::InvalidFormat(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("tree-json"),
            Err(ProcessingError::InvalidStage(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("ast-xml"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("token-treeviz"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("ast-simple"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
    }

    #[test]
    fn test_available_formats() {
        assert_eq!(
            available_formats(),
            vec![
                "token-simple",
                "token-json",
                "ast-treeviz",
                "ast-json",
                "ast-yaml",
                "ast-source"
            ]
        );
        for format in available_formats() {
            assert!(ProcessingSpec::from_string(&format).is_ok(), "{}", format);
        }
    }

    #[test]
    fn test_token_simple() {
        assert_eq!(
            run("1 +", "token-simple").unwrap(),
            "<number:1><blank><general:+>"
        );
    }

    #[test]
    fn test_ast_treeviz() {
        assert_eq!(
            run("ƛ+;", "ast-treeviz").unwrap(),
            "├─ Lambda: arity 1\n│ └─ Leaf: +\n└─ Leaf: M\n"
        );
    }

    #[test]
    fn test_ast_json_is_valid_json() {
        let json = run("[a|b]", "ast-json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["kind"], "If");
    }

    #[test]
    fn test_ast_source() {
        assert_eq!(run("(x|a", "ast-source").unwrap(), "(x|a)");
    }

    #[test]
    fn test_parse_errors_surface() {
        assert!(matches!(run("₌a", "ast-json"), Err(ProcessingError::Parse(_))));

        let options = ProcessingOptions {
            parser: ParserOptions::default().with_missing_operands(MissingOperands::Pad),
            ..ProcessingOptions::default()
        };
        let spec = ProcessingSpec::from_string("ast-json").unwrap();
        assert!(process_source("₌a", &spec, &options).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let spec = ProcessingSpec::from_string("ast-json").unwrap();
        let result = process_file(
            "/nonexistent/program.vy",
            &spec,
            &ProcessingOptions::default(),
        );
        assert!(matches!(result, Err(ProcessingError::Io(_))));
    }
}
