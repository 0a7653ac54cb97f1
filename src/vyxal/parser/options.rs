//! Parser options
//!
//! Deserialized from the `[parser]` table of the configuration file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do when a modifier has fewer nodes after it than it needs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingOperands {
    /// Fail with [`ParseError::MissingOperand`](super::ParseError::MissingOperand)
    #[default]
    Error,
    /// Fill the missing operands with no-op leaves
    Pad,
}

impl MissingOperands {
    /// Spelling used in configuration files and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingOperands::Error => "error",
            MissingOperands::Pad => "pad",
        }
    }
}

impl fmt::Display for MissingOperands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingOperands {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(MissingOperands::Error),
            "pad" => Ok(MissingOperands::Pad),
            other => Err(format!(
                "unknown missing-operands policy '{}' (expected 'error' or 'pad')",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Arity of a `λ...;` lambda that has no explicit arity branch
    pub default_lambda_arity: String,
    pub missing_operands: MissingOperands,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            default_lambda_arity: "1".to_string(),
            missing_operands: MissingOperands::Error,
        }
    }
}

impl ParserOptions {
    pub fn with_missing_operands(mut self, policy: MissingOperands) -> Self {
        self.missing_operands = policy;
        self
    }

    pub fn with_default_lambda_arity(mut self, arity: impl Into<String>) -> Self {
        self.default_lambda_arity = arity.into();
        self
    }
}
