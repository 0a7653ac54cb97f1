//! Structure nodes produced by the parser
//!
//! A [`Program`] is a flat sequence of [`Structure`]s. Leaves wrap exactly one token;
//! every other variant owns its already-parsed sub-programs, so the tree has no raw
//! tokens left in it apart from leaf tokens and the lambda arity string.

use crate::vyxal::lexer::Token;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of parsed nodes
pub type Program = Vec<Structure>;

/// One parsed program element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Structure {
    /// A single element, literal or variable access
    Leaf { token: Token },
    /// `[then|else]`
    If { branches: Vec<Program> },
    /// `(body)` or `(variable|body)`
    For {
        variable: Option<String>,
        body: Program,
    },
    /// `{condition|body}`
    While { branches: Vec<Program> },
    /// `@name:params|body;` defines a function, `@name;` calls one
    FunctionDef {
        name: String,
        parameters: Vec<ParameterSpec>,
        body: Option<Program>,
    },
    /// `°name;` pushes a previously defined function
    FunctionRef { name: String },
    Lambda { arity: String, body: Program },
    /// `⟨a|b|c⟩`
    ListLiteral { items: Vec<Program> },
    MonadicModifier(Modifier),
    DyadicModifier(Modifier),
    TriadicModifier(Modifier),
}

/// A prefix modifier together with the nodes it consumed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifier {
    pub symbol: String,
    pub operands: Program,
}

/// One entry of a function signature after the name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterSpec {
    /// Pops this many values into the argument list
    Fixed(String),
    /// `*`: pops a count, then that many values
    Variadic,
    Named(String),
}

impl ParameterSpec {
    pub fn as_str(&self) -> &str {
        match self {
            ParameterSpec::Fixed(count) => count,
            ParameterSpec::Variadic => "*",
            ParameterSpec::Named(name) => name,
        }
    }
}

impl fmt::Display for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Structure {
    pub fn leaf(token: Token) -> Self {
        Structure::Leaf { token }
    }

    /// A leaf that the code generator will treat as a no-op
    pub fn noop() -> Self {
        Structure::leaf(Token::blank())
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            Structure::Leaf { .. } => "Leaf",
            Structure::If { .. } => "If",
            Structure::For { .. } => "For",
            Structure::While { .. } => "While",
            Structure::FunctionDef { body: Some(_), .. } => "FunctionDef",
            Structure::FunctionDef { body: None, .. } => "FunctionCall",
            Structure::FunctionRef { .. } => "FunctionRef",
            Structure::Lambda { .. } => "Lambda",
            Structure::ListLiteral { .. } => "ListLiteral",
            Structure::MonadicModifier(_) => "MonadicModifier",
            Structure::DyadicModifier(_) => "DyadicModifier",
            Structure::TriadicModifier(_) => "TriadicModifier",
        }
    }

    /// Short human readable summary used by the tree formatters
    pub fn display_label(&self) -> String {
        match self {
            Structure::Leaf { token } => token.text.clone(),
            Structure::If { branches } | Structure::While { branches } => {
                format!("{} branch(es)", branches.len())
            }
            Structure::ListLiteral { items } => format!("{} item(s)", items.len()),
            Structure::For { variable, .. } => match variable {
                Some(name) => format!("var {}", name),
                None => "implicit".to_string(),
            },
            Structure::FunctionDef {
                name, parameters, ..
            } => {
                let mut label = name.clone();
                for parameter in parameters {
                    label.push(':');
                    label.push_str(parameter.as_str());
                }
                label
            }
            Structure::FunctionRef { name } => name.clone(),
            Structure::Lambda { arity, .. } => format!("arity {}", arity),
            Structure::MonadicModifier(modifier)
            | Structure::DyadicModifier(modifier)
            | Structure::TriadicModifier(modifier) => modifier.symbol.clone(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Structure::Leaf { .. })
    }

    /// The sub-programs owned by this node, in source order
    pub fn children(&self) -> Vec<&Program> {
        match self {
            Structure::Leaf { .. } | Structure::FunctionRef { .. } => Vec::new(),
            Structure::If { branches } | Structure::While { branches } => {
                branches.iter().collect()
            }
            Structure::ListLiteral { items } => items.iter().collect(),
            Structure::For { body, .. } | Structure::Lambda { body, .. } => vec![body],
            Structure::FunctionDef { body, .. } => body.iter().collect(),
            Structure::MonadicModifier(modifier)
            | Structure::DyadicModifier(modifier)
            | Structure::TriadicModifier(modifier) => vec![&modifier.operands],
        }
    }
}
