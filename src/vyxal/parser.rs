//! Structural parser for Vyxal
//!
//! Turns a flat token sequence into a tree of [`Structure`] nodes: bracketed
//! structures are matched and split into branches, prefix modifiers are wrapped
//! around the nodes they consume, and lambda sugar is expanded.
//!
//! The parser classifies tokens by their text only. It accepts any token sequence,
//! whether it came from [`tokenize`](crate::vyxal::lexer::tokenize) or was built
//! by hand.

pub mod branches;
pub mod catalog;
pub mod error;
pub mod modifiers;
pub mod options;
pub mod parameters;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod postprocess;

pub use crate::vyxal::ast::{Program, Structure};
pub use branches::{assemble_branches, Assembly, Branch};
pub use catalog::StructureKind;
pub use error::ParseError;
pub use options::{MissingOperands, ParserOptions};
pub use parameters::{process_parameters, variable_name};
pub use parser::Parser;

use crate::vyxal::lexer::{tokenize, Token};

/// Parse tokens with the default options
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::default().parse(tokens)
}

/// Tokenize and parse program text with the default options
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    parse(tokenize(source))
}
