//! Structure postprocessing
//!
//! Turns the raw branches of an assembled structure into its final node(s). Each
//! kind has one rule; [`rule_for`] matches exhaustively, so a new kind in the
//! catalog will not compile until it has a rule here.
//!
//! Rules return a node sequence rather than one node: the lambda sugar forms emit
//! the lambda followed by the leaf that applies it.

use tracing::trace;

use super::branches::Branch;
use super::catalog::{StructureKind, SUGAR_LAMBDA_ARITY};
use super::error::ParseError;
use super::parameters::{parse_signature, variable_name};
use super::parser::Parser;
use crate::vyxal::ast::{Program, Structure};
use crate::vyxal::lexer::Token;

/// Finalization rule for one structure kind
pub type Rule = fn(&Parser, StructureKind, Vec<Branch>) -> Result<Program, ParseError>;

pub fn rule_for(kind: StructureKind) -> Rule {
    match kind {
        StructureKind::If | StructureKind::While | StructureKind::ListLiteral => {
            finish_branched
        }
        StructureKind::For => finish_for,
        StructureKind::FunctionDef => finish_function_def,
        StructureKind::FunctionRef => finish_function_ref,
        StructureKind::Lambda => finish_lambda,
        StructureKind::LambdaMap | StructureKind::LambdaFilter | StructureKind::LambdaSort => {
            finish_lambda_sugar
        }
    }
}

/// Apply the rule for `kind` to its assembled branches
pub fn postprocess(
    parser: &Parser,
    kind: StructureKind,
    branches: Vec<Branch>,
) -> Result<Program, ParseError> {
    trace!(?kind, branches = branches.len(), "postprocessing structure");
    rule_for(kind)(parser, kind, branches)
}

fn parse_all(parser: &Parser, branches: Vec<Branch>) -> Result<Vec<Program>, ParseError> {
    branches
        .into_iter()
        .map(|branch| parser.parse(branch))
        .collect()
}

fn finish_branched(
    parser: &Parser,
    kind: StructureKind,
    branches: Vec<Branch>,
) -> Result<Program, ParseError> {
    let parsed = parse_all(parser, branches)?;
    let node = match kind {
        StructureKind::While => Structure::While { branches: parsed },
        StructureKind::ListLiteral => Structure::ListLiteral { items: parsed },
        _ => Structure::If { branches: parsed },
    };
    Ok(vec![node])
}

// Only the first and last branch of a for loop mean anything
fn finish_for(
    parser: &Parser,
    _kind: StructureKind,
    mut branches: Vec<Branch>,
) -> Result<Program, ParseError> {
    let body = branches.pop().unwrap_or_default();
    let variable = branches.first().map(|branch| variable_name(branch));
    Ok(vec![Structure::For {
        variable,
        body: parser.parse(body)?,
    }])
}

fn finish_function_def(
    parser: &Parser,
    _kind: StructureKind,
    mut branches: Vec<Branch>,
) -> Result<Program, ParseError> {
    let body = if branches.len() > 1 {
        branches.pop()
    } else {
        None
    };
    let signature = branches.into_iter().next().unwrap_or_default();
    let (name, parameters) = parse_signature(&signature);
    let body = body.map(|tokens| parser.parse(tokens)).transpose()?;
    Ok(vec![Structure::FunctionDef {
        name,
        parameters,
        body,
    }])
}

fn finish_function_ref(
    _parser: &Parser,
    _kind: StructureKind,
    branches: Vec<Branch>,
) -> Result<Program, ParseError> {
    let name = branches
        .first()
        .map(|branch| variable_name(branch))
        .unwrap_or_default();
    Ok(vec![Structure::FunctionRef { name }])
}

fn finish_lambda(
    parser: &Parser,
    _kind: StructureKind,
    branches: Vec<Branch>,
) -> Result<Program, ParseError> {
    let mut branches = branches.into_iter();
    let first = branches.next().unwrap_or_default();
    let (arity, body) = match branches.next() {
        None => (parser.options().default_lambda_arity.clone(), first),
        Some(body) => {
            let arity = first
                .first()
                .map(|token| token.text.clone())
                .unwrap_or_else(|| parser.options().default_lambda_arity.clone());
            (arity, body)
        }
    };
    Ok(vec![Structure::Lambda {
        arity,
        body: parser.parse(body)?,
    }])
}

fn finish_lambda_sugar(
    parser: &Parser,
    kind: StructureKind,
    branches: Vec<Branch>,
) -> Result<Program, ParseError> {
    let body = branches.into_iter().next().unwrap_or_default();
    let mut nodes = vec![Structure::Lambda {
        arity: SUGAR_LAMBDA_ARITY.to_string(),
        body: parser.parse(body)?,
    }];
    if let Some(symbol) = kind.apply_symbol() {
        nodes.push(Structure::leaf(Token::general(symbol)));
    }
    Ok(nodes)
}
