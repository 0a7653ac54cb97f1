//! Render a parsed program back to Vyxal source
//!
//! The output is normalized rather than byte-identical: sugar is already gone
//! (`ƛ...;` comes back as `λ1|...;M`), lambda arities are always written out and
//! sibling nodes are separated by a single space. An arity taken from an opener is
//! written with its closer (`λ(a)|+;` renders as `λ()|+;`). Parsing the rendered text yields
//! the same program, as long as no leaf is one of the forms that only occur at end
//! of input (a lone digraph prefix, a short `‛` string, an unterminated literal).

use super::node::{Modifier, Structure};
use crate::vyxal::parser::catalog::{self, SEPARATOR};

pub fn to_source(program: &[Structure]) -> String {
    program
        .iter()
        .map(structure_source)
        .collect::<Vec<_>>()
        .join(" ")
}

fn branches_source(open: &str, branches: &[Vec<Structure>], close: &str) -> String {
    let inner = branches
        .iter()
        .map(|branch| to_source(branch))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    format!("{}{}{}", open, inner, close)
}

fn modifier_source(modifier: &Modifier) -> String {
    if modifier.operands.is_empty() {
        modifier.symbol.clone()
    } else {
        format!("{} {}", modifier.symbol, to_source(&modifier.operands))
    }
}

fn arity_source(arity: &str) -> String {
    match catalog::structure_for(arity) {
        Some(info) => format!("{}{}", info.opener, info.closer),
        None => arity.to_string(),
    }
}

fn structure_source(structure: &Structure) -> String {
    match structure {
        Structure::Leaf { token } => token.text.clone(),
        Structure::If { branches } => branches_source("[", branches, "]"),
        Structure::While { branches } => branches_source("{", branches, "}"),
        Structure::ListLiteral { items } => branches_source("⟨", items, "⟩"),
        Structure::For { variable, body } => match variable {
            Some(name) => format!("({}{}{})", name, SEPARATOR, to_source(body)),
            None => format!("({})", to_source(body)),
        },
        Structure::FunctionDef {
            name,
            parameters,
            body,
        } => {
            let mut text = format!("@{}", name);
            for parameter in parameters {
                text.push(':');
                text.push_str(parameter.as_str());
            }
            if let Some(body) = body {
                text.push_str(SEPARATOR);
                text.push_str(&to_source(body));
            }
            text.push(';');
            text
        }
        Structure::FunctionRef { name } => format!("°{};", name),
        Structure::Lambda { arity, body } => {
            format!("λ{}{}{};", arity_source(arity), SEPARATOR, to_source(body))
        }
        Structure::MonadicModifier(modifier)
        | Structure::DyadicModifier(modifier)
        | Structure::TriadicModifier(modifier) => modifier_source(modifier),
    }
}
