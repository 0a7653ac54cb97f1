//! Modifier resolution
//!
//! A modifier takes the first N nodes parsed after it as operands. The driver hands
//! over everything that follows the modifier already parsed, and gets back the
//! wrapped node followed by whatever the modifier did not consume.

use tracing::{debug, trace};

use super::catalog::{self, ModifierArity, SUGAR_LAMBDA_ARITY};
use super::error::ParseError;
use super::options::{MissingOperands, ParserOptions};
use crate::vyxal::ast::{Modifier, Program, Structure};

/// Wrap the leading operands of `remainder` with `symbol`
pub fn resolve_modifier(
    symbol: String,
    arity: ModifierArity,
    mut remainder: Program,
    options: &ParserOptions,
) -> Result<Program, ParseError> {
    let needed = arity.operand_count();
    if remainder.len() < needed {
        match options.missing_operands {
            MissingOperands::Error => {
                return Err(ParseError::MissingOperand {
                    symbol,
                    expected: needed,
                    found: remainder.len(),
                })
            }
            MissingOperands::Pad => {
                debug!(
                    %symbol,
                    expected = needed,
                    found = remainder.len(),
                    "padding missing modifier operands"
                );
                remainder.resize_with(needed, Structure::noop);
            }
        }
    }

    let rest = remainder.split_off(needed);
    let operands = remainder;
    trace!(%symbol, ?arity, leftover = rest.len(), "resolved modifier");

    let mut result = Vec::with_capacity(rest.len() + 1);
    result.push(wrap(symbol, arity, operands));
    result.extend(rest);
    Ok(result)
}

fn wrap(symbol: String, arity: ModifierArity, operands: Program) -> Structure {
    if catalog::is_lambda_sugar_modifier(&symbol) {
        return Structure::Lambda {
            arity: SUGAR_LAMBDA_ARITY.to_string(),
            body: operands,
        };
    }
    let modifier = Modifier { symbol, operands };
    match arity {
        ModifierArity::Monadic => Structure::MonadicModifier(modifier),
        ModifierArity::Dyadic => Structure::DyadicModifier(modifier),
        ModifierArity::Triadic => Structure::TriadicModifier(modifier),
    }
}
