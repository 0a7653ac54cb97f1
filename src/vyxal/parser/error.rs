//! Errors raised while building the structure tree

use thiserror::Error;

/// The only hard failure in structural parsing. Every other malformation (missing
/// closers, stray closers, extra branches) is recovered from silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("modifier '{symbol}' expects {expected} operand(s) but only {found} follow it")]
    MissingOperand {
        symbol: String,
        expected: usize,
        found: usize,
    },
}
