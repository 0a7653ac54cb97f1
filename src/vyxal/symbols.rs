//! Symbol table interface for the code generator
//!
//! The parser never consults a symbol table; leaves carry raw token text. The code
//! generator resolves element leaves through [`SymbolTable`], whose answer may
//! depend on the active [`Mode`]. [`ElementTable`] is the stock implementation: a
//! base table plus per-mode override tables, loadable from JSON.
//!
//! ```json
//! {
//!   "base": { "+": { "arity": 2, "effect": "add" } },
//!   "modes": { "textual": { "+": { "arity": 2, "effect": "concatenate" } } }
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vyxal::ast::{walk_program, Structure, Visitor};
use crate::vyxal::lexer::Token;

/// Interpretation mode that can change what an element does
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Default,
    Numeric,
    Textual,
    Sequence,
}

/// What one element does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Values popped from the stack; `-1` means the whole stack
    pub arity: i32,
    pub effect: String,
}

impl Operation {
    pub fn new(arity: i32, effect: impl Into<String>) -> Self {
        Self {
            arity,
            effect: effect.into(),
        }
    }

    pub fn consumes_whole_stack(&self) -> bool {
        self.arity == -1
    }
}

pub trait SymbolTable {
    fn lookup(&self, symbol: &str, mode: Mode) -> Option<&Operation>;

    fn contains(&self, symbol: &str, mode: Mode) -> bool {
        self.lookup(symbol, mode).is_some()
    }
}

#[derive(Debug, Error)]
pub enum SymbolTableError {
    #[error("invalid element table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Base element table with per-mode overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTable {
    #[serde(default)]
    base: HashMap<String, Operation>,
    #[serde(default)]
    modes: HashMap<Mode, HashMap<String, Operation>>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, SymbolTableError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, symbol: impl Into<String>, operation: Operation) {
        self.base.insert(symbol.into(), operation);
    }

    /// Shadow the base entry for `symbol` while `mode` is active
    pub fn insert_override(
        &mut self,
        mode: Mode,
        symbol: impl Into<String>,
        operation: Operation,
    ) {
        self.modes
            .entry(mode)
            .or_default()
            .insert(symbol.into(), operation);
    }

    pub fn len(&self) -> usize {
        self.base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

impl SymbolTable for ElementTable {
    fn lookup(&self, symbol: &str, mode: Mode) -> Option<&Operation> {
        self.modes
            .get(&mode)
            .and_then(|overrides| overrides.get(symbol))
            .or_else(|| self.base.get(symbol))
    }
}

struct UnresolvedCollector<'a, T: SymbolTable + ?Sized> {
    table: &'a T,
    mode: Mode,
    missing: Vec<Token>,
}

impl<T: SymbolTable + ?Sized> Visitor for UnresolvedCollector<'_, T> {
    fn visit_leaf(&mut self, token: &Token) {
        if token.kind.is_element() && !self.table.contains(&token.text, self.mode) {
            self.missing.push(token.clone());
        }
    }
}

/// Element leaves anywhere in `program` that `table` has no entry for, in source
/// order. Literal leaves are never reported.
pub fn unresolved_symbols<T: SymbolTable + ?Sized>(
    program: &[Structure],
    table: &T,
    mode: Mode,
) -> Vec<Token> {
    let mut collector = UnresolvedCollector {
        table,
        mode,
        missing: Vec::new(),
    };
    walk_program(&mut collector, program);
    collector.missing
}
