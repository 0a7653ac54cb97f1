//! Structure catalog
//!
//! Static tables that classify token text: which characters open a structure (and
//! what closes it), the branch separator, and the three modifier sets. Nothing in
//! here has behavior beyond lookup.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Splits a structure body into branches
pub const SEPARATOR: &str = "|";

/// Whitespace texts the driver discards between nodes
pub const BLANKS: &[&str] = &[" ", "\t", "\r", "\n"];

/// Arity given to lambdas produced by sugar forms
pub const SUGAR_LAMBDA_ARITY: &str = "1";

/// Every kind of bracketed structure the parser recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    If,
    For,
    While,
    FunctionDef,
    Lambda,
    LambdaMap,
    LambdaFilter,
    LambdaSort,
    FunctionRef,
    ListLiteral,
}

impl StructureKind {
    /// The element a lambda sugar form applies its lambda with
    pub fn apply_symbol(&self) -> Option<&'static str> {
        match self {
            StructureKind::LambdaMap => Some("M"),
            StructureKind::LambdaFilter => Some("F"),
            StructureKind::LambdaSort => Some("ṡ"),
            StructureKind::If
            | StructureKind::For
            | StructureKind::While
            | StructureKind::FunctionDef
            | StructureKind::Lambda
            | StructureKind::FunctionRef
            | StructureKind::ListLiteral => None,
        }
    }
}

/// Opening delimiter, structure kind and closing delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureInfo {
    pub opener: &'static str,
    pub kind: StructureKind,
    pub closer: &'static str,
}

pub const STRUCTURES: &[StructureInfo] = &[
    StructureInfo {
        opener: "[",
        kind: StructureKind::If,
        closer: "]",
    },
    StructureInfo {
        opener: "(",
        kind: StructureKind::For,
        closer: ")",
    },
    StructureInfo {
        opener: "{",
        kind: StructureKind::While,
        closer: "}",
    },
    StructureInfo {
        opener: "@",
        kind: StructureKind::FunctionDef,
        closer: ";",
    },
    StructureInfo {
        opener: "λ",
        kind: StructureKind::Lambda,
        closer: ";",
    },
    StructureInfo {
        opener: "ƛ",
        kind: StructureKind::LambdaMap,
        closer: ";",
    },
    StructureInfo {
        opener: "'",
        kind: StructureKind::LambdaFilter,
        closer: ";",
    },
    StructureInfo {
        opener: "µ",
        kind: StructureKind::LambdaSort,
        closer: ";",
    },
    StructureInfo {
        opener: "°",
        kind: StructureKind::FunctionRef,
        closer: ";",
    },
    StructureInfo {
        opener: "⟨",
        kind: StructureKind::ListLiteral,
        closer: "⟩",
    },
];

pub const MONADIC_MODIFIERS: &[&str] = &["v", "⁽", "&", "~", "ß"];
pub const DYADIC_MODIFIERS: &[&str] = &["₌", "‡", "₍"];
pub const TRIADIC_MODIFIERS: &[&str] = &["≬"];

/// Modifiers that build a lambda out of their operands instead of wrapping them.
/// `‡` is only registered as dyadic, so it always takes two operands.
pub const LAMBDA_SUGAR_MODIFIERS: &[&str] = &["⁽", "‡"];

static OPENERS: Lazy<HashMap<&'static str, StructureInfo>> =
    Lazy::new(|| STRUCTURES.iter().map(|info| (info.opener, *info)).collect());

static CLOSERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STRUCTURES.iter().map(|info| info.closer).collect());

/// Number of operands a modifier consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierArity {
    Monadic,
    Dyadic,
    Triadic,
}

impl ModifierArity {
    pub fn operand_count(&self) -> usize {
        match self {
            ModifierArity::Monadic => 1,
            ModifierArity::Dyadic => 2,
            ModifierArity::Triadic => 3,
        }
    }
}

pub fn structure_for(text: &str) -> Option<StructureInfo> {
    OPENERS.get(text).copied()
}

pub fn is_opener(text: &str) -> bool {
    OPENERS.contains_key(text)
}

pub fn is_closer(text: &str) -> bool {
    CLOSERS.contains(text)
}

/// Classify a modifier symbol. The sets are checked monadic first, so a symbol
/// listed in more than one set takes the smallest arity.
pub fn modifier_arity(text: &str) -> Option<ModifierArity> {
    if MONADIC_MODIFIERS.contains(&text) {
        Some(ModifierArity::Monadic)
    } else if DYADIC_MODIFIERS.contains(&text) {
        Some(ModifierArity::Dyadic)
    } else if TRIADIC_MODIFIERS.contains(&text) {
        Some(ModifierArity::Triadic)
    } else {
        None
    }
}

pub fn is_blank(text: &str) -> bool {
    BLANKS.contains(&text)
}

pub fn is_lambda_sugar_modifier(text: &str) -> bool {
    LAMBDA_SUGAR_MODIFIERS.contains(&text)
}
