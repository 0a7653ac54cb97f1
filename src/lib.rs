//! # vyxal-front
//!
//! Lexer and structural parser for the Vyxal golfing language.
//!
//! A Vyxal program is a flat run of one-character elements with a handful of
//! bracket-delimited structures (`[...]`, `(...)`, `{...}`, `λ...;`, `⟨...⟩` and
//! friends) and prefix modifiers that grab the next few elements as operands.
//! The crate turns source text into tokens and tokens into a tree of
//! [`Structure`](vyxal::ast::Structure) nodes that a code generator can walk.
//!
//! For testing guidelines, see the [testing module](vyxal::testing).

pub mod vyxal;
