//! Lexer module for Vyxal source
//!
//! Tokenization is handled entirely by logos (see [tokens]). The parser consumes
//! any `Vec<Token>`; this lexer is just the producer used by the processor, the
//! CLI and the tests.
//!
//! Vyxal has no whitespace-sensitive syntax: blanks are kept as [`TokenKind::Blank`]
//! tokens so that the token stream detokenizes back to the original source, and the
//! parser drops them.

pub mod detokenizer;
pub mod lexer_impl;
pub mod tokens;

pub use detokenizer::detokenize;
pub use lexer_impl::{tokenize, tokenize_with_spans};
pub use tokens::{Token, TokenKind};
