//! Token definitions for Vyxal source
//!
//! Token kinds are recognised with the logos derive macro. Most of a Vyxal program
//! is single-character elements, so anything that is not one of the literal forms
//! below falls through to [`TokenKind::General`].
//!
//! The parser never looks at the kind to classify structure delimiters or
//! modifiers, only at [`Token::text`]. Literal kinds keep their complete lexeme as
//! text (quotes included), so a backtick string containing `[` can never be
//! mistaken for an opener.
use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of lexemes produced by the Vyxal lexer
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Line comments never reach the token stream
    #[regex(r"#[^\n]*", logos::skip, priority = 3)]
    Comment,

    #[regex(r"[ \t\r\n]", priority = 3)]
    Blank,

    #[regex(r"[0-9]+(\.[0-9]+)?|\.[0-9]+", priority = 3)]
    Number,

    // Backtick strings; an unterminated string runs to the end of input
    #[regex(r"`([^`\\]|\\(.|\n))*`?", priority = 3)]
    String,

    #[regex(r"«[^«]*«?", priority = 3)]
    CompressedString,

    #[regex(r"»[^»]*»?", priority = 3)]
    CompressedNumber,

    // `\x` pushes the single character x
    #[regex(r"\\(.|\n)", priority = 3)]
    Character,

    // `‛xy` pushes the two character string xy
    #[regex(r"‛(.(.)?)?", priority = 3)]
    TwoCharString,

    #[regex(r"←[a-zA-Z_]*", priority = 3)]
    VariableGet,

    #[regex(r"→[a-zA-Z_]*", priority = 3)]
    VariableSet,

    // Element families spelled with a prefix character
    #[regex(r"[∆øÞ¨k].", priority = 3)]
    Digraph,

    #[regex(r".", priority = 1)]
    General,
}

impl TokenKind {
    /// Lowercase tag used by the simple token format
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::Blank => "blank",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::CompressedString => "compressed-string",
            TokenKind::CompressedNumber => "compressed-number",
            TokenKind::Character => "character",
            TokenKind::TwoCharString => "two-char-string",
            TokenKind::VariableGet => "variable-get",
            TokenKind::VariableSet => "variable-set",
            TokenKind::Digraph => "digraph",
            TokenKind::General => "general",
        }
    }

    /// Whether tokens of this kind name an element of the symbol table
    pub fn is_element(&self) -> bool {
        matches!(self, TokenKind::General | TokenKind::Digraph)
    }
}

/// A lexical token: its kind and the exact source text it was read from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// A single element token such as `+` or `M`
    pub fn general(text: impl Into<String>) -> Self {
        Self::new(TokenKind::General, text)
    }

    /// A blank token; the code generator treats it as a no-op
    pub fn blank() -> Self {
        Self::new(TokenKind::Blank, " ")
    }

    pub fn is_blank(&self) -> bool {
        self.kind == TokenKind::Blank
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Blank => write!(f, "<blank>"),
            kind => write!(f, "<{}:{}>", kind.tag(), self.text),
        }
    }
}
