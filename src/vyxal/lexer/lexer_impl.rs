//! Implementation of the Vyxal lexer
//!
//! Convenience functions around the logos-generated lexer that attach each
//! lexeme's text to its kind.

use crate::vyxal::lexer::tokens::{Token, TokenKind};
use logos::Logos;

/// Tokenize a program, dropping anything logos could not classify
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Tokenize a program, keeping the byte range of every token
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, logos::Span)> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => tokens.push((Token::new(kind, lexer.slice()), lexer.span())),
            Err(()) => {
                tracing::debug!(span = ?lexer.span(), "skipping unrecognised input");
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<String> {
        tokenize(source).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_simple_tokenization() {
        assert_eq!(texts("1 2+"), vec!["1", " ", "2", "+"]);
    }

    #[test]
    fn test_structures_are_single_characters() {
        assert_eq!(
            texts("λ2|+;"),
            vec!["λ", "2", "|", "+", ";"]
        );
        assert_eq!(texts("⟨1|2⟩"), vec!["⟨", "1", "|", "2", "⟩"]);
    }

    #[test]
    fn test_string_literal_keeps_delimiters_inside() {
        let tokens = tokenize("`a[b|c`+");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::new(TokenKind::String, "`a[b|c`"));
        assert_eq!(tokens[1], Token::general("+"));
    }

    #[test]
    fn test_escaped_backtick() {
        let tokens = tokenize(r"`a\`b`");
        assert_eq!(tokens, vec![Token::new(TokenKind::String, r"`a\`b`")]);
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let tokens = tokenize("`abc");
        assert_eq!(tokens, vec![Token::new(TokenKind::String, "`abc")]);
    }

    #[test]
    fn test_character_and_two_char_strings() {
        let tokens = tokenize("\\(‛ab");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Character, "\\("),
                Token::new(TokenKind::TwoCharString, "‛ab"),
            ]
        );
    }

    #[test]
    fn test_compressed_literals() {
        let tokens = tokenize("«abc«»xy»");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::CompressedString, "«abc«"),
                Token::new(TokenKind::CompressedNumber, "»xy»"),
            ]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize_with_spans("12 ∆s");
        assert_eq!(tokens[0].1, 0..2);
        assert_eq!(tokens[1].1, 2..3);
        assert_eq!(tokens[2].0, Token::new(TokenKind::Digraph, "∆s"));
        // ∆ is three bytes in UTF-8
        assert_eq!(tokens[2].1, 3..7);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }
}
