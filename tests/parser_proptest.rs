//! Property-based tests for the lexer and the structural parser

use proptest::prelude::*;
use vyxal_front::vyxal::lexer::{detokenize, tokenize, Token};
use vyxal_front::vyxal::parser::{parse_source, MissingOperands, Parser, ParserOptions};

/// Characters that exercise every structural path: openers, closers, the
/// separator, all modifiers, sugar openers and plain elements
fn structural_char() -> impl Strategy<Value = char> {
    prop::sample::select(vec![
        '[', ']', '(', ')', '{', '}', '@', ';', 'λ', 'ƛ', '\'', 'µ', '°', '⟨', '⟩', '|', 'v',
        '⁽', '&', '~', 'ß', '₌', '‡', '₍', '≬', '+', 'a', 'x', '1', ':', '*', ' ', 'M',
    ])
}

fn structural_program() -> impl Strategy<Value = String> {
    prop::collection::vec(structural_char(), 0..40).prop_map(|chars| chars.into_iter().collect())
}

/// Arbitrary text without comments, which the lexer drops
fn comment_free_text() -> impl Strategy<Value = String> {
    "[^#]{0,40}"
}

fn padding_parser() -> Parser {
    Parser::new(ParserOptions::default().with_missing_operands(MissingOperands::Pad))
}

proptest! {
    #[test]
    fn test_lexer_round_trip(input in comment_free_text()) {
        prop_assert_eq!(detokenize(&tokenize(&input)), input);
    }

    #[test]
    fn test_parse_never_panics(input in structural_program()) {
        // Either outcome is fine; only panics fail
        let _ = parse_source(&input);
    }

    #[test]
    fn test_pad_policy_always_succeeds(input in structural_program()) {
        prop_assert!(padding_parser().parse(tokenize(&input)).is_ok());
    }

    #[test]
    fn test_parse_is_deterministic(input in structural_program()) {
        prop_assert_eq!(parse_source(&input), parse_source(&input));
    }

    #[test]
    fn test_parse_accepts_any_token_texts(texts in prop::collection::vec(".{1,2}", 0..20)) {
        let tokens: Vec<Token> = texts.into_iter().map(Token::general).collect();
        prop_assert!(padding_parser().parse(tokens).is_ok());
    }
}
