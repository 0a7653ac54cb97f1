//! Detokenizer for Vyxal tokens
//!
//! Every token carries its exact lexeme, so detokenizing is concatenation. Comments
//! are the only thing lost in a tokenize/detokenize round trip.
use crate::vyxal::lexer::tokens::Token;

/// Detokenize a stream of tokens into source text
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vyxal::lexer::tokenize;

    #[test]
    fn test_round_trip() {
        let source = "`hi` ƛ2*;  ⟨1|∆s|«ab«⟩ →x ←x";
        assert_eq!(detokenize(&tokenize(source)), source);
    }

    #[test]
    fn test_comments_are_dropped() {
        assert_eq!(detokenize(&tokenize("1# comment\n2")), "1\n2");
    }
}
