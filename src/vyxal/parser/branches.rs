//! Branch assembly
//!
//! Collects the raw tokens of one structure, starting right after its opener, and
//! splits them on top-level separators. Nested structures are kept inline as raw
//! tokens; they get parsed later when the branch holding them is parsed.
//!
//! Assembly is lenient. A closer that does not match the innermost open structure
//! is dropped, and running out of input closes every open structure.

use std::collections::VecDeque;

use tracing::debug;

use super::catalog::{self, SEPARATOR};
use crate::vyxal::lexer::Token;

/// Raw tokens of one `|`-delimited segment
pub type Branch = Vec<Token>;

/// Result of assembling one structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// Always holds at least one (possibly empty) branch
    pub branches: Vec<Branch>,
    /// Input ended before the structure's closer was seen
    pub implicitly_closed: bool,
    /// Closers dropped because they did not match the innermost open structure
    pub discarded_closers: usize,
}

/// Consume tokens from `queue` up to and including the closer that matches
/// `closer`. The opener must already have been taken off the queue.
pub fn assemble_branches(queue: &mut VecDeque<Token>, closer: &'static str) -> Assembly {
    let mut nesting: Vec<&'static str> = vec![closer];
    let mut branches: Vec<Branch> = vec![Vec::new()];
    let mut discarded_closers = 0;

    while let Some(token) = queue.pop_front() {
        if let Some(info) = catalog::structure_for(&token.text) {
            nesting.push(info.closer);
            push_token(&mut branches, token);
        } else if token.text == SEPARATOR && nesting.len() == 1 {
            branches.push(Vec::new());
        } else if catalog::is_closer(&token.text) {
            if nesting.last().is_some_and(|top| *top == token.text) {
                nesting.pop();
                if nesting.is_empty() {
                    return Assembly {
                        branches,
                        implicitly_closed: false,
                        discarded_closers,
                    };
                }
                push_token(&mut branches, token);
            } else {
                debug!(
                    closer = %token.text,
                    expected = ?nesting.last(),
                    "discarding mismatched closer"
                );
                discarded_closers += 1;
            }
        } else {
            push_token(&mut branches, token);
        }
    }

    debug!(
        closer,
        unclosed = nesting.len(),
        "input ended inside a structure, closing it implicitly"
    );
    Assembly {
        branches,
        implicitly_closed: true,
        discarded_closers,
    }
}

fn push_token(branches: &mut [Branch], token: Token) {
    if let Some(current) = branches.last_mut() {
        current.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vyxal::lexer::tokenize;

    fn texts(branch: &Branch) -> Vec<&str> {
        branch.iter().map(|t| t.text.as_str()).collect()
    }

    /// Tokenize `source`, drop the leading opener and assemble
    fn assemble(source: &str, closer: &'static str) -> (Assembly, VecDeque<Token>) {
        let mut queue: VecDeque<Token> = tokenize(source).into();
        queue.pop_front();
        let assembly = assemble_branches(&mut queue, closer);
        (assembly, queue)
    }

    #[test]
    fn test_single_branch() {
        let (assembly, rest) = assemble("[ab]", "]");
        assert_eq!(assembly.branches.len(), 1);
        assert_eq!(texts(&assembly.branches[0]), vec!["a", "b"]);
        assert!(!assembly.implicitly_closed);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_splits_on_top_level_separator() {
        let (assembly, _) = assemble("[a|b|]", "]");
        assert_eq!(assembly.branches.len(), 3);
        assert_eq!(texts(&assembly.branches[0]), vec!["a"]);
        assert_eq!(texts(&assembly.branches[1]), vec!["b"]);
        assert!(assembly.branches[2].is_empty());
    }

    #[test]
    fn test_nested_structure_stays_inline() {
        let (assembly, rest) = assemble("(x|[a|b])c", ")");
        assert_eq!(assembly.branches.len(), 2);
        assert_eq!(
            texts(&assembly.branches[1]),
            vec!["[", "a", "|", "b", "]"]
        );
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].text, "c");
    }

    #[test]
    fn test_mismatched_closer_is_discarded() {
        let (assembly, _) = assemble("[a)b]", "]");
        assert_eq!(texts(&assembly.branches[0]), vec!["a", "b"]);
        assert_eq!(assembly.discarded_closers, 1);
    }

    #[test]
    fn test_shared_closer_closes_innermost_first() {
        let (assembly, rest) = assemble("λƛ+;;1", ";");
        assert_eq!(texts(&assembly.branches[0]), vec!["ƛ", "+", ";"]);
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn test_exhausted_input_closes_implicitly() {
        let (assembly, rest) = assemble("[a|b", "]");
        assert!(assembly.implicitly_closed);
        assert_eq!(assembly.branches.len(), 2);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_empty_structure() {
        let (assembly, _) = assemble("[]", "]");
        assert_eq!(assembly.branches, vec![Vec::<Token>::new()]);
    }
}
