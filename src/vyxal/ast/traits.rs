//! Visitor trait for walking a parsed program
//!
//! Default implementations recurse into every sub-program, so a visitor only
//! overrides the node kinds it cares about. Overriding `visit_structure` takes over
//! the walk entirely.

use super::node::Structure;
use crate::vyxal::lexer::Token;

pub trait Visitor {
    fn visit_leaf(&mut self, _token: &Token) {}

    fn visit_structure(&mut self, structure: &Structure) {
        walk_structure(self, structure);
    }
}

/// Visit every node of a program in source order
pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, program: &[Structure]) {
    for structure in program {
        visitor.visit_structure(structure);
    }
}

/// Default traversal: leaves go to `visit_leaf`, everything else recurses
pub fn walk_structure<V: Visitor + ?Sized>(visitor: &mut V, structure: &Structure) {
    match structure {
        Structure::Leaf { token } => visitor.visit_leaf(token),
        other => {
            for child in other.children() {
                walk_program(visitor, child);
            }
        }
    }
}

/// Collect every leaf token of a program, depth first
pub fn leaves(program: &[Structure]) -> Vec<&Token> {
    let mut found = Vec::new();
    for structure in program {
        match structure {
            Structure::Leaf { token } => found.push(token),
            other => {
                for child in other.children() {
                    found.extend(leaves(child));
                }
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vyxal::ast::Modifier;

    struct LeafCounter(usize);

    impl Visitor for LeafCounter {
        fn visit_leaf(&mut self, _token: &Token) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_visitor_reaches_nested_leaves() {
        let program = vec![
            Structure::leaf(Token::general("1")),
            Structure::MonadicModifier(Modifier {
                symbol: "v".to_string(),
                operands: vec![Structure::If {
                    branches: vec![
                        vec![Structure::leaf(Token::general("a"))],
                        vec![Structure::leaf(Token::general("b"))],
                    ],
                }],
            }),
        ];
        let mut counter = LeafCounter(0);
        walk_program(&mut counter, &program);
        assert_eq!(counter.0, 3);

        let texts: Vec<&str> = leaves(&program).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["1", "a", "b"]);
    }
}
