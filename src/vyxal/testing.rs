//! Testing utilities for program assertions
//!
//! Parser tests should assert on the shape of the whole tree, not on node counts
//! alone. Matching nested `Structure` variants by hand gets long quickly:
//!
//! ```rust,ignore
//! match &program[0] {
//!     Structure::For { variable, body } => {
//!         assert_eq!(variable.as_deref(), Some("x"));
//!         match &body[0] {
//!             Structure::Leaf { token } => assert_eq!(token.text, "+"),
//!             _ => panic!("Expected leaf"),
//!         }
//!     }
//!     _ => panic!("Expected for loop"),
//! }
//! ```
//!
//! The fluent API below says the same thing and reports the path to the failing
//! node (`program[0].body[0]`) when an assertion fails:
//!
//! ```rust,ignore
//! use vyxal_front::vyxal::testing::assert_program;
//!
//! assert_program(&program)
//!     .node_count(1)
//!     .node(0, |node| {
//!         node.assert_for()
//!             .variable(Some("x"))
//!             .body(|body| {
//!                 body.node(0, |n| {
//!                     n.assert_leaf().text("+");
//!                 });
//!             });
//!     });
//! ```

mod testing_assertions;
mod testing_matchers;

pub use testing_assertions::{
    assert_program, BranchesAssertion, ForAssertion, FunctionAssertion, LambdaAssertion,
    LeafAssertion, ModifierAssertion, NodeAssertion, ProgramAssertion,
};
pub use testing_matchers::TextMatch;
