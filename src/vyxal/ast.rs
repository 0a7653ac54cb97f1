//! Program tree produced by the parser
//!
//! The parser emits a [`Program`]: an ordered list of [`Structure`] nodes, each
//! exclusively owning its sub-programs. This module holds the node types and the
//! read-only tooling that walks them (visitor, tree formatter, source renderer).

pub mod node;
pub mod source;
pub mod traits;
pub mod treeviz;

pub use node::{Modifier, ParameterSpec, Program, Structure};
pub use source::to_source;
pub use traits::{leaves, walk_program, walk_structure, Visitor};
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_width};
