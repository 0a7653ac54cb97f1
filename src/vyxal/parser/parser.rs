//! Top level driver
//!
//! Scans a token queue once, left to right. Openers hand off to the branch
//! assembler and the postprocessor, stray closers, separators and blanks are
//! dropped, and everything else becomes a leaf.
//!
//! A modifier consumes the parse of everything after it. Rather than recursing
//! for each modifier, the scan records the modifiers it meets and the nodes that
//! follow each one, then folds the segments from the right:
//!
//! ```text
//! nodes0 m1 nodes1 m2 nodes2
//!   R2 = nodes2
//!   R1 = nodes1 ++ resolve(m2, R2)
//!   result = nodes0 ++ resolve(m1, R1)
//! ```
//!
//! which is exactly what recursing into the remainder at each modifier produces.

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::branches::assemble_branches;
use super::catalog::{self, ModifierArity, SEPARATOR};
use super::error::ParseError;
use super::modifiers::resolve_modifier;
use super::options::ParserOptions;
use super::postprocess::postprocess;
use crate::vyxal::ast::{Program, Structure};
use crate::vyxal::lexer::Token;

/// Structural parser for a token sequence
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse a complete token sequence into a program
    pub fn parse(&self, tokens: Vec<Token>) -> Result<Program, ParseError> {
        let mut queue = VecDeque::from(tokens);
        self.parse_queue(&mut queue)
    }

    fn parse_queue(&self, queue: &mut VecDeque<Token>) -> Result<Program, ParseError> {
        // segments[i + 1] holds the nodes that follow pending[i]
        let mut segments: Vec<Program> = vec![Vec::new()];
        let mut pending: Vec<(String, ModifierArity)> = Vec::new();

        while let Some(token) = queue.pop_front() {
            if let Some(info) = catalog::structure_for(&token.text) {
                let assembly = assemble_branches(queue, info.closer);
                if assembly.implicitly_closed {
                    debug!(opener = info.opener, "unterminated structure");
                }
                let nodes = postprocess(self, info.kind, assembly.branches)?;
                current(&mut segments).extend(nodes);
            } else if let Some(arity) = catalog::modifier_arity(&token.text) {
                trace!(symbol = %token.text, ?arity, "modifier");
                pending.push((token.text, arity));
                segments.push(Vec::new());
            } else if catalog::is_closer(&token.text) {
                debug!(closer = %token.text, "discarding stray closer");
            } else if token.text == SEPARATOR || catalog::is_blank(&token.text) {
                // no-op
            } else {
                current(&mut segments).push(Structure::leaf(token));
            }
        }

        let mut remainder = segments.pop().unwrap_or_default();
        while let Some((symbol, arity)) = pending.pop() {
            let resolved = resolve_modifier(symbol, arity, remainder, &self.options)?;
            let mut preceding = segments.pop().unwrap_or_default();
            preceding.extend(resolved);
            remainder = preceding;
        }
        Ok(remainder)
    }
}

fn current(segments: &mut Vec<Program>) -> &mut Program {
    if segments.is_empty() {
        segments.push(Vec::new());
    }
    let last = segments.len() - 1;
    &mut segments[last]
}
