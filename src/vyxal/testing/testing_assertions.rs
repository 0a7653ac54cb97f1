//! Fluent assertion API for parsed programs

use super::testing_matchers::TextMatch;
use crate::vyxal::ast::{Modifier, ParameterSpec, Program, Structure};
use crate::vyxal::lexer::{Token, TokenKind};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a top-level program
pub fn assert_program(program: &Program) -> ProgramAssertion<'_> {
    ProgramAssertion {
        program,
        context: "program".to_string(),
    }
}

fn summarize(program: &[Structure]) -> String {
    program
        .iter()
        .map(|node| format!("{}({})", node.node_type(), node.display_label()))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Program Assertions
// ============================================================================

pub struct ProgramAssertion<'a> {
    program: &'a [Structure],
    context: String,
}

impl<'a> ProgramAssertion<'a> {
    pub fn node_count(self, expected: usize) -> Self {
        let actual = self.program.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} nodes, found {} nodes: [{}]",
            self.context,
            expected,
            actual,
            summarize(self.program)
        );
        self
    }

    pub fn is_empty(self) -> Self {
        self.node_count(0)
    }

    /// Assert on a specific node by index
    pub fn node<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.program.len(),
            "{}: Node index {} out of bounds ({} nodes: [{}])",
            self.context,
            index,
            self.program.len(),
            summarize(self.program)
        );
        assertion(NodeAssertion {
            node: &self.program[index],
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Assert the texts of an all-leaf program
    pub fn leaf_texts(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self
            .program
            .iter()
            .map(|node| match node {
                Structure::Leaf { token } => token.text.as_str(),
                other => panic!(
                    "{}: Expected only leaves, found {}({})",
                    self.context,
                    other.node_type(),
                    other.display_label()
                ),
            })
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Leaf texts differ",
            self.context
        );
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Structure,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} '{}'",
            self.context,
            expected,
            self.node.node_type(),
            self.node.display_label()
        )
    }

    pub fn node_type(self, expected: &str) -> Self {
        assert_eq!(
            self.node.node_type(),
            expected,
            "{}: Wrong node type",
            self.context
        );
        self
    }

    pub fn assert_leaf(self) -> LeafAssertion<'a> {
        match self.node {
            Structure::Leaf { token } => LeafAssertion {
                token,
                context: self.context,
            },
            _ => self.mismatch("Leaf"),
        }
    }

    pub fn assert_if(self) -> BranchesAssertion<'a> {
        match self.node {
            Structure::If { branches } => BranchesAssertion {
                branches,
                context: self.context,
            },
            _ => self.mismatch("If"),
        }
    }

    pub fn assert_while(self) -> BranchesAssertion<'a> {
        match self.node {
            Structure::While { branches } => BranchesAssertion {
                branches,
                context: self.context,
            },
            _ => self.mismatch("While"),
        }
    }

    pub fn assert_list_literal(self) -> BranchesAssertion<'a> {
        match self.node {
            Structure::ListLiteral { items } => BranchesAssertion {
                branches: items,
                context: self.context,
            },
            _ => self.mismatch("ListLiteral"),
        }
    }

    pub fn assert_for(self) -> ForAssertion<'a> {
        match self.node {
            Structure::For { variable, body } => ForAssertion {
                variable: variable.as_deref(),
                body,
                context: self.context,
            },
            _ => self.mismatch("For"),
        }
    }

    pub fn assert_lambda(self) -> LambdaAssertion<'a> {
        match self.node {
            Structure::Lambda { arity, body } => LambdaAssertion {
                arity,
                body,
                context: self.context,
            },
            _ => self.mismatch("Lambda"),
        }
    }

    /// Matches both definitions and calls
    pub fn assert_function(self) -> FunctionAssertion<'a> {
        match self.node {
            Structure::FunctionDef {
                name,
                parameters,
                body,
            } => FunctionAssertion {
                name,
                parameters,
                body: body.as_deref(),
                context: self.context,
            },
            _ => self.mismatch("FunctionDef"),
        }
    }

    pub fn assert_function_ref(self, expected_name: &str) {
        match self.node {
            Structure::FunctionRef { name } => {
                TextMatch::Exact(expected_name.to_string()).assert(name, &self.context)
            }
            _ => self.mismatch("FunctionRef"),
        }
    }

    /// Any of the three modifier kinds; check arity with [`ModifierAssertion::arity`]
    pub fn assert_modifier(self) -> ModifierAssertion<'a> {
        match self.node {
            Structure::MonadicModifier(modifier) => ModifierAssertion {
                modifier,
                arity: 1,
                context: self.context,
            },
            Structure::DyadicModifier(modifier) => ModifierAssertion {
                modifier,
                arity: 2,
                context: self.context,
            },
            Structure::TriadicModifier(modifier) => ModifierAssertion {
                modifier,
                arity: 3,
                context: self.context,
            },
            _ => self.mismatch("a modifier"),
        }
    }
}

// ============================================================================
// Leaf Assertions
// ============================================================================

pub struct LeafAssertion<'a> {
    token: &'a Token,
    context: String,
}

impl LeafAssertion<'_> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.token.text, &self.context);
        self
    }

    pub fn text_matches(self, matcher: TextMatch) -> Self {
        matcher.assert(&self.token.text, &self.context);
        self
    }

    pub fn kind(self, expected: TokenKind) -> Self {
        assert_eq!(
            self.token.kind, expected,
            "{}: Wrong token kind for '{}'",
            self.context, self.token.text
        );
        self
    }

    pub fn is_noop(self) -> Self {
        assert!(
            self.token.is_blank(),
            "{}: Expected a no-op leaf, found '{}'",
            self.context,
            self.token
        );
        self
    }
}

// ============================================================================
// Branched Structure Assertions (If / While / ListLiteral)
// ============================================================================

pub struct BranchesAssertion<'a> {
    branches: &'a [Program],
    context: String,
}

impl<'a> BranchesAssertion<'a> {
    pub fn branch_count(self, expected: usize) -> Self {
        assert_eq!(
            self.branches.len(),
            expected,
            "{}: Expected {} branches, found {}",
            self.context,
            expected,
            self.branches.len()
        );
        self
    }

    pub fn branch<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ProgramAssertion<'a>),
    {
        assert!(
            index < self.branches.len(),
            "{}: Branch index {} out of bounds ({} branches)",
            self.context,
            index,
            self.branches.len()
        );
        assertion(ProgramAssertion {
            program: &self.branches[index],
            context: format!("{}.branches[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// For Assertions
// ============================================================================

pub struct ForAssertion<'a> {
    variable: Option<&'a str>,
    body: &'a [Structure],
    context: String,
}

impl<'a> ForAssertion<'a> {
    pub fn variable(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.variable, expected,
            "{}: Wrong loop variable",
            self.context
        );
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ProgramAssertion<'a>),
    {
        assertion(ProgramAssertion {
            program: self.body,
            context: format!("{}.body", self.context),
        });
        self
    }
}

// ============================================================================
// Lambda Assertions
// ============================================================================

pub struct LambdaAssertion<'a> {
    arity: &'a str,
    body: &'a [Structure],
    context: String,
}

impl<'a> LambdaAssertion<'a> {
    pub fn arity(self, expected: &str) -> Self {
        assert_eq!(
            self.arity, expected,
            "{}: Wrong lambda arity",
            self.context
        );
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ProgramAssertion<'a>),
    {
        assertion(ProgramAssertion {
            program: self.body,
            context: format!("{}.body", self.context),
        });
        self
    }
}

// ============================================================================
// Function Assertions
// ============================================================================

pub struct FunctionAssertion<'a> {
    name: &'a str,
    parameters: &'a [ParameterSpec],
    body: Option<&'a [Structure]>,
    context: String,
}

impl<'a> FunctionAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(self.name, &self.context);
        self
    }

    pub fn parameters(self, expected: &[ParameterSpec]) -> Self {
        assert_eq!(
            self.parameters, expected,
            "{}: Wrong parameter list",
            self.context
        );
        self
    }

    /// Assert this is a call (`@name;`) rather than a definition
    pub fn is_call(self) -> Self {
        assert!(
            self.body.is_none(),
            "{}: Expected a function call, found a definition of '{}'",
            self.context,
            self.name
        );
        self
    }

    pub fn body<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ProgramAssertion<'a>),
    {
        match self.body {
            Some(body) => assertion(ProgramAssertion {
                program: body,
                context: format!("{}.body", self.context),
            }),
            None => panic!(
                "{}: Expected a function definition, found a call of '{}'",
                self.context, self.name
            ),
        }
        self
    }
}

// ============================================================================
// Modifier Assertions
// ============================================================================

pub struct ModifierAssertion<'a> {
    modifier: &'a Modifier,
    arity: usize,
    context: String,
}

impl<'a> ModifierAssertion<'a> {
    pub fn symbol(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.modifier.symbol, &self.context);
        self
    }

    pub fn arity(self, expected: usize) -> Self {
        assert_eq!(
            self.arity, expected,
            "{}: Wrong modifier arity for '{}'",
            self.context, self.modifier.symbol
        );
        self
    }

    pub fn operands<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ProgramAssertion<'a>),
    {
        assertion(ProgramAssertion {
            program: &self.modifier.operands,
            context: format!("{}.operands", self.context),
        });
        self
    }
}
