//! Flags suboptimal and deprecated `unittest` assertion usage in
//! externally parsed Python syntax trees.
//!
//! The embedding pipeline supplies the tree and a type-inference oracle
//! (see `assertlint_python_semantic`); this crate walks the tree, decides
//! which classes are test fixtures, classifies the assertion calls inside
//! them, and returns structured [`Diagnostic`] records. Rendering,
//! aggregation across files, and reporting stay with the host.

pub mod checkers;
mod diagnostic;
pub mod registry;
pub mod rules;

pub use checkers::ast::{Checker, TEST_CASE_QUALIFIED_NAMES};
pub use diagnostic::Diagnostic;
pub use registry::DiagnosticKind;

use assertlint_python_ast::visitor::Visitor;
use assertlint_python_ast::Stmt;
use assertlint_python_semantic::InferenceProvider;

/// Runs the assertion checks over one file's statements and returns the
/// diagnostics in source order.
pub fn check_module<'ast>(
    body: &'ast [Stmt],
    oracle: &'ast dyn InferenceProvider<'ast>,
) -> Vec<Diagnostic> {
    let mut checker = Checker::new(oracle);
    checker.visit_body(body);
    checker.into_diagnostics()
}
