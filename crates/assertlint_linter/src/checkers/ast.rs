//! The per-file AST checker: traversal state plus the diagnostic sink.

use assertlint_python_ast::visitor::{self, Visitor};
use assertlint_python_ast::{Expr, ExprCall, Stmt, StmtClassDef};
use assertlint_python_semantic::{analyze, InferenceProvider};

use crate::diagnostic::Diagnostic;
use crate::rules::unittest_assertions;

/// Qualified names recognized as the unit-test fixture base type. The
/// suffix form tolerates inference results that only resolve the final
/// segment of the path.
pub const TEST_CASE_QUALIFIED_NAMES: &[&str] = &["unittest.case.TestCase", ".TestCase"];

/// Walks one file's tree and collects assertion diagnostics.
///
/// A checker is scoped to a single traversal of a single file; hosts
/// processing files concurrently must construct one checker per file.
/// The external driver invokes [`Checker::enter_class_def`],
/// [`Checker::leave_class_def`], and [`Checker::visit_call`] in depth-first
/// order; the [`Visitor`] implementation wires these up for trees walked
/// in-process. `leave_class_def` must run for every entered class, even
/// when the body visit is cut short, or the fixture scope would leak into
/// sibling classes.
pub struct Checker<'ast> {
    oracle: &'ast dyn InferenceProvider<'ast>,
    /// Whether the traversal is currently inside a class derived from the
    /// recognized fixture base. A flat flag, not a stack: nested class
    /// definitions are not tracked independently.
    in_test_case: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'ast> Checker<'ast> {
    pub fn new(oracle: &'ast dyn InferenceProvider<'ast>) -> Self {
        Self {
            oracle,
            in_test_case: false,
            diagnostics: Vec::new(),
        }
    }

    /// Driver hook: the traversal entered a class definition.
    pub fn enter_class_def(&mut self, class_def: &'ast StmtClassDef) {
        if analyze::class::is_subclass_of(class_def, TEST_CASE_QUALIFIED_NAMES, self.oracle) {
            log::debug!("`{}` derives from the unittest fixture base", class_def.name);
            self.in_test_case = true;
        }
    }

    /// Driver hook: the traversal left a class definition. Always resets
    /// the scope, whatever class is being left.
    pub fn leave_class_def(&mut self, _class_def: &'ast StmtClassDef) {
        self.in_test_case = false;
    }

    /// Driver hook: the traversal reached a call expression.
    pub fn visit_call(&mut self, call: &'ast ExprCall) {
        if !self.in_test_case {
            return;
        }
        self.diagnostics
            .extend(unittest_assertions::check_call(call));
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the checker and yields the sink in emission order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl<'ast> Visitor<'ast> for Checker<'ast> {
    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        match stmt {
            Stmt::ClassDef(class_def) => {
                self.enter_class_def(class_def);
                visitor::walk_stmt(self, stmt);
                self.leave_class_def(class_def);
            }
            _ => visitor::walk_stmt(self, stmt),
        }
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        if let Expr::Call(call) = expr {
            self.visit_call(call);
        }
        visitor::walk_expr(self, expr);
    }
}
