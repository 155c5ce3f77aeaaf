//! AST visitor trait and walk functions.

use crate::nodes::{Expr, Stmt};

/// A trait for AST visitors. Visits all nodes in the tree recursively in
/// source order: a class header's base expressions are visited before the
/// class body, and a call's callee before its arguments.
pub trait Visitor<'a> {
    fn visit_stmt(&mut self, stmt: &'a Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_expr(&mut self, expr: &'a Expr) {
        walk_expr(self, expr);
    }

    fn visit_body(&mut self, body: &'a [Stmt]) {
        walk_body(self, body);
    }
}

pub fn walk_body<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, body: &'a [Stmt]) {
    for stmt in body {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, stmt: &'a Stmt) {
    match stmt {
        Stmt::ClassDef(class_def) => {
            for base in class_def.bases() {
                visitor.visit_expr(base);
            }
            visitor.visit_body(&class_def.body);
        }
        Stmt::FunctionDef(function_def) => {
            visitor.visit_body(&function_def.body);
        }
        Stmt::Expr(stmt_expr) => {
            visitor.visit_expr(&stmt_expr.value);
        }
        Stmt::Pass(_) => {}
    }
}

pub fn walk_expr<'a, V: Visitor<'a> + ?Sized>(visitor: &mut V, expr: &'a Expr) {
    match expr {
        Expr::Call(call) => {
            visitor.visit_expr(&call.func);
            for arg in &call.arguments.args {
                visitor.visit_expr(arg);
            }
        }
        Expr::Attribute(attribute) => {
            visitor.visit_expr(&attribute.value);
        }
        Expr::Name(_)
        | Expr::BooleanLiteral(_)
        | Expr::NoneLiteral(_)
        | Expr::StringLiteral(_)
        | Expr::NumberLiteral(_)
        | Expr::Opaque(_) => {}
    }
}
