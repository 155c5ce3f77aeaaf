//! Checks for suboptimal and deprecated `unittest` assertion calls.

use assertlint_python_ast::{Expr, ExprAttribute, ExprCall, ExprName};

use crate::diagnostic::Diagnostic;

pub(crate) mod rules;

/// Classifies one call expression inside a test-case class and returns the
/// diagnostics it produces, in rule order. Calls that are not assertion
/// methods invoked on `self` produce nothing.
///
/// The classification is pure: running it twice over the same call yields
/// the same diagnostics. The caller owns the sink.
pub fn check_call(call: &ExprCall) -> Vec<Diagnostic> {
    let Some(method) = self_method_name(call) else {
        return Vec::new();
    };
    let mut diagnostics = Vec::new();
    rules::literal_comparison(call, method, &mut diagnostics);
    rules::deprecated_alias(call, method, &mut diagnostics);
    rules::isinstance_assertion(call, method, &mut diagnostics);
    diagnostics
}

/// The attribute name of a `self.<method>(..)` call, if the call has that
/// shape.
fn self_method_name(call: &ExprCall) -> Option<&str> {
    let Expr::Attribute(ExprAttribute { value, attr, .. }) = call.func.as_ref() else {
        return None;
    };
    let Expr::Name(ExprName { id, .. }) = value.as_ref() else {
        return None;
    };
    if id != "self" {
        return None;
    }
    Some(attr.as_str())
}
