use assertlint_python_ast::{Expr, ExprCall, ExprName, Ranged};

use crate::diagnostic::Diagnostic;
use crate::registry::DiagnosticKind;

/// `assertTrue(isinstance(..))` / `assertFalse(isinstance(..))`, which have
/// dedicated assertion methods with better failure output.
///
/// `isinstance` is matched by identifier text alone; no attempt is made to
/// resolve which binding the name refers to.
pub(crate) fn isinstance_assertion(
    call: &ExprCall,
    method: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let (preferred, original) = match method {
        "assertTrue" => (
            "assertIsInstance(x, Class)",
            "assertTrue(isinstance(x, Class))",
        ),
        "assertFalse" => (
            "assertIsNotInstance(x, Class)",
            "assertFalse(isinstance(x, Class))",
        ),
        _ => return,
    };
    let Some(Expr::Call(argument)) = call.arguments.args.first() else {
        return;
    };
    let Expr::Name(ExprName { id, .. }) = argument.func.as_ref() else {
        return;
    };
    if id != "isinstance" {
        return;
    }
    diagnostics.push(Diagnostic::new(
        DiagnosticKind::WrongAssert {
            preferred: preferred.to_string(),
            original: original.to_string(),
        },
        call.range(),
    ));
}
