use assertlint_python_ast::{Expr, ExprCall, Ranged};

use crate::diagnostic::Diagnostic;
use crate::registry::DiagnosticKind;

/// `assertEqual`/`assertIs` against a literal `True`, `False`, or `None`,
/// which have dedicated assertion methods.
///
/// Only the first two positional arguments are inspected, and each
/// qualifying argument reports independently, so a call comparing two
/// literals yields two diagnostics.
pub(crate) fn literal_comparison(call: &ExprCall, method: &str, diagnostics: &mut Vec<Diagnostic>) {
    if !matches!(method, "assertEqual" | "assertIs") {
        return;
    }
    for arg in call.arguments.args.iter().take(2) {
        let kind = match arg {
            Expr::BooleanLiteral(literal) if method == "assertEqual" => {
                if literal.value {
                    DiagnosticKind::WrongAssert {
                        preferred: "assertTrue(x) or assertIs(x, True)".to_string(),
                        original: "assertEqual(x, True)".to_string(),
                    }
                } else {
                    DiagnosticKind::WrongAssert {
                        preferred: "assertFalse(x) or assertIs(x, False)".to_string(),
                        original: "assertEqual(x, False)".to_string(),
                    }
                }
            }
            Expr::NoneLiteral(_) => DiagnosticKind::WrongAssert {
                preferred: "assertIsNone(x)".to_string(),
                original: "assertEqual(x, None)".to_string(),
            },
            _ => continue,
        };
        diagnostics.push(Diagnostic::new(kind, call.range()));
    }
}
