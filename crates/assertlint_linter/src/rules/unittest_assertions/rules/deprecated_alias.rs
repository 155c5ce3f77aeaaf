use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use assertlint_python_ast::{ExprCall, Ranged};

use crate::diagnostic::Diagnostic;
use crate::registry::DiagnosticKind;

/// Aliases kept by `unittest` for backward compatibility, mapped to their
/// canonical replacements.
static DEPRECATED_ALIASES: LazyLock<FxHashMap<&'static str, &'static str>> = LazyLock::new(|| {
    FxHashMap::from_iter([
        ("_assert", "assertTrue"),
        ("assertEquals", "assertEqual"),
        ("failIf", "assertFalse"),
        ("failIfAlmostEqual", "assertNotAlmostEqual"),
        ("failIfEqual", "assertNotEqual"),
        ("failUnless", "assertTrue"),
        ("failUnlessAlmostEqual", "assertAlmostEqual"),
        ("failUnlessEqual", "assertEqual"),
        ("failUnlessRaises", "assertRaises"),
    ])
});

/// A call through a deprecated assertion-method alias.
pub(crate) fn deprecated_alias(call: &ExprCall, method: &str, diagnostics: &mut Vec<Diagnostic>) {
    let Some(replacement) = DEPRECATED_ALIASES.get(method) else {
        return;
    };
    diagnostics.push(Diagnostic::new(
        DiagnosticKind::DeprecatedAlias {
            alias: method.to_string(),
            replacement: (*replacement).to_string(),
        },
        call.range(),
    ));
}
