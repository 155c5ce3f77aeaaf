//! Inheritance analysis over an imperfect inference oracle.

use std::ptr;

use rustc_hash::FxHashSet;

use assertlint_python_ast::StmtClassDef;

use crate::inference::{Inferred, InferenceProvider};

/// Returns `true` if `class_def` derives, directly or through any chain of
/// ancestors the oracle can resolve, from one of `qualified_names`.
///
/// A base the oracle cannot resolve is skipped, never fatal: a single
/// unresolvable base must not hide a match on a sibling base. Qualified
/// names are matched by string equality, so callers can pass both a fully
/// dotted form and a suffix form to tolerate partial inference.
pub fn is_subclass_of<'ast>(
    class_def: &'ast StmtClassDef,
    qualified_names: &[&str],
    oracle: &dyn InferenceProvider<'ast>,
) -> bool {
    let mut seen = FxHashSet::default();
    inherits_from(class_def, qualified_names, oracle, &mut seen)
}

fn inherits_from<'ast>(
    class_def: &'ast StmtClassDef,
    qualified_names: &[&str],
    oracle: &dyn InferenceProvider<'ast>,
    seen: &mut FxHashSet<*const StmtClassDef>,
) -> bool {
    // Guards against inheritance cycles spanning any number of classes,
    // which malformed trees can contain.
    if !seen.insert(ptr::from_ref(class_def)) {
        return false;
    }

    for base in class_def.bases() {
        let candidates = match oracle.infer(base) {
            Inferred::Resolved(candidates) => candidates,
            Inferred::Unknown | Inferred::Failed => {
                log::debug!(
                    "skipping unresolvable base class of `{}`",
                    class_def.name
                );
                continue;
            }
        };
        for candidate in candidates {
            if qualified_names.contains(&candidate.qualified_name()) {
                return true;
            }
            if let Some(ancestor) = candidate.class_def() {
                if !ptr::eq(ancestor, class_def)
                    && inherits_from(ancestor, qualified_names, oracle, seen)
                {
                    return true;
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use assertlint_python_ast::{
        Arguments, Expr, ExprName, ExprOpaque, Identifier, StmtClassDef, TextRange,
    };

    use super::is_subclass_of;
    use crate::inference::{Inferred, InferenceProvider, NoInference, TypeHandle};

    const TARGETS: &[&str] = &["unittest.case.TestCase", ".TestCase"];

    fn name(id: &str) -> Expr {
        Expr::Name(ExprName {
            id: id.to_string(),
            range: TextRange::default(),
        })
    }

    fn class_def(class_name: &str, bases: Vec<Expr>) -> StmtClassDef {
        StmtClassDef {
            name: Identifier::new(class_name, TextRange::default()),
            arguments: Some(Box::new(Arguments {
                args: bases,
                range: TextRange::default(),
            })),
            body: vec![],
            range: TextRange::default(),
        }
    }

    /// Resolves `Name` bases from a fixed table; everything else fails.
    struct MapOracle<'ast>(FxHashMap<&'static str, Inferred<'ast>>);

    impl<'ast> MapOracle<'ast> {
        fn new(entries: impl IntoIterator<Item = (&'static str, Inferred<'ast>)>) -> Self {
            Self(entries.into_iter().collect())
        }
    }

    impl<'ast> InferenceProvider<'ast> for MapOracle<'ast> {
        fn infer(&self, expr: &'ast Expr) -> Inferred<'ast> {
            match expr {
                Expr::Name(name) => self
                    .0
                    .get(name.id.as_str())
                    .cloned()
                    .unwrap_or(Inferred::Unknown),
                _ => Inferred::Failed,
            }
        }
    }

    #[test]
    fn direct_base() {
        let tests = class_def("Tests", vec![name("TestCase")]);
        let oracle = MapOracle::new([(
            "TestCase",
            Inferred::Resolved(vec![TypeHandle::new("unittest.case.TestCase")]),
        )]);
        assert!(is_subclass_of(&tests, TARGETS, &oracle));
    }

    #[test]
    fn suffix_qualified_name() {
        let tests = class_def("Tests", vec![name("TestCase")]);
        let oracle = MapOracle::new([(
            "TestCase",
            Inferred::Resolved(vec![TypeHandle::new(".TestCase")]),
        )]);
        assert!(is_subclass_of(&tests, TARGETS, &oracle));
    }

    #[test]
    fn transitive_base() {
        let base = class_def("BaseTestCase", vec![name("TestCase")]);
        let tests = class_def("Tests", vec![name("BaseTestCase")]);
        let oracle = MapOracle::new([
            (
                "BaseTestCase",
                Inferred::Resolved(vec![TypeHandle::with_class_def(
                    "myapp.tests.BaseTestCase",
                    &base,
                )]),
            ),
            (
                "TestCase",
                Inferred::Resolved(vec![TypeHandle::new("unittest.case.TestCase")]),
            ),
        ]);
        assert!(is_subclass_of(&tests, TARGETS, &oracle));
    }

    #[test]
    fn unresolvable_base_is_skipped_not_fatal() {
        // The first base never resolves; the match on the second must
        // still be found.
        let tests = class_def("Tests", vec![name("Mystery"), name("TestCase")]);
        let oracle = MapOracle::new([
            ("Mystery", Inferred::Failed),
            (
                "TestCase",
                Inferred::Resolved(vec![TypeHandle::new("unittest.case.TestCase")]),
            ),
        ]);
        assert!(is_subclass_of(&tests, TARGETS, &oracle));
    }

    #[test]
    fn ambiguous_inference_checks_every_candidate() {
        let tests = class_def("Tests", vec![name("TestCase")]);
        let oracle = MapOracle::new([(
            "TestCase",
            Inferred::Resolved(vec![
                TypeHandle::new("myapp.compat.TestCase"),
                TypeHandle::new("unittest.case.TestCase"),
            ]),
        )]);
        assert!(is_subclass_of(&tests, TARGETS, &oracle));
    }

    #[test]
    fn unrelated_base() {
        let tests = class_def("Helpers", vec![name("object")]);
        let oracle = MapOracle::new([(
            "object",
            Inferred::Resolved(vec![TypeHandle::new("builtins.object")]),
        )]);
        assert!(!is_subclass_of(&tests, TARGETS, &oracle));
    }

    #[test]
    fn no_base_list() {
        let plain = StmtClassDef {
            name: Identifier::new("Plain", TextRange::default()),
            arguments: None,
            body: vec![],
            range: TextRange::default(),
        };
        assert!(!is_subclass_of(&plain, TARGETS, &NoInference));
    }

    #[test]
    fn oracle_without_answers() {
        let tests = class_def("Tests", vec![name("TestCase")]);
        assert!(!is_subclass_of(&tests, TARGETS, &NoInference));
    }

    #[test]
    fn base_expression_the_oracle_cannot_inspect() {
        // e.g. `class Tests(make_base()):` where the oracle fails on the
        // opaque expression; the check stays negative.
        let tests = class_def(
            "Tests",
            vec![Expr::Opaque(ExprOpaque {
                range: TextRange::default(),
            })],
        );
        let oracle = MapOracle::new([]);
        assert!(!is_subclass_of(&tests, TARGETS, &oracle));
    }

    #[test]
    fn self_referential_base_terminates() {
        let cyclic = class_def("Cyclic", vec![name("Cyclic")]);
        let oracle = MapOracle::new([(
            "Cyclic",
            Inferred::Resolved(vec![TypeHandle::with_class_def("myapp.Cyclic", &cyclic)]),
        )]);
        assert!(!is_subclass_of(&cyclic, TARGETS, &oracle));
    }

    #[test]
    fn inheritance_cycle_across_classes_terminates() {
        let first = class_def("First", vec![name("Second")]);
        let second = class_def("Second", vec![name("First")]);
        let oracle = MapOracle::new([
            (
                "Second",
                Inferred::Resolved(vec![TypeHandle::with_class_def("myapp.Second", &second)]),
            ),
            (
                "First",
                Inferred::Resolved(vec![TypeHandle::with_class_def("myapp.First", &first)]),
            ),
        ]);
        assert!(!is_subclass_of(&first, TARGETS, &oracle));
        assert!(!is_subclass_of(&second, TARGETS, &oracle));
    }

    #[test]
    fn match_behind_cycle_is_still_found() {
        // First -> Second -> First is a cycle, but Second also derives
        // from the real fixture base.
        let first = class_def("First", vec![name("Second")]);
        let second = class_def("Second", vec![name("First"), name("TestCase")]);
        let oracle = MapOracle::new([
            (
                "Second",
                Inferred::Resolved(vec![TypeHandle::with_class_def("myapp.Second", &second)]),
            ),
            (
                "First",
                Inferred::Resolved(vec![TypeHandle::with_class_def("myapp.First", &first)]),
            ),
            (
                "TestCase",
                Inferred::Resolved(vec![TypeHandle::new("unittest.case.TestCase")]),
            ),
        ]);
        assert!(is_subclass_of(&first, TARGETS, &oracle));
    }
}
