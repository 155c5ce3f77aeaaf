//! The interface to the host's type-inference oracle.
//!
//! Inference is supplied by the embedding pipeline and may be imperfect:
//! any expression can come back ambiguous (several candidate types),
//! unresolved, or as an outright inference failure. Consumers must treat
//! the latter two identically, as "no match", never as an error.

use assertlint_python_ast::{Expr, StmtClassDef};

/// The outcome of asking the oracle for the type(s) of an expression.
#[derive(Debug, Clone)]
pub enum Inferred<'ast> {
    /// One or more candidate types, in the oracle's preference order.
    Resolved(Vec<TypeHandle<'ast>>),
    /// The oracle had no answer for this expression.
    Unknown,
    /// The oracle failed while inferring this expression.
    Failed,
}

/// A single candidate type produced by the oracle.
#[derive(Debug, Clone)]
pub struct TypeHandle<'ast> {
    qualified_name: String,
    class_def: Option<&'ast StmtClassDef>,
}

impl<'ast> TypeHandle<'ast> {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            class_def: None,
        }
    }

    /// A handle for a user-defined class, carrying its definition so the
    /// inheritance chain can be resolved further.
    pub fn with_class_def(qualified_name: impl Into<String>, class_def: &'ast StmtClassDef) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            class_def: Some(class_def),
        }
    }

    /// The fully dotted path identifying this type across module
    /// boundaries. Partial inference may only recover a suffix of the
    /// path, e.g. `.TestCase`.
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn class_def(&self) -> Option<&'ast StmtClassDef> {
        self.class_def
    }
}

/// The oracle itself, implemented by the embedding pipeline.
pub trait InferenceProvider<'ast> {
    fn infer(&self, expr: &'ast Expr) -> Inferred<'ast>;
}

/// An oracle that never resolves anything. With it, no class is ever
/// recognized as a test fixture and the analysis stays silent.
pub struct NoInference;

impl<'ast> InferenceProvider<'ast> for NoInference {
    fn infer(&self, _expr: &'ast Expr) -> Inferred<'ast> {
        Inferred::Unknown
    }
}
