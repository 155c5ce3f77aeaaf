use assertlint_python_ast::{Ranged, TextRange};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::registry::DiagnosticKind;

/// A single finding, anchored to the source range of the call expression
/// that produced it. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub range: TextRange,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, range: TextRange) -> Self {
        Self { kind, range }
    }
}

impl Ranged for Diagnostic {
    fn range(&self) -> TextRange {
        self.range
    }
}
