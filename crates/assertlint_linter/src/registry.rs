//! The closed set of diagnostics this linter can produce.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A finding kind together with its message arguments.
///
/// Messages follow two fixed templates; hosts that render their own
/// catalogs can recover the raw arguments with [`DiagnosticKind::template_args`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticKind {
    /// An assertion spelled through a weaker method than the dedicated
    /// one, e.g. `assertEqual(x, True)` instead of `assertTrue(x)`.
    WrongAssert {
        preferred: String,
        original: String,
    },
    /// A legacy alias of a current assertion method.
    DeprecatedAlias {
        alias: String,
        replacement: String,
    },
}

impl DiagnosticKind {
    /// The stable identifier of the rule that produced this diagnostic.
    pub const fn rule_name(&self) -> &'static str {
        match self {
            DiagnosticKind::WrongAssert { .. } => "wrong-assert",
            DiagnosticKind::DeprecatedAlias { .. } => "deprecated-alias",
        }
    }

    /// The pylint-style message code.
    pub const fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::WrongAssert { .. } => "W6501",
            DiagnosticKind::DeprecatedAlias { .. } => "W6502",
        }
    }

    /// The rendered message body.
    pub fn body(&self) -> String {
        match self {
            DiagnosticKind::WrongAssert {
                preferred,
                original,
            } => {
                format!("Use {preferred} instead of {original}")
            }
            DiagnosticKind::DeprecatedAlias { alias, replacement } => {
                format!("{alias} is deprecated, use {replacement} instead")
            }
        }
    }

    /// The message template arguments in interpolation order, for hosts
    /// that format messages themselves.
    pub fn template_args(&self) -> [&str; 2] {
        match self {
            DiagnosticKind::WrongAssert {
                preferred,
                original,
            } => [preferred, original],
            DiagnosticKind::DeprecatedAlias { alias, replacement } => [alias, replacement],
        }
    }
}
