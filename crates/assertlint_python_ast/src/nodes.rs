//! The syntax-tree data model consumed by the assertion checks.
//!
//! Trees are built by an external frontend; this crate only defines the node
//! shapes the analysis reads. Every node carries the source range it was
//! parsed from, which travels unchanged into diagnostics. Expression shapes
//! the analysis never inspects are represented by [`ExprOpaque`].

use std::fmt;
use std::ops::Deref;

use crate::text_size::{Ranged, TextRange};

/// An identifier together with the range it occupies.
#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    pub id: String,
    pub range: TextRange,
}

impl Identifier {
    pub fn new(id: impl Into<String>, range: TextRange) -> Self {
        Self {
            id: id.into(),
            range,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.id == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.id == *other
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// A statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    ClassDef(StmtClassDef),
    FunctionDef(StmtFunctionDef),
    Expr(StmtExpr),
    Pass(StmtPass),
}

/// See also [ClassDef](https://docs.python.org/3/library/ast.html#ast.ClassDef)
#[derive(Clone, Debug, PartialEq)]
pub struct StmtClassDef {
    pub name: Identifier,
    /// The base-class expressions from the class header, in source order.
    /// `None` means the header carries no usable base list.
    pub arguments: Option<Box<Arguments>>,
    pub body: Vec<Stmt>,
    pub range: TextRange,
}

impl StmtClassDef {
    /// The base-class expressions, empty when there is no base list.
    pub fn bases(&self) -> &[Expr] {
        match &self.arguments {
            Some(arguments) => &arguments.args,
            None => &[],
        }
    }
}

/// See also [FunctionDef](https://docs.python.org/3/library/ast.html#ast.FunctionDef)
#[derive(Clone, Debug, PartialEq)]
pub struct StmtFunctionDef {
    pub name: Identifier,
    pub body: Vec<Stmt>,
    pub range: TextRange,
}

/// An expression used as a statement.
#[derive(Clone, Debug, PartialEq)]
pub struct StmtExpr {
    pub value: Box<Expr>,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StmtPass {
    pub range: TextRange,
}

/// An expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Call(ExprCall),
    Attribute(ExprAttribute),
    Name(ExprName),
    BooleanLiteral(ExprBooleanLiteral),
    NoneLiteral(ExprNoneLiteral),
    StringLiteral(ExprStringLiteral),
    NumberLiteral(ExprNumberLiteral),
    /// Any expression shape the analysis does not inspect.
    Opaque(ExprOpaque),
}

impl Expr {
    pub fn as_call_expr(&self) -> Option<&ExprCall> {
        match self {
            Expr::Call(call) => Some(call),
            _ => None,
        }
    }

    pub fn as_attribute_expr(&self) -> Option<&ExprAttribute> {
        match self {
            Expr::Attribute(attribute) => Some(attribute),
            _ => None,
        }
    }

    pub fn as_name_expr(&self) -> Option<&ExprName> {
        match self {
            Expr::Name(name) => Some(name),
            _ => None,
        }
    }
}

/// See also [Call](https://docs.python.org/3/library/ast.html#ast.Call)
#[derive(Clone, Debug, PartialEq)]
pub struct ExprCall {
    pub func: Box<Expr>,
    pub arguments: Arguments,
    pub range: TextRange,
}

/// The positional arguments of a call or the base list of a class header.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Arguments {
    pub args: Vec<Expr>,
    pub range: TextRange,
}

/// See also [Attribute](https://docs.python.org/3/library/ast.html#ast.Attribute)
#[derive(Clone, Debug, PartialEq)]
pub struct ExprAttribute {
    pub value: Box<Expr>,
    pub attr: Identifier,
    pub range: TextRange,
}

/// See also [Name](https://docs.python.org/3/library/ast.html#ast.Name)
#[derive(Clone, Debug, PartialEq)]
pub struct ExprName {
    pub id: String,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ExprBooleanLiteral {
    pub value: bool,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ExprNoneLiteral {
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ExprStringLiteral {
    pub value: String,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExprNumberLiteral {
    pub value: Number,
    pub range: TextRange,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ExprOpaque {
    pub range: TextRange,
}

impl From<StmtClassDef> for Stmt {
    fn from(node: StmtClassDef) -> Self {
        Stmt::ClassDef(node)
    }
}

impl From<StmtFunctionDef> for Stmt {
    fn from(node: StmtFunctionDef) -> Self {
        Stmt::FunctionDef(node)
    }
}

impl From<StmtExpr> for Stmt {
    fn from(node: StmtExpr) -> Self {
        Stmt::Expr(node)
    }
}

impl From<StmtPass> for Stmt {
    fn from(node: StmtPass) -> Self {
        Stmt::Pass(node)
    }
}

impl From<ExprCall> for Expr {
    fn from(node: ExprCall) -> Self {
        Expr::Call(node)
    }
}

impl From<ExprAttribute> for Expr {
    fn from(node: ExprAttribute) -> Self {
        Expr::Attribute(node)
    }
}

impl From<ExprName> for Expr {
    fn from(node: ExprName) -> Self {
        Expr::Name(node)
    }
}

impl From<ExprBooleanLiteral> for Expr {
    fn from(node: ExprBooleanLiteral) -> Self {
        Expr::BooleanLiteral(node)
    }
}

impl From<ExprNoneLiteral> for Expr {
    fn from(node: ExprNoneLiteral) -> Self {
        Expr::NoneLiteral(node)
    }
}

impl From<ExprStringLiteral> for Expr {
    fn from(node: ExprStringLiteral) -> Self {
        Expr::StringLiteral(node)
    }
}

impl From<ExprNumberLiteral> for Expr {
    fn from(node: ExprNumberLiteral) -> Self {
        Expr::NumberLiteral(node)
    }
}

impl From<ExprOpaque> for Expr {
    fn from(node: ExprOpaque) -> Self {
        Expr::Opaque(node)
    }
}

impl Ranged for Identifier {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for StmtClassDef {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for StmtFunctionDef {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for StmtExpr {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for StmtPass {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for Stmt {
    fn range(&self) -> TextRange {
        match self {
            Stmt::ClassDef(node) => node.range,
            Stmt::FunctionDef(node) => node.range,
            Stmt::Expr(node) => node.range,
            Stmt::Pass(node) => node.range,
        }
    }
}

impl Ranged for ExprCall {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for Arguments {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for ExprAttribute {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for ExprName {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for ExprBooleanLiteral {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for ExprNoneLiteral {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for ExprStringLiteral {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for ExprNumberLiteral {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for ExprOpaque {
    fn range(&self) -> TextRange {
        self.range
    }
}

impl Ranged for Expr {
    fn range(&self) -> TextRange {
        match self {
            Expr::Call(node) => node.range,
            Expr::Attribute(node) => node.range,
            Expr::Name(node) => node.range,
            Expr::BooleanLiteral(node) => node.range,
            Expr::NoneLiteral(node) => node.range,
            Expr::StringLiteral(node) => node.range,
            Expr::NumberLiteral(node) => node.range,
            Expr::Opaque(node) => node.range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Identifier, StmtClassDef};
    use crate::text_size::TextRange;

    #[test]
    fn identifier_compares_to_str() {
        let identifier = Identifier::new("assertEqual", TextRange::default());
        assert_eq!(identifier, *"assertEqual");
        assert_eq!(identifier, "assertEqual");
        assert_ne!(identifier, "assertEquals");
    }

    #[test]
    fn bases_of_unparenthesized_class_are_empty() {
        let class_def = StmtClassDef {
            name: Identifier::new("Plain", TextRange::default()),
            arguments: None,
            body: vec![],
            range: TextRange::default(),
        };
        assert!(class_def.bases().is_empty());
    }
}
