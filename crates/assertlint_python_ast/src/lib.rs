//! Node shapes and traversal for the Python syntax trees this workspace
//! analyzes. Trees are produced by an external frontend; nothing in here
//! parses source text.

mod nodes;
mod text_size;
pub mod visitor;

pub use nodes::{
    Arguments, Expr, ExprAttribute, ExprBooleanLiteral, ExprCall, ExprName, ExprNoneLiteral,
    ExprNumberLiteral, ExprOpaque, ExprStringLiteral, Identifier, Number, Stmt, StmtClassDef,
    StmtExpr, StmtFunctionDef, StmtPass,
};
pub use text_size::{Ranged, TextRange, TextSize};
