//! AST node types.

mod expr;
mod operators;
mod ranges;

pub use expr::{Expr, ExprKind, MapEntry, NodeKind};
pub use operators::{BinaryOp, UnaryOp};
pub use ranges::{CmpOpRange, ExprRange, MapEntryRange, ParamRange};
