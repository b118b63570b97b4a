//! cev IR - expression tree types shared by the front-end and the evaluator.
//!
//! - Spans for source locations
//! - Names for interned identifiers and string literals
//! - Tokens and `TokenList` for lexer output
//! - Expression nodes (`Expr`, `ExprKind`) and operators
//! - Arena allocation for expressions
//!
//! # Design
//!
//! - **Intern strings**: identifiers and string literals → `Name(u32)`
//! - **Flatten trees**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **Closed node set**: `ExprKind` is exhaustive, so consumers that `match`
//!   on it must handle (or explicitly reject) every kind
//!
//! Floats are stored as u64 bits so every node type is `Eq + Hash`.

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod span;
mod token;

pub use arena::{ArenaError, ExprArena};
pub use ast::{
    BinaryOp, CmpOpRange, Expr, ExprKind, ExprRange, MapEntry, MapEntryRange, NodeKind,
    ParamRange, UnaryOp,
};
pub use expr_id::{BytesId, ExprId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
