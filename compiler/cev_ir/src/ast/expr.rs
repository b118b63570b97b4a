//! Expression Types
//!
//! Core expression nodes and variants. Children are `ExprId` indices;
//! variable-length children live in the arena's side tables and are
//! addressed by range handles.

use std::fmt;

use super::operators::{BinaryOp, UnaryOp};
use super::ranges::{CmpOpRange, ExprRange, MapEntryRange, ParamRange};
use crate::{BytesId, ExprId, Name, Span};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Key/value entry in a dict literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MapEntry {
    pub key: ExprId,
    pub value: ExprId,
}

/// Expression variants.
///
/// Floats are stored as bits so the enum can be `Eq + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Integer literal: `42`, `0x2a`
    Int(i64),

    /// Float literal: `2.5`, `1e-3` (stored as bits)
    Float(u64),

    /// Complex literal. Source literals are imaginary (`3j`), so `real` is
    /// zero for parsed nodes.
    Complex { real: u64, imag: u64 },

    /// String literal (interned)
    Str(Name),

    /// Byte-string literal: `b"ab"`
    Bytes(BytesId),

    /// Variable reference
    Name(Name),

    /// Unary operation: op operand
    Unary { op: UnaryOp, operand: ExprId },

    /// Binary operation: left op right
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Chained comparison: `a < b <= c`.
    ///
    /// `ops.len() == operands.len() - 1`.
    Comparison {
        operands: ExprRange,
        ops: CmpOpRange,
    },

    /// List literal: `[a, b]`
    List(ExprRange),

    /// Tuple literal: `(a, b)`, `(a,)`, `()`
    Tuple(ExprRange),

    /// Set literal: `{a, b}`
    Set(ExprRange),

    /// Dict literal: `{k: v}`, entries in source order
    Dict(MapEntryRange),

    /// Index access: `base[index]`
    Index { base: ExprId, index: ExprId },

    /// Lambda: `lambda x: body`
    Lambda { params: ParamRange, body: ExprId },

    /// Function call: `func(args)`
    Call { func: ExprId, args: ExprRange },

    /// Member access: `receiver.name`
    Member { receiver: ExprId, name: Name },

    /// `super().name`
    Super { name: Name },

    /// `cast(T, expr)`; only the cast operand is kept.
    Cast { expr: ExprId },

    /// `reveal_type(expr)`
    RevealType { expr: ExprId },

    /// Explicit type application: `f[int]`
    TypeApplication { expr: ExprId },

    /// Slice inside an index: `a[begin:end:stride]`.
    ///
    /// Absent parts are `ExprId::INVALID`.
    Slice {
        begin: ExprId,
        end: ExprId,
        stride: ExprId,
    },

    /// `[element for target in iter if cond]`; `generator` is a `Generator` node.
    ListComprehension { generator: ExprId },

    /// `{element for target in iter if cond}`; `generator` is a `Generator` node.
    SetComprehension { generator: ExprId },

    /// `{key: value for target in iter if cond}`
    DictComprehension {
        key: ExprId,
        value: ExprId,
        target: Name,
        iter: ExprId,
        /// `ExprId::INVALID` = no condition.
        cond: ExprId,
    },

    /// `(element for target in iter if cond)`
    Generator {
        element: ExprId,
        target: Name,
        iter: ExprId,
        /// `ExprId::INVALID` = no condition.
        cond: ExprId,
    },

    /// `then_branch if cond else else_branch`
    Conditional {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// `` `expr` ``
    Backquote { expr: ExprId },

    /// Reference to a type alias.
    TypeAlias(Name),

    /// `_promote` marker.
    Promote(Name),

    /// Placeholder inserted by the type checker.
    Temp,
}

impl ExprKind {
    /// The fieldless tag of this variant.
    pub const fn node_kind(&self) -> NodeKind {
        match self {
            Self::Int(_) => NodeKind::Int,
            Self::Float(_) => NodeKind::Float,
            Self::Complex { .. } => NodeKind::Complex,
            Self::Str(_) => NodeKind::Str,
            Self::Bytes(_) => NodeKind::Bytes,
            Self::Name(_) => NodeKind::Name,
            Self::Unary { .. } => NodeKind::Unary,
            Self::Binary { .. } => NodeKind::Binary,
            Self::Comparison { .. } => NodeKind::Comparison,
            Self::List(_) => NodeKind::List,
            Self::Tuple(_) => NodeKind::Tuple,
            Self::Set(_) => NodeKind::Set,
            Self::Dict(_) => NodeKind::Dict,
            Self::Index { .. } => NodeKind::Index,
            Self::Lambda { .. } => NodeKind::Lambda,
            Self::Call { .. } => NodeKind::Call,
            Self::Member { .. } => NodeKind::Member,
            Self::Super { .. } => NodeKind::Super,
            Self::Cast { .. } => NodeKind::Cast,
            Self::RevealType { .. } => NodeKind::RevealType,
            Self::TypeApplication { .. } => NodeKind::TypeApplication,
            Self::Slice { .. } => NodeKind::Slice,
            Self::ListComprehension { .. } => NodeKind::ListComprehension,
            Self::SetComprehension { .. } => NodeKind::SetComprehension,
            Self::DictComprehension { .. } => NodeKind::DictComprehension,
            Self::Generator { .. } => NodeKind::Generator,
            Self::Conditional { .. } => NodeKind::Conditional,
            Self::Backquote { .. } => NodeKind::Backquote,
            Self::TypeAlias(_) => NodeKind::TypeAlias,
            Self::Promote(_) => NodeKind::Promote,
            Self::Temp => NodeKind::Temp,
        }
    }
}

/// Tag identifying an expression variant without its payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    Int,
    Float,
    Complex,
    Str,
    Bytes,
    Name,
    Unary,
    Binary,
    Comparison,
    List,
    Tuple,
    Set,
    Dict,
    Index,
    Lambda,
    Call,
    Member,
    Super,
    Cast,
    RevealType,
    TypeApplication,
    Slice,
    ListComprehension,
    SetComprehension,
    DictComprehension,
    Generator,
    Conditional,
    Backquote,
    TypeAlias,
    Promote,
    Temp,
}

impl NodeKind {
    /// Human-readable description, e.g. "call expression".
    pub const fn description(self) -> &'static str {
        match self {
            Self::Int => "integer literal",
            Self::Float => "float literal",
            Self::Complex => "complex literal",
            Self::Str => "string literal",
            Self::Bytes => "bytes literal",
            Self::Name => "name reference",
            Self::Unary => "unary operation",
            Self::Binary => "binary operation",
            Self::Comparison => "comparison",
            Self::List => "list display",
            Self::Tuple => "tuple display",
            Self::Set => "set display",
            Self::Dict => "dict display",
            Self::Index => "index expression",
            Self::Lambda => "lambda expression",
            Self::Call => "call expression",
            Self::Member => "member access",
            Self::Super => "super expression",
            Self::Cast => "cast expression",
            Self::RevealType => "reveal_type expression",
            Self::TypeApplication => "type application",
            Self::Slice => "slice expression",
            Self::ListComprehension => "list comprehension",
            Self::SetComprehension => "set comprehension",
            Self::DictComprehension => "dict comprehension",
            Self::Generator => "generator expression",
            Self::Conditional => "conditional expression",
            Self::Backquote => "backquote expression",
            Self::TypeAlias => "type alias reference",
            Self::Promote => "promotion marker",
            Self::Temp => "temporary node",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
