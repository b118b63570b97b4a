//! Centralized error constructors for the evaluator.
//!
//! Every evaluation failure is an `EvalError`: a kind plus the span of the
//! node where it surfaced, attached on the way out of the evaluator.

use cev_ir::{NodeKind, Span};
use smallvec::SmallVec;

use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Operand type names carried by a type mismatch.
pub type OperandTypes = SmallVec<[&'static str; 2]>;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// The name is unbound, or bound without a constant value.
    #[error("name `{name}` has no constant value")]
    MissingVariable { name: String },

    #[error("cannot evaluate {node}")]
    UnsupportedNode { node: NodeKind },

    /// `context` is an operator symbol, `unary -`, `index` or `condition`.
    #[error("unsupported operand type(s) for {context}: {}", .operands.join(", "))]
    TypeMismatch {
        context: &'static str,
        operands: OperandTypes,
    },

    #[error("unknown operator `{symbol}`")]
    UnknownOperator { symbol: String },

    #[error("expression nesting exceeds the limit of {limit}")]
    DepthExceeded { limit: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    #[error("negative shift count")]
    NegativeShiftCount,

    #[error("index {index} out of range for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },

    /// An `ExprId` that does not belong to the arena being evaluated.
    #[error("expression {id} is not in the arena")]
    DanglingExpr { id: u32 },
}

/// An evaluation error with the span of the node that raised it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}{}", .span.map(|s| format!(" at {s}")).unwrap_or_default())]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a more specific one is already present.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Name resolution

#[cold]
pub fn missing_variable(name: &str) -> EvalError {
    EvalErrorKind::MissingVariable {
        name: name.to_owned(),
    }
    .into()
}

#[cold]
pub fn unsupported_node(node: NodeKind) -> EvalError {
    EvalErrorKind::UnsupportedNode { node }.into()
}

#[cold]
pub fn dangling_expr(id: u32) -> EvalError {
    EvalErrorKind::DanglingExpr { id }.into()
}

// Operators

#[cold]
pub fn type_mismatch(context: &'static str, operands: &[&Value]) -> EvalError {
    EvalErrorKind::TypeMismatch {
        context,
        operands: operands.iter().map(|v| v.type_name()).collect(),
    }
    .into()
}

#[cold]
pub fn binary_type_mismatch(symbol: &'static str, left: &Value, right: &Value) -> EvalError {
    type_mismatch(symbol, &[left, right])
}

#[cold]
pub fn unknown_operator(symbol: &str) -> EvalError {
    EvalErrorKind::UnknownOperator {
        symbol: symbol.to_owned(),
    }
    .into()
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow { operation }.into()
}

#[cold]
pub fn negative_shift_count() -> EvalError {
    EvalErrorKind::NegativeShiftCount.into()
}

// Indexing

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalErrorKind::IndexOutOfBounds { index, len }.into()
}

// Limits

#[cold]
pub fn depth_exceeded(limit: usize) -> EvalError {
    EvalErrorKind::DepthExceeded { limit }.into()
}
