//! Unary operator implementations for the evaluator.
//!
//! Every case builds a fresh value; operands are never modified in place.

use cev_ir::UnaryOp;

use crate::errors::{integer_overflow, type_mismatch, unknown_operator, EvalResult};
use crate::Value;

/// Evaluate a unary operation using direct pattern matching.
///
/// `-` applies to ints and floats, `~` to ints. Unary `+` and `not` are not
/// reducible and fail with `UnknownOperator`.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    match (value, op) {
        (Value::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("unary -")),
        (Value::Float(f), UnaryOp::Neg) => Ok(Value::Float(-f)),
        (Value::Int(n), UnaryOp::Invert) => Ok(Value::Int(!n)),
        (_, UnaryOp::Neg) => Err(type_mismatch("unary -", &[value])),
        (_, UnaryOp::Invert) => Err(type_mismatch("unary ~", &[value])),
        (_, UnaryOp::Pos | UnaryOp::Not) => Err(unknown_operator(op.as_symbol())),
    }
}
