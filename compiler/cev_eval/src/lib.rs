//! cev Eval - constant-expression evaluator.
//!
//! Reduces a literal-only expression tree plus a binding of free names to
//! literal values into a single `Value`, without executing anything.
//!
//! # Architecture
//!
//! - `VarContext`: read-only bindings from `Name` to `Value`
//! - `evaluate_binary`: operator-class dispatch with numeric promotion
//! - `evaluate_unary`: negation and bitwise inversion
//! - `Evaluator`: exhaustive tree walk over `ExprKind` with a depth limit
//! - `evaluate_condition`: the boolean entry point used by guard checks

mod condition;
mod context;
pub mod errors;
mod exec;
pub mod interpreter;
mod operators;
mod unary_operators;
mod value;

pub use condition::evaluate_condition;
pub use context::VarContext;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use exec::eval_index;
pub use interpreter::{EvalConfig, Evaluator, EvaluatorBuilder, DEFAULT_MAX_DEPTH};
pub use operators::{evaluate_binary, evaluate_binary_symbol, MAX_REPEAT_LEN};
pub use unary_operators::evaluate_unary;
pub use value::{Complex, Value};

#[cfg(test)]
mod tests;
