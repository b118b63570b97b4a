//! Condition entry point.

use cev_ir::{ExprArena, ExprId, StringInterner};

use crate::{EvalError, Evaluator, VarContext};

/// Decide whether the expression `body` is statically true under `ctx`.
///
/// The expression must reduce to an int; the condition holds when it is
/// non-zero. Any other result fails with a `TypeMismatch` whose context is
/// `condition`.
pub fn evaluate_condition(
    arena: &ExprArena,
    body: ExprId,
    ctx: &VarContext,
    interner: &StringInterner,
) -> Result<bool, EvalError> {
    Evaluator::new(arena, ctx, interner).eval_condition(body)
}
