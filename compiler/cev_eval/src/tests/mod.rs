//! Evaluator tests.
//!
//! Trees are parsed from source where possible; the helpers here bind free
//! names and run one evaluation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod evaluator_tests;

use cev_ir::StringInterner;
use cev_parse::parse_expr;

use crate::{EvalErrorKind, EvalResult, Evaluator, Value, VarContext};

/// Parse `source` and evaluate it with `bindings` in scope.
pub(crate) fn eval_source(source: &str, bindings: &[(&str, Value)]) -> EvalResult {
    let interner = StringInterner::new();
    let output = parse_expr(source, &interner).expect("test source should parse");
    let ctx: VarContext = bindings
        .iter()
        .map(|(name, value)| (interner.intern(name), value.clone()))
        .collect();
    Evaluator::new(&output.arena, &ctx, &interner).eval(output.root)
}

/// Evaluate `source` with no bindings, expecting success.
pub(crate) fn eval_ok(source: &str) -> Value {
    match eval_source(source, &[]) {
        Ok(value) => value,
        Err(err) => panic!("`{source}` failed: {err}"),
    }
}

/// Evaluate `source` with no bindings, expecting failure.
pub(crate) fn eval_err(source: &str) -> EvalErrorKind {
    match eval_source(source, &[]) {
        Ok(value) => panic!("`{source}` evaluated to {value}"),
        Err(err) => err.kind,
    }
}
