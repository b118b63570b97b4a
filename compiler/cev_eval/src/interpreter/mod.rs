//! Tree-walking evaluator.
//!
//! Reduces an expression in an `ExprArena` to a `Value` under a read-only
//! `VarContext`. Dispatch is an exhaustive `match` on `ExprKind`, so every
//! node kind is either reduced or rejected with `UnsupportedNode`.

mod builder;

pub use builder::{EvalConfig, EvaluatorBuilder, DEFAULT_MAX_DEPTH};

use smallvec::SmallVec;

use cev_ir::{
    CmpOpRange, Expr, ExprArena, ExprId, ExprKind, ExprRange, MapEntryRange, StringInterner,
};
use cev_stack::ensure_sufficient_stack;

use crate::errors::{
    dangling_expr, depth_exceeded, missing_variable, type_mismatch, unsupported_node, EvalError,
    EvalResult,
};
use crate::exec::eval_index;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::value::{Complex, Value};
use crate::VarContext;

/// Evaluator for one expression tree and one variable context.
///
/// Cheap to construct; callers build one per evaluation.
pub struct Evaluator<'a> {
    arena: &'a ExprArena,
    ctx: &'a VarContext,
    interner: &'a StringInterner,
    config: EvalConfig,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator with the default configuration.
    ///
    /// For more configuration options, use `EvaluatorBuilder`.
    pub fn new(arena: &'a ExprArena, ctx: &'a VarContext, interner: &'a StringInterner) -> Self {
        EvaluatorBuilder::new(arena, ctx, interner).build()
    }

    pub fn builder(
        arena: &'a ExprArena,
        ctx: &'a VarContext,
        interner: &'a StringInterner,
    ) -> EvaluatorBuilder<'a> {
        EvaluatorBuilder::new(arena, ctx, interner)
    }

    #[inline]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate the expression rooted at `id`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn eval(&mut self, id: ExprId) -> EvalResult {
        let result = self.eval_expr(id);
        if let Err(err) = &result {
            tracing::debug!(error = %err, "evaluation failed");
        }
        result
    }

    /// Evaluate `id` as a condition: it must reduce to an int, and the
    /// condition holds when that int is non-zero.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn eval_condition(&mut self, id: ExprId) -> Result<bool, EvalError> {
        let value = self.eval(id)?;
        if let Some(n) = value.as_int() {
            return Ok(n != 0);
        }
        let err = type_mismatch("condition", &[&value]);
        Err(match self.arena.try_get(id) {
            Some(expr) => err.with_span(expr.span),
            None => err,
        })
    }

    /// Evaluate one node one level deeper, attaching its span to any error
    /// that does not carry one yet.
    fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        let arena = self.arena;
        let Some(&Expr { kind, span }) = arena.try_get(id) else {
            return Err(dangling_expr(id.raw()));
        };

        if self.depth >= self.config.max_depth {
            return Err(depth_exceeded(self.config.max_depth).with_span(span));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.eval_kind(kind));
        self.depth -= 1;

        result.map_err(|err| err.with_span(span))
    }

    fn eval_kind(&mut self, kind: ExprKind) -> EvalResult {
        tracing::trace!(node = %kind.node_kind(), depth = self.depth, "eval");
        match kind {
            // Literals
            ExprKind::Int(n) => Ok(Value::Int(n)),
            ExprKind::Float(bits) => Ok(Value::Float(f64::from_bits(bits))),
            ExprKind::Complex { real, imag } => Ok(Value::Complex(Complex::new(
                f64::from_bits(real),
                f64::from_bits(imag),
            ))),
            ExprKind::Str(name) => Ok(Value::Str(self.interner.lookup(name).to_owned())),
            ExprKind::Bytes(id) => Ok(Value::Bytes(self.arena.get_bytes(id).to_vec())),

            ExprKind::Name(name) => self
                .ctx
                .lookup(name)
                .cloned()
                .ok_or_else(|| missing_variable(self.interner.lookup(name))),

            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                evaluate_unary(&value, op)
            }
            // Both sides are always evaluated; `and`/`or` do not short-circuit.
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                evaluate_binary(left, right, op)
            }
            ExprKind::Comparison { operands, ops } => self.eval_comparison(operands, ops),

            // Containers
            ExprKind::List(range) => self.eval_items(range).map(Value::List),
            ExprKind::Tuple(range) => self.eval_items(range).map(Value::Tuple),
            ExprKind::Set(range) => self.eval_items(range).map(Value::Set),
            ExprKind::Dict(range) => self.eval_entries(range).map(Value::Dict),

            ExprKind::Index { base, index } => {
                let base = self.eval_expr(base)?;
                let index = self.eval_expr(index)?;
                eval_index(base, index)
            }

            // Parameters are ignored; the body sees the ambient context.
            ExprKind::Lambda { body, .. } => self.eval_expr(body),

            ExprKind::Call { .. }
            | ExprKind::Member { .. }
            | ExprKind::Super { .. }
            | ExprKind::Cast { .. }
            | ExprKind::RevealType { .. }
            | ExprKind::TypeApplication { .. }
            | ExprKind::Slice { .. }
            | ExprKind::ListComprehension { .. }
            | ExprKind::SetComprehension { .. }
            | ExprKind::DictComprehension { .. }
            | ExprKind::Generator { .. }
            | ExprKind::Conditional { .. }
            | ExprKind::Backquote { .. }
            | ExprKind::TypeAlias(_)
            | ExprKind::Promote(_)
            | ExprKind::Temp => Err(unsupported_node(kind.node_kind())),
        }
    }

    /// Evaluate a comparison chain.
    ///
    /// Each operand is evaluated once, left to right, and then every adjacent
    /// pair is compared; a later pair can fail even when an earlier one is
    /// false. The chain holds when every pair yields a non-zero int.
    fn eval_comparison(&mut self, operands: ExprRange, ops: CmpOpRange) -> EvalResult {
        let arena = self.arena;
        let operands = arena.get_expr_list(operands);
        let ops = arena.get_cmp_ops(ops);

        let values = operands
            .iter()
            .map(|&id| self.eval_expr(id))
            .collect::<Result<SmallVec<[Value; 4]>, _>>()?;

        let mut holds = true;
        for (pair, &op) in values.windows(2).zip(ops) {
            let result = evaluate_binary(pair[0].clone(), pair[1].clone(), op)?;
            match result.as_int() {
                Some(n) => holds &= n != 0,
                None => return Err(type_mismatch(op.as_symbol(), &[&result])),
            }
        }
        Ok(Value::bool(holds))
    }

    fn eval_items(&mut self, range: ExprRange) -> Result<Vec<Value>, EvalError> {
        let arena = self.arena;
        arena
            .get_expr_list(range)
            .iter()
            .map(|&id| self.eval_expr(id))
            .collect()
    }

    fn eval_entries(&mut self, range: MapEntryRange) -> Result<Vec<(Value, Value)>, EvalError> {
        let arena = self.arena;
        arena
            .get_map_entries(range)
            .iter()
            .map(|entry| Ok((self.eval_expr(entry.key)?, self.eval_expr(entry.value)?)))
            .collect()
    }
}
