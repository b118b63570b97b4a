//! `EvaluatorBuilder` for creating `Evaluator` instances with non-default
//! configuration.

use cev_ir::{ExprArena, StringInterner};

use super::Evaluator;
use crate::VarContext;

/// Default nesting limit for evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Evaluation limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Deepest node nesting evaluated before failing with `DepthExceeded`.
    pub max_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Builder for creating `Evaluator` instances.
pub struct EvaluatorBuilder<'a> {
    arena: &'a ExprArena,
    ctx: &'a VarContext,
    interner: &'a StringInterner,
    config: EvalConfig,
}

impl<'a> EvaluatorBuilder<'a> {
    pub fn new(arena: &'a ExprArena, ctx: &'a VarContext, interner: &'a StringInterner) -> Self {
        Self {
            arena,
            ctx,
            interner,
            config: EvalConfig::default(),
        }
    }

    /// Set the nesting limit.
    #[must_use]
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Evaluator<'a> {
        Evaluator {
            arena: self.arena,
            ctx: self.ctx,
            interner: self.interner,
            config: self.config,
            depth: 0,
        }
    }
}
