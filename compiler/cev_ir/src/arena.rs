//! Flat storage for expression trees.
//!
//! Nodes are appended and never removed or rewritten, so an `ExprId` stays
//! valid for the arena's lifetime and a tree can be shared read-only between
//! evaluations.

use crate::ast::{
    BinaryOp, CmpOpRange, Expr, ExprKind, ExprRange, MapEntry, MapEntryRange, ParamRange, UnaryOp,
};
use crate::{BytesId, ExprId, Name, Span};

/// Error when a node violates a structural invariant on allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// A chained comparison needs exactly one operator fewer than operands,
    /// and at least two operands.
    ComparisonArity { operands: usize, ops: usize },
    /// An operator that cannot link a comparison chain, such as `+`.
    NotComparison { op: BinaryOp },
}

impl std::fmt::Display for ArenaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArenaError::ComparisonArity { operands, ops } => write!(
                f,
                "comparison with {operands} operands needs {} operators, got {ops}",
                operands.saturating_sub(1)
            ),
            ArenaError::NotComparison { op } => {
                write!(f, "`{}` cannot appear in a comparison chain", op.as_symbol())
            }
        }
    }
}

impl std::error::Error for ArenaError {}

/// Arena of expression nodes and their variable-length children.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    map_entries: Vec<MapEntry>,
    cmp_ops: Vec<BinaryOp>,
    params: Vec<Name>,
    byte_strings: Vec<Box<[u8]>>,
}

#[inline]
fn table_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("expression arena exceeded u32::MAX entries"))
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of expression nodes.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Append a node.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(table_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// Append a node built from its parts.
    #[inline]
    pub fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.alloc_expr(Expr::new(kind, span))
    }

    /// Get a node.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get a node if `id` belongs to this arena.
    #[inline]
    pub fn try_get(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id.index())
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.get(id).kind
    }

    #[inline]
    pub fn span(&self, id: ExprId) -> Span {
        self.get(id).span
    }

    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = table_index(self.expr_lists.len());
        self.expr_lists.extend(ids);
        ExprRange::new(start, table_index(self.expr_lists.len()) - start)
    }

    #[inline]
    pub fn get_expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.indices()]
    }

    pub fn alloc_map_entries(
        &mut self,
        entries: impl IntoIterator<Item = MapEntry>,
    ) -> MapEntryRange {
        let start = table_index(self.map_entries.len());
        self.map_entries.extend(entries);
        MapEntryRange::new(start, table_index(self.map_entries.len()) - start)
    }

    #[inline]
    pub fn get_map_entries(&self, range: MapEntryRange) -> &[MapEntry] {
        &self.map_entries[range.indices()]
    }

    #[inline]
    pub fn get_cmp_ops(&self, range: CmpOpRange) -> &[BinaryOp] {
        &self.cmp_ops[range.indices()]
    }

    pub fn alloc_params(&mut self, names: impl IntoIterator<Item = Name>) -> ParamRange {
        let start = table_index(self.params.len());
        self.params.extend(names);
        ParamRange::new(start, table_index(self.params.len()) - start)
    }

    #[inline]
    pub fn get_params(&self, range: ParamRange) -> &[Name] {
        &self.params[range.indices()]
    }

    pub fn alloc_bytes(&mut self, bytes: impl Into<Box<[u8]>>) -> BytesId {
        let id = BytesId::new(table_index(self.byte_strings.len()));
        self.byte_strings.push(bytes.into());
        id
    }

    #[inline]
    pub fn get_bytes(&self, id: BytesId) -> &[u8] {
        &self.byte_strings[id.index()]
    }

    /// Allocate a chained comparison, checking the operand/operator arity
    /// and that every operator is a comparison.
    pub fn alloc_comparison(
        &mut self,
        operands: &[ExprId],
        ops: &[BinaryOp],
        span: Span,
    ) -> Result<ExprId, ArenaError> {
        if operands.len() < 2 || ops.len() + 1 != operands.len() {
            return Err(ArenaError::ComparisonArity {
                operands: operands.len(),
                ops: ops.len(),
            });
        }
        if let Some(&op) = ops.iter().find(|op| !op.is_comparison()) {
            return Err(ArenaError::NotComparison { op });
        }
        let operands = self.alloc_expr_list(operands.iter().copied());
        let start = table_index(self.cmp_ops.len());
        self.cmp_ops.extend_from_slice(ops);
        let ops = CmpOpRange::new(start, table_index(self.cmp_ops.len()) - start);
        Ok(self.alloc(ExprKind::Comparison { operands, ops }, span))
    }

    // Builders for trees constructed without source text.

    pub fn int(&mut self, value: i64) -> ExprId {
        self.alloc(ExprKind::Int(value), Span::DUMMY)
    }

    pub fn float(&mut self, value: f64) -> ExprId {
        self.alloc(ExprKind::Float(value.to_bits()), Span::DUMMY)
    }

    pub fn complex(&mut self, real: f64, imag: f64) -> ExprId {
        self.alloc(
            ExprKind::Complex {
                real: real.to_bits(),
                imag: imag.to_bits(),
            },
            Span::DUMMY,
        )
    }

    pub fn name(&mut self, name: Name) -> ExprId {
        self.alloc(ExprKind::Name(name), Span::DUMMY)
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.alloc(ExprKind::Unary { op, operand }, Span::DUMMY)
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc(ExprKind::Binary { op, left, right }, Span::DUMMY)
    }

    pub fn list(&mut self, items: impl IntoIterator<Item = ExprId>) -> ExprId {
        let range = self.alloc_expr_list(items);
        self.alloc(ExprKind::List(range), Span::DUMMY)
    }

    pub fn tuple(&mut self, items: impl IntoIterator<Item = ExprId>) -> ExprId {
        let range = self.alloc_expr_list(items);
        self.alloc(ExprKind::Tuple(range), Span::DUMMY)
    }

    pub fn dict(&mut self, entries: impl IntoIterator<Item = (ExprId, ExprId)>) -> ExprId {
        let range =
            self.alloc_map_entries(entries.into_iter().map(|(key, value)| MapEntry { key, value }));
        self.alloc(ExprKind::Dict(range), Span::DUMMY)
    }

    pub fn index(&mut self, base: ExprId, index: ExprId) -> ExprId {
        self.alloc(ExprKind::Index { base, index }, Span::DUMMY)
    }
}
