//! Operator Matching Helpers
//!
//! Map the current token(s) to the operator they spell, if any.

use cev_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

impl Parser<'_> {
    /// Comparison operator at the cursor and how many tokens it spans
    /// (`not in` and `is not` take two).
    pub(crate) fn match_comparison_op(&self) -> Option<(BinaryOp, usize)> {
        let op = match self.cursor.current_kind() {
            TokenKind::Lt => BinaryOp::Lt,
            TokenKind::Gt => BinaryOp::Gt,
            TokenKind::LtEq => BinaryOp::LtEq,
            TokenKind::GtEq => BinaryOp::GtEq,
            TokenKind::EqEq => BinaryOp::Eq,
            TokenKind::NotEq => BinaryOp::NotEq,
            TokenKind::In => BinaryOp::In,
            TokenKind::Not if matches!(self.cursor.peek_kind(1), TokenKind::In) => {
                return Some((BinaryOp::NotIn, 2));
            }
            TokenKind::Is if matches!(self.cursor.peek_kind(1), TokenKind::Not) => {
                return Some((BinaryOp::IsNot, 2));
            }
            TokenKind::Is => BinaryOp::Is,
            _ => return None,
        };
        Some((op, 1))
    }

    pub(crate) fn match_shift_op(kind: &TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Shl => Some(BinaryOp::Shl),
            TokenKind::Shr => Some(BinaryOp::Shr),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(kind: &TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(kind: &TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::DoubleSlash => Some(BinaryOp::FloorDiv),
            TokenKind::Percent => Some(BinaryOp::Mod),
            TokenKind::At => Some(BinaryOp::MatMul),
            _ => None,
        }
    }

    pub(crate) fn match_bit_or_op(kind: &TokenKind) -> Option<BinaryOp> {
        matches!(kind, TokenKind::Pipe).then_some(BinaryOp::BitOr)
    }

    pub(crate) fn match_bit_xor_op(kind: &TokenKind) -> Option<BinaryOp> {
        matches!(kind, TokenKind::Caret).then_some(BinaryOp::BitXor)
    }

    pub(crate) fn match_bit_and_op(kind: &TokenKind) -> Option<BinaryOp> {
        matches!(kind, TokenKind::Amp).then_some(BinaryOp::BitAnd)
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.cursor.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Plus => Some(UnaryOp::Pos),
            TokenKind::Tilde => Some(UnaryOp::Invert),
            _ => None,
        }
    }
}

/// Whether a token can begin an expression.
pub(crate) fn starts_expr(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Int(_)
            | TokenKind::Float(_)
            | TokenKind::Imaginary(_)
            | TokenKind::Str(_)
            | TokenKind::Bytes(_)
            | TokenKind::Ident(_)
            | TokenKind::Lambda
            | TokenKind::Not
            | TokenKind::LParen
            | TokenKind::LBracket
            | TokenKind::LBrace
            | TokenKind::Backquote
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Tilde
    )
}
