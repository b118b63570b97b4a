//! Expression parsing.
//!
//! # Module Structure
//!
//! - `mod.rs`: entry points and the binary operator precedence chain
//! - `operators.rs`: operator matching helpers
//! - `primary.rs`: literals, names, bracketed displays, comprehensions
//! - `postfix.rs`: call, subscript, member access
//!
//! Precedence, loosest first: `lambda`, `x if c else y`, `or`, `and`,
//! `not`, comparisons, `|`, `^`, `&`, shifts, `+ -`, `* / // % @`,
//! unary `- + ~`, `**`, postfix.

mod operators;
mod postfix;
mod primary;

use cev_ir::{BinaryOp, ExprId, ExprKind, TokenKind, UnaryOp};

use crate::{ParseError, ParseErrorKind, Parser};

pub(crate) use operators::starts_expr;

type Matcher = fn(&TokenKind) -> Option<BinaryOp>;
type Level<'a> = fn(&mut Parser<'a>) -> Result<ExprId, ParseError>;

impl<'a> Parser<'a> {
    /// Parse an expression, allowing a bare tuple: `a, b`.
    pub(crate) fn parse_expr_list(&mut self) -> Result<ExprId, ParseError> {
        let first = self.parse_expr()?;
        if self.check(&TokenKind::Comma) {
            self.parse_tuple_tail(first)
        } else {
            Ok(first)
        }
    }

    /// Continue a parenless tuple after its first element.
    pub(crate) fn parse_tuple_tail(&mut self, first: ExprId) -> Result<ExprId, ParseError> {
        let mut items = vec![first];
        while self.cursor.eat(&TokenKind::Comma) {
            if !starts_expr(self.cursor.current_kind()) {
                break;
            }
            items.push(self.parse_expr()?);
        }
        let span = self.span_of(first).merge(self.cursor.previous_span());
        let range = self.arena.alloc_expr_list(items);
        Ok(self.alloc(ExprKind::Tuple(range), span))
    }

    /// Parse a single expression, one nesting level deeper.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        self.nested(Self::parse_expr_inner)
    }

    fn parse_expr_inner(&mut self) -> Result<ExprId, ParseError> {
        if self.check(&TokenKind::Lambda) {
            self.parse_lambda()
        } else {
            self.parse_conditional()
        }
    }

    /// `lambda a, b: body`
    fn parse_lambda(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let mut params = Vec::new();
        while !self.check(&TokenKind::Colon) {
            params.push(self.cursor.expect_ident()?);
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.cursor.expect(&TokenKind::Colon)?;
        let body = self.parse_expr()?;
        let span = start.merge(self.span_of(body));
        let params = self.arena.alloc_params(params);
        Ok(self.alloc(ExprKind::Lambda { params, body }, span))
    }

    /// `then_branch if cond else else_branch`
    fn parse_conditional(&mut self) -> Result<ExprId, ParseError> {
        let then_branch = self.parse_or()?;
        if !self.cursor.eat(&TokenKind::If) {
            return Ok(then_branch);
        }
        let cond = self.parse_or()?;
        self.cursor.expect(&TokenKind::Else)?;
        let else_branch = self.parse_expr()?;
        let span = self.span_of(then_branch).merge(self.span_of(else_branch));
        Ok(self.alloc(
            ExprKind::Conditional {
                cond,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    /// Parse `or` (lowest precedence binary).
    pub(crate) fn parse_or(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_and, |k| {
            matches!(k, TokenKind::Or).then_some(BinaryOp::Or)
        })
    }

    fn parse_and(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_not, |k| {
            matches!(k, TokenKind::And).then_some(BinaryOp::And)
        })
    }

    /// Parse prefix `not`.
    fn parse_not(&mut self) -> Result<ExprId, ParseError> {
        if !self.check(&TokenKind::Not) {
            return self.parse_comparison();
        }
        let start = self.cursor.advance().span;
        let operand = self.nested(Self::parse_not)?;
        let span = start.merge(self.span_of(operand));
        Ok(self.alloc(
            ExprKind::Unary {
                op: UnaryOp::Not,
                operand,
            },
            span,
        ))
    }

    /// Parse a comparison chain: `a < b <= c`.
    ///
    /// Any comparison, even a single one, becomes a `Comparison` node.
    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        let first = self.parse_bit_or()?;
        let mut operands = vec![first];
        let mut ops = Vec::new();

        while let Some((op, width)) = self.match_comparison_op() {
            for _ in 0..width {
                self.cursor.advance();
            }
            ops.push(op);
            operands.push(self.parse_bit_or()?);
        }

        if ops.is_empty() {
            return Ok(first);
        }
        let last = operands[operands.len() - 1];
        let span = self.span_of(first).merge(self.span_of(last));
        self.arena
            .alloc_comparison(&operands, &ops, span)
            .map_err(|e| ParseError::new(ParseErrorKind::Arena(e), span))
    }

    fn parse_bit_or(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_bit_xor, Self::match_bit_or_op)
    }

    fn parse_bit_xor(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_bit_and, Self::match_bit_xor_op)
    }

    fn parse_bit_and(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_shift, Self::match_bit_and_op)
    }

    fn parse_shift(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_additive, Self::match_shift_op)
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_multiplicative, Self::match_additive_op)
    }

    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        self.parse_binary_level(Self::parse_factor, Self::match_multiplicative_op)
    }

    /// One left-associative level: `next (op next)*`.
    fn parse_binary_level(
        &mut self,
        next: Level<'a>,
        matcher: Matcher,
    ) -> Result<ExprId, ParseError> {
        let mut left = next(self)?;

        while let Some(op) = matcher(self.cursor.current_kind()) {
            self.cursor.advance();
            let right = next(self)?;

            let span = self.span_of(left).merge(self.span_of(right));
            left = self.alloc(ExprKind::Binary { op, left, right }, span);
        }

        Ok(left)
    }

    /// Parse unary `-`, `+`, `~`.
    fn parse_factor(&mut self) -> Result<ExprId, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_power();
        };
        let start = self.cursor.advance().span;
        let operand = self.nested(Self::parse_factor)?;
        let span = start.merge(self.span_of(operand));
        Ok(self.alloc(ExprKind::Unary { op, operand }, span))
    }

    /// Parse `**`, which is right-associative and binds tighter than a unary
    /// operator on its left: `-2 ** 2` is `-(2 ** 2)`.
    fn parse_power(&mut self) -> Result<ExprId, ParseError> {
        let base = self.parse_postfix()?;
        if !self.cursor.eat(&TokenKind::DoubleStar) {
            return Ok(base);
        }
        let exponent = self.nested(Self::parse_factor)?;
        let span = self.span_of(base).merge(self.span_of(exponent));
        Ok(self.alloc(
            ExprKind::Binary {
                op: BinaryOp::Pow,
                left: base,
                right: exponent,
            },
            span,
        ))
    }
}
