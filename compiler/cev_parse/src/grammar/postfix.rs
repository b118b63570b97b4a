//! Postfix Expression Parsing
//!
//! Function calls, subscripts and slices, and member access.

use cev_ir::{ExprId, ExprKind, Span, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse a primary followed by any number of postfix operations.
    pub(crate) fn parse_postfix(&mut self) -> Result<ExprId, ParseError> {
        let mut expr = self.parse_primary()?;

        loop {
            expr = match self.cursor.current_kind() {
                TokenKind::LParen => self.parse_call(expr)?,
                TokenKind::LBracket => self.parse_index(expr)?,
                TokenKind::Dot => {
                    self.cursor.advance();
                    let name = self.cursor.expect_ident()?;
                    let span = self.span_of(expr).merge(self.cursor.previous_span());
                    self.alloc(
                        ExprKind::Member {
                            receiver: expr,
                            name,
                        },
                        span,
                    )
                }
                _ => break,
            };
        }

        Ok(expr)
    }

    /// `func(args)`. `cast(T, e)` and `reveal_type(e)` get their own nodes.
    fn parse_call(&mut self, func: ExprId) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;
        let mut args = Vec::new();

        while !self.check(&TokenKind::RParen) && !self.cursor.is_at_end() {
            if matches!(self.cursor.current_kind(), TokenKind::Ident(_))
                && matches!(self.cursor.peek_kind(1), TokenKind::Assign)
            {
                return Err(ParseError::new(
                    ParseErrorKind::KeywordArgument,
                    self.cursor.current_span(),
                ));
            }
            let arg = self.parse_expr()?;
            let arg = if self.check(&TokenKind::For) {
                self.parse_generator(arg)?
            } else {
                arg
            };
            args.push(arg);
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }

        let close = self
            .cursor
            .expect_closing(&TokenKind::RParen, "(", open)?;
        let span = self.span_of(func).merge(close);
        let kind = self.special_call(func, &args).unwrap_or_else(|| {
            let args = self.arena.alloc_expr_list(args);
            ExprKind::Call { func, args }
        });
        Ok(self.alloc(kind, span))
    }

    fn special_call(&self, func: ExprId, args: &[ExprId]) -> Option<ExprKind> {
        let ExprKind::Name(name) = *self.arena.kind(func) else {
            return None;
        };
        match (self.interner.lookup(name), args) {
            ("cast", [_, expr]) => Some(ExprKind::Cast { expr: *expr }),
            ("reveal_type", [expr]) => Some(ExprKind::RevealType { expr: *expr }),
            _ => None,
        }
    }

    /// `base[index]`, `base[a, b]` or `base[begin:end:stride]`.
    fn parse_index(&mut self, base: ExprId) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;
        let index = self.parse_subscript()?;
        let close = self
            .cursor
            .expect_closing(&TokenKind::RBracket, "[", open)?;
        let span = self.span_of(base).merge(close);
        Ok(self.alloc(ExprKind::Index { base, index }, span))
    }

    fn parse_subscript(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span();
        let begin = if self.check(&TokenKind::Colon) {
            ExprId::INVALID
        } else {
            self.parse_expr()?
        };

        if !self.check(&TokenKind::Colon) {
            return if self.check(&TokenKind::Comma) {
                self.parse_tuple_tail(begin)
            } else {
                Ok(begin)
            };
        }

        self.cursor.advance();
        let end = self.parse_slice_part()?;
        let stride = if self.cursor.eat(&TokenKind::Colon) {
            self.parse_slice_part()?
        } else {
            ExprId::INVALID
        };
        let span = Span::merge(start, self.cursor.previous_span());
        Ok(self.alloc(ExprKind::Slice { begin, end, stride }, span))
    }

    fn parse_slice_part(&mut self) -> Result<ExprId, ParseError> {
        if self.check(&TokenKind::Colon) || self.check(&TokenKind::RBracket) {
            Ok(ExprId::INVALID)
        } else {
            self.parse_expr()
        }
    }
}
