//! Primary expressions: literals, names and bracketed forms.

use cev_ir::{ExprId, ExprKind, MapEntry, Name, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

/// The `for target in iter if cond` clause of a comprehension.
struct CompClause {
    target: Name,
    iter: ExprId,
    cond: ExprId,
}

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        let span = token.span;
        match &token.kind {
            TokenKind::Int(n) => {
                let n = *n;
                self.cursor.advance();
                Ok(self.alloc(ExprKind::Int(n), span))
            }
            TokenKind::Float(bits) => {
                let bits = *bits;
                self.cursor.advance();
                Ok(self.alloc(ExprKind::Float(bits), span))
            }
            TokenKind::Imaginary(bits) => {
                let imag = *bits;
                self.cursor.advance();
                Ok(self.alloc(
                    ExprKind::Complex {
                        real: 0f64.to_bits(),
                        imag,
                    },
                    span,
                ))
            }
            TokenKind::Str(_) | TokenKind::Bytes(_) => self.parse_string_literals(),
            TokenKind::Ident(name) => {
                let name = *name;
                if self.interner.lookup(name) == "super"
                    && matches!(self.cursor.peek_kind(1), TokenKind::LParen)
                {
                    return self.parse_super();
                }
                self.cursor.advance();
                Ok(self.alloc(ExprKind::Name(name), span))
            }
            TokenKind::LParen => self.parse_paren(),
            TokenKind::LBracket => self.parse_list(),
            TokenKind::LBrace => self.parse_brace(),
            TokenKind::Backquote => self.parse_backquote(),
            _ => Err(self.cursor.unexpected("expression")),
        }
    }

    /// Adjacent string literals concatenate: `'a' 'b'` is `'ab'`.
    fn parse_string_literals(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.current_span();
        let mut text: Option<String> = None;
        let mut bytes: Option<Vec<u8>> = None;

        loop {
            let token = self.cursor.current();
            match &token.kind {
                TokenKind::Str(name) if bytes.is_none() => {
                    text.get_or_insert_with(String::new)
                        .push_str(self.interner.lookup(*name));
                }
                TokenKind::Bytes(b) if text.is_none() => {
                    bytes.get_or_insert_with(Vec::new).extend_from_slice(b);
                }
                TokenKind::Str(_) | TokenKind::Bytes(_) => {
                    return Err(ParseError::new(
                        ParseErrorKind::MixedLiteralConcat,
                        token.span,
                    ));
                }
                _ => break,
            }
            self.cursor.advance();
        }

        let span = start.merge(self.cursor.previous_span());
        let kind = match (text, bytes) {
            (_, Some(bytes)) => ExprKind::Bytes(self.arena.alloc_bytes(bytes)),
            (text, None) => ExprKind::Str(self.interner.intern(&text.unwrap_or_default())),
        };
        Ok(self.alloc(kind, span))
    }

    /// `super().name`
    fn parse_super(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        self.cursor.expect(&TokenKind::LParen)?;
        self.cursor.expect(&TokenKind::RParen)?;
        self.cursor.expect(&TokenKind::Dot)?;
        let name = self.cursor.expect_ident()?;
        let span = start.merge(self.cursor.previous_span());
        Ok(self.alloc(ExprKind::Super { name }, span))
    }

    /// `()`, `(e)`, `(a, b)`, `(a,)` or `(e for x in xs)`.
    fn parse_paren(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;

        if self.check(&TokenKind::RParen) {
            let close = self.cursor.advance().span;
            let range = self.arena.alloc_expr_list([]);
            return Ok(self.alloc(ExprKind::Tuple(range), open.merge(close)));
        }

        let first = self.parse_expr()?;

        if self.check(&TokenKind::For) {
            let generator = self.parse_generator(first)?;
            self.cursor
                .expect_closing(&TokenKind::RParen, "(", open)?;
            return Ok(generator);
        }

        if !self.check(&TokenKind::Comma) {
            self.cursor
                .expect_closing(&TokenKind::RParen, "(", open)?;
            return Ok(first);
        }

        let items = self.parse_item_tail(first, &TokenKind::RParen)?;
        let close = self
            .cursor
            .expect_closing(&TokenKind::RParen, "(", open)?;
        let range = self.arena.alloc_expr_list(items);
        Ok(self.alloc(ExprKind::Tuple(range), open.merge(close)))
    }

    /// `[a, b]` or `[e for x in xs]`.
    fn parse_list(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;

        let items = if self.check(&TokenKind::RBracket) {
            Vec::new()
        } else {
            let first = self.parse_expr()?;
            if self.check(&TokenKind::For) {
                let generator = self.parse_generator(first)?;
                let close = self
                    .cursor
                    .expect_closing(&TokenKind::RBracket, "[", open)?;
                return Ok(self.alloc(
                    ExprKind::ListComprehension { generator },
                    open.merge(close),
                ));
            }
            self.parse_item_tail(first, &TokenKind::RBracket)?
        };

        let close = self
            .cursor
            .expect_closing(&TokenKind::RBracket, "[", open)?;
        let range = self.arena.alloc_expr_list(items);
        Ok(self.alloc(ExprKind::List(range), open.merge(close)))
    }

    /// `{}`, `{k: v}`, `{a, b}` and their comprehension forms.
    fn parse_brace(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;

        if self.check(&TokenKind::RBrace) {
            let close = self.cursor.advance().span;
            let range = self.arena.alloc_map_entries([]);
            return Ok(self.alloc(ExprKind::Dict(range), open.merge(close)));
        }

        let first = self.parse_expr()?;

        if self.cursor.eat(&TokenKind::Colon) {
            let value = self.parse_expr()?;
            if self.check(&TokenKind::For) {
                let CompClause { target, iter, cond } = self.parse_comp_clause()?;
                let close = self
                    .cursor
                    .expect_closing(&TokenKind::RBrace, "{", open)?;
                return Ok(self.alloc(
                    ExprKind::DictComprehension {
                        key: first,
                        value,
                        target,
                        iter,
                        cond,
                    },
                    open.merge(close),
                ));
            }
            let entries = self.parse_dict_tail(MapEntry { key: first, value })?;
            let close = self
                .cursor
                .expect_closing(&TokenKind::RBrace, "{", open)?;
            let range = self.arena.alloc_map_entries(entries);
            return Ok(self.alloc(ExprKind::Dict(range), open.merge(close)));
        }

        if self.check(&TokenKind::For) {
            let generator = self.parse_generator(first)?;
            let close = self
                .cursor
                .expect_closing(&TokenKind::RBrace, "{", open)?;
            return Ok(self.alloc(
                ExprKind::SetComprehension { generator },
                open.merge(close),
            ));
        }

        let items = self.parse_item_tail(first, &TokenKind::RBrace)?;
        let close = self
            .cursor
            .expect_closing(&TokenKind::RBrace, "{", open)?;
        let range = self.arena.alloc_expr_list(items);
        Ok(self.alloc(ExprKind::Set(range), open.merge(close)))
    }

    /// `` `expr` ``
    fn parse_backquote(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance().span;
        let expr = self.parse_expr_list()?;
        let close = self
            .cursor
            .expect_closing(&TokenKind::Backquote, "`", open)?;
        Ok(self.alloc(ExprKind::Backquote { expr }, open.merge(close)))
    }

    /// Remaining comma-separated items after `first`, stopping before `close`.
    /// A trailing comma is allowed.
    pub(crate) fn parse_item_tail(
        &mut self,
        first: ExprId,
        close: &TokenKind,
    ) -> Result<Vec<ExprId>, ParseError> {
        let mut items = vec![first];
        while self.cursor.eat(&TokenKind::Comma) {
            if self.check(close) {
                break;
            }
            items.push(self.parse_expr()?);
        }
        Ok(items)
    }

    fn parse_dict_tail(&mut self, first: MapEntry) -> Result<Vec<MapEntry>, ParseError> {
        let mut entries = vec![first];
        while self.cursor.eat(&TokenKind::Comma) {
            if self.check(&TokenKind::RBrace) {
                break;
            }
            let key = self.parse_expr()?;
            self.cursor.expect(&TokenKind::Colon)?;
            let value = self.parse_expr()?;
            entries.push(MapEntry { key, value });
        }
        Ok(entries)
    }

    /// Parse the clause after `element` and build a `Generator` node.
    pub(crate) fn parse_generator(&mut self, element: ExprId) -> Result<ExprId, ParseError> {
        let CompClause { target, iter, cond } = self.parse_comp_clause()?;
        let span = self.span_of(element).merge(self.cursor.previous_span());
        Ok(self.alloc(
            ExprKind::Generator {
                element,
                target,
                iter,
                cond,
            },
            span,
        ))
    }

    /// `for target in iter [if cond]`
    fn parse_comp_clause(&mut self) -> Result<CompClause, ParseError> {
        self.cursor.expect(&TokenKind::For)?;
        let target = self.cursor.expect_ident()?;
        self.cursor.expect(&TokenKind::In)?;
        let iter = self.parse_or()?;
        let cond = if self.cursor.eat(&TokenKind::If) {
            self.parse_or()?
        } else {
            ExprId::INVALID
        };
        Ok(CompClause { target, iter, cond })
    }
}
