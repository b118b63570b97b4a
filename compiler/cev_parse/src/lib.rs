//! Parser for cev guard expressions.
//!
//! Recursive descent over the token stream with one function per precedence
//! level, producing nodes in a flat `ExprArena`. The whole input must be a
//! single expression (a bare `a, b` is a tuple).

mod cursor;
mod error;
mod grammar;

use cev_ir::{Expr, ExprArena, ExprId, ExprKind, Span, StringInterner, TokenKind, TokenList};
use cev_stack::ensure_sufficient_stack;
use cursor::Cursor;

pub use error::{ParseError, ParseErrorKind};

/// Default limit on syntactic nesting.
pub const MAX_NESTING: usize = 4096;

/// A parsed expression and the arena that owns its nodes.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub arena: ExprArena,
    pub root: ExprId,
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
    arena: ExprArena,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            interner,
            arena: ExprArena::new(),
            depth: 0,
            max_depth: MAX_NESTING,
        }
    }

    /// Override the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse the entire token stream as one expression.
    pub fn parse_all(mut self) -> Result<ParseOutput, ParseError> {
        let root = self.parse_expr_list()?;
        if !self.cursor.is_at_end() {
            return Err(self.cursor.unexpected("end of input"));
        }
        tracing::debug!(nodes = self.arena.len(), "parsed expression");
        Ok(ParseOutput {
            arena: self.arena,
            root,
        })
    }

    /// Run `f` one nesting level deeper, failing once the limit is reached.
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep {
                    limit: self.max_depth,
                },
                self.cursor.current_span(),
            ));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    #[inline]
    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    #[inline]
    fn span_of(&self, id: ExprId) -> Span {
        self.arena.span(id)
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }
}

/// Parse a token list.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    Parser::new(tokens, interner).parse_all()
}

/// Lex and parse source text.
pub fn parse_expr(source: &str, interner: &StringInterner) -> Result<ParseOutput, ParseError> {
    let tokens = cev_lexer::lex(source, interner);
    parse(&tokens, interner)
}

#[cfg(test)]
mod tests;
