//! Token cursor for navigating the token stream.

use std::mem::discriminant;

use cev_ir::{Name, Span, Token, TokenKind, TokenList};

use crate::{ParseError, ParseErrorKind};

// Stand-in for positions past the end of a list without `Eof`.
static EOF: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

/// Cursor over a token list.
///
/// Invariant: the position is always in `0..tokens.len()` and the last
/// token is `Eof`, so `current` never runs off the end.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens: tokens.as_slice(),
            pos: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Kind of the token `n` positions ahead (`Eof` past the end).
    pub fn peek_kind(&self, n: usize) -> &'a TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(&EOF.kind, |t| &t.kind)
    }

    #[inline]
    pub fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Whether the current token has the same variant as `kind`, ignoring payloads.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        discriminant(self.current_kind()) == discriminant(kind)
    }

    /// Advance past the current token and return it. Stays on `Eof`.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind or fail.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.display_name()))
        }
    }

    /// Consume a closing delimiter, reporting the opener if input ran out.
    pub fn expect_closing(
        &mut self,
        kind: &TokenKind,
        delimiter: &'static str,
        opened: Span,
    ) -> Result<Span, ParseError> {
        if self.is_at_end() {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedDelimiter { delimiter, opened },
                self.current_span(),
            ));
        }
        self.expect(kind).map(|t| t.span)
    }

    pub fn expect_ident(&mut self) -> Result<Name, ParseError> {
        match *self.current_kind() {
            TokenKind::Ident(name) => {
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Error for the current token, given what would have been accepted.
    #[cold]
    pub fn unexpected(&self, expected: &'static str) -> ParseError {
        let token = self.current();
        let kind = if token.kind == TokenKind::Error {
            ParseErrorKind::InvalidToken
        } else {
            ParseErrorKind::UnexpectedToken {
                expected,
                found: token.kind.display_name(),
            }
        };
        ParseError::new(kind, token.span)
    }
}
