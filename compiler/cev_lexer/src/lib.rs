//! Lexer for cev guard expressions using logos with string interning.
//!
//! Produces a `TokenList` terminated by `Eof`. Identifiers and string
//! literals are interned; byte strings carry their decoded bytes. Input that
//! matches no token, integer literals that overflow `i64`, and literals with
//! malformed escapes become `TokenKind::Error` tokens so the parser can
//! report them with a span.

mod escape;
mod raw_token;

use cev_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;
use raw_token::RawToken;

pub use escape::{unescape_bytes, unescape_str, EscapeError};

/// Lexer that produces interned tokens.
pub struct Lexer<'src, 'i> {
    source: &'src str,
    interner: &'i StringInterner,
}

impl<'src, 'i> Lexer<'src, 'i> {
    pub fn new(source: &'src str, interner: &'i StringInterner) -> Self {
        Lexer { source, interner }
    }

    /// Lex all tokens from the source.
    pub fn lex_all(&self) -> TokenList {
        let mut result = TokenList::new();
        let mut logos = RawToken::lexer(self.source);

        while let Some(token_result) = logos.next() {
            let span = to_span(logos.span());
            let kind = match token_result {
                Ok(raw) => self.convert_token(raw, logos.slice()),
                Err(()) => TokenKind::Error,
            };
            if kind == TokenKind::Error {
                tracing::debug!(%span, text = logos.slice(), "invalid token");
            }
            result.push(Token::new(kind, span));
        }

        let eof = to_span(self.source.len()..self.source.len());
        result.push(Token::new(TokenKind::Eof, eof));
        tracing::trace!(tokens = result.len(), "lexed");
        result
    }

    /// Convert a raw token to a `TokenKind`, interning strings.
    fn convert_token(&self, raw: RawToken, slice: &str) -> TokenKind {
        match raw {
            RawToken::Int(n) | RawToken::HexInt(n) | RawToken::OctInt(n) | RawToken::BinInt(n) => {
                TokenKind::Int(n)
            }
            RawToken::Float(f) => TokenKind::Float(f.to_bits()),
            RawToken::Imaginary(f) => TokenKind::Imaginary(f.to_bits()),
            RawToken::Str => {
                let (is_raw, body) = escape::split_literal(slice);
                let text = if is_raw {
                    Ok(body.to_owned())
                } else {
                    unescape_str(body)
                };
                match text {
                    Ok(text) => TokenKind::Str(self.interner.intern(&text)),
                    Err(_) => TokenKind::Error,
                }
            }
            RawToken::Bytes => {
                let (is_raw, body) = escape::split_literal(slice);
                let bytes = if is_raw {
                    escape::raw_bytes(body)
                } else {
                    unescape_bytes(body)
                };
                match bytes {
                    Ok(bytes) => TokenKind::Bytes(bytes.into_boxed_slice()),
                    Err(_) => TokenKind::Error,
                }
            }
            RawToken::Ident => TokenKind::Ident(self.interner.intern(slice)),

            RawToken::Lambda => TokenKind::Lambda,
            RawToken::In => TokenKind::In,
            RawToken::Not => TokenKind::Not,
            RawToken::Is => TokenKind::Is,
            RawToken::And => TokenKind::And,
            RawToken::Or => TokenKind::Or,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::For => TokenKind::For,

            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Dot => TokenKind::Dot,
            RawToken::Backquote => TokenKind::Backquote,
            RawToken::Assign => TokenKind::Assign,

            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::DoubleStar => TokenKind::DoubleStar,
            RawToken::Slash => TokenKind::Slash,
            RawToken::DoubleSlash => TokenKind::DoubleSlash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::At => TokenKind::At,
            RawToken::Amp => TokenKind::Amp,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Tilde => TokenKind::Tilde,
            RawToken::Shl => TokenKind::Shl,
            RawToken::Shr => TokenKind::Shr,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Gt => TokenKind::Gt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq | RawToken::LegacyNotEq => TokenKind::NotEq,
        }
    }
}

/// Lex source text into tokens.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    Lexer::new(source, interner).lex_all()
}

// Sources past u32::MAX bytes get a saturated span rather than a panic.
fn to_span(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or(Span::point(u32::MAX))
}

#[cfg(test)]
mod tests;
