//! Token types produced by the lexer.

use super::{Name, Span};
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds.
///
/// Float payloads are stored as bits for `Eq`/`Hash`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    /// Integer literal: `42`, `0x2a`, `0o52`, `0b101010`
    Int(i64),
    /// Float literal: `2.5`, `1e-3`
    Float(u64),
    /// Imaginary literal: `3j`, `2.5j` (imaginary part as bits)
    Imaginary(u64),
    /// String literal with escapes processed (interned)
    Str(Name),
    /// Byte-string literal with escapes processed
    Bytes(Box<[u8]>),
    /// Identifier (interned)
    Ident(Name),

    // Keywords
    Lambda,
    In,
    Not,
    Is,
    And,
    Or,
    If,
    Else,
    For,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Dot,
    Backquote,
    /// `=`; only valid in keyword arguments, which are rejected.
    Assign,

    // Operators
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,
    Percent,
    At,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,

    /// Unrecognized input.
    Error,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Short description for "expected X, found Y" messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer literal",
            Self::Float(_) => "float literal",
            Self::Imaginary(_) => "imaginary literal",
            Self::Str(_) => "string literal",
            Self::Bytes(_) => "bytes literal",
            Self::Ident(_) => "identifier",
            Self::Lambda => "`lambda`",
            Self::In => "`in`",
            Self::Not => "`not`",
            Self::Is => "`is`",
            Self::And => "`and`",
            Self::Or => "`or`",
            Self::If => "`if`",
            Self::Else => "`else`",
            Self::For => "`for`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::LBrace => "`{`",
            Self::RBrace => "`}`",
            Self::Comma => "`,`",
            Self::Colon => "`:`",
            Self::Dot => "`.`",
            Self::Backquote => "`` ` ``",
            Self::Assign => "`=`",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::DoubleStar => "`**`",
            Self::Slash => "`/`",
            Self::DoubleSlash => "`//`",
            Self::Percent => "`%`",
            Self::At => "`@`",
            Self::Amp => "`&`",
            Self::Pipe => "`|`",
            Self::Caret => "`^`",
            Self::Tilde => "`~`",
            Self::Shl => "`<<`",
            Self::Shr => "`>>`",
            Self::Lt => "`<`",
            Self::Gt => "`>`",
            Self::LtEq => "`<=`",
            Self::GtEq => "`>=`",
            Self::EqEq => "`==`",
            Self::NotEq => "`!=`",
            Self::Error => "invalid token",
            Self::Eof => "end of input",
        }
    }
}

/// Lexer output: tokens in source order, always terminated by `Eof`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}
