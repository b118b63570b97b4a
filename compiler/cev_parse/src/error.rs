//! Parse error types.

use cev_ir::{ArenaError, Span};

/// What went wrong while parsing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// The lexer could not form a token here.
    #[error("invalid token")]
    InvalidToken,

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },

    /// A bracket was opened at `opened` and never closed.
    #[error("unclosed `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: &'static str,
        opened: Span,
    },

    #[error("keyword arguments are not supported")]
    KeywordArgument,

    /// Adjacent literals of different kinds: `'a' b'b'`.
    #[error("cannot mix bytes and non-bytes literals")]
    MixedLiteralConcat,

    #[error("expression nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error(transparent)]
    Arena(#[from] ArenaError),
}

/// A parse error with its location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }
}
