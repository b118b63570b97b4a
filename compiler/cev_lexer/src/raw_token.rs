//! Raw tokens recognized by logos, before interning and escape processing.

use logos::Logos;

fn parse_radix(slice: &str, radix: u32) -> Option<i64> {
    // Skip the two-character prefix (`0x`, `0o`, `0b`).
    i64::from_str_radix(&slice[2..].replace('_', ""), radix).ok()
}

fn parse_float(slice: &str) -> Option<f64> {
    slice.replace('_', "").parse::<f64>().ok()
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"([ \t\r\n\f]+|#[^\n]*|\\\n)")]
pub(crate) enum RawToken {
    // Keywords
    #[token("lambda")]
    Lambda,
    #[token("in")]
    In,
    #[token("not")]
    Not,
    #[token("is")]
    Is,
    #[token("and")]
    And,
    #[token("or")]
    Or,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,

    // Delimiters
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("`")]
    Backquote,
    #[token("=")]
    Assign,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    DoubleStar,
    #[token("/")]
    Slash,
    #[token("//")]
    DoubleSlash,
    #[token("%")]
    Percent,
    #[token("@")]
    At,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("<<")]
    Shl,
    #[token(">>")]
    Shr,
    #[token("<")]
    Lt,
    #[token(">")]
    Gt,
    #[token("<=")]
    LtEq,
    #[token(">=")]
    GtEq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<>")]
    LegacyNotEq,

    // Literals
    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*", |lex| parse_radix(lex.slice(), 16))]
    HexInt(i64),

    #[regex(r"0[oO][0-7][0-7_]*", |lex| parse_radix(lex.slice(), 8))]
    OctInt(i64),

    #[regex(r"0[bB][01][01_]*", |lex| parse_radix(lex.slice(), 2))]
    BinInt(i64),

    #[regex(r"[0-9][0-9_]*", |lex| lex.slice().replace('_', "").parse::<i64>().ok())]
    Int(i64),

    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9]+)?", |lex| parse_float(lex.slice()))]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?", |lex| parse_float(lex.slice()))]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+", |lex| parse_float(lex.slice()))]
    Float(f64),

    #[regex(r"([0-9][0-9_]*(\.[0-9_]*)?([eE][+-]?[0-9]+)?|\.[0-9][0-9_]*([eE][+-]?[0-9]+)?)[jJ]", |lex| {
        let s = lex.slice();
        parse_float(&s[..s.len() - 1])
    })]
    Imaginary(f64),

    /// String literal with optional `u`/`r` prefix.
    #[regex(r#"[uUrR]?("([^"\\\n]|\\.)*"|'([^'\\\n]|\\.)*')"#)]
    Str,

    /// Byte-string literal with `b`, `br` or `rb` prefix.
    #[regex(r#"([bB][rR]?|[rR][bB])("([^"\\\n]|\\.)*"|'([^'\\\n]|\\.)*')"#)]
    Bytes,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
