use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    lex(source, interner).iter().map(|t| t.kind.clone()).collect()
}

#[test]
fn test_lex_comparison_chain() {
    let interner = StringInterner::new();
    let x = interner.intern("x");

    assert_eq!(
        kinds("1 < x <= 3", &interner),
        vec![
            TokenKind::Int(1),
            TokenKind::Lt,
            TokenKind::Ident(x),
            TokenKind::LtEq,
            TokenKind::Int(3),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_numbers() {
    let interner = StringInterner::new();

    assert_eq!(
        kinds("0x2a 0o17 0b101 1_000 2.5 1e3 .5 3j 1.5J", &interner),
        vec![
            TokenKind::Int(42),
            TokenKind::Int(15),
            TokenKind::Int(5),
            TokenKind::Int(1000),
            TokenKind::Float(2.5f64.to_bits()),
            TokenKind::Float(1000.0f64.to_bits()),
            TokenKind::Float(0.5f64.to_bits()),
            TokenKind::Imaginary(3.0f64.to_bits()),
            TokenKind::Imaginary(1.5f64.to_bits()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_integer_overflow_is_error() {
    let interner = StringInterner::new();

    assert_eq!(
        kinds("99999999999999999999", &interner),
        vec![TokenKind::Error, TokenKind::Eof]
    );
}

#[test]
fn test_lex_strings() {
    let interner = StringInterner::new();
    let tokens = lex(r#"'a\tb' "q" r'\n' u'x'"#, &interner);

    let texts: Vec<&str> = tokens
        .iter()
        .filter_map(|t| match t.kind {
            TokenKind::Str(name) => Some(interner.lookup(name)),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["a\tb", "q", "\\n", "x"]);
}

#[test]
fn test_lex_bytes() {
    let interner = StringInterner::new();

    assert_eq!(
        kinds(r"b'a\x00' rb'\x'", &interner),
        vec![
            TokenKind::Bytes(Box::from(&b"a\0"[..])),
            TokenKind::Bytes(Box::from(&b"\\x"[..])),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_keywords_versus_identifiers() {
    let interner = StringInterner::new();
    let inside = interner.intern("inside");
    let b = interner.intern("b");

    assert_eq!(
        kinds("not in inside is b", &interner),
        vec![
            TokenKind::Not,
            TokenKind::In,
            TokenKind::Ident(inside),
            TokenKind::Is,
            TokenKind::Ident(b),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_operators() {
    let interner = StringInterner::new();

    assert_eq!(
        kinds("** // << >> != <> == @ ~", &interner),
        vec![
            TokenKind::DoubleStar,
            TokenKind::DoubleSlash,
            TokenKind::Shl,
            TokenKind::Shr,
            TokenKind::NotEq,
            TokenKind::NotEq,
            TokenKind::EqEq,
            TokenKind::At,
            TokenKind::Tilde,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_lex_comments_and_spans() {
    let interner = StringInterner::new();
    let tokens = lex("1 # trailing\n+ 2", &interner);

    let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 1),
            Span::new(13, 14),
            Span::new(15, 16),
            Span::new(16, 16),
        ]
    );
}

#[test]
fn test_lex_unknown_character() {
    let interner = StringInterner::new();

    assert_eq!(
        kinds("1 $ 2", &interner),
        vec![
            TokenKind::Int(1),
            TokenKind::Error,
            TokenKind::Int(2),
            TokenKind::Eof,
        ]
    );
}
