//! Core parser tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{parse_expr, ParseOutput};
use cev_ir::{BinaryOp, ExprId, ExprKind, StringInterner, UnaryOp};
use pretty_assertions::assert_eq;

fn parse_source(source: &str, interner: &StringInterner) -> ParseOutput {
    parse_expr(source, interner).unwrap()
}

fn root_kind(output: &ParseOutput) -> ExprKind {
    *output.arena.kind(output.root)
}

#[test]
fn test_parse_literals() {
    let interner = StringInterner::new();

    assert_eq!(root_kind(&parse_source("42", &interner)), ExprKind::Int(42));
    assert_eq!(
        root_kind(&parse_source("2.5", &interner)),
        ExprKind::Float(2.5f64.to_bits())
    );
    assert_eq!(
        root_kind(&parse_source("3j", &interner)),
        ExprKind::Complex {
            real: 0f64.to_bits(),
            imag: 3f64.to_bits()
        }
    );
}

#[test]
fn test_parse_adjacent_strings_concatenate() {
    let interner = StringInterner::new();
    let output = parse_source("'ab' \"cd\"", &interner);

    let ExprKind::Str(name) = root_kind(&output) else {
        panic!("expected string literal");
    };
    assert_eq!(interner.lookup(name), "abcd");
}

#[test]
fn test_parse_bytes() {
    let interner = StringInterner::new();
    let output = parse_source("b'a' b'\\x01'", &interner);

    let ExprKind::Bytes(id) = root_kind(&output) else {
        panic!("expected bytes literal");
    };
    assert_eq!(output.arena.get_bytes(id), b"a\x01");
}

#[test]
fn test_parse_binary_precedence() {
    let interner = StringInterner::new();
    let output = parse_source("1 + 2 * 3", &interner);

    let ExprKind::Binary {
        op: BinaryOp::Add,
        left,
        right,
    } = root_kind(&output)
    else {
        panic!("expected addition at the root");
    };
    assert_eq!(*output.arena.kind(left), ExprKind::Int(1));
    assert!(matches!(
        output.arena.kind(right),
        ExprKind::Binary {
            op: BinaryOp::Mul,
            ..
        }
    ));
}

#[test]
fn test_parse_power_binds_tighter_than_unary_minus() {
    let interner = StringInterner::new();
    let output = parse_source("-2 ** 2", &interner);

    let ExprKind::Unary {
        op: UnaryOp::Neg,
        operand,
    } = root_kind(&output)
    else {
        panic!("expected negation at the root");
    };
    assert!(matches!(
        output.arena.kind(operand),
        ExprKind::Binary {
            op: BinaryOp::Pow,
            ..
        }
    ));
}

#[test]
fn test_parse_power_is_right_associative() {
    let interner = StringInterner::new();
    let output = parse_source("2 ** 3 ** 2", &interner);

    let ExprKind::Binary {
        op: BinaryOp::Pow,
        left,
        right,
    } = root_kind(&output)
    else {
        panic!("expected power at the root");
    };
    assert_eq!(*output.arena.kind(left), ExprKind::Int(2));
    assert!(matches!(
        output.arena.kind(right),
        ExprKind::Binary {
            op: BinaryOp::Pow,
            ..
        }
    ));
}

#[test]
fn test_parse_comparison_chain() {
    let interner = StringInterner::new();
    let output = parse_source("1 < x <= 3 not in y", &interner);

    let ExprKind::Comparison { operands, ops } = root_kind(&output) else {
        panic!("expected comparison");
    };
    assert_eq!(output.arena.get_expr_list(operands).len(), 4);
    assert_eq!(
        output.arena.get_cmp_ops(ops),
        &[BinaryOp::Lt, BinaryOp::LtEq, BinaryOp::NotIn]
    );
}

#[test]
fn test_parse_single_comparison_is_a_chain() {
    let interner = StringInterner::new();
    let output = parse_source("a is not b", &interner);

    let ExprKind::Comparison { ops, .. } = root_kind(&output) else {
        panic!("expected comparison");
    };
    assert_eq!(output.arena.get_cmp_ops(ops), &[BinaryOp::IsNot]);
}

#[test]
fn test_parse_logical_operators() {
    let interner = StringInterner::new();
    let output = parse_source("not a or b and c", &interner);

    let ExprKind::Binary {
        op: BinaryOp::Or,
        left,
        right,
    } = root_kind(&output)
    else {
        panic!("expected `or` at the root");
    };
    assert!(matches!(
        output.arena.kind(left),
        ExprKind::Unary {
            op: UnaryOp::Not,
            ..
        }
    ));
    assert!(matches!(
        output.arena.kind(right),
        ExprKind::Binary {
            op: BinaryOp::And,
            ..
        }
    ));
}

#[test]
fn test_parse_tuples() {
    let interner = StringInterner::new();

    let cases = [("()", 0), ("(1,)", 1), ("(1, 2)", 2), ("1, 2, 3", 3)];
    for (source, len) in cases {
        let output = parse_source(source, &interner);
        let ExprKind::Tuple(range) = root_kind(&output) else {
            panic!("expected tuple for {source}");
        };
        assert_eq!(range.len(), len, "{source}");
    }

    // Parentheses alone only group.
    assert_eq!(root_kind(&parse_source("(7)", &interner)), ExprKind::Int(7));
}

#[test]
fn test_parse_list_and_dict_displays() {
    let interner = StringInterner::new();

    let output = parse_source("[1, 2, 3,]", &interner);
    let ExprKind::List(range) = root_kind(&output) else {
        panic!("expected list");
    };
    assert_eq!(range.len(), 3);

    let output = parse_source("{'a': 1, 'b': 2}", &interner);
    let ExprKind::Dict(range) = root_kind(&output) else {
        panic!("expected dict");
    };
    let entries = output.arena.get_map_entries(range);
    assert_eq!(entries.len(), 2);
    assert_eq!(*output.arena.kind(entries[1].value), ExprKind::Int(2));

    assert!(matches!(
        root_kind(&parse_source("{}", &interner)),
        ExprKind::Dict(r) if r.is_empty()
    ));
    assert!(matches!(
        root_kind(&parse_source("{1, 2}", &interner)),
        ExprKind::Set(r) if r.len() == 2
    ));
}

#[test]
fn test_parse_comprehensions() {
    let interner = StringInterner::new();

    let output = parse_source("[x for x in xs if x]", &interner);
    let ExprKind::ListComprehension { generator } = root_kind(&output) else {
        panic!("expected list comprehension");
    };
    let ExprKind::Generator { cond, .. } = *output.arena.kind(generator) else {
        panic!("expected generator");
    };
    assert!(cond.is_valid());

    assert!(matches!(
        root_kind(&parse_source("{x for x in xs}", &interner)),
        ExprKind::SetComprehension { .. }
    ));
    assert!(matches!(
        root_kind(&parse_source("{k: v for k in xs}", &interner)),
        ExprKind::DictComprehension { cond, .. } if cond == ExprId::INVALID
    ));
    assert!(matches!(
        root_kind(&parse_source("(x for x in xs)", &interner)),
        ExprKind::Generator { .. }
    ));
}

#[test]
fn test_parse_postfix_forms() {
    let interner = StringInterner::new();

    assert!(matches!(
        root_kind(&parse_source("f(1, 2)", &interner)),
        ExprKind::Call { args, .. } if args.len() == 2
    ));
    assert!(matches!(
        root_kind(&parse_source("a.b", &interner)),
        ExprKind::Member { .. }
    ));
    assert!(matches!(
        root_kind(&parse_source("xs[0]", &interner)),
        ExprKind::Index { .. }
    ));

    let output = parse_source("xs[1:]", &interner);
    let ExprKind::Index { index, .. } = root_kind(&output) else {
        panic!("expected index");
    };
    let ExprKind::Slice { begin, end, stride } = *output.arena.kind(index) else {
        panic!("expected slice");
    };
    assert!(begin.is_valid());
    assert!(!end.is_valid());
    assert!(!stride.is_valid());
}

#[test]
fn test_parse_special_forms() {
    let interner = StringInterner::new();

    assert!(matches!(
        root_kind(&parse_source("cast(int, x)", &interner)),
        ExprKind::Cast { .. }
    ));
    assert!(matches!(
        root_kind(&parse_source("reveal_type(x)", &interner)),
        ExprKind::RevealType { .. }
    ));
    assert!(matches!(
        root_kind(&parse_source("super().f", &interner)),
        ExprKind::Super { .. }
    ));
    assert!(matches!(
        root_kind(&parse_source("`x`", &interner)),
        ExprKind::Backquote { .. }
    ));
    assert!(matches!(
        root_kind(&parse_source("a if c else b", &interner)),
        ExprKind::Conditional { .. }
    ));
}

#[test]
fn test_parse_lambda() {
    let interner = StringInterner::new();
    let output = parse_source("lambda x, y: x + y", &interner);

    let ExprKind::Lambda { params, body } = root_kind(&output) else {
        panic!("expected lambda");
    };
    let names: Vec<&str> = output
        .arena
        .get_params(params)
        .iter()
        .map(|&n| interner.lookup(n))
        .collect();
    assert_eq!(names, vec!["x", "y"]);
    assert!(matches!(
        output.arena.kind(body),
        ExprKind::Binary {
            op: BinaryOp::Add,
            ..
        }
    ));
}

#[test]
fn test_parse_spans_cover_source() {
    let interner = StringInterner::new();
    let source = "1 + [2, 3]";
    let output = parse_source(source, &interner);

    let span = output.arena.span(output.root);
    assert_eq!(span.slice(source), Some(source));
}
