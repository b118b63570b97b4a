//! Tree-walk tests: literals, names, operators, chains, containers,
//! rejected node kinds and limits.

use cev_ir::{BinaryOp, ExprArena, ExprId, ExprKind, NodeKind, Span, StringInterner, UnaryOp};
use cev_parse::parse_expr;
use pretty_assertions::assert_eq;
use smallvec::smallvec;

use super::{eval_err, eval_ok, eval_source};
use crate::{Complex, EvalConfig, EvalErrorKind, Evaluator, Value, VarContext};

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

fn unsupported(node: NodeKind) -> EvalErrorKind {
    EvalErrorKind::UnsupportedNode { node }
}

fn missing(name: &str) -> EvalErrorKind {
    EvalErrorKind::MissingVariable {
        name: name.to_owned(),
    }
}

/// `depth` nested negations of `1`.
fn negation_chain(arena: &mut ExprArena, depth: usize) -> ExprId {
    let mut id = arena.int(1);
    for _ in 0..depth {
        id = arena.unary(UnaryOp::Neg, id);
    }
    id
}

// Literals and names

#[test]
fn test_literals() {
    assert_eq!(eval_ok("42"), Value::Int(42));
    assert_eq!(eval_ok("0x10"), Value::Int(16));
    assert_eq!(eval_ok("2.5"), Value::Float(2.5));
    assert_eq!(eval_ok("3j"), Value::Complex(Complex::new(0.0, 3.0)));
    assert_eq!(eval_ok("'ab' \"cd\""), Value::str("abcd"));
    assert_eq!(eval_ok("b'a\\x00'"), Value::Bytes(vec![b'a', 0]));
}

#[test]
fn test_bound_name() {
    assert_eq!(
        eval_source("x", &[("x", Value::Int(5))]).unwrap(),
        Value::Int(5)
    );
    assert_eq!(
        eval_source("x * 2", &[("x", Value::str("ab"))]).unwrap(),
        Value::str("abab")
    );
}

#[test]
fn test_unbound_name() {
    let err = eval_source("y", &[]).unwrap_err();
    assert_eq!(err.kind, missing("y"));
    assert_eq!(err.span, Some(Span::new(0, 1)));
    assert_eq!(err.to_string(), "name `y` has no constant value at 0..1");
}

#[test]
fn test_declared_name_without_value() {
    let interner = StringInterner::new();
    let output = parse_expr("y + 1", &interner).unwrap();
    let mut ctx = VarContext::new();
    ctx.declare(interner.intern("y"));

    let err = Evaluator::new(&output.arena, &ctx, &interner)
        .eval(output.root)
        .unwrap_err();
    assert_eq!(err.kind, missing("y"));
}

// Operators

#[test]
fn test_unary_operators() {
    assert_eq!(eval_ok("-2.5"), Value::Float(-2.5));
    assert_eq!(eval_ok("~5"), Value::Int(-6));
    assert_eq!(eval_ok("--3"), Value::Int(3));
    assert_eq!(
        eval_err("-'s'"),
        EvalErrorKind::TypeMismatch {
            context: "unary -",
            operands: smallvec!["str"],
        }
    );
    assert_eq!(
        eval_err("+1"),
        EvalErrorKind::UnknownOperator {
            symbol: "+".to_owned()
        }
    );
    assert_eq!(
        eval_err("not 1"),
        EvalErrorKind::UnknownOperator {
            symbol: "not".to_owned()
        }
    );
}

#[test]
fn test_power_binds_before_negation() {
    // `-2 ** 2` is `-(2 ** 2)`, and the power is complex.
    assert_eq!(
        eval_err("-2 ** 2"),
        EvalErrorKind::TypeMismatch {
            context: "unary -",
            operands: smallvec!["complex"],
        }
    );
    assert_eq!(
        eval_ok("2 ** -1"),
        Value::Complex(Complex::from_real(0.5))
    );
}

#[test]
fn test_negation_does_not_touch_context() {
    let interner = StringInterner::new();
    let output = parse_expr("-x", &interner).unwrap();
    let x = interner.intern("x");
    let ctx: VarContext = [(x, Value::Int(3))].into_iter().collect();

    let mut evaluator = Evaluator::new(&output.arena, &ctx, &interner);
    assert_eq!(evaluator.eval(output.root).unwrap(), Value::Int(-3));
    assert_eq!(evaluator.eval(output.root).unwrap(), Value::Int(-3));
    assert_eq!(ctx.lookup(x), Some(&Value::Int(3)));
}

#[test]
fn test_binary_arithmetic() {
    assert_eq!(eval_ok("1 + 2 * 3"), Value::Int(7));
    assert_eq!(eval_ok("(1 + 2) * 3"), Value::Int(9));
    assert_eq!(eval_ok("7 // 2 + 7 % 2"), Value::Int(4));
    assert_eq!(eval_ok("1 + 0.5"), Value::Float(1.5));
    assert_eq!(eval_ok("1 << 4 | 1"), Value::Int(17));
    assert_eq!(eval_ok("[1] + [2]"), Value::List(ints(&[1, 2])));
    assert_eq!(eval_err("1 / 0"), EvalErrorKind::DivisionByZero);
}

#[test]
fn test_nested_repetition_is_bounded() {
    let overflow = EvalErrorKind::IntegerOverflow {
        operation: "repetition",
    };
    assert_eq!(eval_err("[[0] * 4096] * 4096"), overflow);
    assert_eq!(eval_err("['a' * 16777216] * 4"), overflow);
    assert_eq!(eval_err("([(0,) * 4096],) * 4096"), overflow);
    assert_eq!(
        eval_ok("[[0] * 2] * 2"),
        Value::List(vec![Value::List(ints(&[0, 0])), Value::List(ints(&[0, 0]))])
    );
}

#[test]
fn test_logical_operators_are_rejected_after_evaluating_both_sides() {
    assert_eq!(
        eval_err("1 and 2"),
        EvalErrorKind::UnknownOperator {
            symbol: "and".to_owned()
        }
    );
    // No short-circuit: the unbound right operand fails first.
    assert_eq!(eval_err("1 or y"), missing("y"));
}

// Comparison chains

#[test]
fn test_comparison_chain() {
    assert_eq!(eval_ok("1 < 2"), Value::Int(1));
    assert_eq!(eval_ok("1 < 2 < 3"), Value::Int(1));
    assert_eq!(eval_ok("3 < 2 < 1"), Value::Int(0));
    assert_eq!(eval_ok("1 < 0 < 5"), Value::Int(0));
    assert_eq!(eval_ok("1 <= 1.0 == 1 != 2"), Value::Int(1));
    assert_eq!(eval_ok("'a' in 'cat' == 1"), Value::Int(0));
}

#[test]
fn test_comparison_chain_evaluates_every_pair() {
    // The first pair is false, but the second still runs and fails.
    let err = eval_source("2 < 1 < 'a'", &[]).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            context: "<",
            operands: smallvec!["int", "str"],
        }
    );
    assert_eq!(err.span, Some(Span::new(0, 11)));
    assert_eq!(eval_err("1 < y < 3"), missing("y"));
}

#[test]
fn test_comparison_with_bindings() {
    let bindings = [("x", Value::Int(2)), ("limit", Value::Float(2.5))];
    assert_eq!(
        eval_source("0 <= x < limit", &bindings).unwrap(),
        Value::Int(1)
    );
    assert_eq!(
        eval_source("x == 'x'", &bindings).unwrap(),
        Value::Int(0)
    );
}

#[test]
fn test_large_int_against_float() {
    assert_eq!(eval_ok("9007199254740993 == 9007199254740992.0"), Value::Int(0));
    assert_eq!(eval_ok("9007199254740993 > 9007199254740992.0"), Value::Int(1));
    assert_eq!(
        eval_ok("9007199254740992.0 < 9007199254740993 <= 9007199254740994.0"),
        Value::Int(1)
    );
}

// Containers

#[test]
fn test_container_displays() {
    assert_eq!(eval_ok("[1, 2]"), Value::List(ints(&[1, 2])));
    assert_eq!(
        eval_ok("(1, 'a')"),
        Value::Tuple(vec![Value::Int(1), Value::str("a")])
    );
    assert_eq!(eval_ok("()"), Value::Tuple(vec![]));
    assert_eq!(eval_ok("1, 2"), Value::Tuple(ints(&[1, 2])));
    assert_eq!(eval_ok("{1, 1}"), Value::Set(ints(&[1, 1])));
    assert_eq!(
        eval_ok("{'a': 1, 'a': 2}"),
        Value::Dict(vec![
            (Value::str("a"), Value::Int(1)),
            (Value::str("a"), Value::Int(2)),
        ])
    );
    assert_eq!(eval_ok("{}"), Value::Dict(vec![]));
}

#[test]
fn test_index() {
    assert_eq!(eval_ok("[10, 20, 30][1]"), Value::Int(20));
    assert_eq!(eval_ok("(1, 2, 3)[-1]"), Value::Int(3));
    assert_eq!(eval_ok("{'a': 1, 'b': 2}[0]"), Value::Int(1));
    assert_eq!(eval_ok("[1, 2][1.0]"), Value::Int(2));
    assert_eq!(eval_ok("[[1, 2], [3]][0][1]"), Value::Int(2));
}

#[test]
fn test_index_errors() {
    assert_eq!(
        eval_err("[1, 2][2]"),
        EvalErrorKind::IndexOutOfBounds { index: 2, len: 2 }
    );
    assert_eq!(
        eval_err("[1, 2][-3]"),
        EvalErrorKind::IndexOutOfBounds { index: -3, len: 2 }
    );
    assert_eq!(
        eval_err("[1, 2]['a']"),
        EvalErrorKind::TypeMismatch {
            context: "index",
            operands: smallvec!["list", "str"],
        }
    );
    assert_eq!(
        eval_err("[1, 2][0.5]"),
        EvalErrorKind::TypeMismatch {
            context: "index",
            operands: smallvec!["list", "float"],
        }
    );
    assert_eq!(
        eval_err("'abc'[0]"),
        EvalErrorKind::TypeMismatch {
            context: "index",
            operands: smallvec!["str", "int"],
        }
    );
}

// Lambdas and rejected forms

#[test]
fn test_lambda_evaluates_body_in_ambient_context() {
    assert_eq!(
        eval_source("lambda: x + 1", &[("x", Value::Int(1))]).unwrap(),
        Value::Int(2)
    );
    // Parameters are not bound.
    assert_eq!(eval_err("lambda x: x"), missing("x"));
}

#[test]
fn test_unsupported_nodes() {
    let cases = [
        ("f(1)", NodeKind::Call),
        ("(1).real", NodeKind::Member),
        ("super().x", NodeKind::Super),
        ("cast(int, 1)", NodeKind::Cast),
        ("reveal_type(1)", NodeKind::RevealType),
        ("[1][1:]", NodeKind::Slice),
        ("[x for x in y]", NodeKind::ListComprehension),
        ("{x for x in y}", NodeKind::SetComprehension),
        ("{x: 1 for x in y}", NodeKind::DictComprehension),
        ("(x for x in y)", NodeKind::Generator),
        ("1 if 1 else 2", NodeKind::Conditional),
        ("`1`", NodeKind::Backquote),
    ];
    for (source, node) in cases {
        assert_eq!(eval_err(source), unsupported(node), "source: {source}");
    }
}

#[test]
fn test_unsupported_tree_only_nodes() {
    let interner = StringInterner::new();
    let alias = interner.intern("Alias");
    let ctx = VarContext::new();

    for (kind, node) in [
        (ExprKind::TypeAlias(alias), NodeKind::TypeAlias),
        (ExprKind::Promote(alias), NodeKind::Promote),
        (ExprKind::Temp, NodeKind::Temp),
    ] {
        let mut arena = ExprArena::new();
        let inner = arena.alloc(kind, Span::new(4, 9));
        let app = arena.alloc(ExprKind::TypeApplication { expr: inner }, Span::new(0, 10));
        let root = arena.binary(BinaryOp::Add, inner, app);

        let err = Evaluator::new(&arena, &ctx, &interner)
            .eval(root)
            .unwrap_err();
        assert_eq!(err.kind, unsupported(node));
        assert_eq!(err.span, Some(Span::new(4, 9)));

        let err = Evaluator::new(&arena, &ctx, &interner)
            .eval(app)
            .unwrap_err();
        assert_eq!(err.kind, unsupported(NodeKind::TypeApplication));
    }
}

#[test]
fn test_error_span_is_the_innermost_node() {
    let err = eval_source("1 + f(2)", &[]).unwrap_err();
    assert_eq!(err.kind, unsupported(NodeKind::Call));
    assert_eq!(err.span, Some(Span::new(4, 8)));
}

// Limits

#[test]
fn test_depth_limit() {
    let interner = StringInterner::new();
    let ctx = VarContext::new();
    let mut arena = ExprArena::new();
    let root = negation_chain(&mut arena, 20);

    let err = Evaluator::builder(&arena, &ctx, &interner)
        .max_depth(10)
        .build()
        .eval(root)
        .unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DepthExceeded { limit: 10 });

    let value = Evaluator::builder(&arena, &ctx, &interner)
        .config(EvalConfig { max_depth: 21 })
        .build()
        .eval(root)
        .unwrap();
    assert_eq!(value, Value::Int(1));
}

#[test]
fn test_default_depth_limit() {
    let interner = StringInterner::new();
    let ctx = VarContext::new();
    let mut arena = ExprArena::new();
    let root = negation_chain(&mut arena, 600);

    let mut evaluator = Evaluator::new(&arena, &ctx, &interner);
    assert_eq!(evaluator.config().max_depth, crate::DEFAULT_MAX_DEPTH);
    assert_eq!(
        evaluator.eval(root).unwrap_err().kind,
        EvalErrorKind::DepthExceeded {
            limit: crate::DEFAULT_MAX_DEPTH
        }
    );
}

#[test]
fn test_deep_tree_with_raised_limit() {
    let interner = StringInterner::new();
    let ctx = VarContext::new();
    let mut arena = ExprArena::new();
    let root = negation_chain(&mut arena, 10_000);

    let value = Evaluator::builder(&arena, &ctx, &interner)
        .max_depth(20_000)
        .build()
        .eval(root)
        .unwrap();
    assert_eq!(value, Value::Int(1));
}

#[test]
fn test_depth_resets_between_evaluations() {
    let interner = StringInterner::new();
    let ctx = VarContext::new();
    let mut arena = ExprArena::new();
    let too_deep = negation_chain(&mut arena, 10);
    let shallow = negation_chain(&mut arena, 5);

    let mut evaluator = Evaluator::builder(&arena, &ctx, &interner)
        .max_depth(6)
        .build();
    assert_eq!(
        evaluator.eval(too_deep).unwrap_err().kind,
        EvalErrorKind::DepthExceeded { limit: 6 }
    );
    assert_eq!(evaluator.eval(shallow).unwrap(), Value::Int(-1));
}

#[test]
fn test_dangling_expr_id() {
    let interner = StringInterner::new();
    let ctx = VarContext::new();
    let arena = ExprArena::new();

    let err = Evaluator::new(&arena, &ctx, &interner)
        .eval(ExprId::new(99))
        .unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DanglingExpr { id: 99 });
    assert_eq!(err.span, None);
}
