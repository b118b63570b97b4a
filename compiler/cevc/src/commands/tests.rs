#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::*;
use cev_eval::{EvalErrorKind, Value};
use cev_parse::ParseErrorKind;

fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn options(items: &[&str]) -> EvalOptions {
    parse_eval_options(&args(items)).unwrap()
}

#[test]
fn test_parse_options() {
    let parsed = options(&[
        "--var",
        "x=1",
        "--var=name='a=b'",
        "--declare",
        "PY2",
        "--max-depth=64",
    ]);
    assert_eq!(
        parsed,
        EvalOptions {
            vars: vec![
                ("x".to_string(), "1".to_string()),
                ("name".to_string(), "'a=b'".to_string()),
            ],
            declared: vec!["PY2".to_string()],
            max_depth: Some(64),
        }
    );
    assert_eq!(options(&[]), EvalOptions::default());
}

#[test]
fn test_parse_options_errors() {
    assert!(parse_eval_options(&args(&["--var"])).is_err());
    assert!(parse_eval_options(&args(&["--var", "=1"])).is_err());
    assert!(parse_eval_options(&args(&["--var", "x"])).is_err());
    assert_eq!(
        parse_eval_options(&args(&["--var", " =1"])),
        Err("invalid binding ' =1', expected NAME=LITERAL".to_string())
    );
    assert!(parse_eval_options(&args(&["--declare", " "])).is_err());
    assert!(parse_eval_options(&args(&["--declare="])).is_err());
    assert!(parse_eval_options(&args(&["--max-depth", "-1"])).is_err());
    assert_eq!(
        parse_eval_options(&args(&["--fast"])),
        Err("unknown option '--fast'".to_string())
    );
}

#[test]
fn test_eval_with_bindings() {
    let opts = options(&["--var", "x=2", "--var", "xs=[1, 2, 3]"]);
    assert_eq!(eval_expression("x * 10", &opts).unwrap(), Value::Int(20));
    assert_eq!(eval_expression("xs[-x]", &opts).unwrap(), Value::Int(2));
    assert_eq!(
        eval_expression("(1, 'a')", &EvalOptions::default())
            .unwrap()
            .to_string(),
        "(1, 'a')"
    );
}

#[test]
fn test_binding_literals_are_reduced() {
    let opts = options(&["--var", "x=-(1 + 2)"]);
    assert_eq!(eval_expression("x", &opts).unwrap(), Value::Int(-3));

    let opts = options(&["--var", "x=y"]);
    let err = eval_expression("x", &opts).unwrap_err();
    assert!(matches!(
        &err,
        CommandError::Binding { name, source }
            if name == "x" && matches!(**source, CommandError::Eval(_))
    ));
    assert_eq!(err.span(), None);
}

#[test]
fn test_check() {
    let opts = options(&["--var", "x=1"]);
    assert!(check_expression("x < 3", &opts).unwrap());
    assert!(!check_expression("x - 1", &opts).unwrap());

    let err = check_expression("'s'", &opts).unwrap_err();
    let CommandError::Eval(err) = err else {
        panic!("expected an evaluation error");
    };
    assert!(matches!(
        err.kind,
        EvalErrorKind::TypeMismatch {
            context: "condition",
            ..
        }
    ));
}

#[test]
fn test_declared_name_fails() {
    let opts = options(&["--declare", "PY2"]);
    let err = check_expression("PY2", &opts).unwrap_err();
    assert_eq!(
        err.to_string(),
        "evaluation error: name `PY2` has no constant value at 0..3"
    );
}

#[test]
fn test_binding_names_are_trimmed() {
    let parsed = options(&["--var", " x =1", "--declare", " y "]);
    assert_eq!(parsed.vars, vec![("x".to_string(), "1".to_string())]);
    assert_eq!(parsed.declared, vec!["y".to_string()]);
    assert_eq!(eval_expression("x + 1", &parsed).unwrap(), Value::Int(2));
}

#[test]
fn test_name_bound_twice_is_rejected() {
    for flags in [
        &["--var", "x=1", "--declare", "x"][..],
        &["--declare", "x", "--var", "x=1"][..],
        &["--var", "x=1", "--var", "x=2"][..],
        &["--declare", "x", "--declare", "x"][..],
    ] {
        let err = eval_expression("x", &options(flags)).unwrap_err();
        assert!(
            matches!(&err, CommandError::DuplicateBinding { name } if name == "x"),
            "{flags:?} gave {err:?}"
        );
        assert_eq!(err.to_string(), "`x` is bound more than once");
        assert_eq!(err.span(), None);
    }

    let opts = options(&["--var", "x=1", "--declare", "y"]);
    assert_eq!(eval_expression("x", &opts).unwrap(), Value::Int(1));
}

#[test]
fn test_max_depth_option() {
    let opts = options(&["--max-depth", "3"]);
    let err = eval_expression("[[[[1]]]]", &opts).unwrap_err();
    let CommandError::Eval(err) = err else {
        panic!("expected an evaluation error");
    };
    assert_eq!(err.kind, EvalErrorKind::DepthExceeded { limit: 3 });
}

#[test]
fn test_max_depth_raises_nesting_limit() {
    let source = format!("{}1", "-".repeat(5000));

    let err = eval_expression(&source, &EvalOptions::default()).unwrap_err();
    let CommandError::Parse(parse) = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(parse.kind, ParseErrorKind::NestingTooDeep { limit: 4096 });

    let opts = options(&["--max-depth", "6000"]);
    assert_eq!(eval_expression(&source, &opts).unwrap(), Value::Int(1));
}

#[test]
fn test_parse_errors_surface() {
    let err = eval_expression("1 +", &EvalOptions::default()).unwrap_err();
    let CommandError::Parse(parse) = &err else {
        panic!("expected a parse error");
    };
    assert!(matches!(parse.kind, ParseErrorKind::UnexpectedToken { .. }));
}

#[test]
fn test_render_error_underlines_span() {
    let source = "1 + f(2)";
    let err = eval_expression(source, &EvalOptions::default()).unwrap_err();
    assert_eq!(
        render_error(source, &err),
        "error: evaluation error: cannot evaluate call expression at 4..8\n  1 + f(2)\n      ^^^^"
    );
}

#[test]
fn test_render_error_without_span() {
    let opts = options(&["--var", "x=y"]);
    let err = eval_expression("x", &opts).unwrap_err();
    assert_eq!(
        render_error("x", &err),
        "error: in binding for `x`: evaluation error: name `y` has no constant value at 0..1"
    );
}
