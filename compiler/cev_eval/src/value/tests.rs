use super::*;
use pretty_assertions::assert_eq;

#[test]
fn type_names() {
    assert_eq!(Value::Int(1).type_name(), "int");
    assert_eq!(Value::Complex(Complex::ONE).type_name(), "complex");
    assert_eq!(Value::Dict(vec![]).type_name(), "dict");
    assert_eq!(Value::Bytes(vec![]).type_name(), "bytes");
}

#[test]
fn display_scalars() {
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Float(2.0).to_string(), "2.0");
    assert_eq!(Value::Float(-2.5).to_string(), "-2.5");
    assert_eq!(Value::Float(0.1).to_string(), "0.1");
    assert_eq!(Value::Float(1e20).to_string(), "1e+20");
    assert_eq!(Value::Float(1.5e-7).to_string(), "1.5e-07");
    assert_eq!(Value::Float(f64::INFINITY).to_string(), "inf");
    assert_eq!(Value::Complex(Complex::new(1.0, 2.0)).to_string(), "(1+2j)");
}

#[test]
fn display_strings() {
    assert_eq!(Value::str("ab").to_string(), "'ab'");
    assert_eq!(Value::str("it's").to_string(), "\"it's\"");
    assert_eq!(Value::str("a\nb\\").to_string(), "'a\\nb\\\\'");
    assert_eq!(Value::Bytes(b"a\x00'".to_vec()).to_string(), "b\"a\\x00'\"");
}

#[test]
fn display_containers() {
    let pair = vec![Value::Int(1), Value::str("a")];
    assert_eq!(Value::List(pair.clone()).to_string(), "[1, 'a']");
    assert_eq!(Value::Tuple(pair).to_string(), "(1, 'a')");
    assert_eq!(Value::Tuple(vec![Value::Int(1)]).to_string(), "(1,)");
    assert_eq!(Value::Tuple(vec![]).to_string(), "()");
    assert_eq!(Value::Set(vec![]).to_string(), "set()");
    assert_eq!(
        Value::Dict(vec![(Value::str("k"), Value::Float(2.5))]).to_string(),
        "{'k': 2.5}"
    );
}

#[test]
fn bool_is_an_int() {
    assert_eq!(Value::bool(true), Value::Int(1));
    assert_eq!(Value::bool(false).as_int(), Some(0));
    assert_eq!(Value::str("x").as_int(), None);
}
