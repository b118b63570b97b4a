//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over operator classes. Numeric operands are
//! promoted along `int < float < complex` before the operation; sequences
//! and strings support concatenation and repetition.

use std::cmp::Ordering;

use cev_ir::BinaryOp;

use crate::errors::{
    binary_type_mismatch, division_by_zero, integer_overflow, negative_shift_count,
    unknown_operator, EvalError, EvalResult,
};
use crate::value::{Complex, Value};

/// Largest result repetition may build. Counts string bytes and every
/// element of nested containers, not just the top-level length.
pub const MAX_REPEAT_LEN: usize = 1 << 24;

/// Both operands lifted to the wider of their numeric types.
enum Promoted {
    Int(i64, i64),
    Float(f64, f64),
    Complex(Complex, Complex),
}

#[allow(clippy::cast_precision_loss)]
fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Int(n) => Some(*n as f64),
        Value::Float(f) => Some(*f),
        _ => None,
    }
}

fn to_complex(value: &Value) -> Option<Complex> {
    match value {
        Value::Complex(c) => Some(*c),
        other => to_float(other).map(Complex::from_real),
    }
}

fn promote(left: &Value, right: &Value) -> Option<Promoted> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(Promoted::Int(*a, *b)),
        (Value::Complex(_), _) | (_, Value::Complex(_)) => {
            Some(Promoted::Complex(to_complex(left)?, to_complex(right)?))
        }
        _ => Some(Promoted::Float(to_float(left)?, to_float(right)?)),
    }
}

fn is_numeric(value: &Value) -> bool {
    matches!(value, Value::Int(_) | Value::Float(_) | Value::Complex(_))
}

/// Integer division rounding toward negative infinity. `None` on
/// overflow; the caller rules out a zero divisor.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}

/// Remainder with the sign of the divisor. The caller rules out a zero
/// divisor.
fn floor_mod(a: i64, b: i64) -> i64 {
    let r = a.wrapping_rem(b);
    if r != 0 && ((r < 0) != (b < 0)) {
        r + b
    } else {
        r
    }
}

/// Evaluate a binary operation using direct pattern matching.
///
/// Operands are taken by value so concatenation can reuse their buffers.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
            eval_arithmetic(left, right, op)
        }
        BinaryOp::Pow => eval_power(&left, &right),
        BinaryOp::FloorDiv => eval_floor_div(&left, &right),
        BinaryOp::Mod
        | BinaryOp::BitAnd
        | BinaryOp::BitOr
        | BinaryOp::BitXor
        | BinaryOp::Shl
        | BinaryOp::Shr => eval_int_only(&left, &right, op),
        BinaryOp::Lt | BinaryOp::Gt | BinaryOp::LtEq | BinaryOp::GtEq => {
            eval_relational(&left, &right, op)
        }
        BinaryOp::Eq | BinaryOp::NotEq => eval_equality(&left, &right, op),
        BinaryOp::In | BinaryOp::NotIn => eval_membership(&left, &right, op),
        BinaryOp::MatMul | BinaryOp::Is | BinaryOp::IsNot | BinaryOp::And | BinaryOp::Or => {
            Err(unknown_operator(op.as_symbol()))
        }
    }
}

/// Evaluate a binary operation given its source symbol.
///
/// Fails with `UnknownOperator` if the symbol names no binary operator.
pub fn evaluate_binary_symbol(symbol: &str, left: Value, right: Value) -> EvalResult {
    let op = BinaryOp::from_symbol(symbol).ok_or_else(|| unknown_operator(symbol))?;
    evaluate_binary(left, right, op)
}

/// `+ - * /`: sequence concatenation and repetition, then numeric promotion.
fn eval_arithmetic(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (left, right, op) {
        (Value::List(mut a), Value::List(b), BinaryOp::Add) => {
            a.extend(b);
            Ok(Value::List(a))
        }
        (Value::Tuple(mut a), Value::Tuple(b), BinaryOp::Add) => {
            a.extend(b);
            Ok(Value::Tuple(a))
        }
        (Value::Str(mut a), Value::Str(b), BinaryOp::Add) => {
            a.push_str(&b);
            Ok(Value::Str(a))
        }
        (Value::List(items), Value::Int(n), BinaryOp::Mul)
        | (Value::Int(n), Value::List(items), BinaryOp::Mul) => {
            repeat_items(&items, n).map(Value::List)
        }
        (Value::Tuple(items), Value::Int(n), BinaryOp::Mul)
        | (Value::Int(n), Value::Tuple(items), BinaryOp::Mul) => {
            repeat_items(&items, n).map(Value::Tuple)
        }
        (Value::Str(s), Value::Int(n), BinaryOp::Mul)
        | (Value::Int(n), Value::Str(s), BinaryOp::Mul) => {
            let count = repeat_count(s.len(), n)?;
            Ok(Value::Str(s.repeat(count)))
        }
        (left, right, op) => match promote(&left, &right) {
            Some(Promoted::Int(a, b)) => eval_int_arithmetic(a, b, op),
            Some(Promoted::Float(a, b)) => eval_float_arithmetic(a, b, op),
            Some(Promoted::Complex(a, b)) => eval_complex_arithmetic(a, b, op),
            None => Err(binary_type_mismatch(op.as_symbol(), &left, &right)),
        },
    }
}

/// Size of a value for the repetition cap: one per value, plus string and
/// bytes lengths, summed over nested containers. Stops counting once past
/// [`MAX_REPEAT_LEN`].
fn footprint(value: &Value) -> usize {
    let mut total = 0usize;
    let mut pending = vec![value];
    while let Some(value) = pending.pop() {
        if total > MAX_REPEAT_LEN {
            break;
        }
        total = total.saturating_add(1);
        match value {
            Value::Str(s) => total = total.saturating_add(s.len()),
            Value::Bytes(b) => total = total.saturating_add(b.len()),
            Value::List(items) | Value::Tuple(items) | Value::Set(items) => {
                pending.extend(items);
            }
            Value::Dict(pairs) => {
                for (key, value) in pairs {
                    pending.push(key);
                    pending.push(value);
                }
            }
            Value::Int(_) | Value::Float(_) | Value::Complex(_) => {}
        }
    }
    total
}

/// Repetition count for an operand of size `size`; non-positive counts
/// give an empty result.
fn repeat_count(size: usize, n: i64) -> Result<usize, EvalError> {
    if n <= 0 || size == 0 {
        return Ok(0);
    }
    let count = usize::try_from(n).map_err(|_| integer_overflow("repetition"))?;
    match size.checked_mul(count) {
        Some(total) if total <= MAX_REPEAT_LEN => Ok(count),
        _ => Err(integer_overflow("repetition")),
    }
}

fn repeat_items(items: &[Value], n: i64) -> Result<Vec<Value>, EvalError> {
    let size = items
        .iter()
        .fold(0usize, |total, item| total.saturating_add(footprint(item)));
    let count = repeat_count(size, n)?;
    let mut out = Vec::with_capacity(items.len() * count);
    for _ in 0..count {
        out.extend_from_slice(items);
    }
    Ok(out)
}

/// `+ - * /` on two ints, checked for overflow.
///
/// `/` keeps the int type and floors like `//`, so it is not a true
/// quotient: `1 / 2` is `0` and `-1 / 2` is `-1`. A condition such as
/// `x / 2` with `x = 1` therefore does not hold.
fn eval_int_arithmetic(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            floor_div(a, b)
        }
        _ => return Err(unknown_operator(op.as_symbol())),
    };
    result
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(op.as_symbol()))
}

fn eval_float_arithmetic(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                return Err(division_by_zero());
            }
            a / b
        }
        _ => return Err(unknown_operator(op.as_symbol())),
    };
    Ok(Value::Float(result))
}

fn eval_complex_arithmetic(a: Complex, b: Complex, op: BinaryOp) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => a.checked_div(b).ok_or_else(division_by_zero)?,
        _ => return Err(unknown_operator(op.as_symbol())),
    };
    Ok(Value::Complex(result))
}

/// `**` on any numeric pair always yields a complex result.
fn eval_power(left: &Value, right: &Value) -> EvalResult {
    match (to_complex(left), to_complex(right)) {
        (Some(base), Some(exp)) => base
            .checked_pow(exp)
            .map(Value::Complex)
            .ok_or_else(division_by_zero),
        _ => Err(binary_type_mismatch("**", left, right)),
    }
}

/// `//`: `int // int` is an int, `float // (float | int)` is a float.
fn eval_floor_div(left: &Value, right: &Value) -> EvalResult {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => {
            if *b == 0 {
                return Err(division_by_zero());
            }
            floor_div(*a, *b)
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("//"))
        }
        (Value::Float(a), Value::Float(_) | Value::Int(_)) => {
            let b = to_float(right).unwrap_or(f64::NAN);
            if b == 0.0 {
                return Err(division_by_zero());
            }
            Ok(Value::Float((a / b).floor()))
        }
        _ => Err(binary_type_mismatch("//", left, right)),
    }
}

/// `% & | ^ << >>` accept only integers.
fn eval_int_only(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let (Value::Int(a), Value::Int(b)) = (left, right) else {
        return Err(binary_type_mismatch(op.as_symbol(), left, right));
    };
    let (a, b) = (*a, *b);
    let result = match op {
        BinaryOp::Mod => {
            if b == 0 {
                return Err(division_by_zero());
            }
            floor_mod(a, b)
        }
        BinaryOp::BitAnd => a & b,
        BinaryOp::BitOr => a | b,
        BinaryOp::BitXor => a ^ b,
        BinaryOp::Shl => shift_left(a, b)?,
        BinaryOp::Shr => shift_right(a, b)?,
        _ => return Err(unknown_operator(op.as_symbol())),
    };
    Ok(Value::Int(result))
}

fn shift_left(a: i64, b: i64) -> Result<i64, EvalError> {
    if b < 0 {
        return Err(negative_shift_count());
    }
    if a == 0 {
        return Ok(0);
    }
    let shift = u32::try_from(b)
        .ok()
        .filter(|&s| s < i64::BITS)
        .ok_or_else(|| integer_overflow("<<"))?;
    let shifted = a << shift;
    if shifted >> shift == a {
        Ok(shifted)
    } else {
        Err(integer_overflow("<<"))
    }
}

fn shift_right(a: i64, b: i64) -> Result<i64, EvalError> {
    if b < 0 {
        return Err(negative_shift_count());
    }
    match u32::try_from(b) {
        Ok(shift) if shift < i64::BITS => Ok(a >> shift),
        _ => Ok(if a < 0 { -1 } else { 0 }),
    }
}

/// Exact ordering of an int against a float. `None` when `f` is NaN.
///
/// The int is never rounded to a float, so ints above 2^53 still compare
/// correctly against their float neighbours.
#[allow(clippy::cast_possible_truncation)]
fn compare_int_float(n: i64, f: f64) -> Option<Ordering> {
    // 2^63: the first float past `i64::MAX`. `-2^63` is `i64::MIN` exactly.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return None;
    }
    if f >= LIMIT {
        return Some(Ordering::Less);
    }
    if f < -LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = f.floor();
    // In range and integral, so the cast is exact.
    match n.cmp(&(whole as i64)) {
        Ordering::Equal if f > whole => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

/// `< > <= >=` on ints and floats, compared numerically.
fn eval_relational(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Int(n), Value::Float(f)) => compare_int_float(*n, *f),
        (Value::Float(f), Value::Int(n)) => compare_int_float(*n, *f).map(Ordering::reverse),
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
        _ => return Err(binary_type_mismatch(op.as_symbol(), left, right)),
    };
    // Unordered (NaN) compares false under every relational operator.
    let holds = ordering.is_some_and(|ord| match op {
        BinaryOp::Lt => ord == Ordering::Less,
        BinaryOp::Gt => ord == Ordering::Greater,
        BinaryOp::LtEq => ord != Ordering::Greater,
        BinaryOp::GtEq => ord != Ordering::Less,
        _ => false,
    });
    Ok(Value::bool(holds))
}

/// `== !=` on numbers and strings. A string never equals a number.
fn eval_equality(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let equal = match (left, right) {
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Str(_), r) if is_numeric(r) => false,
        (l, Value::Str(_)) if is_numeric(l) => false,
        (Value::Int(n), Value::Float(f)) | (Value::Float(f), Value::Int(n)) => {
            compare_int_float(*n, *f) == Some(Ordering::Equal)
        }
        (Value::Int(n), Value::Complex(c)) | (Value::Complex(c), Value::Int(n)) => {
            c.im == 0.0 && compare_int_float(*n, c.re) == Some(Ordering::Equal)
        }
        (l, r) => match promote(l, r) {
            Some(Promoted::Int(a, b)) => a == b,
            Some(Promoted::Float(a, b)) => a == b,
            Some(Promoted::Complex(a, b)) => a == b,
            None => return Err(binary_type_mismatch(op.as_symbol(), left, right)),
        },
    };
    Ok(Value::bool(if op == BinaryOp::Eq { equal } else { !equal }))
}

/// `in` / `not in`: substring test on two strings.
fn eval_membership(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    let (Value::Str(needle), Value::Str(haystack)) = (left, right) else {
        return Err(binary_type_mismatch(op.as_symbol(), left, right));
    };
    let found = haystack.contains(needle.as_str());
    Ok(Value::bool(if op == BinaryOp::In { found } else { !found }))
}
