//! Expression helpers that work on already-evaluated operands.

use crate::errors::{index_out_of_bounds, type_mismatch, EvalResult};
use crate::Value;

/// Convert a signed position to an offset, counting negative positions
/// from the end.
fn resolve_index(i: i64, len: usize) -> Option<usize> {
    if i >= 0 {
        let idx = usize::try_from(i).ok()?;
        (idx < len).then_some(idx)
    } else {
        let back = usize::try_from(i.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}

/// Evaluate index access.
///
/// Lists, tuples and dicts are all indexed by position; a dict yields the
/// value of the pair at that position. Positions may be ints or integral
/// floats.
pub fn eval_index(base: Value, index: Value) -> EvalResult {
    if !matches!(base, Value::List(_) | Value::Tuple(_) | Value::Dict(_)) {
        return Err(type_mismatch("index", &[&base, &index]));
    }

    let position = match index {
        Value::Int(i) => i,
        // Integral, so the saturating cast only clamps out-of-range values.
        #[allow(clippy::cast_possible_truncation)]
        Value::Float(f) if f.is_finite() && f.fract() == 0.0 => f as i64,
        _ => return Err(type_mismatch("index", &[&base, &index])),
    };

    let len = match &base {
        Value::List(items) | Value::Tuple(items) => items.len(),
        Value::Dict(pairs) => pairs.len(),
        _ => 0,
    };
    let offset = resolve_index(position, len).ok_or_else(|| index_out_of_bounds(position, len))?;

    let element = match base {
        Value::List(items) | Value::Tuple(items) => items.into_iter().nth(offset),
        Value::Dict(pairs) => pairs.into_iter().nth(offset).map(|(_, value)| value),
        _ => None,
    };
    element.ok_or_else(|| index_out_of_bounds(position, len))
}
