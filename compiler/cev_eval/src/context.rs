//! Variable context: the constant values free names are bound to.

use rustc_hash::FxHashMap;

use cev_ir::Name;

use crate::Value;

/// Bindings from names to literal values.
///
/// A name may be declared without a value (a variable known to exist but
/// not constant); looking it up behaves like an unbound name. The evaluator
/// only reads the context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VarContext {
    bindings: FxHashMap<Name, Option<Value>>,
}

impl VarContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any earlier binding.
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, Some(value));
    }

    /// Declare `name` without a constant value.
    pub fn declare(&mut self, name: Name) {
        self.bindings.insert(name, None);
    }

    /// The value bound to `name`, if it has one.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name).and_then(Option::as_ref)
    }

    /// Whether `name` is present, with or without a value.
    pub fn is_declared(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(Name, Value)> for VarContext {
    fn from_iter<I: IntoIterator<Item = (Name, Value)>>(iter: I) -> Self {
        VarContext {
            bindings: iter
                .into_iter()
                .map(|(name, value)| (name, Some(value)))
                .collect(),
        }
    }
}
