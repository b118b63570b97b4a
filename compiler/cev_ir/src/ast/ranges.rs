//! Arena Range Types
//!
//! Compact `(start, len)` handles into the arena's side tables.

/// Define range types for arena-allocated data.
///
/// Each generated type has:
/// - `start: u32` and `len: u32` fields
/// - `EMPTY` constant
/// - `new()`, `is_empty()`, `len()` and `indices()` methods
/// - `Debug` implementation showing the range as `TypeName(start..end)`
macro_rules! define_range {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => { $(
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            /// Table indices covered by this range.
            #[inline]
            pub fn indices(&self) -> ::std::ops::Range<usize> {
                self.start as usize..(self.start as usize + self.len as usize)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({}..{})", stringify!($name), self.start, u64::from(self.start) + u64::from(self.len))
            }
        }
    )* };
}

define_range!(
    /// Range of child expressions (container elements, call arguments,
    /// comparison operands).
    ExprRange,
    /// Range of key/value entries in a dict literal.
    MapEntryRange,
    /// Range of operators in a chained comparison.
    CmpOpRange,
    /// Range of lambda parameter names.
    ParamRange,
);
