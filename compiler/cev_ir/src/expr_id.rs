//! Expression IDs for the flat AST.
//!
//! Children are `ExprId(u32)` indices into an [`ExprArena`](crate::ExprArena)
//! rather than boxed nodes.

use std::fmt;

/// Index into expression arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    /// Invalid expression ID (sentinel value for absent children).
    pub const INVALID: ExprId = ExprId(u32::MAX);

    /// Create a new `ExprId`.
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    /// Get the index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a valid ID.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ExprId({})", self.0)
        } else {
            write!(f, "ExprId::INVALID")
        }
    }
}

impl Default for ExprId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Index into the arena's byte-string table.
///
/// Byte strings are not valid UTF-8 in general, so they are stored beside
/// the interner rather than in it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct BytesId(u32);

impl BytesId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        BytesId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
