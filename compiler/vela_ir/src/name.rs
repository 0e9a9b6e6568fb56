//! Interned string identifier.

use std::fmt;

/// Handle to a string stored in a [`StringInterner`](crate::StringInterner).
///
/// Used for identifiers, property names and the source text of literals.
/// Equality is a `u32` compare; the text is only needed when a pass renders
/// or concatenates it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    ///
    /// Literals without source text (`true`, `false`, `null`) carry this.
    pub const EMPTY: Name = Name(0);

    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        Name(index)
    }

    /// Index into the interner's storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
