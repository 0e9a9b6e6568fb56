//! Proof that an error was reported.

use std::fmt;

/// Zero-sized token only obtainable by emitting an error.
///
/// Functions returning `Result<T, ErrorGuaranteed>` prove that the failure
/// they report was already pushed into a diagnostic queue.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) const fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// A guarantee if `error_count` is non-zero.
    pub fn from_error_count(error_count: usize) -> Option<Self> {
        (error_count > 0).then(Self::new)
    }
}

impl fmt::Display for ErrorGuaranteed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error(s) emitted")
    }
}
