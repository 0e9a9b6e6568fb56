//! Error codes for constant-manipulation diagnostics.
//!
//! Format: E#### where the first digit is the compiler phase:
//! - E7xxx: constant folding errors
//! - E9xxx: internal compiler errors

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Operand of a constant concatenation has no string form
    E7001,
    /// A constant pass was handed a subtree it cannot process
    E9001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E7001 => "E7001",
            ErrorCode::E9001 => "E9001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
