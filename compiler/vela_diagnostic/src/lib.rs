//! Diagnostic channel for constant manipulation.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//!
//! Passes push diagnostics into a [`DiagnosticQueue`] and keep going; the
//! queue decides what is kept (error limit, deduplication) and the driver
//! decides when to stop.
//!
//! ```text
//! let guarantee = queue.emit_error(diagnostic);
//! ```

mod diagnostic;
mod error_code;
mod guarantee;
pub mod queue;

pub use diagnostic::{internal_compiler_error, not_convertible_to_string, Diagnostic, Label};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
