//! Abort on broken preconditions.
//!
//! Hashing, formatting and folding are only ever called on subtrees a checker
//! accepted. Reaching a node they cannot handle means the caller skipped that
//! check, so there is nothing to recover: the pass stops here.

use vela_diagnostic::internal_compiler_error;

/// Log an `E9001` diagnostic for `reason` and panic with its message,
/// `internal compiler error: <reason>`.
#[cold]
#[track_caller]
pub fn internal_error(reason: &str) -> ! {
    let diag = internal_compiler_error(reason);
    tracing::error!(code = %diag.code, "{diag}");
    panic!("{}", diag.message);
}
