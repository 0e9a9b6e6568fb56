//! Vela constant-expression passes.
//!
//! Tree walks over the expression arena that answer four questions about a
//! subtree:
//! - is it a compile-time constant? ([`is_const`], [`CheckConstWithDefines`])
//! - what is its literal form? ([`make_const`])
//! - what is its structural hash? ([`calc_hash`])
//! - what is its canonical text? ([`to_string`])
//!
//! All of them are specializations of [`ConstVisitor`], which routes each node
//! kind to a hook and sends every hook it does not override to a single
//! fallback. [`ConstPool`] builds on the hash and the canonical text to
//! deduplicate equal constants.
//!
//! # Preconditions
//!
//! Hashing, formatting and folding assume their input was already accepted
//! by one of the checkers. Violations are compiler bugs and abort through
//! [`fatal::internal_error`]; the only user-facing failure is a concatenation
//! operand with no string form, reported to the [`DiagnosticQueue`].
//!
//! [`DiagnosticQueue`]: vela_diagnostic::DiagnosticQueue

mod check;
pub mod fatal;
mod fold;
mod format;
mod hash;
pub mod pool;
mod stack;
mod visitor;

#[cfg(test)]
mod test_helpers;

use std::sync::Once;

use vela_ir::{ExprArena, ExprId, StringInterner, Symbols};

pub use check::{is_const, CheckConst, CheckConstWithDefines};
pub use fold::{make_const, MakeConst};
pub use format::{to_string, NodeFormatter};
pub use hash::{calc_hash, ArrayHash, HASH_MAGIC_BEGIN, HASH_MAGIC_END, HASH_MULT};
pub use pool::{ConstPool, Interned};
pub use stack::ensure_sufficient_stack;
pub use visitor::{walk_array, ConstVisitor};

/// Read-only collaborators of the non-mutating passes.
#[derive(Copy, Clone, Debug)]
pub struct ConstEnv<'a> {
    pub arena: &'a ExprArena,
    pub symbols: &'a Symbols,
    pub interner: &'a StringInterner,
}

impl<'a> ConstEnv<'a> {
    pub fn new(arena: &'a ExprArena, symbols: &'a Symbols, interner: &'a StringInterner) -> Self {
        ConstEnv {
            arena,
            symbols,
            interner,
        }
    }

    /// The expression `id` ultimately denotes.
    #[inline]
    pub fn actual_value(&self, id: ExprId) -> ExprId {
        self.symbols.actual_value(self.arena, id)
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=vela_const=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
