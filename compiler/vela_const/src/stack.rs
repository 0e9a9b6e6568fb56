//! Stack growth for deep expression trees.
//!
//! Long concatenation chains and nested arrays recurse once per level. On
//! native targets the stack is grown on demand with `stacker`; WASM manages
//! its own stack and gets a passthrough.

/// Minimum stack space to keep available (100KB red zone).
pub const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
pub const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than [`RED_ZONE`] remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
