//! Stack growth for deep recursion.
//!
//! Parsing, reading, evaluating and rendering all recurse once per level of
//! bracket nesting. Each of those walks calls [`ensure_sufficient_stack`] at
//! every level, so nesting depth is bounded by memory rather than by the size
//! of the thread's stack.
//!
//! On wasm32 the guard is a plain call.

/// Grow the stack when less than this remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
