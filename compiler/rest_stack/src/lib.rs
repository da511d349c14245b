//! Stack growth for the recursive parent resource walk.
//!
//! Key collection recurses once per ancestor before inserting anything, so a
//! generated hierarchy thousands of levels deep would otherwise exhaust the
//! thread stack. Wrap each recursion level in [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn clone_chain(&mut self, resource: TypeId) -> Result<(), TypeGraphError> {
//!     ensure_sufficient_stack(|| {
//!         // ... recurse into the parent, then insert this level's key ...
//!     })
//! }
//! ```
//!
//! On `wasm32` this is a plain call.

/// Grow when less than this much stack remains (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (1MB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// within [`RED_ZONE`] bytes of exhaustion.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
