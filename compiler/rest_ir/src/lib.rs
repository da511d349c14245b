//! Core identifiers shared by every crate in the resource key engine.
//!
//! - `Name`: interned identifier handle (`StringInterner` owns the text)
//! - `Span`: byte range of a declaration in its source file
//! - `TypeId` / `PropertyId`: arena indices into the host type graph
//! - `Target`: the entity a diagnostic points at
//!
//! Every type here is `Copy` (except the interner) and hashes by value, so they
//! can key the compilation-scoped state tables directly.

/// Compile-time assertion that a type has a specific size.
///
/// Used to keep the id types pointer-sized or smaller.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod ids;
mod interner;
mod name;
mod span;

pub use ids::{PropertyId, Target, TypeId};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::Span;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Name, PropertyId, Span, Target, TypeId};
    crate::static_assert_size!(Name, 4);
    crate::static_assert_size!(TypeId, 4);
    crate::static_assert_size!(PropertyId, 4);
    crate::static_assert_size!(Span, 8);
    crate::static_assert_size!(Target, 8);
}
