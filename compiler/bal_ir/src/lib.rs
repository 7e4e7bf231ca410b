//! Shared IR primitives for the bal compiler.
//!
//! Only the pieces the semantic phases need live here:
//! - `Span` for source locations attached to diagnostics
//! - `Name` for interned identifiers (struct, field and type names)
//! - `StringInterner` / `SharedInterner` to create and resolve names
//!
//! Every type is `Copy` or cheaply `Clone`, and `Eq + Hash` so it can be used
//! as a map key by the type table and the operator registry.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod span;

pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use span::{Span, SpanError};
