//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Dict<_>` directly.
//! [`TypeConstructor`] recovers that ability: a concrete type like `Dict<i32>`
//! names its element type through `Inner` and can be re-applied to any other
//! element type through `WithType<B>`.
//!
//! # Example
//!
//! ```rust
//! use plainfn::object::Dict;
//! use plainfn::typeclass::TypeConstructor;
//!
//! fn empty_like<T: TypeConstructor>(_value: &T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let counts = Dict::from([("a", 1)]);
//! let labels: Dict<String> = empty_like(&counts);
//! assert!(labels.is_empty());
//! ```

use crate::object::Dict;

/// A type constructor applied to some element type.
///
/// # Associated Types
///
/// - `Inner`: The element type this constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The element type, e.g. `i32` for `Dict<i32>`.
    type Inner;

    /// The same constructor applied to a different element type.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Dict<A> {
    type Inner = A;
    type WithType<B> = Dict<B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
