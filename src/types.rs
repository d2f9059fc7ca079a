//! Shared type vocabulary.
//!
//! The traits in this module name the function shapes accepted throughout
//! the crate. Each one is a trait alias for the corresponding [`Fn`] bound:
//! every closure, function item, and function pointer of the right arity
//! implements it through a blanket impl, so callers never implement these
//! traits by hand.
//!
//! # Examples
//!
//! ```rust
//! use plainfn::types::{F1, F2};
//!
//! fn apply<F: F1<i32, i32>>(function: F, value: i32) -> i32 {
//!     function(value)
//! }
//!
//! fn apply_both<F: F2<i32, i32, i32>>(function: F) -> i32 {
//!     function(2, 3)
//! }
//!
//! assert_eq!(apply(|x: i32| x + 1, 41), 42);
//! assert_eq!(apply_both(|a: i32, b: i32| a * b), 6);
//! ```

/// A function taking no arguments and returning `R`.
pub trait F0<R>: Fn() -> R {}

impl<T, R> F0<R> for T where T: Fn() -> R {}

/// A function of one argument.
pub trait F1<A1, R>: Fn(A1) -> R {}

impl<T, A1, R> F1<A1, R> for T where T: Fn(A1) -> R {}

/// A function of two arguments.
pub trait F2<A1, A2, R>: Fn(A1, A2) -> R {}

impl<T, A1, A2, R> F2<A1, A2, R> for T where T: Fn(A1, A2) -> R {}

/// A function of three arguments.
pub trait F3<A1, A2, A3, R>: Fn(A1, A2, A3) -> R {}

impl<T, A1, A2, A3, R> F3<A1, A2, A3, R> for T where T: Fn(A1, A2, A3) -> R {}

/// The homogeneous, insertion-ordered mapping from string keys to values.
#[cfg(feature = "object")]
pub use crate::object::Dict;
