//! Type class traits for mapping over containers generically.
//!
//! - [`TypeConstructor`]: emulates higher-kinded types with GATs
//! - [`Functor`]: transforms contained values while keeping structure
//!
//! Implementations are provided for [`Dict`](crate::object::Dict),
//! [`Option`], and [`Vec`].
//!
//! # Examples
//!
//! ```rust
//! use plainfn::object::Dict;
//! use plainfn::typeclass::Functor;
//!
//! fn stringify<F: Functor<Inner = i32>>(container: F) -> F::WithType<String> {
//!     container.fmap(|n| n.to_string())
//! }
//!
//! assert_eq!(stringify(Some(7)), Some("7".to_string()));
//! assert_eq!(stringify(vec![1, 2]), vec!["1", "2"]);
//! assert_eq!(
//!     stringify(Dict::from([("a", 1)])),
//!     Dict::from([("a", "1".to_string())])
//! );
//! ```

mod functor;
mod higher;

pub use functor::Functor;
pub use higher::TypeConstructor;
