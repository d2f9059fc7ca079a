//! # plainfn
//!
//! Small, pure functional helpers for everyday Rust code.
//!
//! ## Overview
//!
//! - **Combinators**: [`identity`](lambda::identity), [`constant`](lambda::constant)
//! - **Function Composition**: [`compose`](lambda::compose),
//!   [`compose3`](lambda::compose3), [`compose4`](lambda::compose4) and the
//!   variadic [`compose!`] macro, all right to left
//! - **Plain Mappings**: [`Dict`](object::Dict), an insertion-ordered
//!   string-keyed map, with `to_pairs`, `from_pairs`, `keys`, `values` and
//!   `map_values`
//! - **Type Classes**: [`Functor`](typeclass::Functor) over `Dict`, `Option`
//!   and `Vec`
//!
//! Every function is a total, stateless transformation of its arguments.
//! Nothing here logs, allocates global state, or wraps the failures of
//! caller-supplied functions: a panic unwinds unchanged and a `Result`
//! flows through as an ordinary value.
//!
//! ## Feature Flags
//!
//! - `lambda`: Combinators and composition
//! - `object`: `Dict` and its conversion and mapping functions
//! - `typeclass`: `TypeConstructor` and `Functor`
//! - `serde`: `Serialize`/`Deserialize` for `Dict`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(all(feature = "lambda", feature = "object"))]
//! # {
//! use plainfn::prelude::*;
//!
//! let to_cents = compose(|x: f64| x.round() as i64, |x: f64| x * 100.0);
//! let prices = from_pairs([("tea", 1.25), ("cake", 3.5)]);
//! let cents = map_values(&prices, |price| to_cents(*price));
//!
//! assert_eq!(keys(&cents), vec!["tea", "cake"]);
//! assert_eq!(values(&cents), vec![125, 350]);
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every item of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use plainfn::prelude::*;
/// ```
pub mod prelude {
    pub use crate::types::*;

    #[cfg(feature = "lambda")]
    pub use crate::lambda::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod types;

#[cfg(feature = "lambda")]
pub mod lambda;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "typeclass")]
pub mod typeclass;
