//! Combinators and function composition.
//!
//! # Overview
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: builds a function that ignores its argument
//! - [`compose`], [`compose3`], [`compose4`]: right-to-left composition of
//!   two, three, or four functions
//! - [`compose!`](crate::compose): right-to-left composition of any number
//!   of functions
//!
//! # Examples
//!
//! ```
//! use plainfn::lambda::{compose, compose3, constant, identity};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//! let subtract_three = |x: i32| x - 3;
//!
//! assert_eq!(compose(add_one, double)(3), 7);
//! assert_eq!(compose3(add_one, double, subtract_three)(10), 15);
//! assert_eq!(compose(identity, double)(4), double(4));
//! assert_eq!(constant::<_, i32>("fixed")(99), "fixed");
//! ```
//!
//! # Mathematical Background
//!
//! Given `f: B -> C` and `g: A -> B`, the composition `(f . g): A -> C` is:
//!
//! ```text
//! (f . g)(x) = f(g(x))
//! ```
//!
//! `identity` is the unit of `.`, and `.` is associative, so the composition
//! helpers can be nested in any grouping without changing behavior.

mod combinators;
mod compose_macro;
mod composition;

pub use combinators::{constant, identity};
pub use composition::{compose, compose3, compose4};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
