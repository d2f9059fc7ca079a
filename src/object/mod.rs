//! Utilities for plain string-keyed mappings.
//!
//! The central type is [`Dict`], a homogeneous mapping that preserves
//! insertion order. The free functions convert it to and from sequences and
//! transform its values:
//!
//! - [`to_pairs`], [`into_pairs`]: dictionary to `(key, value)` pairs
//! - [`keys`], [`values`]: one side of each entry
//! - [`from_pairs`]: pairs to dictionary (last write wins on repeated keys)
//! - [`map_values`], [`try_map_values`]: transform values, keep keys
//!
//! # Laws
//!
//! - **Round trip**: `from_pairs(to_pairs(&m)) == m`
//! - **Functor identity**: `map_values(&m, Clone::clone) == m`
//! - **Functor composition**:
//!   `map_values(&map_values(&m, f), g) == map_values(&m, |x| g(&f(x)))`
//!
//! # Examples
//!
//! ```rust
//! use plainfn::object::{Dict, from_pairs, keys, map_values, to_pairs, values};
//!
//! let inventory = from_pairs([("pens", 12), ("pads", 3)]);
//!
//! assert_eq!(keys(&inventory), vec!["pens", "pads"]);
//! assert_eq!(values(&inventory), vec![12, 3]);
//!
//! let doubled = map_values(&inventory, |count| count * 2);
//! assert_eq!(doubled, Dict::from([("pens", 24), ("pads", 6)]));
//!
//! assert_eq!(from_pairs(to_pairs(&inventory)), inventory);
//! ```

mod converting;
mod dict;
mod mapping;

pub use converting::{from_pairs, into_pairs, keys, to_pairs, values};
pub use dict::{Dict, IntoIter, Iter};
pub use mapping::{map_values, try_map_values};
