//! Conversions between a [`Dict`] and sequences of keys, values, or pairs.
//!
//! [`to_pairs`], [`keys`] and [`values`] enumerate in the same (insertion)
//! order, so the `n`th key, the `n`th value and the `n`th pair always refer
//! to the same entry. All of them are `O(n)` in the number of entries.

use super::Dict;

/// Converts a dictionary to a vector of `(key, value)` pairs.
///
/// Values are cloned; the dictionary is left untouched. Use [`into_pairs`]
/// to move the entries out instead.
///
/// # Examples
///
/// ```rust
/// use plainfn::object::{Dict, to_pairs};
///
/// let dict = Dict::from([("a", 1), ("b", 2)]);
/// assert_eq!(
///     to_pairs(&dict),
///     vec![("a".to_string(), 1), ("b".to_string(), 2)]
/// );
/// ```
pub fn to_pairs<A: Clone>(object: &Dict<A>) -> Vec<(String, A)> {
    object
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Consumes a dictionary and returns its `(key, value)` pairs in order.
pub fn into_pairs<A>(object: Dict<A>) -> Vec<(String, A)> {
    object.into_iter().collect()
}

/// Returns every value of the dictionary, in enumeration order.
///
/// # Examples
///
/// ```rust
/// use plainfn::object::{Dict, values};
///
/// let dict = Dict::from([("a", 1), ("b", 2)]);
/// assert_eq!(values(&dict), vec![1, 2]);
/// ```
pub fn values<A: Clone>(object: &Dict<A>) -> Vec<A> {
    object.iter().map(|(_, value)| value.clone()).collect()
}

/// Returns every key of the dictionary, in enumeration order.
///
/// # Examples
///
/// ```rust
/// use plainfn::object::{Dict, keys};
///
/// let dict = Dict::from([("a", 1), ("b", 2)]);
/// assert_eq!(keys(&dict), vec!["a", "b"]);
/// ```
pub fn keys<A>(object: &Dict<A>) -> Vec<String> {
    object.iter().map(|(key, _)| key.clone()).collect()
}

/// Builds a dictionary from a sequence of `(key, value)` pairs.
///
/// Pairs are inserted in sequence order. When a key repeats, the later value
/// overwrites the earlier one and the key stays at the position of its first
/// occurrence; duplicates are not an error.
///
/// # Examples
///
/// ```rust
/// use plainfn::object::{Dict, from_pairs};
///
/// assert_eq!(from_pairs([("a", 1), ("b", 2)]), Dict::from([("a", 1), ("b", 2)]));
/// assert_eq!(from_pairs([("a", 1), ("a", 2)]), Dict::from([("a", 2)]));
/// ```
pub fn from_pairs<K, A, I>(pairs: I) -> Dict<A>
where
    K: Into<String>,
    I: IntoIterator<Item = (K, A)>,
{
    pairs.into_iter().collect()
}
