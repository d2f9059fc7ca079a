//! Insertion-ordered, string-keyed mapping.
//!
//! [`Dict`] associates unique `String` keys with values of a single type and
//! remembers the order in which keys were first inserted. Every enumeration
//! (iteration, [`keys`](super::keys), [`values`](super::values),
//! [`to_pairs`](super::to_pairs)) follows that order, so positions line up
//! across all of them for the same dictionary.
//!
//! Inserting a key that is already present replaces its value in place: the
//! key keeps its original position.
//!
//! # Examples
//!
//! ```rust
//! use plainfn::object::Dict;
//!
//! let mut scores = Dict::new();
//! scores.insert("bob", 3);
//! scores.insert("alice", 5);
//! scores.insert("bob", 4);
//!
//! assert_eq!(scores.len(), 2);
//! assert_eq!(scores["bob"], 4);
//! assert_eq!(format!("{scores}"), "{bob: 4, alice: 5}");
//! ```

use indexmap::IndexMap;
use std::fmt;
use std::ops::Index;

/// A homogeneous mapping from string keys to values, in insertion order.
///
/// Equality compares key sets and values and ignores order, so two
/// dictionaries holding the same entries are equal however they were built.
#[derive(Clone, PartialEq, Eq)]
pub struct Dict<A> {
    entries: IndexMap<String, A>,
}

/// Borrowing iterator over the entries of a [`Dict`], in insertion order.
pub type Iter<'a, A> = indexmap::map::Iter<'a, String, A>;

/// Owning iterator over the entries of a [`Dict`], in insertion order.
pub type IntoIter<A> = indexmap::map::IntoIter<String, A>;

impl<A> Dict<A> {
    /// Creates an empty dictionary.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty dictionary with room for `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plainfn::object::Dict;
    ///
    /// let dict = Dict::from([("a", 1)]);
    /// assert_eq!(dict.get("a"), Some(&1));
    /// assert_eq!(dict.get("b"), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&A> {
        self.entries.get(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stores `value` under `key`, returning the value it replaced.
    ///
    /// A new key is appended at the end. An existing key keeps its position
    /// and only its value changes.
    #[inline]
    pub fn insert(&mut self, key: impl Into<String>, value: A) -> Option<A> {
        self.entries.insert(key.into(), value)
    }

    /// Returns an iterator over `(key, value)` references in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, A> {
        self.entries.iter()
    }
}

impl<A> Default for Dict<A> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, A> FromIterator<(K, A)> for Dict<A> {
    fn from_iter<I: IntoIterator<Item = (K, A)>>(iter: I) -> Self {
        let mut dict = Self::new();
        dict.extend(iter);
        dict
    }
}

impl<K: Into<String>, A> Extend<(K, A)> for Dict<A> {
    fn extend<I: IntoIterator<Item = (K, A)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.entries.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.entries.insert(key.into(), value);
        }
    }
}

impl<K: Into<String>, A, const N: usize> From<[(K, A); N]> for Dict<A> {
    fn from(entries: [(K, A); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<A> IntoIterator for Dict<A> {
    type Item = (String, A);
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Dict<A> {
    type Item = (&'a String, &'a A);
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A> Index<&str> for Dict<A> {
    type Output = A;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &A {
        &self.entries[key]
    }
}

impl<A: fmt::Debug> fmt::Debug for Dict<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<A: fmt::Display> fmt::Display for Dict<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

static_assertions::assert_impl_all!(Dict<i32>: Send, Sync);
static_assertions::assert_impl_all!(Dict<String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Dict<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for Dict<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct DictVisitor<A> {
    value_marker: std::marker::PhantomData<A>,
}

#[cfg(feature = "serde")]
impl<A> DictVisitor<A> {
    const fn new() -> Self {
        Self {
            value_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::de::Visitor<'de> for DictVisitor<A> {
    type Value = Dict<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: serde::de::MapAccess<'de>,
    {
        // Sequential insert: a repeated key keeps the last value seen.
        let mut dict = Dict::new();
        while let Some((key, value)) = access.next_entry::<String, A>()? {
            dict.insert(key, value);
        }
        Ok(dict)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: serde::Deserialize<'de>> serde::Deserialize<'de> for Dict<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(DictVisitor::new())
    }
}
