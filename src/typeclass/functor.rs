//! Functor type class - mapping over container values.
//!
//! A `Functor` can have a function applied to every value it holds while its
//! shape stays the same. For [`Dict`] the shape is the key set and its order,
//! and [`Functor::fmap_ref`] is exactly [`map_values`].
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use plainfn::object::Dict;
//! use plainfn::typeclass::Functor;
//!
//! let lengths = Dict::from([("a", "x"), ("b", "yyy")]).fmap(str::len);
//! assert_eq!(lengths, Dict::from([("a", 1), ("b", 3)]));
//!
//! let some: Option<i32> = Some(5);
//! assert_eq!(some.fmap(|n| n.to_string()), Some("5".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::object::{Dict, map_values};

/// A type class for containers whose values can be transformed in place of
/// their structure.
///
/// The function is `FnMut` because multi-value containers such as [`Dict`]
/// and [`Vec`] call it once per element.
pub trait Functor: TypeConstructor {
    /// Consumes the functor and applies `function` to each value.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies `function` to a reference of each value, leaving `self` intact.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Replaces every value with a clone of `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plainfn::object::Dict;
    /// use plainfn::typeclass::Functor;
    ///
    /// let flags = Dict::from([("a", 1), ("b", 2)]).replace(false);
    /// assert_eq!(flags, Dict::from([("a", false), ("b", false)]));
    /// ```
    #[inline]
    fn replace<B: Clone>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value.clone())
    }

    /// Discards every value, keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Dict<A> Implementation
// =============================================================================

impl<A> Functor for Dict<A> {
    #[inline]
    fn fmap<B, F>(self, mut function: F) -> Dict<B>
    where
        F: FnMut(A) -> B,
    {
        let mut result = Dict::with_capacity(self.len());
        for (key, value) in self {
            result.insert(key, function(value));
        }
        result
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Dict<B>
    where
        F: FnMut(&A) -> B,
    {
        map_values(self, function)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnMut(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnMut(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Functor for Vec<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}
