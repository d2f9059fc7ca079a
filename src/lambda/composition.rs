//! Function composition, right to left.
//!
//! [`compose3`] and [`compose4`] are right folds over [`compose`], so every
//! law that holds for two functions carries over to longer chains. For
//! chains of arbitrary length use the [`compose!`](crate::compose) macro.
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//!
//! Equality here is behavioral: both sides return the same output for every
//! input.

use crate::types::F1;

/// Composes two functions, right to left.
///
/// `compose(f, g)(x)` is `f(g(x))`: `g` runs first and its output is handed
/// to `f`. Nothing is caught along the way, so a panic in either function
/// unwinds straight to the caller of the composed function.
///
/// # Examples
///
/// ```
/// use plainfn::lambda::compose;
///
/// let add_one_after_doubling = compose(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(add_one_after_doubling(3), 7);
///
/// // Types flow through the composition
/// let digit_count = compose(|text: String| text.len(), |n: u64| n.to_string());
/// assert_eq!(digit_count(12_345), 5);
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(outer: F, inner: G) -> impl Fn(A) -> C
where
    F: F1<B, C>,
    G: F1<A, B>,
{
    move |input| outer(inner(input))
}

/// Composes three functions, right to left.
///
/// Equivalent to `compose(f, compose(g, h))`: evaluates `h`, then `g`, then `f`.
///
/// # Examples
///
/// ```
/// use plainfn::lambda::compose3;
///
/// let composed = compose3(|x: i32| x + 1, |x: i32| x * 2, |x: i32| x - 3);
/// assert_eq!(composed(10), 15);
/// ```
#[inline]
pub fn compose3<A, B, C, D, F, G, H>(first: F, second: G, third: H) -> impl Fn(A) -> D
where
    F: F1<C, D>,
    G: F1<B, C>,
    H: F1<A, B>,
{
    compose(first, compose(second, third))
}

/// Composes four functions, right to left.
///
/// Equivalent to `compose(f, compose(g, compose(h, i)))`: evaluates `i`,
/// then `h`, then `g`, then `f`.
///
/// # Examples
///
/// ```
/// use plainfn::lambda::{compose4, identity};
///
/// let composed = compose4(identity, identity, identity, identity);
/// assert_eq!(composed(42), 42);
/// ```
#[inline]
pub fn compose4<A, B, C, D, E, F, G, H, I>(
    first: F,
    second: G,
    third: H,
    fourth: I,
) -> impl Fn(A) -> E
where
    F: F1<D, E>,
    G: F1<C, D>,
    H: F1<B, C>,
    I: F1<A, B>,
{
    compose(first, compose(second, compose(third, fourth)))
}
