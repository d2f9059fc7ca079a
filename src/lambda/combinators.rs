//! Common combinators.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose(identity, f)` behaves like `f`
/// - `compose(f, identity)` behaves like `f`
///
/// # Examples
///
/// ```
/// use plainfn::lambda::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// The returned closure takes ownership of `value` and hands out a clone of it
/// on every call. For shared handles such as [`std::rc::Rc`] or
/// [`std::sync::Arc`] the clones point at the same allocation, so changes made
/// through interior mutability elsewhere are visible in what the closure
/// returns.
///
/// # Type Parameters
///
/// * `T` - The type of the constant value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Examples
///
/// ```
/// use plainfn::lambda::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
/// assert_eq!(always_five("still ignored"), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[rstest]
    #[case(0)]
    #[case(-17)]
    #[case(i64::MAX)]
    fn identity_returns_numbers_unchanged(#[case] value: i64) {
        assert_eq!(identity(value), value);
    }

    #[rstest]
    fn identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[rstest]
    fn identity_returns_functions_that_still_work() {
        let double = identity(|x: i32| x * 2);
        assert_eq!(double(21), 42);
    }

    #[rstest]
    fn constant_ignores_every_argument() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(1), "hello");
        assert_eq!(always_hello(2), "hello");
        assert_eq!(always_hello(i32::MIN), "hello");
    }

    #[rstest]
    fn constant_returns_owned_clones() {
        let always_list = constant::<_, ()>(vec![String::from("a")]);
        let mut first = always_list(());
        first.push(String::from("b"));
        assert_eq!(first.len(), 2);
        assert_eq!(always_list(()), vec![String::from("a")]);
    }

    #[rstest]
    fn constant_shares_reference_counted_values() {
        let shared = Rc::new(RefCell::new(1));
        let always_shared = constant::<_, ()>(Rc::clone(&shared));
        *shared.borrow_mut() = 2;
        assert_eq!(*always_shared(()).borrow(), 2);
    }
}
