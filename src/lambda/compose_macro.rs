//! The `compose!` macro for function composition of any length.

/// Composes any number of functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`, and matches
/// [`compose3`](crate::lambda::compose3) for three functions. Longer chains
/// are built as the same right fold.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Returns `|x| f(g(h(...(x))))`
///
/// # Examples
///
/// ```
/// use plainfn::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn square(x: i32) -> i32 { x * x }
///
/// // add_one(double(square(3))) = add_one(double(9)) = 19
/// let composed = compose!(add_one, double, square);
/// assert_eq!(composed(3), 19);
///
/// // Five functions, applied immediately
/// assert_eq!(compose!(add_one, add_one, double, square, add_one)(1), 10);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner_composed(input))
    }};
}
