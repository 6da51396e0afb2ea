//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from right to left, spreading tuple results into multi-argument functions.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is equivalent to `f(g(h(x)))`: the rightmost
/// function is applied first to the original input, and each result is fed
/// to the function on its left.
///
/// Every step goes through [`Callable`](crate::compose::Callable), so the
/// way a value is handed over depends on the receiving function:
///
/// - a unary function whose parameter type is the value's type receives the
///   value whole, tuples included;
/// - otherwise a tuple of matching arity (0 to 6, including `(x,)`) is
///   spread into the function's positional arguments.
///
/// The composed closure takes exactly one input. For an n-ary innermost
/// function that input is the tuple of its arguments.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged (identity composition)
/// - `compose!(f, g)` - Returns `|x| f(g(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Examples
///
/// ## Unary functions
///
/// ```
/// use funcflow::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // add_one(double(5)) = add_one(10) = 11
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 11);
/// ```
///
/// ## Tuple results spread into the next function
///
/// ```
/// use funcflow::compose;
///
/// fn add(a: i32, b: i32) -> i32 { a + b }
/// fn double_pair(a: i32, b: i32) -> (i32, i32) { (a * 2, b * 2) }
///
/// // double_pair(1, 2) = (2, 4), then add(2, 4) = 6
/// let composed = compose!(add, double_pair);
/// assert_eq!(composed((1, 2)), 6);
/// ```
///
/// ## Closures
///
/// ```
/// use funcflow::compose;
///
/// let multiplier = 3;
/// let multiply = |x: i32| x * multiplier;
/// let split = |x: i32| (x, x + 1);
/// let product = |a: i32, b: i32| a * b;
///
/// // product(split(multiply(2))) = product(6, 7) = 42
/// let composed = compose!(product, split, multiply);
/// assert_eq!(composed(2), 42);
/// ```
#[macro_export]
macro_rules! compose {
    // Single function: identity composition
    ($function:expr $(,)?) => {
        $function
    };

    // compose!(f, g)(x) = f(g(x))
    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| {
            $crate::compose::Callable::call_with(
                &outer,
                $crate::compose::Callable::call_with(&inner, input),
            )
        }
    }};

    // compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner_composed = $crate::compose!($($remaining_functions),+);
        move |input| {
            $crate::compose::Callable::call_with(
                &outer,
                $crate::compose::Callable::call_with(&inner_composed, input),
            )
        }
    }};
}
