//! Argument spreading: calling functions with tuples of arguments.
//!
//! A tuple `(a, b, c)` can be handed to a three-argument function as three
//! positional arguments. The traits in this module capture that at the type
//! level, for arities 1 through 6:
//!
//! - [`StarFn`]: calls an `FnMut(A, B, ...)` with an owned tuple `(A, B, ...)`
//! - [`StarPredicate`]: calls an `FnMut(&A, &B, ...) -> bool` with a borrowed tuple
//! - [`Unpack`]: converts a dynamically sized value (a `Vec`) into a tuple,
//!   failing with [`SequenceError::TypeMismatch`] when the length is wrong
//! - [`Callable`]: the composition step used by [`compose!`](crate::compose!);
//!   a unary function takes a value of its parameter type whole, otherwise
//!   a tuple of matching arity is spread
//!
//! Arity is resolved from the function's own signature, so closures passed
//! here need annotated parameter types.
//!
//! # Examples
//!
//! ```rust
//! use funcflow::compose::{StarFn, StarPredicate, Unpack};
//!
//! let mut add = |left: i32, right: i32| left + right;
//! assert_eq!(add.call_spread((2, 3)), 5);
//!
//! let mut first_is_odd = |first: &i32, _second: &i32| first % 2 == 1;
//! assert!(first_is_odd.test_spread(&(3, 4)));
//!
//! let pair: (i32, i32) = vec![1, 2].unpack().unwrap();
//! assert_eq!(pair, (1, 2));
//! assert!(Unpack::<(i32, i32)>::unpack(vec![1, 2, 3]).is_err());
//! ```

use crate::error::{SequenceError, SequenceResult};

/// A function that can be called with its arguments packed in a tuple.
///
/// Implemented for every `FnMut` of arity 1 to 6, where `Args` is the tuple
/// of its parameter types.
pub trait StarFn<Args> {
    /// The function's return type.
    type Output;

    /// Calls the function with the tuple spread as positional arguments.
    fn call_spread(&mut self, arguments: Args) -> Self::Output;
}

/// A predicate that can be tested against a borrowed tuple of arguments.
///
/// Implemented for every `FnMut(&A, &B, ...) -> bool` of arity 1 to 6.
pub trait StarPredicate<Args> {
    /// Tests the predicate with references to each tuple field.
    fn test_spread(&mut self, arguments: &Args) -> bool;
}

/// A value whose arity is only known at runtime, convertible into a tuple.
///
/// Tuples unpack into themselves. `Vec<V>` unpacks into a tuple of `V` when
/// its length matches, and fails with [`SequenceError::TypeMismatch`]
/// otherwise.
pub trait Unpack<Args> {
    /// Converts the value into an argument tuple.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::TypeMismatch`] if the value does not have
    /// exactly as many elements as the tuple.
    fn unpack(self) -> SequenceResult<Args>;
}

/// One step of a composition chain.
///
/// `Marker` is the function-pointer shape of the implementing function and
/// only exists to keep the unary and n-ary implementations apart:
///
/// - a unary function `Fn(A) -> R` is `Callable<A, fn(A) -> R>` and receives
///   its input as a single argument;
/// - a function `Fn(A, B, ...) -> R` of any arity from 0 to 6 is also
///   `Callable<(A, B, ...), fn(A, B, ...) -> R>` and receives its input
///   spread as positional arguments. For arity 1 this unpacks `(a,)` into
///   `a`.
///
/// # Examples
///
/// ```rust
/// use funcflow::compose::Callable;
///
/// fn add(left: i32, right: i32) -> i32 { left + right }
/// fn double(value: i32) -> i32 { value * 2 }
///
/// assert_eq!(add.call_with((1, 2)), 3);
/// assert_eq!(double.call_with(21), 42);
/// ```
pub trait Callable<Input, Marker> {
    /// The function's return type.
    type Output;

    /// Calls the function with `input`, spreading it if the function is n-ary.
    fn call_with(&self, input: Input) -> Self::Output;
}

impl<Function, Return> Callable<(), fn() -> Return> for Function
where
    Function: Fn() -> Return,
{
    type Output = Return;

    #[inline]
    fn call_with(&self, (): ()) -> Return {
        self()
    }
}

impl<Function, Argument, Return> Callable<Argument, fn(Argument) -> Return> for Function
where
    Function: Fn(Argument) -> Return,
{
    type Output = Return;

    #[inline]
    fn call_with(&self, input: Argument) -> Return {
        self(input)
    }
}

macro_rules! impl_spread {
    (@repeat $value:ident; $($argument:ident),+) => {
        ($(impl_spread!(@replace $argument $value),)+)
    };
    (@replace $argument:ident $value:ident) => {
        $value
    };
    ($arity:literal; $($argument:ident $binding:ident : $index:tt),+) => {
        impl<Function, Return, $($argument),+> StarFn<($($argument,)+)> for Function
        where
            Function: FnMut($($argument),+) -> Return,
        {
            type Output = Return;

            #[inline]
            fn call_spread(&mut self, arguments: ($($argument,)+)) -> Return {
                self($(arguments.$index),+)
            }
        }

        impl<Function, $($argument),+> StarPredicate<($($argument,)+)> for Function
        where
            Function: FnMut($(&$argument),+) -> bool,
        {
            #[inline]
            fn test_spread(&mut self, arguments: &($($argument,)+)) -> bool {
                self($(&arguments.$index),+)
            }
        }

        impl<$($argument),+> Unpack<($($argument,)+)> for ($($argument,)+) {
            #[inline]
            fn unpack(self) -> SequenceResult<Self> {
                Ok(self)
            }
        }

        impl<Value> Unpack<impl_spread!(@repeat Value; $($argument),+)> for Vec<Value> {
            fn unpack(self) -> SequenceResult<impl_spread!(@repeat Value; $($argument),+)> {
                let length = self.len();
                let [$($binding),+] = <[Value; $arity]>::try_from(self).map_err(|_| {
                    SequenceError::type_mismatch(
                        format!("{} elements", $arity),
                        format!("{length} elements"),
                    )
                })?;
                Ok(($($binding,)+))
            }
        }
    };
}

macro_rules! impl_callable_spread {
    ($($argument:ident : $index:tt),+) => {
        impl<Function, Return, $($argument),+> Callable<($($argument,)+), fn($($argument),+) -> Return>
            for Function
        where
            Function: Fn($($argument),+) -> Return,
        {
            type Output = Return;

            #[inline]
            fn call_with(&self, input: ($($argument,)+)) -> Return {
                self($(input.$index),+)
            }
        }
    };
}

impl_spread!(1; A a: 0);
impl_spread!(2; A a: 0, B b: 1);
impl_spread!(3; A a: 0, B b: 1, C c: 2);
impl_spread!(4; A a: 0, B b: 1, C c: 2, D d: 3);
impl_spread!(5; A a: 0, B b: 1, C c: 2, D d: 3, E e: 4);
impl_spread!(6; A a: 0, B b: 1, C c: 2, D d: 3, E e: 4, F f: 5);

impl_callable_spread!(A: 0);
impl_callable_spread!(A: 0, B: 1);
impl_callable_spread!(A: 0, B: 1, C: 2);
impl_callable_spread!(A: 0, B: 1, C: 2, D: 3);
impl_callable_spread!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_callable_spread!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
