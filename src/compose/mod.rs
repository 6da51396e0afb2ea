//! Function composition utilities.
//!
//! This module provides right-to-left function composition and the
//! argument-spreading traits it is built on. The same traits power the
//! `star_map` and `star_filter` stages of
//! [`LazySequence`](crate::sequence::LazySequence).
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions right-to-left, spreading tuple results
//! - [`identity`]: The identity function, unit of composition
//! - [`StarFn`], [`StarPredicate`]: Call functions with a tuple of arguments
//! - [`Unpack`]: Turn a runtime-sized value into an argument tuple
//! - [`Callable`]: A single composition step
//!
//! # Examples
//!
//! ```
//! use funcflow::compose;
//!
//! fn add(a: i32, b: i32) -> i32 { a + b }
//! fn multiply_2(a: i32, b: i32) -> (i32, i32) { (a * 2, b * 2) }
//! fn pass(a: i32, b: i32) -> (i32, i32) { (a, b) }
//!
//! // pass(1, 2) = (1, 2); multiply_2(1, 2) = (2, 4); add(2, 4) = 6
//! let composed = compose!(add, multiply_2, pass);
//! assert_eq!(composed((1, 2)), 6);
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
//! When `B` is a tuple `(B1, B2)` and `f` takes two arguments, the tuple is
//! spread: `(f . g)(x) = f(g(x).0, g(x).1)`.
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`

mod compose_macro;
mod spread;
mod utils;

pub use spread::{Callable, StarFn, StarPredicate, Unpack};
pub use utils::identity;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
