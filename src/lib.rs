//! # funcflow
//!
//! Fluent, chainable pipelines over sequential iteration.
//!
//! ## Overview
//!
//! The crate is built around two sequence types and a composer:
//!
//! - **[`LazySequence`](sequence::LazySequence)**: a single-use cursor with
//!   deferred stages (`map`, `filter`, `slice`, `star_map`, ...). Nothing runs
//!   until the sequence is consumed.
//! - **[`FrozenSequence`](sequence::FrozenSequence)**: a materialized,
//!   immutable collection that can be traversed any number of times and
//!   supports indexing and stable sorting.
//! - **[`compose!`]**: right-to-left function composition that spreads tuple
//!   results into multi-argument functions.
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition and argument spreading
//! - `sequence`: Lazy and frozen sequences (default)
//! - `derive`: `#[derive(Attributes)]` for named projections (default)
//! - `arc`: Back frozen sequences with `Arc` instead of `Rc`
//! - `rayon`: A rayon-backed worker pool for `parallel_map`
//! - `serde`: Serialize and deserialize frozen sequences
//! - `progress-bar`: An `indicatif` progress reporter
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funcflow::prelude::*;
//!
//! let total = lazy(vec![1, 2, 3, 4, 5])
//!     .filter(|value| value % 2 == 1)
//!     .map(|value| value * 10)
//!     .reduce(0, |accumulator, value| accumulator + value);
//! assert_eq!(total, 90);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funcflow::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::{SequenceError, SequenceResult};

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

pub mod error;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "sequence")]
pub mod sequence;

pub use error::{SequenceError, SequenceResult};
