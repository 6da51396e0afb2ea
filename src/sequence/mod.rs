//! Fluent lazy and frozen sequence pipelines.
//!
//! This module provides two wrappers around sequential iteration:
//!
//! - [`LazySequence`]: a single-use cursor with chainable deferred stages
//!   (`map`, `filter`, `star_map`, `slice`, `parallel_map`, ...) and
//!   consumers (`reduce`, `to_list`, `head`, `freeze`, ...)
//! - [`FrozenSequence`]: a materialized, immutable sequence that restarts
//!   from the first element on every traversal and supports stable sorting
//!
//! Progress reporting and parallel execution are injected collaborators:
//! [`ProgressReporter`] and [`WorkerPool`].
//!
//! # Examples
//!
//! ```rust
//! use funcflow::sequence::{SortOrder, lazy};
//!
//! let mut sequence = lazy(vec![1, 4, 3, 2, 5]);
//! assert_eq!(sequence.head(), Ok(1));
//!
//! // Freezing materializes what is left
//! let frozen = sequence.freeze();
//! assert_eq!(frozen.len(), 4);
//! assert_eq!(frozen.sort(|value| *value, SortOrder::Ascending).to_list(), vec![2, 3, 4, 5]);
//!
//! // Every stage on a frozen sequence starts from its first element
//! assert_eq!(frozen.map(|value| value * 10).to_list(), vec![40, 30, 20, 50]);
//! assert_eq!(frozen.reduce(0, |sum, value| sum + value), 14);
//! ```
//!
//! # Thread Safety
//!
//! With the `arc` feature (implied by `rayon`) a [`FrozenSequence`] shares its
//! elements through `Arc` and is `Send + Sync` whenever its elements are.

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted pointer backing [`FrozenSequence`].
///
/// `std::sync::Arc` with the `arc` feature, `std::rc::Rc` otherwise.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod attributes;
mod frozen;
mod lazy;
mod parallel;
mod progress;

pub use attributes::Attributes;
pub use frozen::{FrozenCursor, FrozenSequence, SortOrder};
pub use lazy::{LazySequence, lazy, sequence_fn};
pub use parallel::{PoolConfig, SequentialPool, WorkerPool};
pub use progress::{ProgressConfig, ProgressReporter, SilentProgress, TracingProgress};

#[cfg(feature = "rayon")]
pub use parallel::RayonPool;

#[cfg(feature = "progress-bar")]
pub use progress::ProgressBarReporter;

#[cfg(feature = "derive")]
pub use funcflow_derive::Attributes;
