//! Batched mapping on a worker pool.
//!
//! [`LazySequence::parallel_map`](super::LazySequence::parallel_map) pulls up
//! to [`WorkerPool::width`] elements, hands them to the pool as one batch and
//! yields the results in input order before pulling again. The pool decides
//! how a batch is executed:
//!
//! - [`SequentialPool`]: in the calling thread, one element at a time
//! - `RayonPool`: on a dedicated rayon thread pool (feature `rayon`)
//!
//! Batches run one after another. The next batch is pulled and submitted only
//! once every result of the previous one has been yielded, so workers sit
//! idle while the consumer drains a batch and a slow element holds up the
//! rest of its batch. At most `width` elements are in flight at any time.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::error::{SequenceError, SequenceResult};

/// An executor for batches of independent function calls.
pub trait WorkerPool {
    /// How many elements one batch may hold. Values below 1 are treated as 1.
    fn width(&self) -> usize;

    /// Applies `function` to every element of `batch`, returning the outputs
    /// in the same order as their inputs.
    fn map_batch<T, U, F>(&self, function: &F, batch: Vec<T>) -> Vec<U>
    where
        T: Send,
        U: Send,
        F: Fn(T) -> U + Sync;
}

impl<P: WorkerPool + ?Sized> WorkerPool for &P {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn map_batch<T, U, F>(&self, function: &F, batch: Vec<T>) -> Vec<U>
    where
        T: Send,
        U: Send,
        F: Fn(T) -> U + Sync,
    {
        (**self).map_batch(function, batch)
    }
}

/// Runs every batch in the calling thread. Width 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequentialPool;

impl WorkerPool for SequentialPool {
    fn width(&self) -> usize {
        1
    }

    fn map_batch<T, U, F>(&self, function: &F, batch: Vec<T>) -> Vec<U>
    where
        T: Send,
        U: Send,
        F: Fn(T) -> U + Sync,
    {
        batch.into_iter().map(function).collect()
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Settings for building a `RayonPool`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of worker threads.
    ///
    /// If `None`, rayon picks the platform's available parallelism.
    pub num_threads: Option<usize>,
    /// Prefix of the worker thread names; threads are named `{prefix}-{index}`.
    pub thread_name: String,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            thread_name: "funcflow-worker".to_owned(),
        }
    }
}

impl PoolConfig {
    /// Creates a configuration with a fixed number of threads.
    #[must_use]
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads: Some(num_threads),
            ..Self::default()
        }
    }

    /// Checks the configuration without building anything.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Configuration`] if `num_threads` is
    /// `Some(0)` or `thread_name` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::PoolConfig;
    ///
    /// assert!(PoolConfig::default().validate().is_ok());
    /// assert!(PoolConfig::with_threads(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> SequenceResult<()> {
        if self.num_threads == Some(0) {
            return Err(SequenceError::configuration(
                "num_threads must be greater than 0 when set",
            ));
        }
        if self.thread_name.is_empty() {
            return Err(SequenceError::configuration("thread_name must not be empty"));
        }
        Ok(())
    }
}

// =============================================================================
// RayonPool
// =============================================================================

/// Runs batches on a dedicated rayon thread pool.
///
/// The width is the pool's thread count, so one batch keeps every worker
/// busy at most once.
///
/// # Examples
///
/// ```rust
/// use funcflow::sequence::{PoolConfig, RayonPool, lazy};
///
/// let pool = RayonPool::new(&PoolConfig::with_threads(2)).unwrap();
/// let squares = lazy(1..=6).parallel_map(&pool, |value: u64| value * value);
/// assert_eq!(squares.to_list(), vec![1, 4, 9, 16, 25, 36]);
/// ```
#[cfg(feature = "rayon")]
#[derive(Debug)]
pub struct RayonPool {
    pool: rayon::ThreadPool,
}

#[cfg(feature = "rayon")]
impl RayonPool {
    /// Builds a thread pool from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Configuration`] if `config` is invalid or the
    /// threads cannot be spawned.
    pub fn new(config: &PoolConfig) -> SequenceResult<Self> {
        config.validate()?;

        let prefix = config.thread_name.clone();
        let mut builder =
            rayon::ThreadPoolBuilder::new().thread_name(move |index| format!("{prefix}-{index}"));
        if let Some(num_threads) = config.num_threads {
            builder = builder.num_threads(num_threads);
        }
        let pool = builder
            .build()
            .map_err(|error| SequenceError::configuration(error.to_string()))?;

        tracing::info!(
            threads = pool.current_num_threads(),
            thread_name = %config.thread_name,
            "worker pool started"
        );
        Ok(Self { pool })
    }
}

#[cfg(feature = "rayon")]
impl WorkerPool for RayonPool {
    fn width(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn map_batch<T, U, F>(&self, function: &F, batch: Vec<T>) -> Vec<U>
    where
        T: Send,
        U: Send,
        F: Fn(T) -> U + Sync,
    {
        use rayon::prelude::*;

        self.pool
            .install(|| batch.into_par_iter().map(function).collect())
    }
}

// =============================================================================
// Adapter
// =============================================================================

/// Yields `function` applied to each element of `cursor`, batch by batch.
pub(crate) struct ParallelMap<'pool, I, P, F, U> {
    cursor: I,
    pool: &'pool P,
    function: F,
    ready: VecDeque<U>,
}

impl<'pool, I, P, F, U> ParallelMap<'pool, I, P, F, U> {
    pub(crate) const fn new(cursor: I, pool: &'pool P, function: F) -> Self {
        Self {
            cursor,
            pool,
            function,
            ready: VecDeque::new(),
        }
    }
}

impl<I, P, F, U> Iterator for ParallelMap<'_, I, P, F, U>
where
    I: Iterator,
    I::Item: Send,
    P: WorkerPool,
    F: Fn(I::Item) -> U + Sync,
    U: Send,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        if self.ready.is_empty() {
            let width = self.pool.width().max(1);
            let batch: Vec<I::Item> = self.cursor.by_ref().take(width).collect();
            if batch.is_empty() {
                return None;
            }
            tracing::trace!(batch = batch.len(), width, "dispatching batch to worker pool");
            self.ready = VecDeque::from(self.pool.map_batch(&self.function, batch));
        }
        self.ready.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.cursor.size_hint();
        let buffered = self.ready.len();
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

impl<I, P, F, U> FusedIterator for ParallelMap<'_, I, P, F, U>
where
    I: FusedIterator,
    I::Item: Send,
    P: WorkerPool,
    F: Fn(I::Item) -> U + Sync,
    U: Send,
{
}
