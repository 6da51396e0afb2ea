//! Materialized, restartable sequences.
//!
//! A [`FrozenSequence`] holds its elements in a reference-counted slice.
//! Every traversal starts from the first element, sorting returns a new
//! frozen sequence, and all lazy stages build a fresh [`LazySequence`]
//! over a new cursor, leaving the slice untouched.
//!
//! # Examples
//!
//! ```rust
//! use funcflow::compose::identity;
//! use funcflow::sequence::{FrozenSequence, SortOrder};
//!
//! let frozen = FrozenSequence::from(vec![1, 4, 3, 2, 5]);
//! let descending = frozen.sort(|value| *value, SortOrder::Descending);
//!
//! assert_eq!(descending.to_list(), vec![5, 4, 3, 2, 1]);
//! assert_eq!(frozen.to_list(), vec![1, 4, 3, 2, 5]);
//! assert_eq!(frozen.map(identity).to_list(), frozen.to_list());
//! ```

use std::cmp::Ordering;
use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::ops::{Index, RangeBounds};

use super::ReferenceCounter;
use super::attributes::Attributes;
use super::lazy::LazySequence;
use super::parallel::WorkerPool;
use super::progress::{Progress, ProgressReporter, TracingProgress};
use crate::compose::{StarFn, StarPredicate, Unpack};
use crate::error::{SequenceError, SequenceResult};

/// Direction of [`FrozenSequence::sort`] and
/// [`FrozenSequence::relative_sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first. Equal keys still keep their original order.
    Descending,
}

/// An immutable, fully materialized sequence that can be traversed any
/// number of times.
///
/// Cloning is O(1): clones share the same slice.
///
/// A frozen sequence is not an [`Iterator`]; it has no single-step cursor of
/// its own. Use [`iter`](Self::iter), [`cursor`](Self::cursor) or
/// [`lazy`](Self::lazy) to obtain an independent traversal.
///
/// # Examples
///
/// ```rust
/// use funcflow::sequence::FrozenSequence;
///
/// let frozen: FrozenSequence<i32> = (1..=3).collect();
/// let first: Vec<i32> = frozen.iter().copied().collect();
/// let second: Vec<i32> = frozen.iter().copied().collect();
/// assert_eq!(first, second);
/// assert_eq!(frozen[1], 2);
/// ```
pub struct FrozenSequence<T> {
    elements: ReferenceCounter<[T]>,
}

impl<T> FrozenSequence<T> {
    /// Freezes `elements` in their current order.
    #[must_use]
    pub fn new(elements: Vec<T>) -> Self {
        Self {
            elements: ReferenceCounter::from(elements),
        }
    }

    /// Returns the number of elements. O(1).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns a borrowed traversal starting at the first element.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns an owning traversal starting at the first element.
    ///
    /// The cursor shares the slice, so it may outlive `self`.
    #[must_use]
    pub fn cursor(&self) -> FrozenCursor<T> {
        FrozenCursor {
            elements: ReferenceCounter::clone(&self.elements),
            position: 0,
        }
    }

    /// Returns the first element without advancing anything.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::FrozenSequence;
    ///
    /// let frozen = FrozenSequence::from([7, 8]);
    /// assert_eq!(frozen.head(), Ok(&7));
    /// assert_eq!(frozen.head(), Ok(&7));
    /// ```
    pub fn head(&self) -> SequenceResult<&T> {
        self.elements.first().ok_or(SequenceError::EmptySequence)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> SequenceResult<&T> {
        self.elements
            .get(index)
            .ok_or(SequenceError::IndexOutOfBounds {
                index,
                length: self.len(),
            })
    }
}

impl<T: Clone> FrozenSequence<T> {
    /// Returns a one-shot [`LazySequence`] over a fresh cursor.
    #[must_use]
    pub fn lazy(&self) -> LazySequence<FrozenCursor<T>> {
        LazySequence::new(self.cursor())
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Returns a new frozen sequence ordered by `key`.
    ///
    /// The sort is stable in both directions: elements with equal keys keep
    /// their original relative order, also when sorting descending.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::{FrozenSequence, SortOrder};
    ///
    /// let words = FrozenSequence::from(vec!["bb", "a", "cc", "d"]);
    /// let by_length = words.sort(|word| word.len(), SortOrder::Descending);
    /// assert_eq!(by_length.to_list(), vec!["bb", "cc", "a", "d"]);
    /// ```
    #[must_use]
    pub fn sort<K, F>(&self, mut key: F, order: SortOrder) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.relative_sort(|left, right| key(left).cmp(&key(right)), order)
    }

    /// Returns a new frozen sequence ordered by a three-way `comparator`.
    ///
    /// Stable in both directions, like [`sort`](Self::sort).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::{FrozenSequence, SortOrder};
    ///
    /// let frozen = FrozenSequence::from(vec![1, 4, 3, 2, 5]);
    /// let sorted = frozen.relative_sort(|left, right| left.cmp(right), SortOrder::Ascending);
    /// assert_eq!(sorted.to_list(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn relative_sort<F>(&self, mut comparator: F, order: SortOrder) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut elements = self.elements.to_vec();
        match order {
            SortOrder::Ascending => elements.sort_by(&mut comparator),
            // Reversed operands, not a reversed result, keep ties in order
            SortOrder::Descending => elements.sort_by(|left, right| comparator(right, left)),
        }
        tracing::debug!(length = elements.len(), ?order, "sorted frozen sequence");
        Self::new(elements)
    }

    // =========================================================================
    // Stages
    // =========================================================================

    /// See [`LazySequence::map`].
    pub fn map<U, F>(&self, function: F) -> LazySequence<impl Iterator<Item = U> + use<T, U, F>>
    where
        F: FnMut(T) -> U,
    {
        self.lazy().map(function)
    }

    /// See [`LazySequence::filter`].
    pub fn filter<P>(&self, predicate: P) -> LazySequence<impl Iterator<Item = T> + use<T, P>>
    where
        P: FnMut(&T) -> bool,
    {
        self.lazy().filter(predicate)
    }

    /// See [`LazySequence::indexed_map`].
    pub fn indexed_map<U, F>(
        &self,
        function: F,
    ) -> LazySequence<impl Iterator<Item = U> + use<T, U, F>>
    where
        F: FnMut(usize, T) -> U,
    {
        self.lazy().indexed_map(function)
    }

    /// See [`LazySequence::indexed_filter`].
    pub fn indexed_filter<P>(
        &self,
        predicate: P,
    ) -> LazySequence<impl Iterator<Item = T> + use<T, P>>
    where
        P: FnMut(usize, &T) -> bool,
    {
        self.lazy().indexed_filter(predicate)
    }

    /// See [`LazySequence::star_map`].
    pub fn star_map<F>(
        &self,
        function: F,
    ) -> LazySequence<impl Iterator<Item = F::Output> + use<T, F>>
    where
        F: StarFn<T>,
    {
        self.lazy().star_map(function)
    }

    /// See [`LazySequence::star_filter`].
    pub fn star_filter<P>(&self, predicate: P) -> LazySequence<impl Iterator<Item = T> + use<T, P>>
    where
        P: StarPredicate<T>,
    {
        self.lazy().star_filter(predicate)
    }

    /// See [`LazySequence::try_star_map`].
    pub fn try_star_map<Args, F>(
        &self,
        function: F,
    ) -> LazySequence<impl Iterator<Item = SequenceResult<F::Output>> + use<T, Args, F>>
    where
        T: Unpack<Args>,
        F: StarFn<Args>,
    {
        self.lazy().try_star_map(function)
    }

    /// See [`LazySequence::tap`].
    #[doc(alias = "extra_job")]
    pub fn tap<F>(&self, function: F) -> LazySequence<impl Iterator<Item = T> + use<T, F>>
    where
        F: FnMut(&T),
    {
        self.lazy().tap(function)
    }

    /// See [`LazySequence::indexed_tap`].
    pub fn indexed_tap<F>(&self, function: F) -> LazySequence<impl Iterator<Item = T> + use<T, F>>
    where
        F: FnMut(usize, &T),
    {
        self.lazy().indexed_tap(function)
    }

    /// See [`LazySequence::cast`].
    #[must_use]
    pub fn cast<U>(&self) -> LazySequence<FrozenCursor<T>>
    where
        FrozenCursor<T>: Iterator<Item = U>,
    {
        self.lazy().cast::<U>()
    }

    /// See [`LazySequence::attributes`].
    pub fn attributes<V>(
        &self,
        name: &str,
    ) -> LazySequence<impl Iterator<Item = SequenceResult<V>> + use<T, V>>
    where
        T: Attributes,
        V: Clone + 'static,
    {
        self.lazy().attributes(name)
    }

    /// See [`LazySequence::slice`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidSlice`] when `stop` is given and
    /// `start >= stop`.
    pub fn slice(
        &self,
        start: usize,
        stop: Option<usize>,
    ) -> SequenceResult<LazySequence<impl Iterator<Item = T> + use<T>>> {
        self.lazy().slice(start, stop)
    }

    /// See [`LazySequence::range`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidSlice`] for an empty bounded range.
    pub fn range<R>(&self, bounds: R) -> SequenceResult<LazySequence<impl Iterator<Item = T> + use<T, R>>>
    where
        R: RangeBounds<usize>,
    {
        self.lazy().range(bounds)
    }

    /// See [`LazySequence::stepped`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NotSupported`] for any step other than 1.
    pub fn stepped<R>(
        &self,
        bounds: R,
        step: usize,
    ) -> SequenceResult<LazySequence<impl Iterator<Item = T> + use<T, R>>>
    where
        R: RangeBounds<usize>,
    {
        self.lazy().stepped(bounds, step)
    }

    /// Reports progress to `reporter` over a fresh traversal.
    ///
    /// Unlike the lazy form, the reporter is started with the known length.
    pub fn with_progress<R>(&self, reporter: R) -> LazySequence<impl Iterator<Item = T> + use<T, R>>
    where
        R: ProgressReporter,
    {
        LazySequence::new(Progress::new(self.cursor(), reporter, Some(self.len())))
    }

    /// [`with_progress`](Self::with_progress) with the default
    /// [`TracingProgress`] reporter.
    pub fn show_progress(&self) -> LazySequence<impl Iterator<Item = T> + use<T>> {
        self.with_progress(TracingProgress::default())
    }

    /// See [`LazySequence::parallel_map`].
    pub fn parallel_map<'pool, P, U, F>(
        &self,
        pool: &'pool P,
        function: F,
    ) -> LazySequence<impl Iterator<Item = U> + use<'pool, T, P, U, F>>
    where
        P: WorkerPool,
        F: Fn(T) -> U + Sync,
        T: Send,
        U: Send,
    {
        self.lazy().parallel_map(pool, function)
    }

    // =========================================================================
    // Consumers
    // =========================================================================

    /// Left-folds every element, starting from `initial`.
    pub fn reduce<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.lazy().reduce(initial, function)
    }

    /// Synonym of [`reduce`](Self::reduce).
    pub fn fold_left<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.reduce(initial, function)
    }

    /// See [`LazySequence::try_reduce`].
    ///
    /// # Errors
    ///
    /// Returns the first `Err` produced by `function`, unchanged.
    pub fn try_reduce<B, E, F>(&self, initial: B, function: F) -> Result<B, E>
    where
        F: FnMut(B, T) -> Result<B, E>,
    {
        self.lazy().try_reduce(initial, function)
    }

    /// See [`LazySequence::reduce_first`].
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is empty.
    pub fn reduce_first<F>(&self, function: F) -> SequenceResult<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.lazy().reduce_first(function)
    }

    /// Clones every element into a `Vec`, in order.
    #[must_use]
    pub fn to_list(&self) -> Vec<T> {
        self.elements.to_vec()
    }

    /// Clones the distinct elements into a `HashSet`.
    #[must_use]
    pub fn to_set(&self) -> HashSet<T>
    where
        T: Eq + Hash,
    {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// FrozenCursor
// =============================================================================

/// An owning traversal of a [`FrozenSequence`], created by
/// [`FrozenSequence::cursor`].
///
/// Elements are cloned out of the shared slice as they are pulled.
pub struct FrozenCursor<T> {
    elements: ReferenceCounter<[T]>,
    position: usize,
}

impl<T: Clone> Iterator for FrozenCursor<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let element = self.elements.get(self.position)?.clone();
        self.position += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }

    fn nth(&mut self, count: usize) -> Option<T> {
        self.position = self.position.saturating_add(count).min(self.elements.len());
        self.next()
    }
}

impl<T: Clone> ExactSizeIterator for FrozenCursor<T> {}

impl<T: Clone> FusedIterator for FrozenCursor<T> {}

impl<T> Clone for FrozenCursor<T> {
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
            position: self.position,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FrozenCursor<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FrozenCursor")
            .field("remaining", &self.elements.get(self.position..).unwrap_or_default())
            .finish()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Clone for FrozenSequence<T> {
    fn clone(&self) -> Self {
        Self {
            elements: ReferenceCounter::clone(&self.elements),
        }
    }
}

impl<T> Default for FrozenSequence<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: PartialEq> PartialEq for FrozenSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements[..] == other.elements[..]
    }
}

impl<T: Eq> Eq for FrozenSequence<T> {}

impl<T: fmt::Debug> fmt::Debug for FrozenSequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Index<usize> for FrozenSequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T> From<Vec<T>> for FrozenSequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for FrozenSequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::new(Vec::from(elements))
    }
}

impl<T: Clone> From<&[T]> for FrozenSequence<T> {
    fn from(elements: &[T]) -> Self {
        Self::new(elements.to_vec())
    }
}

impl<T> From<VecDeque<T>> for FrozenSequence<T> {
    fn from(elements: VecDeque<T>) -> Self {
        Self::new(Vec::from(elements))
    }
}

impl<T> FromIterator<T> for FrozenSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Clone> IntoIterator for FrozenSequence<T> {
    type Item = T;
    type IntoIter = FrozenCursor<T>;

    fn into_iter(self) -> FrozenCursor<T> {
        FrozenCursor {
            elements: self.elements,
            position: 0,
        }
    }
}

impl<'a, T> IntoIterator for &'a FrozenSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static_assertions::assert_not_impl_any!(FrozenSequence<i32>: Iterator);
static_assertions::assert_not_impl_any!(FrozenSequence<i32>: From<HashSet<i32>>);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(FrozenSequence<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for FrozenSequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct FrozenSequenceVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> FrozenSequenceVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for FrozenSequenceVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = FrozenSequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(FrozenSequence::new(elements))
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for FrozenSequence<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(FrozenSequenceVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
