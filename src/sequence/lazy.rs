//! Single-use lazy sequences.
//!
//! A [`LazySequence`] owns exactly one fused cursor. Stage operations move
//! the cursor into a new deferred adapter and return a new `LazySequence`;
//! consumption operations advance it. Building a chain never pulls an
//! element.
//!
//! # Examples
//!
//! ```rust
//! use funcflow::sequence::lazy;
//!
//! let mut sequence = lazy(1..=5).map(|value| value * 2);
//! assert_eq!(sequence.head(), Ok(2));
//!
//! // The cursor is shared by every consumer of this sequence
//! assert_eq!(sequence.to_list(), vec![4, 6, 8, 10]);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::{Fuse, FusedIterator};
use std::ops::{Bound, RangeBounds};

use super::attributes::{Attributes, project_attribute};
use super::frozen::FrozenSequence;
use super::parallel::{ParallelMap, WorkerPool};
use super::progress::{Progress, ProgressReporter, TracingProgress};
use crate::compose::{StarFn, StarPredicate, Unpack};
use crate::error::{SequenceError, SequenceResult};

/// A chainable, single-pass sequence over a cursor `I`.
///
/// Every stage (`map`, `filter`, `slice`, ...) is deferred: it wraps the
/// cursor and returns immediately. Elements are pulled only by consumers
/// such as iteration, [`reduce`](Self::reduce), [`to_list`](Self::to_list),
/// [`head`](Self::head) or [`freeze`](Self::freeze).
///
/// Once an element has been pulled it is gone: iterating an exhausted
/// sequence again yields nothing.
///
/// # Examples
///
/// ```rust
/// use funcflow::sequence::LazySequence;
///
/// let mut sequence = LazySequence::new(vec![1, 2, 3]);
/// for _ in &mut sequence {}
///
/// // Already consumed
/// assert_eq!((&mut sequence).count(), 0);
/// ```
pub struct LazySequence<I> {
    cursor: Fuse<I>,
}

/// Wraps any iterable in a [`LazySequence`].
///
/// # Examples
///
/// ```rust
/// use funcflow::sequence::lazy;
///
/// assert_eq!(lazy(vec![1, 2, 3]).filter(|value| *value > 1).to_list(), vec![2, 3]);
/// ```
#[inline]
pub fn lazy<S: IntoIterator>(source: S) -> LazySequence<S::IntoIter> {
    LazySequence::new(source)
}

/// Turns a function returning any iterable into one returning a
/// [`LazySequence`].
///
/// # Examples
///
/// ```rust
/// use funcflow::sequence::sequence_fn;
///
/// let countdown = sequence_fn(|from: u32| (0..=from).rev());
/// assert_eq!(countdown(3).to_list(), vec![3, 2, 1, 0]);
/// ```
pub fn sequence_fn<Argument, Source, Function>(
    function: Function,
) -> impl Fn(Argument) -> LazySequence<Source::IntoIter>
where
    Function: Fn(Argument) -> Source,
    Source: IntoIterator,
{
    move |argument| LazySequence::new(function(argument))
}

impl<T, Generator> LazySequence<std::iter::FromFn<Generator>>
where
    Generator: FnMut() -> Option<T>,
{
    /// Creates a sequence whose elements are produced by calling `generator`
    /// until it returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::LazySequence;
    ///
    /// let mut next = 0;
    /// let squares = LazySequence::from_fn(move || {
    ///     next += 1;
    ///     (next <= 3).then_some(next * next)
    /// });
    /// assert_eq!(squares.to_list(), vec![1, 4, 9]);
    /// ```
    #[inline]
    pub fn from_fn(generator: Generator) -> Self {
        Self::new(std::iter::from_fn(generator))
    }
}

impl<I: Iterator> LazySequence<I> {
    /// Wraps `source` in a new lazy sequence. Nothing is pulled yet.
    #[inline]
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            cursor: source.into_iter().fuse(),
        }
    }

    // =========================================================================
    // Stages
    // =========================================================================

    /// Applies `function` to each element as it is pulled.
    ///
    /// A panic in `function`, or an `Err` it returns as the element, reaches
    /// the consumer when the matching element is requested, not when the
    /// stage is built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    ///
    /// let parsed = lazy(["1", "x", "3"]).map(|text| text.parse::<i32>());
    /// assert!(parsed.try_to_list().is_err());
    /// ```
    pub fn map<U, F>(self, function: F) -> LazySequence<impl Iterator<Item = U>>
    where
        F: FnMut(I::Item) -> U,
    {
        LazySequence::new(self.cursor.map(function))
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn filter<P>(self, predicate: P) -> LazySequence<impl Iterator<Item = I::Item>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        LazySequence::new(self.cursor.filter(predicate))
    }

    /// Like [`map`](Self::map), with the zero-based position of each element
    /// within this stage's own pull sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    ///
    /// let scaled = lazy(vec![0, 4, 3, 2]).indexed_map(|index, value| index * value);
    /// assert_eq!(scaled.to_list(), vec![0, 4, 6, 6]);
    /// ```
    pub fn indexed_map<U, F>(self, mut function: F) -> LazySequence<impl Iterator<Item = U>>
    where
        F: FnMut(usize, I::Item) -> U,
    {
        LazySequence::new(
            self.cursor
                .enumerate()
                .map(move |(index, element)| function(index, element)),
        )
    }

    /// Like [`filter`](Self::filter), with the zero-based position of each
    /// element within this stage's own pull sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    ///
    /// let kept = lazy(vec![1, 3, 4, 2, 1])
    ///     .indexed_filter(|index, value| value % 2 == 0 && index % 2 == 0);
    /// assert_eq!(kept.to_list(), vec![4]);
    /// ```
    pub fn indexed_filter<P>(
        self,
        mut predicate: P,
    ) -> LazySequence<impl Iterator<Item = I::Item>>
    where
        P: FnMut(usize, &I::Item) -> bool,
    {
        LazySequence::new(
            self.cursor
                .enumerate()
                .filter(move |(index, element)| predicate(*index, element))
                .map(|(_, element)| element),
        )
    }

    /// Spreads each tuple element into the positional arguments of
    /// `function`.
    ///
    /// The element arity must match the function's, which is checked at
    /// compile time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    ///
    /// let sums = lazy((0..5).map(|index| (index, index))).star_map(|x: i32, y: i32| x + y);
    /// assert_eq!(sums.to_list(), vec![0, 2, 4, 6, 8]);
    /// ```
    pub fn star_map<F>(self, mut function: F) -> LazySequence<impl Iterator<Item = F::Output>>
    where
        F: StarFn<I::Item>,
    {
        LazySequence::new(self.cursor.map(move |element| function.call_spread(element)))
    }

    /// Keeps the tuple elements for which `predicate`, called with
    /// references to the tuple fields, returns `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    ///
    /// let odd = lazy((0..10).map(|index| (index, index)))
    ///     .star_filter(|x: &i32, _y: &i32| x % 2 == 1);
    /// assert_eq!(odd.to_list(), vec![(1, 1), (3, 3), (5, 5), (7, 7), (9, 9)]);
    /// ```
    pub fn star_filter<P>(self, mut predicate: P) -> LazySequence<impl Iterator<Item = I::Item>>
    where
        P: StarPredicate<I::Item>,
    {
        LazySequence::new(
            self.cursor
                .filter(move |element| predicate.test_spread(element)),
        )
    }

    /// Unpacks each runtime-sized element (such as a `Vec`) to the arity of
    /// `function` and calls it.
    ///
    /// An element with the wrong number of values yields
    /// `Err(SequenceError::TypeMismatch)` at its position; the remaining
    /// elements are unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    /// use funcflow::SequenceError;
    ///
    /// let mut products = lazy(vec![vec![2, 3], vec![4]]).try_star_map(|a: i32, b: i32| a * b);
    /// assert_eq!(products.head(), Ok(Ok(6)));
    /// assert!(matches!(products.head(), Ok(Err(SequenceError::TypeMismatch { .. }))));
    /// ```
    pub fn try_star_map<Args, F>(
        self,
        mut function: F,
    ) -> LazySequence<impl Iterator<Item = SequenceResult<F::Output>>>
    where
        I::Item: Unpack<Args>,
        F: StarFn<Args>,
    {
        LazySequence::new(self.cursor.map(move |element| {
            element
                .unpack()
                .map(|arguments| function.call_spread(arguments))
        }))
    }

    /// Calls `function` on each element for its side effect and passes the
    /// element through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    ///
    /// let mut seen = Vec::new();
    /// let doubled = lazy(vec![1, 2]).tap(|value| seen.push(*value)).map(|value| value * 2).to_list();
    /// assert_eq!(doubled, vec![2, 4]);
    /// assert_eq!(seen, vec![1, 2]);
    /// ```
    #[doc(alias = "extra_job")]
    pub fn tap<F>(self, function: F) -> LazySequence<impl Iterator<Item = I::Item>>
    where
        F: FnMut(&I::Item),
    {
        LazySequence::new(self.cursor.inspect(function))
    }

    /// Like [`tap`](Self::tap), with the zero-based position of each element
    /// within this stage's own pull sequence.
    pub fn indexed_tap<F>(self, mut function: F) -> LazySequence<impl Iterator<Item = I::Item>>
    where
        F: FnMut(usize, &I::Item),
    {
        LazySequence::new(self.cursor.enumerate().map(move |(index, element)| {
            function(index, &element);
            element
        }))
    }

    /// Projects each element to its attribute called `name`.
    ///
    /// Yields `Err(AttributeMissing)` for an element without such an
    /// attribute and `Err(TypeMismatch)` for one whose attribute is not a
    /// `V`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::{Attributes, lazy};
    ///
    /// #[derive(Attributes)]
    /// struct Complex {
    ///     real: f64,
    ///     imag: f64,
    /// }
    ///
    /// let numbers = vec![
    ///     Complex { real: 1.0, imag: 1.0 },
    ///     Complex { real: 1.0, imag: 2.0 },
    ///     Complex { real: 3.0, imag: 5.0 },
    /// ];
    /// let imaginary = lazy(numbers).attributes::<f64>("imag").try_to_list();
    /// assert_eq!(imaginary, Ok(vec![1.0, 2.0, 5.0]));
    /// ```
    pub fn attributes<V>(
        self,
        name: &str,
    ) -> LazySequence<impl Iterator<Item = SequenceResult<V>> + use<I, V>>
    where
        I::Item: Attributes,
        V: Clone + 'static,
    {
        let name = name.to_owned();
        LazySequence::new(
            self.cursor
                .map(move |element| project_attribute(&element, &name)),
        )
    }

    /// Re-states the element type as `U`.
    ///
    /// This is the identity: it performs no conversion and only compiles
    /// when the elements already are `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    ///
    /// let floats = lazy(vec![1, 2, 3]).map(f64::from).cast::<f64>();
    /// assert_eq!(floats.to_list(), vec![1.0, 2.0, 3.0]);
    /// ```
    #[inline]
    pub fn cast<U>(self) -> Self
    where
        I: Iterator<Item = U>,
    {
        self
    }

    /// Selects the elements at pull positions `[start, stop)`, or from
    /// `start` to exhaustion when `stop` is `None`.
    ///
    /// Positions count from the cursor's current point, so slicing a
    /// partially consumed sequence continues from where it stands.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidSlice`] when `stop` is given and
    /// `start >= stop`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    ///
    /// assert_eq!(lazy(0..5).slice(1, Some(3)).unwrap().to_list(), vec![1, 2]);
    /// assert_eq!(lazy(0..5).slice(2, None).unwrap().to_list(), vec![2, 3, 4]);
    /// assert!(lazy(0..5).slice(3, Some(3)).is_err());
    /// ```
    pub fn slice(
        self,
        start: usize,
        stop: Option<usize>,
    ) -> SequenceResult<LazySequence<impl Iterator<Item = I::Item>>> {
        let length = match stop {
            Some(stop) if start >= stop => {
                return Err(SequenceError::InvalidSlice { start, stop });
            }
            Some(stop) => stop - start,
            None => usize::MAX,
        };
        Ok(LazySequence::new(self.cursor.skip(start).take(length)))
    }

    /// Subscript-style slicing with a range: `..2`, `2..`, `1..3`, `1..=3`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidSlice`] for an empty bounded range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    ///
    /// assert_eq!(lazy(0..5).range(..2).unwrap().to_list(), vec![0, 1]);
    /// assert_eq!(lazy(0..5).range(2..).unwrap().to_list(), vec![2, 3, 4]);
    /// ```
    pub fn range<R>(self, bounds: R) -> SequenceResult<LazySequence<impl Iterator<Item = I::Item>>>
    where
        R: RangeBounds<usize>,
    {
        let start = match bounds.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let stop = match bounds.end_bound() {
            Bound::Included(&stop) => Some(stop.saturating_add(1)),
            Bound::Excluded(&stop) => Some(stop),
            Bound::Unbounded => None,
        };
        self.slice(start, stop)
    }

    /// Range slicing with a step. Only a step of 1 is supported.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::NotSupported`] for any other step, and the
    /// errors of [`range`](Self::range) otherwise.
    pub fn stepped<R>(
        self,
        bounds: R,
        step: usize,
    ) -> SequenceResult<LazySequence<impl Iterator<Item = I::Item>>>
    where
        R: RangeBounds<usize>,
    {
        if step != 1 {
            return Err(SequenceError::NotSupported {
                operation: "stepped slicing",
            });
        }
        self.range(bounds)
    }

    /// Reports progress to `reporter` while passing elements through.
    ///
    /// The reporter is started on the first pull with an unknown total,
    /// incremented once per element and finished at exhaustion.
    pub fn with_progress<R>(self, reporter: R) -> LazySequence<impl Iterator<Item = I::Item>>
    where
        R: ProgressReporter,
    {
        LazySequence::new(Progress::new(self.cursor, reporter, None))
    }

    /// [`with_progress`](Self::with_progress) with the default
    /// [`TracingProgress`] reporter.
    pub fn show_progress(self) -> LazySequence<impl Iterator<Item = I::Item>> {
        self.with_progress(TracingProgress::default())
    }

    /// Maps `function` over the elements on a [`WorkerPool`], preserving
    /// input order.
    ///
    /// Up to `pool.width()` elements are pulled and handed over as one batch;
    /// their results are yielded before the next batch is pulled. With
    /// [`SequentialPool`](super::SequentialPool) this behaves like
    /// [`map`](Self::map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::{SequentialPool, lazy};
    ///
    /// let squares = lazy(1..=4).parallel_map(&SequentialPool, |value: i32| value * value);
    /// assert_eq!(squares.to_list(), vec![1, 4, 9, 16]);
    /// ```
    pub fn parallel_map<P, U, F>(
        self,
        pool: &P,
        function: F,
    ) -> LazySequence<impl Iterator<Item = U>>
    where
        P: WorkerPool,
        F: Fn(I::Item) -> U + Sync,
        I::Item: Send,
        U: Send,
    {
        LazySequence::new(ParallelMap::new(self.cursor, pool, function))
    }

    // =========================================================================
    // Consumers
    // =========================================================================

    /// Left-folds the remaining elements, starting from `initial`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    ///
    /// assert_eq!(lazy(1..=5).reduce(0, |sum, value| sum + value), 15);
    /// ```
    pub fn reduce<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.cursor.fold(initial, function)
    }

    /// Synonym of [`reduce`](Self::reduce).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use funcflow::sequence::lazy;
    ///
    /// let scores = lazy(vec![("Alice", 98), ("Bob", 76)]).fold_left(
    ///     HashMap::new(),
    ///     |mut scores, (name, score)| {
    ///         scores.insert(name, score);
    ///         scores
    ///     },
    /// );
    /// assert_eq!(scores["Bob"], 76);
    /// ```
    #[inline]
    pub fn fold_left<B, F>(self, initial: B, function: F) -> B
    where
        F: FnMut(B, I::Item) -> B,
    {
        self.reduce(initial, function)
    }

    /// Left-folds with a fallible step, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` produced by `function`, unchanged.
    pub fn try_reduce<B, E, F>(mut self, initial: B, function: F) -> Result<B, E>
    where
        F: FnMut(B, I::Item) -> Result<B, E>,
    {
        self.cursor.try_fold(initial, function)
    }

    /// Left-folds the remaining elements, seeding the accumulator with the
    /// first of them.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if no element remains.
    pub fn reduce_first<F>(mut self, function: F) -> SequenceResult<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        let first = self.cursor.next().ok_or(SequenceError::EmptySequence)?;
        Ok(self.cursor.fold(first, function))
    }

    /// Pulls and discards every remaining element.
    pub fn exhaust(&mut self) {
        self.cursor.by_ref().for_each(drop);
    }

    /// Collects the remaining elements in order.
    pub fn to_list(self) -> Vec<I::Item> {
        self.cursor.collect()
    }

    /// Collects the distinct remaining elements.
    pub fn to_set(self) -> HashSet<I::Item>
    where
        I::Item: Eq + Hash,
    {
        self.cursor.collect()
    }

    /// Materializes the remaining elements into a [`FrozenSequence`].
    pub fn freeze(self) -> FrozenSequence<I::Item> {
        let elements: Vec<I::Item> = self.cursor.collect();
        tracing::debug!(length = elements.len(), "froze lazy sequence");
        FrozenSequence::new(elements)
    }

    /// Pulls exactly one element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the sequence is
    /// exhausted, on this and every later call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    /// use funcflow::SequenceError;
    ///
    /// let mut sequence = lazy(vec![1, 2]);
    /// assert_eq!(sequence.head(), Ok(1));
    /// assert_eq!(sequence.head(), Ok(2));
    /// assert_eq!(sequence.head(), Err(SequenceError::EmptySequence));
    /// assert_eq!(sequence.head(), Err(SequenceError::EmptySequence));
    /// ```
    pub fn head(&mut self) -> SequenceResult<I::Item> {
        self.cursor.next().ok_or(SequenceError::EmptySequence)
    }

    /// Pulls the element at pull position `index`, discarding the ones
    /// before it.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptySequence`] if the cursor ends first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funcflow::sequence::lazy;
    ///
    /// assert_eq!(lazy(0..5).at(3), Ok(3));
    /// ```
    pub fn at(&mut self, index: usize) -> SequenceResult<I::Item> {
        self.cursor.nth(index).ok_or(SequenceError::EmptySequence)
    }
}

impl<I, T, E> LazySequence<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    /// Collects the `Ok` values in order, stopping at the first `Err`.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` element, unchanged.
    pub fn try_to_list(self) -> Result<Vec<T>, E> {
        self.cursor.collect()
    }

    /// Pulls every remaining element, stopping at the first `Err`.
    ///
    /// # Errors
    ///
    /// Returns the first `Err` element, unchanged.
    pub fn try_exhaust(&mut self) -> Result<(), E> {
        self.cursor.by_ref().try_for_each(|element| element.map(drop))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<I: Iterator> Iterator for LazySequence<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<I: Iterator> FusedIterator for LazySequence<I> {}

impl<I> fmt::Debug for LazySequence<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazySequence")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_stages_do_not_pull() {
        let pulled = Cell::new(0);
        let source = std::iter::from_fn(|| {
            pulled.set(pulled.get() + 1);
            Some(1)
        });

        let _chain = lazy(source)
            .map(|value| value + 1)
            .filter(|value| *value > 0)
            .tap(|_| {});

        assert_eq!(pulled.get(), 0);
    }

    #[rstest]
    fn test_exhausted_sequence_stays_empty() {
        let mut sequence = lazy(vec![1, 2, 3]);
        sequence.exhaust();
        assert_eq!(sequence.head(), Err(SequenceError::EmptySequence));
        assert_eq!(sequence.to_list(), Vec::<i32>::new());
    }

    #[rstest]
    #[case(0, Some(3), vec![0, 1, 2])]
    #[case(1, Some(3), vec![1, 2])]
    #[case(2, None, vec![2, 3, 4])]
    #[case(7, None, vec![])]
    fn test_slice(#[case] start: usize, #[case] stop: Option<usize>, #[case] expected: Vec<i32>) {
        assert_eq!(lazy(0..5).slice(start, stop).unwrap().to_list(), expected);
    }

    #[rstest]
    fn test_slice_rejects_empty_bounded_range() {
        assert_eq!(
            lazy(0..5).slice(3, Some(2)).err(),
            Some(SequenceError::InvalidSlice { start: 3, stop: 2 })
        );
    }

    #[rstest]
    fn test_slice_does_not_pull_past_stop() {
        let mut source = 0..5;
        let taken = lazy(source.by_ref()).slice(0, Some(2)).unwrap().to_list();
        assert_eq!(taken, vec![0, 1]);
        assert_eq!(source.next(), Some(2));
    }

    #[rstest]
    fn test_stepped_rejects_step() {
        assert_eq!(
            lazy(0..5).stepped(0..3, 2).err(),
            Some(SequenceError::NotSupported {
                operation: "stepped slicing"
            })
        );
        assert_eq!(lazy(0..5).stepped(0..3, 1).unwrap().to_list(), vec![0, 1, 2]);
    }

    #[rstest]
    fn test_reduce_first_on_empty() {
        let empty: Vec<i32> = Vec::new();
        assert_eq!(
            lazy(empty).reduce_first(|left, right| left + right),
            Err(SequenceError::EmptySequence)
        );
        assert_eq!(lazy(1..=5).reduce_first(|left, right| left + right), Ok(15));
    }

    #[rstest]
    fn test_try_reduce_stops_at_first_error() {
        let visited = Cell::new(0);
        let result = lazy(1..=5).try_reduce(0, |sum, value| {
            visited.set(visited.get() + 1);
            if value == 3 { Err("three") } else { Ok(sum + value) }
        });
        assert_eq!(result, Err("three"));
        assert_eq!(visited.get(), 3);
    }

    #[rstest]
    fn test_debug_does_not_consume() {
        let mut sequence = lazy(vec![1]);
        assert_eq!(format!("{sequence:?}"), "LazySequence { .. }");
        assert_eq!(sequence.head(), Ok(1));
    }
}
