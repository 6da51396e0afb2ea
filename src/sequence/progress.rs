//! Progress reporting for long-running pipelines.
//!
//! A [`ProgressReporter`] observes a traversal: it is started on the first
//! pull, incremented per element and finished at exhaustion. Reporters
//! never see or alter the elements.
//!
//! - [`TracingProgress`]: structured `tracing` events every `log_every`
//!   elements and at finish
//! - [`SilentProgress`]: discards every signal
//! - `ProgressBarReporter`: a terminal progress bar (feature `progress-bar`)

use std::iter::FusedIterator;

/// Observer of a traversal's progress.
///
/// # Examples
///
/// ```rust
/// use funcflow::sequence::{ProgressReporter, lazy};
///
/// #[derive(Default)]
/// struct Counter {
///     total: Option<usize>,
///     seen: usize,
///     finished: bool,
/// }
///
/// impl ProgressReporter for Counter {
///     fn start(&mut self, total: Option<usize>) {
///         self.total = total;
///     }
///     fn increment(&mut self, count: usize) {
///         self.seen += count;
///     }
///     fn finish(&mut self) {
///         self.finished = true;
///     }
/// }
///
/// let mut counter = Counter::default();
/// let doubled = lazy(1..=3).with_progress(&mut counter).map(|value| value * 2).to_list();
///
/// assert_eq!(doubled, vec![2, 4, 6]);
/// assert_eq!((counter.total, counter.seen, counter.finished), (None, 3, true));
/// ```
pub trait ProgressReporter {
    /// Called once, before the first element, with the total if known.
    fn start(&mut self, total: Option<usize>) {
        let _ = total;
    }

    /// Called after `count` more elements have passed.
    fn increment(&mut self, count: usize);

    /// Called once, when the traversal is exhausted.
    fn finish(&mut self) {}
}

impl<R: ProgressReporter + ?Sized> ProgressReporter for &mut R {
    fn start(&mut self, total: Option<usize>) {
        (**self).start(total);
    }

    fn increment(&mut self, count: usize) {
        (**self).increment(count);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

impl<R: ProgressReporter + ?Sized> ProgressReporter for Box<R> {
    fn start(&mut self, total: Option<usize>) {
        (**self).start(total);
    }

    fn increment(&mut self, count: usize) {
        (**self).increment(count);
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Settings for [`TracingProgress`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Attached to every event as the `label` field.
    pub label: String,
    /// Emit a progress event every this many elements. `0` is treated as `1`.
    pub log_every: usize,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            label: "sequence".to_owned(),
            log_every: 100,
        }
    }
}

impl ProgressConfig {
    /// Creates a configuration with `label` and the default interval.
    #[must_use]
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the event interval.
    #[must_use]
    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }

    const fn interval(&self) -> usize {
        if self.log_every == 0 { 1 } else { self.log_every }
    }
}

// =============================================================================
// Reporters
// =============================================================================

/// Reports progress as `info` events on the `tracing` facade.
///
/// Each event carries `label`, `position` and `total` fields. No subscriber
/// is installed; without one the events are discarded.
#[derive(Debug, Clone, Default)]
pub struct TracingProgress {
    config: ProgressConfig,
    total: Option<usize>,
    position: usize,
}

impl TracingProgress {
    /// Creates a reporter with `config`.
    #[must_use]
    pub const fn new(config: ProgressConfig) -> Self {
        Self {
            config,
            total: None,
            position: 0,
        }
    }

    /// Number of elements reported so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Total given at start, if any.
    #[must_use]
    pub const fn total(&self) -> Option<usize> {
        self.total
    }
}

impl ProgressReporter for TracingProgress {
    fn start(&mut self, total: Option<usize>) {
        self.total = total;
        self.position = 0;
        tracing::info!(label = %self.config.label, total = ?total, "progress started");
    }

    fn increment(&mut self, count: usize) {
        let interval = self.config.interval();
        let before = self.position / interval;
        self.position = self.position.saturating_add(count);
        if self.position / interval > before {
            tracing::info!(
                label = %self.config.label,
                position = self.position,
                total = ?self.total,
                "progress"
            );
        }
    }

    fn finish(&mut self) {
        tracing::info!(
            label = %self.config.label,
            position = self.position,
            total = ?self.total,
            "progress finished"
        );
    }
}

/// A reporter that ignores every signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn increment(&mut self, _count: usize) {}
}

/// Draws an `indicatif` progress bar, or a counter when the total is
/// unknown.
#[cfg(feature = "progress-bar")]
#[derive(Debug, Clone, Default)]
pub struct ProgressBarReporter {
    bar: Option<indicatif::ProgressBar>,
    hidden: bool,
}

#[cfg(feature = "progress-bar")]
impl ProgressBarReporter {
    const BOUNDED_TEMPLATE: &'static str = "{bar:40} {pos}/{len} [{elapsed_precise}<{eta_precise}]";
    const UNBOUNDED_TEMPLATE: &'static str = "{spinner} {pos} it [{elapsed_precise}]";

    /// Creates a reporter drawing to standard error.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reporter that tracks progress without drawing.
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            bar: None,
            hidden: true,
        }
    }

    /// Position of the bar, `0` before start.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, indicatif::ProgressBar::position)
    }

    /// Length of the bar, if it was started with a known total.
    #[must_use]
    pub fn length(&self) -> Option<u64> {
        self.bar.as_ref().and_then(indicatif::ProgressBar::length)
    }
}

#[cfg(feature = "progress-bar")]
impl ProgressReporter for ProgressBarReporter {
    fn start(&mut self, total: Option<usize>) {
        use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

        let length = total.map(|total| u64::try_from(total).unwrap_or(u64::MAX));
        let target = if self.hidden {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        let bar = ProgressBar::with_draw_target(length, target);
        let template = if length.is_some() {
            Self::BOUNDED_TEMPLATE
        } else {
            Self::UNBOUNDED_TEMPLATE
        };
        if let Ok(style) = ProgressStyle::with_template(template) {
            bar.set_style(style);
        }
        self.bar = Some(bar);
    }

    fn increment(&mut self, count: usize) {
        if let Some(bar) = &self.bar {
            bar.inc(u64::try_from(count).unwrap_or(u64::MAX));
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = &self.bar {
            bar.finish();
        }
    }
}

// =============================================================================
// Adapter
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pending,
    Running,
    Finished,
}

/// Passes elements through while driving a [`ProgressReporter`].
pub(crate) struct Progress<I, R> {
    cursor: I,
    reporter: R,
    total: Option<usize>,
    phase: Phase,
}

impl<I, R> Progress<I, R> {
    pub(crate) const fn new(cursor: I, reporter: R, total: Option<usize>) -> Self {
        Self {
            cursor,
            reporter,
            total,
            phase: Phase::Pending,
        }
    }
}

impl<I: Iterator, R: ProgressReporter> Iterator for Progress<I, R> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        match self.phase {
            Phase::Finished => return None,
            Phase::Pending => {
                self.reporter.start(self.total);
                self.phase = Phase::Running;
            }
            Phase::Running => {}
        }
        if let Some(element) = self.cursor.next() {
            self.reporter.increment(1);
            Some(element)
        } else {
            self.reporter.finish();
            self.phase = Phase::Finished;
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Finished => (0, Some(0)),
            _ => self.cursor.size_hint(),
        }
    }
}

impl<I: Iterator, R: ProgressReporter> FusedIterator for Progress<I, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Default)]
    struct Recording {
        events: Vec<String>,
    }

    impl ProgressReporter for Recording {
        fn start(&mut self, total: Option<usize>) {
            self.events.push(format!("start {total:?}"));
        }

        fn increment(&mut self, count: usize) {
            self.events.push(format!("increment {count}"));
        }

        fn finish(&mut self) {
            self.events.push("finish".to_owned());
        }
    }

    #[rstest]
    fn test_adapter_signals_in_order() {
        let mut recording = Recording::default();
        let collected: Vec<i32> =
            Progress::new(vec![1, 2].into_iter(), &mut recording, Some(2)).collect();
        assert_eq!(collected, vec![1, 2]);
        assert_eq!(
            recording.events,
            vec!["start Some(2)", "increment 1", "increment 1", "finish"]
        );
    }

    #[rstest]
    fn test_adapter_is_idle_until_pulled() {
        let mut recording = Recording::default();
        drop(Progress::new(0..3, &mut recording, None));
        assert!(recording.events.is_empty());
    }

    #[rstest]
    fn test_adapter_finishes_once() {
        let mut recording = Recording::default();
        let mut progress = Progress::new(std::iter::empty::<i32>(), &mut recording, None);
        assert_eq!(progress.next(), None);
        assert_eq!(progress.next(), None);
        drop(progress);
        assert_eq!(recording.events, vec!["start None", "finish"]);
    }

    #[rstest]
    #[case(0, 5, 5)]
    #[case(1, 5, 5)]
    #[case(2, 5, 5)]
    #[case(100, 5, 5)]
    fn test_tracing_progress_counts(
        #[case] log_every: usize,
        #[case] increments: usize,
        #[case] expected: usize,
    ) {
        let mut reporter =
            TracingProgress::new(ProgressConfig::labelled("test").with_log_every(log_every));
        reporter.start(Some(increments));
        for _ in 0..increments {
            reporter.increment(1);
        }
        reporter.finish();
        assert_eq!(reporter.position(), expected);
        assert_eq!(reporter.total(), Some(increments));
    }

    #[rstest]
    fn test_zero_interval_is_treated_as_one() {
        assert_eq!(ProgressConfig::labelled("x").with_log_every(0).interval(), 1);
    }
}
