//! Error types for sequence pipelines.
//!
//! Every failure the pipeline itself can produce is a [`SequenceError`].
//! Errors raised by user-supplied functions are never wrapped: they travel
//! inside the sequence's elements (or out of [`try_reduce`]) unchanged.
//!
//! [`try_reduce`]: crate::sequence::LazySequence::try_reduce

use thiserror::Error;

/// Convenience result type for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Errors produced by lazy and frozen sequences.
///
/// # Examples
///
/// ```rust
/// use funcflow::error::SequenceError;
///
/// let error = SequenceError::AttributeMissing { name: "imag".to_string() };
/// assert_eq!(format!("{error}"), "attribute `imag` is missing on an element");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A consumer needed an element but the sequence had none left.
    #[error("sequence is empty")]
    EmptySequence,

    /// An element did not have the shape an operation required.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// What the operation needed.
        expected: String,
        /// What the element actually provided.
        found: String,
    },

    /// A named projection was requested that an element does not expose.
    #[error("attribute `{name}` is missing on an element")]
    AttributeMissing {
        /// The requested attribute name.
        name: String,
    },

    /// The requested form of an operation is not available.
    #[error("{operation} is not supported")]
    NotSupported {
        /// Description of the rejected operation.
        operation: &'static str,
    },

    /// A bounded slice whose start is not before its stop.
    #[error("invalid slice: start {start} must be less than stop {stop}")]
    InvalidSlice {
        /// Inclusive start position.
        start: usize,
        /// Exclusive stop position.
        stop: usize,
    },

    /// Indexed access past the end of a frozen sequence.
    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of elements held.
        length: usize,
    },

    /// A worker pool could not be configured or started.
    #[error("worker pool configuration error: {message}")]
    Configuration {
        /// Description of the failure.
        message: String,
    },
}

#[cfg_attr(not(feature = "sequence"), allow(dead_code))]
impl SequenceError {
    pub(crate) fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
