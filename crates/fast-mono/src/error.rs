//! Error types for fast-mono.
//!
//! This module defines the error types used throughout the fast-mono library
//! for handling invalid parameters and unrepresentable results.
//!
//! Empty input is never an error: every algorithm defines an empty or zero
//! result for it instead.

use thiserror::Error;

/// The main error type for fast-mono operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The sliding window size is invalid for the given input.
    ///
    /// Returned when the window is zero, or larger than a non-empty input.
    #[error("invalid window {window} for input of length {len}: {reason}")]
    InvalidWindow {
        /// The window size that was provided.
        window: usize,
        /// The length of the input sequence.
        len: usize,
        /// Description of why the window is invalid.
        reason: &'static str,
    },

    /// A comparison mode name could not be recognised.
    ///
    /// Raised while parsing configuration, before any processing begins.
    #[error("unsupported mode {mode:?}")]
    UnsupportedMode {
        /// The mode string that was rejected.
        mode: String,
    },

    /// A caller-provided output buffer is too short.
    #[error("insufficient data: required {required} elements, got {actual}")]
    InsufficientData {
        /// The number of elements required.
        required: usize,
        /// The number of elements provided.
        actual: usize,
    },

    /// A histogram bar has a negative height.
    #[error("negative height at index {index}")]
    NegativeHeight {
        /// Position of the offending bar.
        index: usize,
    },

    /// A rectangle area does not fit in the height type.
    #[error("rectangle area overflows at index {index}")]
    AreaOverflow {
        /// Position of the bar whose rectangle overflowed.
        index: usize,
    },

    /// Failed to convert a numeric value to the target type.
    ///
    /// This error occurs when using `NumCast::from()` to convert a `usize`
    /// width into the height type and the conversion fails.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// The rows of a binary matrix do not all have the same length.
    #[error("ragged matrix: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        /// Index of the first row with a different length.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        actual: usize,
    },
}

/// Convenience type alias for Results using the fast-mono Error type.
pub type Result<T> = std::result::Result<T, Error>;
