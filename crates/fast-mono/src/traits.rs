//! Core traits for fast-mono element types and input validation.
//!
//! # Overview
//!
//! [`SeriesElement`] is the bound on every sequence the monotonic algorithms
//! scan. It only asks for comparison and cheap copies, so integers, floats,
//! `char` and any other ordered `Copy` type qualify. [`HeightElement`] adds the
//! integer arithmetic needed to compute histogram areas.
//!
//! [`ValidatedInput`] and the free `validate_*` functions reject invalid
//! parameters before any processing begins.
//!
//! # Example
//!
//! ```
//! use fast_mono::traits::{validate_window, ValidatedInput};
//!
//! let data = vec![4, 1, 3];
//! assert!(validate_window(&data, 2).is_ok());
//! assert!(data.validate_window(4).is_err());
//! ```

use std::fmt::Debug;

use num_traits::{NumCast, PrimInt};
use tracing::debug;

use crate::error::{Error, Result};

/// A trait for types that can be used as elements in a scanned sequence.
///
/// # Type Bounds
///
/// - `PartialOrd`: the eviction predicates compare elements pairwise
/// - `Copy`: values are read by index and returned by value
/// - `Debug`: values appear in trace output
///
/// Pairs that do not compare (a NaN against anything) never satisfy an
/// eviction predicate, so such values neither evict nor get evicted by
/// comparison.
pub trait SeriesElement: PartialOrd + Copy + Debug + Send + Sync + 'static {}

// Blanket implementation for all types that satisfy the bounds
impl<T: PartialOrd + Copy + Debug + Send + Sync + 'static> SeriesElement for T {}

/// Integer bar heights for the histogram algorithms.
pub trait HeightElement: SeriesElement + PrimInt {
    /// Converts a `usize` width into the height type.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize width to height type",
        })
    }

    /// Returns true if the height is below zero.
    #[inline]
    #[must_use]
    fn is_below_zero(self) -> bool {
        self < Self::zero()
    }
}

impl<T: SeriesElement + PrimInt> HeightElement for T {}

/// Trait for validating input data before computation.
pub trait ValidatedInput {
    /// The element type of the series.
    type Element: SeriesElement;

    /// Returns the length of the series.
    fn len(&self) -> usize;

    /// Returns true if the series is empty.
    #[inline]
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates a sliding window size against this series.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the window is zero, or larger than a
    /// non-empty series.
    #[inline]
    fn validate_window(&self, window: usize) -> Result<()> {
        let len = self.len();
        if window == 0 {
            debug!(window, len, "rejecting zero window");
            return Err(Error::InvalidWindow {
                window,
                len,
                reason: "window must be at least 1",
            });
        }
        if len > 0 && window > len {
            debug!(window, len, "rejecting window longer than input");
            return Err(Error::InvalidWindow {
                window,
                len,
                reason: "window must not exceed input length",
            });
        }
        Ok(())
    }

    /// Validates that an output buffer can hold `required` values.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientData` if the series is shorter than `required`.
    #[inline]
    fn validate_output_len(&self, required: usize) -> Result<()> {
        if self.len() < required {
            debug!(required, actual = self.len(), "output buffer too short");
            Err(Error::InsufficientData {
                required,
                actual: self.len(),
            })
        } else {
            Ok(())
        }
    }
}

impl<T: SeriesElement> ValidatedInput for [T] {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: SeriesElement> ValidatedInput for Vec<T> {
    type Element = T;

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

/// Validates that `window` is usable for a sliding pass over `data`.
///
/// Empty data accepts any non-zero window: the pass simply yields nothing.
///
/// # Errors
///
/// Returns `Error::InvalidWindow` if the window is zero or exceeds the length
/// of non-empty data.
#[inline]
pub fn validate_window<T: SeriesElement>(data: &[T], window: usize) -> Result<()> {
    data.validate_window(window)
}

/// Validates that every histogram bar is non-negative.
///
/// # Errors
///
/// Returns `Error::NegativeHeight` with the first offending index.
pub fn validate_heights<T: HeightElement>(heights: &[T]) -> Result<()> {
    match heights.iter().position(|h| h.is_below_zero()) {
        Some(index) => {
            debug!(index, "rejecting negative histogram height");
            Err(Error::NegativeHeight { index })
        }
        None => Ok(()),
    }
}
