//! Sliding-window maximum and minimum.
//!
//! For a window of `k` elements sliding left to right over `n` elements, these
//! functions report the extremum of each of the `n - k + 1` windows.
//!
//! # Algorithm
//!
//! A [`MonotonicDeque`] keeps the indices that can still become a window
//! extremum. Each new index evicts the indices it dominates from the back,
//! the index that slid out of the window leaves from the front, and the front
//! is the answer once the first window is complete.
//!
//! # Complexity
//!
//! - Time: O(n), compared to O(n×k) for the naive scan
//! - Space: O(n - k + 1) for output + O(k) for the deque
//!
//! # Edge Cases
//!
//! - `k == 1`: output equals input
//! - `k == n`: a single output, the global extremum
//! - empty input: empty output
//! - `k == 0`, or `k > n` for non-empty input: `Error::InvalidWindow`
//!
//! # Example
//!
//! ```
//! use fast_mono::patterns::sliding_window::{sliding_max, sliding_min};
//!
//! let data = [1, 3, -1, -3, 5, 3, 6, 7];
//! assert_eq!(sliding_max(&data, 3).unwrap(), vec![3, 3, 5, 5, 6, 7]);
//! assert_eq!(sliding_min(&data, 3).unwrap(), vec![-1, -3, -3, -3, 3, 3]);
//! ```

use tracing::trace;

use crate::config::Extremum;
use crate::error::Result;
use crate::kernels::monotonic_deque::MonotonicDeque;
use crate::traits::{SeriesElement, ValidatedInput};

/// Returns the number of windows of `window` elements in `len` elements.
///
/// Zero when the window is zero or longer than the input.
///
/// # Example
///
/// ```
/// use fast_mono::patterns::sliding_window::sliding_output_len;
///
/// assert_eq!(sliding_output_len(8, 3), 6);
/// assert_eq!(sliding_output_len(3, 3), 1);
/// assert_eq!(sliding_output_len(0, 3), 0);
/// ```
#[inline]
#[must_use]
pub const fn sliding_output_len(len: usize, window: usize) -> usize {
    if window == 0 || window > len {
        0
    } else {
        len - window + 1
    }
}

/// Output structure containing both sliding maximum and minimum.
///
/// Both vectors hold one value per window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingExtremaOutput<T> {
    /// The window maximums.
    pub max: Vec<T>,
    /// The window minimums.
    pub min: Vec<T>,
}

/// Computes the extremum of every window of `window` elements.
///
/// Windows made only of values that do not compare with themselves (NaN)
/// report the newest such value.
///
/// # Errors
///
/// Returns `Error::InvalidWindow` if the window is zero or longer than a
/// non-empty input.
///
/// # Example
///
/// ```
/// use fast_mono::config::Extremum;
/// use fast_mono::patterns::sliding_window::sliding_extremum;
///
/// let data = [4.0_f64, 2.0, 12.0, 3.0];
/// assert_eq!(sliding_extremum(&data, 2, Extremum::Min).unwrap(), vec![2.0, 2.0, 3.0]);
/// ```
pub fn sliding_extremum<T: SeriesElement>(
    data: &[T],
    window: usize,
    extremum: Extremum,
) -> Result<Vec<T>> {
    data.validate_window(window)?;

    if data.is_empty() {
        return Ok(Vec::new());
    }

    let mut result = Vec::with_capacity(sliding_output_len(data.len(), window));
    let mut deque = MonotonicDeque::new(window, extremum).with_capacity(data.len());

    for i in 0..data.len() {
        deque.push(i, data);

        if i + 1 >= window {
            result.push(deque.extremum_value(data).unwrap_or(data[i]));
        }
    }

    let counts = deque.op_counts();
    trace!(
        len = data.len(),
        window,
        %extremum,
        pushes = counts.pushes,
        pops = counts.pops,
        "sliding window pass"
    );

    Ok(result)
}

/// Computes [`sliding_extremum`] into a pre-allocated output buffer.
///
/// # Returns
///
/// The number of windows written, [`sliding_output_len`] of the input.
///
/// # Errors
///
/// Returns an error if:
/// - The window is zero or longer than a non-empty input (`Error::InvalidWindow`)
/// - The output buffer is shorter than the number of windows (`Error::InsufficientData`)
pub fn sliding_extremum_into<T: SeriesElement>(
    data: &[T],
    window: usize,
    extremum: Extremum,
    output: &mut [T],
) -> Result<usize> {
    data.validate_window(window)?;

    let count = sliding_output_len(data.len(), window);
    output.validate_output_len(count)?;

    if data.is_empty() {
        return Ok(0);
    }

    let mut deque = MonotonicDeque::new(window, extremum).with_capacity(data.len());

    for i in 0..data.len() {
        deque.push(i, data);

        if i + 1 >= window {
            output[i + 1 - window] = deque.extremum_value(data).unwrap_or(data[i]);
        }
    }

    Ok(count)
}

/// Computes the maximum of every window of `window` elements.
///
/// # Errors
///
/// Returns `Error::InvalidWindow` if the window is zero or longer than a
/// non-empty input.
pub fn sliding_max<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    sliding_extremum(data, window, Extremum::Max)
}

/// Computes the minimum of every window of `window` elements.
///
/// # Errors
///
/// Returns `Error::InvalidWindow` if the window is zero or longer than a
/// non-empty input.
pub fn sliding_min<T: SeriesElement>(data: &[T], window: usize) -> Result<Vec<T>> {
    sliding_extremum(data, window, Extremum::Min)
}

/// Computes both window maximum and minimum in a single pass.
///
/// # Errors
///
/// Returns `Error::InvalidWindow` if the window is zero or longer than a
/// non-empty input.
///
/// # Example
///
/// ```
/// use fast_mono::patterns::sliding_window::sliding_extrema;
///
/// let result = sliding_extrema(&[3, 1, 4, 1, 5], 3).unwrap();
/// assert_eq!(result.max, vec![4, 4, 5]);
/// assert_eq!(result.min, vec![1, 1, 1]);
/// ```
pub fn sliding_extrema<T: SeriesElement>(
    data: &[T],
    window: usize,
) -> Result<SlidingExtremaOutput<T>> {
    data.validate_window(window)?;

    if data.is_empty() {
        return Ok(SlidingExtremaOutput {
            max: Vec::new(),
            min: Vec::new(),
        });
    }

    let count = sliding_output_len(data.len(), window);
    let mut max = Vec::with_capacity(count);
    let mut min = Vec::with_capacity(count);

    let mut max_deque = MonotonicDeque::new(window, Extremum::Max).with_capacity(data.len());
    let mut min_deque = MonotonicDeque::new(window, Extremum::Min).with_capacity(data.len());

    for i in 0..data.len() {
        max_deque.push(i, data);
        min_deque.push(i, data);

        if i + 1 >= window {
            max.push(max_deque.extremum_value(data).unwrap_or(data[i]));
            min.push(min_deque.extremum_value(data).unwrap_or(data[i]));
        }
    }

    Ok(SlidingExtremaOutput { max, min })
}

/// Computes window extrema using the naive O(n×k) scan approach.
///
/// This function is provided for comparison and testing purposes.
/// It is NOT recommended for production use - use [`sliding_extremum`] instead.
///
/// # Errors
///
/// Returns `Error::InvalidWindow` if the window is zero or longer than a
/// non-empty input.
pub fn sliding_extremum_naive<T: SeriesElement>(
    data: &[T],
    window: usize,
    extremum: Extremum,
) -> Result<Vec<T>> {
    data.validate_window(window)?;

    if data.is_empty() {
        return Ok(Vec::new());
    }

    Ok(data
        .windows(window)
        .map(|w| {
            w.iter().skip(1).fold(w[0], |best, &value| {
                let better = match extremum {
                    Extremum::Max => value > best,
                    Extremum::Min => value < best,
                };
                if better {
                    value
                } else {
                    best
                }
            })
        })
        .collect())
}

// ==================== Configuration Type ====================

/// Sliding window configuration with fluent builder API.
///
/// # Example
///
/// ```
/// use fast_mono::config::Extremum;
/// use fast_mono::patterns::sliding_window::SlidingWindow;
///
/// let data = [1, 3, -1, -3, 5, 3, 6, 7];
///
/// let maxima = SlidingWindow::new(3).compute(&data).unwrap();
/// assert_eq!(maxima, vec![3, 3, 5, 5, 6, 7]);
///
/// let minima = SlidingWindow::new(4).extremum(Extremum::Min).compute(&data).unwrap();
/// assert_eq!(minima, vec![-3, -3, -3, -3, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindow {
    window: usize,
    extremum: Extremum,
}

impl SlidingWindow {
    /// Creates a window-maximum configuration of `window` elements.
    #[must_use]
    pub const fn new(window: usize) -> Self {
        Self {
            window,
            extremum: Extremum::Max,
        }
    }

    /// Sets the window size.
    #[must_use]
    pub const fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Sets which extremum to report.
    ///
    /// Default: [`Extremum::Max`]
    #[must_use]
    pub const fn extremum(mut self, extremum: Extremum) -> Self {
        self.extremum = extremum;
        self
    }

    /// Returns the number of windows this configuration yields for `len` elements.
    #[must_use]
    pub const fn output_len(&self, len: usize) -> usize {
        sliding_output_len(len, self.window)
    }

    /// Computes the window extrema using the configured parameters.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidWindow` if the window is zero or longer than a
    /// non-empty input.
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Result<Vec<T>> {
        sliding_extremum(data, self.window, self.extremum)
    }

    /// Computes the window extrema into a pre-allocated buffer.
    ///
    /// Returns the number of windows written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The window is zero or longer than a non-empty input
    /// - The output buffer is too short
    pub fn compute_into<T: SeriesElement>(&self, data: &[T], output: &mut [T]) -> Result<usize> {
        sliding_extremum_into(data, self.window, self.extremum, output)
    }
}
