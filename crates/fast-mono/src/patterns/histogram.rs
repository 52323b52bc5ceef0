//! Largest rectangle under a histogram.
//!
//! Given bar heights on a common baseline, find the axis-aligned rectangle of
//! maximum area that fits under contiguous bars.
//!
//! # Algorithm
//!
//! Bars are pushed onto a [`MonotonicStack`] that pops any bar taller than the
//! incoming one (next strictly smaller element). When a bar is popped:
//!
//! - the incoming index `i` is the first bar to its right that is lower
//! - the index left on the stack is the last bar to its left that is lower
//!
//! so the bar's height limits exactly the run between those two neighbours:
//!
//! ```text
//! width = i - below - 1      (or i when nothing is below)
//! area  = height × width
//! ```
//!
//! A virtual height-0 bar at position `n` flushes the stack at the end.
//!
//! # Complexity
//!
//! - Time: O(n)
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use fast_mono::patterns::histogram::max_rectangle_area;
//!
//! assert_eq!(max_rectangle_area(&[2, 1, 5, 6, 2, 3]).unwrap(), 10);
//! assert_eq!(max_rectangle_area::<u32>(&[]).unwrap(), 0);
//! ```

use tracing::{debug, trace};

use crate::config::{Direction, TieBreak};
use crate::error::{Error, Result};
use crate::kernels::monotonic_stack::{Eviction, MonotonicStack};
use crate::traits::{validate_heights, HeightElement};

/// A maximal rectangle found under a histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle<T> {
    /// First bar covered.
    pub start: usize,
    /// One past the last bar covered.
    pub end: usize,
    /// Rectangle height, the lowest bar in `start..end`.
    pub height: T,
    /// `height × (end - start)`.
    pub area: T,
}

impl<T> Rectangle<T> {
    /// Number of bars covered.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.end - self.start
    }
}

/// Computes the area of the largest rectangle under the histogram.
///
/// # Errors
///
/// Returns an error if:
/// - A bar is negative (`Error::NegativeHeight`)
/// - A rectangle width does not fit in `T` (`Error::NumericConversion`)
/// - An area does not fit in `T` (`Error::AreaOverflow`)
pub fn max_rectangle_area<T: HeightElement>(heights: &[T]) -> Result<T> {
    Ok(max_rectangle(heights)?.map_or_else(T::zero, |rect| rect.area))
}

/// Finds the largest rectangle under the histogram, with its bounds.
///
/// Returns `Ok(None)` when no rectangle has positive area (empty input or all
/// bars zero). Among rectangles of equal area the first one completed by the
/// scan is kept.
///
/// # Errors
///
/// Returns an error if:
/// - A bar is negative (`Error::NegativeHeight`)
/// - A rectangle width does not fit in `T` (`Error::NumericConversion`)
/// - An area does not fit in `T` (`Error::AreaOverflow`)
///
/// # Example
///
/// ```
/// use fast_mono::patterns::histogram::max_rectangle;
///
/// let rect = max_rectangle(&[2, 1, 5, 6, 2, 3]).unwrap().unwrap();
/// assert_eq!((rect.start, rect.end, rect.height, rect.area), (2, 4, 5, 10));
/// ```
pub fn max_rectangle<T: HeightElement>(heights: &[T]) -> Result<Option<Rectangle<T>>> {
    validate_heights(heights)?;

    let n = heights.len();
    let mut stack =
        MonotonicStack::new(Direction::Smaller, TieBreak::Strict).with_capacity(n);
    let mut best: Option<Rectangle<T>> = None;
    let mut failure: Option<Error> = None;

    let mut settle = |eviction: Eviction, right: usize| {
        if failure.is_some() {
            return;
        }
        match rectangle_at(heights, eviction, right) {
            Ok(rect) => {
                if rect.area > best.map_or_else(T::zero, |b| b.area) {
                    best = Some(rect);
                }
            }
            Err(err) => failure = Some(err),
        }
    };

    for i in 0..n {
        stack.push(i, heights, |eviction| settle(eviction, i));
    }
    // Virtual height-0 bar at position n
    stack.drain(|eviction| settle(eviction, n));

    if let Some(err) = failure {
        debug!(%err, "histogram pass failed");
        return Err(err);
    }

    let counts = stack.op_counts();
    trace!(
        len = n,
        pushes = counts.pushes,
        pops = counts.pops,
        area = ?best.map(|rect| rect.area),
        "histogram pass"
    );

    Ok(best)
}

/// Builds the rectangle limited by the popped bar.
fn rectangle_at<T: HeightElement>(
    heights: &[T],
    eviction: Eviction,
    right: usize,
) -> Result<Rectangle<T>> {
    let height = heights[eviction.index];
    let start = eviction.below.map_or(0, |below| below + 1);
    let width = right - start;

    let area = if height.is_zero() {
        T::zero()
    } else {
        height
            .checked_mul(&T::from_usize(width)?)
            .ok_or(Error::AreaOverflow {
                index: eviction.index,
            })?
    };

    Ok(Rectangle {
        start,
        end: right,
        height,
        area,
    })
}

/// Computes the largest all-`true` rectangle in a binary matrix.
///
/// Each row turns the matrix above it into a histogram of consecutive `true`
/// cells per column, which is then solved with [`max_rectangle_area`].
///
/// # Errors
///
/// Returns `Error::RaggedRows` if rows differ in length.
///
/// # Example
///
/// ```
/// use fast_mono::patterns::histogram::maximal_rectangle;
///
/// let grid = [
///     [true, false, true, false, false],
///     [true, false, true, true, true],
///     [true, true, true, true, true],
///     [true, false, false, true, false],
/// ];
/// assert_eq!(maximal_rectangle(&grid).unwrap(), 6);
/// ```
pub fn maximal_rectangle<R: AsRef<[bool]>>(rows: &[R]) -> Result<usize> {
    let Some(first) = rows.first() else {
        return Ok(0);
    };
    let width = first.as_ref().len();

    if let Some((row, actual)) = rows
        .iter()
        .map(|r| r.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        debug!(row, expected = width, actual, "rejecting ragged matrix");
        return Err(Error::RaggedRows {
            row,
            expected: width,
            actual,
        });
    }

    let mut column_heights = vec![0_usize; width];
    let mut best = 0;

    for row in rows {
        for (height, &cell) in column_heights.iter_mut().zip(row.as_ref()) {
            *height = if cell { *height + 1 } else { 0 };
        }
        best = best.max(max_rectangle_area(&column_heights)?);
    }

    Ok(best)
}

/// Computes the largest rectangle area with an O(n²) scan.
///
/// This function is provided for comparison and testing purposes.
/// It is NOT recommended for production use - use [`max_rectangle_area`] instead.
///
/// # Errors
///
/// Same conditions as [`max_rectangle_area`].
pub fn max_rectangle_area_naive<T: HeightElement>(heights: &[T]) -> Result<T> {
    validate_heights(heights)?;

    let mut best = T::zero();
    for start in 0..heights.len() {
        let mut lowest = heights[start];
        for end in start..heights.len() {
            lowest = lowest.min(heights[end]);
            if lowest.is_zero() {
                break;
            }
            let area = lowest
                .checked_mul(&T::from_usize(end - start + 1)?)
                .ok_or(Error::AreaOverflow { index: end })?;
            best = best.max(area);
        }
    }
    Ok(best)
}
