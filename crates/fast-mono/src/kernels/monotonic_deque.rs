//! Monotonic deque for sliding-window extrema.
//!
//! The deque holds indices into the data slice such that:
//! - for [`Extremum::Max`], values at those indices are strictly decreasing
//!   front to back
//! - for [`Extremum::Min`], values are strictly increasing front to back
//!
//! so the front is always the extremum of the current window.
//!
//! # Algorithm
//!
//! For each new index `i`:
//! 1. drop from the back every index whose value the new one weakly dominates
//! 2. push `i` to the back
//! 3. drop from the front every index older than `i + 1 - window`
//!
//! Each index enters once and leaves at most once, so a pass costs O(n) with
//! O(window) space.
//!
//! # Example
//!
//! ```
//! use fast_mono::config::Extremum;
//! use fast_mono::kernels::monotonic_deque::MonotonicDeque;
//!
//! let data = [1, 3, -1, -3, 5];
//! let mut deque = MonotonicDeque::new(3, Extremum::Max);
//! for i in 0..data.len() {
//!     deque.push(i, &data);
//! }
//! assert_eq!(deque.extremum_value(&data), Some(5));
//! ```

use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::config::Extremum;
use crate::kernels::monotonic_stack::OpCounts;
use crate::traits::SeriesElement;

/// A monotonic deque for efficiently tracking windowed extrema.
///
/// # Type Parameters
///
/// - `T`: The element type of the scanned data
#[derive(Debug, Clone)]
pub struct MonotonicDeque<T> {
    /// The deque stores indices into the data array
    deque: VecDeque<usize>,
    /// The window size
    window: usize,
    extremum: Extremum,
    counts: OpCounts,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: SeriesElement> MonotonicDeque<T> {
    /// Creates a new monotonic deque for windows of `window` elements.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_mono::config::Extremum;
    /// use fast_mono::kernels::monotonic_deque::MonotonicDeque;
    ///
    /// let deque: MonotonicDeque<f64> = MonotonicDeque::new(5, Extremum::Min);
    /// assert_eq!(deque.window(), 5);
    /// ```
    #[must_use]
    pub fn new(window: usize, extremum: Extremum) -> Self {
        Self {
            deque: VecDeque::new(),
            window,
            extremum,
            counts: OpCounts::default(),
            _phantom: PhantomData,
        }
    }

    /// Reserves room for `capacity` indices, never more than one window.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_mono::config::Extremum;
    /// use fast_mono::kernels::monotonic_deque::MonotonicDeque;
    ///
    /// // A huge window over a short input only reserves what the input needs.
    /// let data = [3, 1, 2];
    /// let deque: MonotonicDeque<i32> =
    ///     MonotonicDeque::new(usize::MAX, Extremum::Max).with_capacity(data.len());
    /// assert!(deque.is_empty());
    /// ```
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.deque.reserve(capacity.min(self.window));
        self
    }

    /// Returns the window size.
    #[must_use]
    pub const fn window(&self) -> usize {
        self.window
    }

    /// Returns which extremum this deque tracks.
    #[must_use]
    pub const fn extremum(&self) -> Extremum {
        self.extremum
    }

    /// Returns true if the deque is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Returns the number of indices currently in the deque.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.deque.len()
    }

    /// Clears the deque and its counters.
    #[inline]
    pub fn clear(&mut self) {
        self.deque.clear();
        self.counts = OpCounts::default();
    }

    /// Pushes the value at `index` and slides the window to end there.
    ///
    /// Values that do not compare with themselves (NaN) are never stored, so
    /// they can neither become nor displace an extremum.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for `data`.
    #[inline]
    pub fn push(&mut self, index: usize, data: &[T]) {
        let value = data[index];

        if value.partial_cmp(&value).is_some() {
            while let Some(&back_idx) = self.deque.back() {
                if !self.extremum.dominates(&value, &data[back_idx]) {
                    break;
                }
                self.deque.pop_back();
                self.counts.pops += 1;
            }

            self.deque.push_back(index);
            self.counts.pushes += 1;
        }

        self.remove_expired(index);
    }

    /// Removes indices that are outside the window ending at `current_index`.
    #[inline]
    fn remove_expired(&mut self, current_index: usize) {
        // Only remove once at least `window` elements have been seen
        if current_index >= self.window {
            let window_start = current_index + 1 - self.window;
            while let Some(&front_idx) = self.deque.front() {
                if front_idx >= window_start {
                    break;
                }
                self.deque.pop_front();
                self.counts.pops += 1;
            }
        }
    }

    /// Returns the index of the current window extremum.
    ///
    /// Returns `None` if the deque is empty.
    #[inline]
    #[must_use]
    pub fn front_index(&self) -> Option<usize> {
        self.deque.front().copied()
    }

    /// Returns the current window extremum from the data array.
    #[inline]
    #[must_use]
    pub fn extremum_value(&self, data: &[T]) -> Option<T> {
        self.front_index().map(|idx| data[idx])
    }

    /// Returns the stored indices, front first.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.deque.iter().copied()
    }

    /// Returns the push and pop counters since creation or the last clear.
    #[inline]
    #[must_use]
    pub const fn op_counts(&self) -> OpCounts {
        self.counts
    }

    /// Returns true if stored values are strictly monotonic front to back.
    #[must_use]
    pub fn is_monotonic(&self, data: &[T]) -> bool {
        self.deque
            .iter()
            .zip(self.deque.iter().skip(1))
            .all(|(&front, &back)| !self.extremum.dominates(&data[back], &data[front]))
    }
}
