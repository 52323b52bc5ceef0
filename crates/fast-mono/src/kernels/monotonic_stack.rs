//! Monotonic stack: the single-direction candidate tracker.
//!
//! The stack stores indices into a data slice. Before an index is pushed,
//! every index below it that the incoming value "answers" is popped and
//! reported to the caller as an [`Eviction`]. Which values answer which is
//! decided by an eviction predicate chosen once, at construction:
//!
//! - [`MonotonicStack::new`] / [`MonotonicStack::from_config`] derive it from
//!   a [`Direction`] and [`TieBreak`]
//! - [`MonotonicStack::with_predicate`] accepts any `Fn(&T, &T) -> bool`
//!
//! # Invariant
//!
//! For every adjacent pair `(lower, upper)` on the stack, the predicate does
//! not hold for `(data[lower], data[upper])`: the upper value would have
//! evicted the lower one otherwise. With a strict tie-break equal values may
//! sit next to each other; with an inclusive one the stack is strictly
//! monotonic.
//!
//! # Complexity
//!
//! Each index is pushed once and popped at most once, so a pass over `n`
//! elements performs at most `2n` stack operations. [`OpCounts`] records them.
//!
//! # Example
//!
//! ```
//! use fast_mono::config::{Direction, TieBreak};
//! use fast_mono::kernels::monotonic_stack::MonotonicStack;
//!
//! let data = [2, 1, 2, 4, 3, 1];
//! let mut answers = vec![None; data.len()];
//! let mut stack = MonotonicStack::new(Direction::Greater, TieBreak::Strict);
//!
//! for i in 0..data.len() {
//!     stack.push(i, &data, |eviction| answers[eviction.index] = Some(i));
//! }
//!
//! assert_eq!(answers, vec![Some(3), Some(2), Some(3), None, None, None]);
//! assert_eq!(stack.indices(), &[3, 4, 5]);
//! ```

use std::marker::PhantomData;

use crate::config::{Direction, TieBreak, TrackerConfig};
use crate::traits::SeriesElement;

/// Function pointer form of an eviction predicate.
///
/// Called as `evicts(stacked_value, incoming_value)`.
pub type EvictFn<T> = fn(&T, &T) -> bool;

/// An index popped off a [`MonotonicStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eviction {
    /// The popped index.
    pub index: usize,
    /// The index left on top of the stack after the pop, if any.
    ///
    /// For a histogram this is the nearest bar to the left that is lower than
    /// the popped one.
    pub below: Option<usize>,
}

/// Push and pop counters for a tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpCounts {
    /// Number of indices pushed.
    pub pushes: usize,
    /// Number of indices popped or expired.
    pub pops: usize,
}

impl OpCounts {
    /// Total number of stack or deque operations.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.pushes + self.pops
    }
}

// One fn item per mode so each coerces to `EvictFn<T>`.
fn greater_strict<T: PartialOrd>(stacked: &T, incoming: &T) -> bool {
    Direction::Greater.qualifies(stacked, incoming, TieBreak::Strict)
}

fn greater_inclusive<T: PartialOrd>(stacked: &T, incoming: &T) -> bool {
    Direction::Greater.qualifies(stacked, incoming, TieBreak::Inclusive)
}

fn smaller_strict<T: PartialOrd>(stacked: &T, incoming: &T) -> bool {
    Direction::Smaller.qualifies(stacked, incoming, TieBreak::Strict)
}

fn smaller_inclusive<T: PartialOrd>(stacked: &T, incoming: &T) -> bool {
    Direction::Smaller.qualifies(stacked, incoming, TieBreak::Inclusive)
}

/// Returns the eviction predicate for a direction and tie-break.
///
/// The stacked value is evicted exactly when the incoming value qualifies
/// against it under [`Direction::qualifies`].
#[must_use]
pub fn eviction_predicate<T: SeriesElement>(direction: Direction, tie_break: TieBreak) -> EvictFn<T> {
    match (direction, tie_break) {
        (Direction::Greater, TieBreak::Strict) => greater_strict::<T>,
        (Direction::Greater, TieBreak::Inclusive) => greater_inclusive::<T>,
        (Direction::Smaller, TieBreak::Strict) => smaller_strict::<T>,
        (Direction::Smaller, TieBreak::Inclusive) => smaller_inclusive::<T>,
    }
}

/// A stack of indices kept monotonic by an injected eviction predicate.
///
/// # Type Parameters
///
/// - `T`: The element type of the scanned data
/// - `P`: The eviction predicate, `Fn(&stacked, &incoming) -> bool`
#[derive(Debug, Clone)]
pub struct MonotonicStack<T, P = EvictFn<T>> {
    /// Indices into the data slice, bottom first
    stack: Vec<usize>,
    /// Decides whether the incoming value pops a stacked one
    evicts: P,
    counts: OpCounts,
    _phantom: PhantomData<fn(&T)>,
}

impl<T: SeriesElement> MonotonicStack<T> {
    /// Creates an empty stack answering `direction` queries.
    #[must_use]
    pub fn new(direction: Direction, tie_break: TieBreak) -> Self {
        Self::with_predicate(eviction_predicate(direction, tie_break))
    }

    /// Creates an empty stack from a [`TrackerConfig`].
    #[must_use]
    pub fn from_config(config: TrackerConfig) -> Self {
        Self::new(config.direction, config.tie_break)
    }
}

impl<T, P> MonotonicStack<T, P>
where
    T: SeriesElement,
    P: Fn(&T, &T) -> bool,
{
    /// Creates an empty stack with a custom eviction predicate.
    ///
    /// # Example
    ///
    /// ```
    /// use fast_mono::kernels::monotonic_stack::MonotonicStack;
    ///
    /// // Compare by absolute value.
    /// let data = [-3, 1, 4, -1];
    /// let mut stack = MonotonicStack::with_predicate(|a: &i32, b: &i32| a.abs() < b.abs());
    /// for i in 0..data.len() {
    ///     stack.push(i, &data, |_| {});
    /// }
    /// assert_eq!(stack.indices(), &[2, 3]);
    /// ```
    #[must_use]
    pub fn with_predicate(evicts: P) -> Self {
        Self {
            stack: Vec::new(),
            evicts,
            counts: OpCounts::default(),
            _phantom: PhantomData,
        }
    }

    /// Reserves room for `capacity` indices.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.stack.reserve(capacity);
        self
    }

    /// Pops every index answered by `data[index]`, then pushes `index`.
    ///
    /// `on_evict` is called for each popped index, top first.
    ///
    /// # Panics
    ///
    /// Panics if `index` or a stacked index is out of bounds for `data`.
    #[inline]
    pub fn push<F>(&mut self, index: usize, data: &[T], mut on_evict: F)
    where
        F: FnMut(Eviction),
    {
        let value = data[index];

        while let Some(&top) = self.stack.last() {
            if !(self.evicts)(&data[top], &value) {
                break;
            }
            self.stack.pop();
            self.counts.pops += 1;
            on_evict(Eviction {
                index: top,
                below: self.stack.last().copied(),
            });
        }

        self.stack.push(index);
        self.counts.pushes += 1;
    }

    /// Pops every remaining index, top first.
    ///
    /// Equivalent to pushing a virtual element that answers everything, such
    /// as the height-0 bar closing a histogram.
    pub fn drain<F>(&mut self, mut on_evict: F)
    where
        F: FnMut(Eviction),
    {
        while let Some(top) = self.stack.pop() {
            self.counts.pops += 1;
            on_evict(Eviction {
                index: top,
                below: self.stack.last().copied(),
            });
        }
    }

    /// Returns the index on top of the stack.
    #[inline]
    #[must_use]
    pub fn top(&self) -> Option<usize> {
        self.stack.last().copied()
    }

    /// Returns the stacked indices, bottom first.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.stack
    }

    /// Returns the number of indices on the stack.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if the stack is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns the push and pop counters since creation or the last clear.
    #[inline]
    #[must_use]
    pub const fn op_counts(&self) -> OpCounts {
        self.counts
    }

    /// Clears the stack and its counters.
    pub fn clear(&mut self) {
        self.stack.clear();
        self.counts = OpCounts::default();
    }

    /// Returns true if no adjacent pair on the stack violates the predicate.
    #[must_use]
    pub fn is_monotonic(&self, data: &[T]) -> bool {
        self.stack
            .windows(2)
            .all(|pair| !(self.evicts)(&data[pair[0]], &data[pair[1]]))
    }
}
