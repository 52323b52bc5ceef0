//! Nearest greater / smaller element queries.
//!
//! For every position `i` of a sequence these functions find the nearest
//! position `j` to its right (or left) whose value qualifies against
//! `data[i]`: greater or smaller, strictly or inclusively.
//!
//! # Algorithm
//!
//! One left-to-right pass over a [`MonotonicStack`]. An index waits on the
//! stack until some later value answers it; at that moment it is popped and
//! its answer recorded. Indices still on the stack at the end have no answer.
//!
//! ```text
//! data:    2  1  2  4  3  1      (greater, strict)
//! answer:  3  2  3  -  -  -
//! ```
//!
//! # Sentinel
//!
//! Answers are `Option<usize>`; `None` means no qualifying element exists.
//! [`to_sentinel_indices`] converts to the signed `-1` convention.
//!
//! # Complexity
//!
//! - Time: O(n), each index pushed once and popped at most once
//! - Space: O(n) for the stack and the result
//!
//! # Example
//!
//! ```
//! use fast_mono::config::{Direction, TieBreak};
//! use fast_mono::patterns::next_qualifying::{next_qualifying_index, to_sentinel_indices};
//!
//! let data = [2, 1, 2, 4, 3, 1];
//! let next = next_qualifying_index(&data, Direction::Greater, TieBreak::Strict);
//! assert_eq!(to_sentinel_indices(&next).unwrap(), vec![3, 2, 3, -1, -1, -1]);
//! ```

use tracing::trace;

use crate::config::{Direction, TieBreak, TrackerConfig};
use crate::error::{Error, Result};
use crate::kernels::monotonic_stack::MonotonicStack;
use crate::traits::{SeriesElement, ValidatedInput};

/// Signed "not found" marker used by [`to_sentinel_indices`].
pub const SENTINEL: isize = -1;

/// Finds, for every index, the nearest qualifying index to its right.
///
/// `result[i]` is the smallest `j > i` such that `data[j]` is greater (or
/// smaller) than `data[i]`, with equality accepted only for
/// [`TieBreak::Inclusive`].
///
/// # Example
///
/// ```
/// use fast_mono::config::{Direction, TieBreak};
/// use fast_mono::patterns::next_qualifying::next_qualifying_index;
///
/// let data = [5, 5, 3];
/// let strict = next_qualifying_index(&data, Direction::Smaller, TieBreak::Strict);
/// assert_eq!(strict, vec![Some(2), Some(2), None]);
///
/// let inclusive = next_qualifying_index(&data, Direction::Smaller, TieBreak::Inclusive);
/// assert_eq!(inclusive, vec![Some(1), Some(2), None]);
/// ```
#[must_use]
pub fn next_qualifying_index<T: SeriesElement>(
    data: &[T],
    direction: Direction,
    tie_break: TieBreak,
) -> Vec<Option<usize>> {
    let mut result = vec![None; data.len()];
    scan_forward(data, direction, tie_break, &mut result);
    result
}

/// Computes [`next_qualifying_index`] into a pre-allocated output buffer.
///
/// Only the first `data.len()` entries of `output` are written.
///
/// # Returns
///
/// The number of entries written.
///
/// # Errors
///
/// Returns `Error::InsufficientData` if `output` is shorter than `data`.
pub fn next_qualifying_index_into<T: SeriesElement>(
    data: &[T],
    direction: Direction,
    tie_break: TieBreak,
    output: &mut [Option<usize>],
) -> Result<usize> {
    let n = data.len();
    output.validate_output_len(n)?;

    let output = &mut output[..n];
    output.fill(None);
    scan_forward(data, direction, tie_break, output);

    Ok(n)
}

fn scan_forward<T: SeriesElement>(
    data: &[T],
    direction: Direction,
    tie_break: TieBreak,
    result: &mut [Option<usize>],
) {
    let mut stack = MonotonicStack::new(direction, tie_break).with_capacity(data.len());

    for i in 0..data.len() {
        stack.push(i, data, |eviction| result[eviction.index] = Some(i));
    }

    let counts = stack.op_counts();
    trace!(
        len = data.len(),
        %direction,
        %tie_break,
        pushes = counts.pushes,
        pops = counts.pops,
        unanswered = stack.len(),
        "next qualifying pass"
    );
}

/// Finds, for every index, the nearest qualifying index to its left.
///
/// `result[i]` is the largest `j < i` such that `data[j]` is greater (or
/// smaller) than `data[i]` under the given tie-break.
///
/// # Example
///
/// ```
/// use fast_mono::config::{Direction, TieBreak};
/// use fast_mono::patterns::next_qualifying::previous_qualifying_index;
///
/// let data = [3, 1, 2, 5];
/// let prev = previous_qualifying_index(&data, Direction::Greater, TieBreak::Strict);
/// assert_eq!(prev, vec![None, Some(0), Some(0), None]);
/// ```
#[must_use]
pub fn previous_qualifying_index<T: SeriesElement>(
    data: &[T],
    direction: Direction,
    tie_break: TieBreak,
) -> Vec<Option<usize>> {
    let mut result = vec![None; data.len()];
    let mut stack = MonotonicStack::new(direction, tie_break).with_capacity(data.len());

    // Right to left: a waiting index is answered by the first value to its left
    // that qualifies against it.
    for i in (0..data.len()).rev() {
        stack.push(i, data, |eviction| result[eviction.index] = Some(i));
    }

    let counts = stack.op_counts();
    trace!(
        len = data.len(),
        %direction,
        %tie_break,
        pushes = counts.pushes,
        pops = counts.pops,
        "previous qualifying pass"
    );

    result
}

/// Nearest strictly greater element to the right of each index.
#[must_use]
pub fn next_greater<T: SeriesElement>(data: &[T]) -> Vec<Option<usize>> {
    next_qualifying_index(data, Direction::Greater, TieBreak::Strict)
}

/// Nearest strictly smaller element to the right of each index.
#[must_use]
pub fn next_smaller<T: SeriesElement>(data: &[T]) -> Vec<Option<usize>> {
    next_qualifying_index(data, Direction::Smaller, TieBreak::Strict)
}

/// Distance to the next strictly greater element, `0` when there is none.
///
/// This is the "how many days until a warmer temperature" form of the query.
///
/// # Example
///
/// ```
/// use fast_mono::patterns::next_qualifying::next_greater_distances;
///
/// let temps = [73, 74, 75, 71, 69, 72, 76, 73];
/// assert_eq!(next_greater_distances(&temps), vec![1, 1, 4, 2, 1, 1, 0, 0]);
/// ```
#[must_use]
pub fn next_greater_distances<T: SeriesElement>(data: &[T]) -> Vec<usize> {
    next_greater(data)
        .into_iter()
        .enumerate()
        .map(|(i, next)| next.map_or(0, |j| j - i))
        .collect()
}

/// Converts `Option` answers into the signed convention, `None` → [`SENTINEL`].
///
/// # Errors
///
/// Returns `Error::NumericConversion` if an index does not fit in `isize`.
pub fn to_sentinel_indices(answers: &[Option<usize>]) -> Result<Vec<isize>> {
    answers
        .iter()
        .map(|answer| match answer {
            Some(j) => isize::try_from(*j).map_err(|_| Error::NumericConversion {
                context: "usize index to isize",
            }),
            None => Ok(SENTINEL),
        })
        .collect()
}

/// Finds the nearest qualifying index to the right with an O(n²) scan.
///
/// This function is provided for comparison and testing purposes.
/// It is NOT recommended for production use - use [`next_qualifying_index`] instead.
#[must_use]
pub fn next_qualifying_index_naive<T: SeriesElement>(
    data: &[T],
    direction: Direction,
    tie_break: TieBreak,
) -> Vec<Option<usize>> {
    (0..data.len())
        .map(|i| {
            (i + 1..data.len()).find(|&j| direction.qualifies(&data[i], &data[j], tie_break))
        })
        .collect()
}

/// Finds the nearest qualifying index to the left with an O(n²) scan.
///
/// This function is provided for comparison and testing purposes.
#[must_use]
pub fn previous_qualifying_index_naive<T: SeriesElement>(
    data: &[T],
    direction: Direction,
    tie_break: TieBreak,
) -> Vec<Option<usize>> {
    (0..data.len())
        .map(|i| (0..i).rev().find(|&j| direction.qualifies(&data[i], &data[j], tie_break)))
        .collect()
}

// ==================== Configuration Type ====================

/// Nearest-element query configuration with fluent builder API.
///
/// Defaults to the classic "next strictly greater element".
///
/// # Example
///
/// ```
/// use fast_mono::config::{Direction, TieBreak};
/// use fast_mono::patterns::next_qualifying::NextQualifying;
///
/// let data = [4, 4, 2, 5];
///
/// let result = NextQualifying::default().compute(&data);
/// assert_eq!(result, vec![Some(3), Some(3), Some(3), None]);
///
/// let result = NextQualifying::new()
///     .direction(Direction::Greater)
///     .tie_break(TieBreak::Inclusive)
///     .compute(&data);
/// assert_eq!(result, vec![Some(1), Some(3), Some(3), None]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NextQualifying {
    config: TrackerConfig,
}

impl NextQualifying {
    /// Creates a "next strictly greater" query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets which neighbour to look for.
    ///
    /// Default: [`Direction::Greater`]
    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.config.direction = direction;
        self
    }

    /// Sets whether equal values qualify.
    ///
    /// Default: [`TieBreak::Strict`]
    #[must_use]
    pub const fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Returns the underlying tracker configuration.
    #[must_use]
    pub const fn config(&self) -> TrackerConfig {
        self.config
    }

    /// Runs the query looking right.
    #[must_use]
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Vec<Option<usize>> {
        next_qualifying_index(data, self.config.direction, self.config.tie_break)
    }

    /// Runs the query looking right into a pre-allocated buffer.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientData` if `output` is shorter than `data`.
    pub fn compute_into<T: SeriesElement>(
        &self,
        data: &[T],
        output: &mut [Option<usize>],
    ) -> Result<usize> {
        next_qualifying_index_into(data, self.config.direction, self.config.tie_break, output)
    }

    /// Runs the query looking left.
    #[must_use]
    pub fn compute_previous<T: SeriesElement>(&self, data: &[T]) -> Vec<Option<usize>> {
        previous_qualifying_index(data, self.config.direction, self.config.tie_break)
    }
}

impl From<TrackerConfig> for NextQualifying {
    fn from(config: TrackerConfig) -> Self {
        Self { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_MODES: [(Direction, TieBreak); 4] = [
        (Direction::Greater, TieBreak::Strict),
        (Direction::Greater, TieBreak::Inclusive),
        (Direction::Smaller, TieBreak::Strict),
        (Direction::Smaller, TieBreak::Inclusive),
    ];

    #[test]
    fn test_next_greater_basic() {
        let data = [2, 1, 2, 4, 3, 1];
        let result = next_qualifying_index(&data, Direction::Greater, TieBreak::Strict);
        assert_eq!(result, vec![Some(3), Some(2), Some(3), None, None, None]);
    }

    #[test]
    fn test_next_greater_inclusive_accepts_equal() {
        let data = [2, 1, 2, 4, 3, 1];
        let result = next_qualifying_index(&data, Direction::Greater, TieBreak::Inclusive);
        assert_eq!(result, vec![Some(2), Some(2), Some(3), None, None, None]);
    }

    #[test]
    fn test_next_smaller_basic() {
        let data = [4, 5, 2, 10, 8];
        let result = next_smaller(&data);
        assert_eq!(result, vec![Some(2), Some(2), None, Some(4), None]);
    }

    #[test]
    fn test_empty_input() {
        let empty: [i32; 0] = [];
        for (direction, tie_break) in ALL_MODES {
            assert!(next_qualifying_index(&empty, direction, tie_break).is_empty());
            assert!(previous_qualifying_index(&empty, direction, tie_break).is_empty());
        }
    }

    #[test]
    fn test_single_element() {
        for (direction, tie_break) in ALL_MODES {
            assert_eq!(next_qualifying_index(&[7], direction, tie_break), vec![None]);
        }
    }

    #[test]
    fn test_all_equal_strict() {
        let data = [3; 5];
        for direction in [Direction::Greater, Direction::Smaller] {
            let result = next_qualifying_index(&data, direction, TieBreak::Strict);
            assert!(result.iter().all(Option::is_none));
        }
    }

    #[test]
    fn test_all_equal_inclusive() {
        let data = [3; 5];
        for direction in [Direction::Greater, Direction::Smaller] {
            let result = next_qualifying_index(&data, direction, TieBreak::Inclusive);
            assert_eq!(result, vec![Some(1), Some(2), Some(3), Some(4), None]);
        }
    }

    #[test]
    fn test_ascending_and_descending() {
        let ascending = [1, 2, 3, 4];
        assert_eq!(next_greater(&ascending), vec![Some(1), Some(2), Some(3), None]);
        assert_eq!(next_smaller(&ascending), vec![None; 4]);

        let descending = [4, 3, 2, 1];
        assert_eq!(next_greater(&descending), vec![None; 4]);
        assert_eq!(next_smaller(&descending), vec![Some(1), Some(2), Some(3), None]);
    }

    #[test]
    fn test_previous_greater() {
        let data = [100, 80, 60, 70, 60, 75, 85];
        let result = previous_qualifying_index(&data, Direction::Greater, TieBreak::Strict);
        assert_eq!(
            result,
            vec![None, Some(0), Some(1), Some(1), Some(3), Some(1), Some(0)]
        );
    }

    #[test]
    fn test_previous_smaller_inclusive() {
        let data = [2, 2, 1, 3];
        let result = previous_qualifying_index(&data, Direction::Smaller, TieBreak::Inclusive);
        assert_eq!(result, vec![None, Some(0), None, Some(2)]);
    }

    #[test]
    fn test_matches_naive_all_modes() {
        let data: Vec<i32> = (0..60).map(|i| (i * 17 % 13) - (i % 4)).collect();
        for (direction, tie_break) in ALL_MODES {
            assert_eq!(
                next_qualifying_index(&data, direction, tie_break),
                next_qualifying_index_naive(&data, direction, tie_break),
                "next mismatch for {direction}:{tie_break}"
            );
            assert_eq!(
                previous_qualifying_index(&data, direction, tie_break),
                previous_qualifying_index_naive(&data, direction, tie_break),
                "previous mismatch for {direction}:{tie_break}"
            );
        }
    }

    #[test]
    fn test_floats_and_chars() {
        let floats = [1.5_f64, 0.5, 2.5];
        assert_eq!(next_greater(&floats), vec![Some(2), Some(2), None]);

        let chars = ['b', 'a', 'c'];
        assert_eq!(next_greater(&chars), vec![Some(2), Some(2), None]);
    }

    #[test]
    fn test_next_greater_distances() {
        let temps = [73, 74, 75, 71, 69, 72, 76, 73];
        assert_eq!(next_greater_distances(&temps), vec![1, 1, 4, 2, 1, 1, 0, 0]);
        assert!(next_greater_distances::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_to_sentinel_indices() {
        let answers = [Some(3), None, Some(0)];
        assert_eq!(to_sentinel_indices(&answers).unwrap(), vec![3, SENTINEL, 0]);
        assert!(to_sentinel_indices(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_into_matches_allocating() {
        let data = [5, 3, 8, 1, 9];
        let mut output = vec![Some(99); 7];
        let written =
            next_qualifying_index_into(&data, Direction::Greater, TieBreak::Strict, &mut output)
                .unwrap();

        assert_eq!(written, 5);
        assert_eq!(&output[..5], next_greater(&data).as_slice());
        // Tail beyond the input is untouched
        assert_eq!(output[5], Some(99));
    }

    #[test]
    fn test_into_insufficient_output() {
        let data = [1, 2, 3];
        let mut output = vec![None; 2];
        let result =
            next_qualifying_index_into(&data, Direction::Greater, TieBreak::Strict, &mut output);
        assert_eq!(
            result,
            Err(Error::InsufficientData {
                required: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_repeated_runs_identical() {
        let data = [9, 1, 9, 2, 8, 2];
        let first = next_qualifying_index(&data, Direction::Smaller, TieBreak::Inclusive);
        let second = next_qualifying_index(&data, Direction::Smaller, TieBreak::Inclusive);
        assert_eq!(first, second);
    }

    #[test]
    fn test_builder() {
        let data = [4, 4, 2, 5];
        let query = NextQualifying::new()
            .direction(Direction::Smaller)
            .tie_break(TieBreak::Inclusive);

        assert_eq!(
            query.config(),
            TrackerConfig::new(Direction::Smaller, TieBreak::Inclusive)
        );
        assert_eq!(query.compute(&data), vec![Some(1), Some(2), None, None]);
        assert_eq!(query.compute_previous(&data), vec![None, Some(0), None, Some(2)]);
    }

    #[test]
    fn test_builder_from_config() {
        let config: TrackerConfig = "smaller:strict".parse().unwrap();
        let query = NextQualifying::from(config);
        assert_eq!(query.compute(&[3, 1, 2]), vec![Some(1), None, None]);

        let mut output = [None; 3];
        assert_eq!(query.compute_into(&[3, 1, 2], &mut output), Ok(3));
        assert_eq!(output, [Some(1), None, None]);
    }
}
