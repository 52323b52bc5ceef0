//! Property-based tests for the monotonic kernels using proptest.
//!
//! These tests check the fast algorithms against brute-force references on
//! random inputs, along with the structural properties every pass must keep:
//! monotonic trackers, at most 2n operations, and window bounds.

use proptest::prelude::*;

use fast_mono::config::{Direction, Extremum, TieBreak};
use fast_mono::kernels::{MonotonicDeque, MonotonicStack};
use fast_mono::patterns::{
    histogram::{max_rectangle, max_rectangle_area, max_rectangle_area_naive},
    next_qualifying::{
        next_qualifying_index, next_qualifying_index_naive, previous_qualifying_index,
        previous_qualifying_index_naive,
    },
    sliding_window::{sliding_extrema, sliding_extremum, sliding_extremum_naive},
    stock_span::{stock_spans, stock_spans_naive, StockSpanner},
};

// ==================== Test Data Generators ====================

/// Generate a random integer series; the narrow range forces many ties
fn arb_series(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-8..8_i32, 0..=max_len)
}

/// Generate a random histogram of non-negative heights
fn arb_heights(max_len: usize) -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0..1000_u64, 0..=max_len)
}

/// Generate a non-empty series with a window that fits it
fn arb_series_and_window(max_len: usize) -> impl Strategy<Value = (Vec<i32>, usize)> {
    prop::collection::vec(-50..50_i32, 1..=max_len)
        .prop_flat_map(|data| {
            let len = data.len();
            (Just(data), 1..=len)
        })
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Greater), Just(Direction::Smaller)]
}

fn arb_tie_break() -> impl Strategy<Value = TieBreak> {
    prop_oneof![Just(TieBreak::Strict), Just(TieBreak::Inclusive)]
}

fn arb_extremum() -> impl Strategy<Value = Extremum> {
    prop_oneof![Just(Extremum::Max), Just(Extremum::Min)]
}

// ==================== Next Qualifying Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Forward answers match the brute-force scan
    #[test]
    fn prop_next_matches_naive(
        data in arb_series(200),
        direction in arb_direction(),
        tie_break in arb_tie_break(),
    ) {
        prop_assert_eq!(
            next_qualifying_index(&data, direction, tie_break),
            next_qualifying_index_naive(&data, direction, tie_break)
        );
    }

    /// Backward answers match the brute-force scan
    #[test]
    fn prop_previous_matches_naive(
        data in arb_series(200),
        direction in arb_direction(),
        tie_break in arb_tie_break(),
    ) {
        prop_assert_eq!(
            previous_qualifying_index(&data, direction, tie_break),
            previous_qualifying_index_naive(&data, direction, tie_break)
        );
    }

    /// Every answer lies to the right and qualifies; everything in between does not
    #[test]
    fn prop_next_answer_is_nearest(
        data in arb_series(100),
        direction in arb_direction(),
        tie_break in arb_tie_break(),
    ) {
        let next = next_qualifying_index(&data, direction, tie_break);
        for (i, answer) in next.iter().enumerate() {
            let end = answer.unwrap_or(data.len());
            if let Some(j) = *answer {
                prop_assert!(j > i);
                prop_assert!(direction.qualifies(&data[i], &data[j], tie_break));
            }
            for k in i + 1..end {
                prop_assert!(!direction.qualifies(&data[i], &data[k], tie_break));
            }
        }
    }

    /// The stack stays monotonic after every push and costs at most 2n operations
    #[test]
    fn prop_stack_monotonic_and_linear(
        data in arb_series(200),
        direction in arb_direction(),
        tie_break in arb_tie_break(),
    ) {
        let mut stack = MonotonicStack::new(direction, tie_break);
        for i in 0..data.len() {
            stack.push(i, &data, |_| {});
            prop_assert!(stack.is_monotonic(&data));
        }
        stack.drain(|_| {});

        let counts = stack.op_counts();
        prop_assert_eq!(counts.pushes, data.len());
        prop_assert_eq!(counts.pops, data.len());
        prop_assert!(counts.total() <= 2 * data.len());
    }
}

// ==================== Histogram Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Largest area matches the O(n²) scan
    #[test]
    fn prop_histogram_matches_naive(heights in arb_heights(200)) {
        prop_assert_eq!(
            max_rectangle_area(&heights).unwrap(),
            max_rectangle_area_naive(&heights).unwrap()
        );
    }

    /// The reported rectangle really fits under the bars
    #[test]
    fn prop_histogram_rectangle_fits(heights in arb_heights(100)) {
        if let Some(rect) = max_rectangle(&heights).unwrap() {
            prop_assert!(rect.start < rect.end && rect.end <= heights.len());
            let lowest = heights[rect.start..rect.end].iter().copied().min().unwrap();
            prop_assert_eq!(lowest, rect.height);
            prop_assert_eq!(rect.area, rect.height * rect.width() as u64);
        } else {
            prop_assert!(heights.iter().all(|&h| h == 0));
        }
    }

    /// The area is at least the tallest bar and at least min × n
    #[test]
    fn prop_histogram_lower_bounds(heights in arb_heights(100)) {
        let area = max_rectangle_area(&heights).unwrap();
        let tallest = heights.iter().copied().max().unwrap_or(0);
        let lowest = heights.iter().copied().min().unwrap_or(0);
        prop_assert!(area >= tallest);
        prop_assert!(area >= lowest * heights.len() as u64);
    }
}

// ==================== Sliding Window Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Window extrema match the O(n×k) scan
    #[test]
    fn prop_sliding_matches_naive(
        (data, window) in arb_series_and_window(200),
        extremum in arb_extremum(),
    ) {
        prop_assert_eq!(
            sliding_extremum(&data, window, extremum).unwrap(),
            sliding_extremum_naive(&data, window, extremum).unwrap()
        );
    }

    /// Output has n - k + 1 values and max >= min in every window
    #[test]
    fn prop_sliding_shape((data, window) in arb_series_and_window(100)) {
        let result = sliding_extrema(&data, window).unwrap();
        prop_assert_eq!(result.max.len(), data.len() - window + 1);
        prop_assert_eq!(result.min.len(), data.len() - window + 1);
        for (max, min) in result.max.iter().zip(&result.min) {
            prop_assert!(max >= min);
        }
    }

    /// The deque never holds expired indices, stays monotonic, and costs at most 2n
    #[test]
    fn prop_deque_invariants(
        (data, window) in arb_series_and_window(200),
        extremum in arb_extremum(),
    ) {
        let mut deque = MonotonicDeque::new(window, extremum);
        for i in 0..data.len() {
            deque.push(i, &data);
            prop_assert!(deque.is_monotonic(&data));
            prop_assert!(deque.len() <= window);
            prop_assert!(deque.indices().all(|idx| idx + window > i && idx <= i));
        }
        prop_assert!(deque.op_counts().total() <= 2 * data.len());
    }
}

// ==================== Stock Span Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Spans match walking back from every price
    #[test]
    fn prop_spans_match_naive(prices in arb_series(200)) {
        prop_assert_eq!(stock_spans(&prices), stock_spans_naive(&prices));
    }

    /// Spans are at least 1 and never reach before the first price
    #[test]
    fn prop_spans_bounded(prices in arb_series(100)) {
        for (i, span) in stock_spans(&prices).into_iter().enumerate() {
            prop_assert!(span >= 1);
            prop_assert!(span <= i + 1);
        }
    }

    /// Streaming in two chunks equals one batch
    #[test]
    fn prop_spanner_chunking(prices in arb_series(100), split in 0usize..=100) {
        let split = split.min(prices.len());
        let mut spanner = StockSpanner::new();
        spanner.extend(prices[..split].iter().copied());
        let tail: Vec<usize> = prices[split..].iter().map(|&p| spanner.record_price(p)).collect();

        let batch = stock_spans(&prices);
        prop_assert_eq!(&tail[..], &batch[split..]);
        prop_assert_eq!(spanner.len(), prices.len());
        prop_assert!(spanner.op_counts().total() <= 2 * prices.len());
    }
}
