//! Problems solved with the monotonic kernels.
//!
//! Each pattern is a thin driver around [`crate::kernels`]:
//!
//! - [`next_qualifying`]: next/previous greater or smaller element per index
//! - [`histogram`]: largest rectangle under a histogram, and in a binary matrix
//! - [`sliding_window`]: maximum and minimum of every fixed-size window
//! - [`stock_span`]: streaming and batch stock span
//!
//! Every pattern also ships a `_naive` brute-force counterpart used by the
//! test suites as an oracle.

pub mod histogram;
pub mod next_qualifying;
pub mod sliding_window;
pub mod stock_span;

// Re-export pattern functions for convenient access
pub use histogram::{max_rectangle, max_rectangle_area, maximal_rectangle, Rectangle};
pub use next_qualifying::{
    next_greater, next_greater_distances, next_qualifying_index, next_qualifying_index_into,
    next_smaller, previous_qualifying_index, to_sentinel_indices, NextQualifying, SENTINEL,
};
pub use sliding_window::{
    sliding_extrema, sliding_extremum, sliding_extremum_into, sliding_max, sliding_min,
    sliding_output_len, SlidingExtremaOutput, SlidingWindow,
};
pub use stock_span::{stock_spans, StockSpanner};
