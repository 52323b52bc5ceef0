//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use fast_mono::prelude::*;
//!
//! let prices = [100, 80, 60, 70, 60, 75, 85];
//!
//! assert_eq!(stock_spans(&prices), vec![1, 1, 1, 2, 1, 4, 6]);
//! assert_eq!(max_rectangle_area(&[2, 1, 5, 6, 2, 3]).unwrap(), 10);
//! ```
//!
//! # Contents
//!
//! ## Error Handling
//! - [`Error`]: The error type for rejected parameters and failed computations
//! - [`Result`]: Type alias for `std::result::Result<T, Error>`
//!
//! ## Traits
//! - [`SeriesElement`]: Element types the trackers can scan
//! - [`HeightElement`]: Integer bar heights for the histogram
//! - [`ValidatedInput`]: Extension trait for input validation
//!
//! ## Configuration
//! - [`Direction`], [`TieBreak`], [`Extremum`], [`TrackerConfig`]
//! - Builders: [`NextQualifying`], [`SlidingWindow`]
//!
//! ## Kernels
//! - [`MonotonicStack`], [`MonotonicDeque`], [`OpCounts`]

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::{HeightElement, SeriesElement, ValidatedInput};

// Configuration
pub use crate::config::{Direction, Extremum, TieBreak, TrackerConfig};

// Kernels
pub use crate::kernels::{Eviction, MonotonicDeque, MonotonicStack, OpCounts};

// Pattern functions (simple API)
pub use crate::patterns::{
    max_rectangle, max_rectangle_area, maximal_rectangle, next_greater, next_greater_distances,
    next_qualifying_index, next_smaller, previous_qualifying_index, sliding_extrema,
    sliding_extremum, sliding_max, sliding_min, stock_spans, to_sentinel_indices,
};

// Pattern functions (_into API for pre-allocated buffers)
pub use crate::patterns::{next_qualifying_index_into, sliding_extremum_into};

// Output and configuration types
pub use crate::patterns::{NextQualifying, Rectangle, SlidingExtremaOutput, SlidingWindow, StockSpanner};

// Lengths and markers
pub use crate::patterns::{sliding_output_len, SENTINEL};
