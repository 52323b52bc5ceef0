//! fast-mono: monotonic stack and deque algorithms
//!
//! This crate provides the monotonic stack and monotonic deque, the two
//! candidate trackers behind a family of classic linear-time sequence
//! queries, together with the queries themselves.
//!
//! # Features
//!
//! - **Performance**: O(n) passes with at most 2n stack or deque operations
//! - **Observability**: push/pop counters and monotonicity checks on every tracker
//! - **Generics**: works with any `PartialOrd + Copy` element, integers and floats alike
//! - **Safety**: parameter validation and overflow-checked areas, no panics on bad input
//!
//! # Quick Start
//!
//! ```
//! use fast_mono::prelude::*;
//!
//! let data = [2, 1, 2, 4, 3, 1];
//! let next = next_greater(&data);
//! assert_eq!(next, vec![Some(3), Some(2), Some(3), None, None, None]);
//!
//! let maxima = sliding_max(&[1, 3, -1, -3, 5, 3, 6, 7], 3).unwrap();
//! assert_eq!(maxima, vec![3, 3, 5, 5, 6, 7]);
//! ```
//!
//! # Available Patterns
//!
//! ## Nearest Qualifying Element
//! - [`patterns::next_qualifying_index()`]: next greater/smaller, strict or inclusive
//! - [`patterns::next_qualifying::previous_qualifying_index()`]: the same, looking left
//!
//! ## Histogram
//! - [`patterns::max_rectangle_area()`]: largest rectangle under a histogram
//! - [`patterns::maximal_rectangle()`]: largest all-`true` rectangle in a matrix
//!
//! ## Sliding Window
//! - [`patterns::sliding_max()`] / [`patterns::sliding_min()`]: window extrema
//!
//! ## Stock Span
//! - [`patterns::StockSpanner`]: streaming span calculator
//!
//! # Error Handling
//!
//! Functions that take parameters return [`Result<T, Error>`]:
//!
//! ```
//! use fast_mono::prelude::*;
//!
//! // Window longer than the data
//! assert!(sliding_max(&[1, 2], 3).is_err());
//!
//! // Negative histogram bar
//! assert!(max_rectangle_area(&[3, -1, 2]).is_err());
//!
//! // Empty data is fine
//! assert!(sliding_min::<i32>(&[], 3).unwrap().is_empty());
//! ```
//!
//! # Logging
//!
//! Validation rejections are reported at `debug` level and pass summaries at
//! `trace` level through [`tracing`]. The crate never installs a subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod kernels;
pub mod patterns;
pub mod prelude;
pub mod traits;

// Re-export commonly used types at crate root
pub use config::{Direction, Extremum, TieBreak, TrackerConfig};
pub use error::{Error, Result};
pub use traits::{HeightElement, SeriesElement, ValidatedInput};
