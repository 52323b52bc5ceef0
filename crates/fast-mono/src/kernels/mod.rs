//! Monotonic candidate trackers.
//!
//! Both kernels keep a collection of indices whose values are monotonic and
//! evict an index the moment a new value makes it useless:
//!
//! - [`monotonic_stack`]: single-direction stack driven by an injected
//!   eviction predicate (next/previous greater or smaller, histogram bars)
//! - [`monotonic_deque`]: windowed deque whose front is the current window
//!   maximum or minimum
//!
//! # Performance
//!
//! Every index is inserted once and removed at most once, so both kernels run
//! in amortized O(1) per element. [`OpCounts`] exposes the push and pop totals.

pub mod monotonic_deque;
pub mod monotonic_stack;

pub use monotonic_deque::MonotonicDeque;
pub use monotonic_stack::{eviction_predicate, EvictFn, Eviction, MonotonicStack, OpCounts};
