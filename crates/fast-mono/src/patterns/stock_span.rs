//! Stock span: how many consecutive prices up to today were at most today's.
//!
//! [`StockSpanner`] is the streaming form. It keeps a stack of
//! `(price, span)` pairs with prices strictly decreasing bottom to top. A new
//! price folds every stacked price that does not exceed it into its own span,
//! so each price is pushed once and popped at most once: amortized O(1) per
//! call.
//!
//! # Example
//!
//! ```
//! use fast_mono::patterns::stock_span::StockSpanner;
//!
//! let mut spanner = StockSpanner::new();
//! let spans: Vec<usize> = [100, 80, 60, 70, 60, 75, 85]
//!     .into_iter()
//!     .map(|price| spanner.record_price(price))
//!     .collect();
//!
//! assert_eq!(spans, vec![1, 1, 1, 2, 1, 4, 6]);
//! ```

use std::cmp::Ordering;

use tracing::trace;

use crate::kernels::monotonic_stack::OpCounts;
use crate::traits::SeriesElement;

/// Streaming stock-span calculator.
///
/// One instance per price stream. Methods take `&mut self`, so a shared
/// spanner must be wrapped by the caller.
#[derive(Debug, Clone)]
pub struct StockSpanner<T> {
    /// `(price, span)` pairs, prices strictly decreasing bottom to top
    stack: Vec<(T, usize)>,
    recorded: usize,
    counts: OpCounts,
}

impl<T: SeriesElement> StockSpanner<T> {
    /// Creates an empty spanner.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stack: Vec::new(),
            recorded: 0,
            counts: OpCounts {
                pushes: 0,
                pops: 0,
            },
        }
    }

    /// Records the next price and returns its span (always at least 1).
    ///
    /// A price that does not compare with itself (NaN) folds nothing and gets
    /// a span of 1.
    pub fn record_price(&mut self, price: T) -> usize {
        let mut span = 1;

        while let Some(&(top, top_span)) = self.stack.last() {
            if !matches!(top.partial_cmp(&price), Some(Ordering::Less | Ordering::Equal)) {
                break;
            }
            span += top_span;
            self.stack.pop();
            self.counts.pops += 1;
        }

        self.stack.push((price, span));
        self.counts.pushes += 1;
        self.recorded += 1;

        span
    }

    /// Number of prices recorded since creation or the last reset.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.recorded
    }

    /// Returns true if no price has been recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recorded == 0
    }

    /// Number of `(price, span)` pairs currently on the stack.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns the push and pop counters.
    #[inline]
    #[must_use]
    pub const fn op_counts(&self) -> OpCounts {
        self.counts
    }

    /// Forgets every recorded price.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.recorded = 0;
        self.counts = OpCounts::default();
    }
}

impl<T: SeriesElement> Default for StockSpanner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SeriesElement> Extend<T> for StockSpanner<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, prices: I) {
        for price in prices {
            self.record_price(price);
        }
    }
}

/// Computes the span of every price in a batch.
///
/// # Example
///
/// ```
/// use fast_mono::patterns::stock_span::stock_spans;
///
/// assert_eq!(stock_spans(&[10, 4, 5, 90, 120, 80]), vec![1, 1, 2, 4, 5, 1]);
/// ```
#[must_use]
pub fn stock_spans<T: SeriesElement>(prices: &[T]) -> Vec<usize> {
    let mut spanner = StockSpanner::new();
    let spans: Vec<usize> = prices.iter().map(|&p| spanner.record_price(p)).collect();

    let counts = spanner.op_counts();
    trace!(
        len = prices.len(),
        pushes = counts.pushes,
        pops = counts.pops,
        depth = spanner.depth(),
        "stock span pass"
    );

    spans
}

/// Computes spans by walking back from every price, O(n²).
///
/// This function is provided for comparison and testing purposes.
/// It is NOT recommended for production use - use [`stock_spans`] instead.
#[must_use]
pub fn stock_spans_naive<T: SeriesElement>(prices: &[T]) -> Vec<usize> {
    (0..prices.len())
        .map(|i| {
            1 + prices[..i]
                .iter()
                .rev()
                .take_while(|&&earlier| earlier <= prices[i])
                .count()
        })
        .collect()
}
