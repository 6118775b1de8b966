//! Range-filtered, duplicate-free accumulation of parsed integers.

use rustc_hash::FxHashSet;

/// Smallest value retained by default.
pub const MIN_VALUE: i64 = -1023;

/// Largest value retained by default.
pub const MAX_VALUE: i64 = 1023;

/// Inclusive bounds for retained values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl ValueRange {
    /// Inclusive range `min..=max`.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(MIN_VALUE, MAX_VALUE)
    }
}

/// Outcome of offering a value to the collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    Inserted,
    Duplicate,
    OutOfRange,
}

/// Collects unique in-range integers and yields them sorted.
///
/// Insertion order is irrelevant: the set is hashed, and ordering is
/// established once by [`sorted_result`](Self::sorted_result).
#[derive(Debug, Clone, Default)]
pub struct UniqueSortedCollector {
    range: ValueRange,
    values: FxHashSet<i64>,
}

impl UniqueSortedCollector {
    /// Create an empty collector over the default range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collector retaining values within `range` instead of the default.
    pub fn with_range(range: ValueRange) -> Self {
        Self {
            range,
            values: FxHashSet::default(),
        }
    }

    /// Insert `value` if it is in range. Re-offering a value is a no-op.
    #[inline]
    pub fn offer(&mut self, value: i64) -> Offer {
        if !self.range.contains(value) {
            Offer::OutOfRange
        } else if self.values.insert(value) {
            Offer::Inserted
        } else {
            Offer::Duplicate
        }
    }

    /// Whether `value` has been retained.
    pub fn contains(&self, value: i64) -> bool {
        self.values.contains(&value)
    }

    /// Number of unique values retained.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if nothing has been retained.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Bounds this collector filters against.
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// All retained values in strictly ascending order.
    pub fn sorted_result(&self) -> Vec<i64> {
        let mut sorted: Vec<i64> = self.values.iter().copied().collect();
        // Members are unique, so stability cannot change the output.
        sorted.sort_unstable();
        sorted
    }

    /// Consume the collector, returning the ascending values.
    pub fn into_sorted(self) -> Vec<i64> {
        let mut sorted: Vec<i64> = self.values.into_iter().collect();
        sorted.sort_unstable();
        sorted
    }
}

impl Extend<i64> for UniqueSortedCollector {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for value in iter {
            self.offer(value);
        }
    }
}

impl FromIterator<i64> for UniqueSortedCollector {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut collector = Self::new();
        collector.extend(iter);
        collector
    }
}
