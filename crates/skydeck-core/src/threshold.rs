//! Ascending threshold tables.
//!
//! A table is an ordered list of `(bound, value)` buckets. A reading falls
//! into the first bucket whose bound is >= the reading; anything past the
//! last bound lands in the last bucket, so lookups never fail.

use crate::error::CoreError;

/// One bucket of a threshold table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold<T> {
    /// Inclusive upper bound of this bucket.
    pub bound: f64,
    pub value: T,
}

impl<T> Threshold<T> {
    pub const fn new(bound: f64, value: T) -> Self {
        Self { bound, value }
    }
}

/// A non-empty, strictly ascending list of buckets.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable<'a, T> {
    entries: &'a [Threshold<T>],
}

impl<'a, T> ThresholdTable<'a, T> {
    /// Wrap a compile-time table.
    ///
    /// Panics (at compile time when used in a `const`) on an empty slice.
    /// Ordering is not checked here; call [`ThresholdTable::validate`] from a test.
    pub const fn from_static(entries: &'a [Threshold<T>]) -> Self {
        assert!(!entries.is_empty(), "threshold table must not be empty");
        Self { entries }
    }

    /// Build a table from runtime data, checking every invariant.
    pub fn new(entries: &'a [Threshold<T>]) -> Result<Self, CoreError> {
        let table = Self { entries };
        table.validate()?;
        Ok(table)
    }

    /// Check that the table is non-empty with strictly increasing, non-NaN bounds.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.entries.is_empty() {
            return Err(CoreError::InvalidThresholds("table is empty".into()));
        }
        if let Some(i) = self.entries.iter().position(|t| t.bound.is_nan()) {
            return Err(CoreError::InvalidThresholds(format!(
                "bucket {i} has a NaN bound"
            )));
        }
        for (i, pair) in self.entries.windows(2).enumerate() {
            if pair[1].bound <= pair[0].bound {
                return Err(CoreError::InvalidThresholds(format!(
                    "bound of bucket {} ({}) is not above bucket {} ({})",
                    i + 1,
                    pair[1].bound,
                    i,
                    pair[0].bound
                )));
            }
        }
        Ok(())
    }

    /// Find the bucket for `reading`, returning its index and value.
    ///
    /// NaN is treated as "no reading" and lands in the lowest bucket.
    pub fn classify(&self, reading: f64) -> (usize, &'a T) {
        let last = self.entries.len() - 1;
        let index = if reading.is_nan() {
            0
        } else {
            self.entries
                .iter()
                .position(|t| reading <= t.bound)
                .unwrap_or(last)
        };
        (index, &self.entries[index].value)
    }

    pub fn entries(&self) -> &'a [Threshold<T>] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
