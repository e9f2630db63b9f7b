//! Caller-supplied equality oracles.
//!
//! The engine only cares about the equal / not-equal outcome, so the
//! comparator is modelled as a boxed predicate rather than a full ordering.
//! A fallible variant exists for comparators that can fail mid-diff; the
//! fault is surfaced as [`ComparisonFault`] and poisons the owning engine.

use crate::error::ComparisonFault;
use std::fmt;

/// Outcome of a single element comparison.
pub type CompareOutcome = Result<bool, ComparisonFault>;

/// Equality oracle over elements of type `T`.
///
/// Must be pure and deterministic; it is invoked O(n·m) times during table
/// construction and O(n+m) more times during backtracking.
pub struct Comparator<T> {
    oracle: Box<dyn Fn(&T, &T) -> CompareOutcome>,
}

impl<T> Comparator<T> {
    /// Wrap an infallible equality predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        Self {
            oracle: Box::new(move |left, right| Ok(predicate(left, right))),
        }
    }

    /// Wrap a fallible equality predicate.
    ///
    /// An `Err` from the predicate aborts the running diff operation and
    /// renders the owning engine unusable.
    pub fn fallible<F>(predicate: F) -> Self
    where
        F: Fn(&T, &T) -> CompareOutcome + 'static,
    {
        Self {
            oracle: Box::new(predicate),
        }
    }

    /// Compare two elements.
    pub fn equal(&self, left: &T, right: &T) -> CompareOutcome {
        (self.oracle)(left, right)
    }
}

impl<T: PartialEq + 'static> Default for Comparator<T> {
    fn default() -> Self {
        Self::new(|left, right| left == right)
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}
