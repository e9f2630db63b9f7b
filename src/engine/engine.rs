//! The diff engine: a build-then-query pipeline per instance.

use crate::engine::script::reconstruct;
use crate::engine::{Comparator, DiffEntry, DiffStatus, DiffSummary, LcsTable, TieBreak};
use crate::error::{DiffError, Result};
use std::cell::{Cell, OnceCell};

/// Computes a classified diff between two ordered sequences.
///
/// The engine owns copies of both sequences for its lifetime. The LCS table
/// and the edit script are computed lazily on first query and memoized;
/// repeated queries return the identical cached values. The lazy-build path
/// is deliberately single-threaded (`OnceCell`, not `OnceLock`) — callers
/// that want to share an engine across threads must call [`force`] first,
/// after which all state is immutable.
///
/// A comparator fault during table construction or backtracking poisons the
/// instance: the failed query returns the fault and every later query
/// reports [`DiffError::Poisoned`]. There is no recovery path other than
/// building a new engine with corrected inputs.
///
/// [`force`]: DiffEngine::force
///
/// # Example
///
/// ```
/// use linediff::{DiffEngine, TieBreak};
///
/// let old = vec!["a", "b", "c", "d"];
/// let new = vec!["a", "c", "b", "d"];
/// let engine = DiffEngine::new(old, new, TieBreak::default());
///
/// assert_eq!(engine.lcs_length().unwrap(), 3);
/// assert_eq!(engine.edit_script().unwrap().len(), 5);
/// ```
#[derive(Debug)]
pub struct DiffEngine<T> {
    a: Vec<T>,
    b: Vec<T>,
    equal: Comparator<T>,
    tie_break: TieBreak,
    table: OnceCell<LcsTable>,
    script: OnceCell<Vec<DiffEntry<T>>>,
    poisoned: Cell<bool>,
}

impl<T: Clone + PartialEq + 'static> DiffEngine<T> {
    /// Create an engine that compares elements with `PartialEq`.
    #[must_use]
    pub fn new(a: Vec<T>, b: Vec<T>, tie_break: TieBreak) -> Self {
        Self::with_comparator(a, b, Comparator::default(), tie_break)
    }
}

impl<T: Clone> DiffEngine<T> {
    /// Create an engine with a caller-supplied equality oracle.
    #[must_use]
    pub fn with_comparator(
        a: Vec<T>,
        b: Vec<T>,
        equal: Comparator<T>,
        tie_break: TieBreak,
    ) -> Self {
        Self {
            a,
            b,
            equal,
            tie_break,
            table: OnceCell::new(),
            script: OnceCell::new(),
            poisoned: Cell::new(false),
        }
    }

    /// The configured tie-break mode.
    #[must_use]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Lengths of the old and new sequences.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.a.len(), self.b.len())
    }

    fn table(&self) -> Result<&LcsTable> {
        if self.poisoned.get() {
            return Err(DiffError::Poisoned);
        }
        if let Some(table) = self.table.get() {
            return Ok(table);
        }
        match LcsTable::build(&self.a, &self.b, &self.equal) {
            Ok(table) => Ok(self.table.get_or_init(|| table)),
            Err(err) => {
                self.poisoned.set(true);
                Err(err)
            }
        }
    }

    /// The full ordered edit script, computed once and cached.
    pub fn edit_script(&self) -> Result<&[DiffEntry<T>]> {
        if self.poisoned.get() {
            return Err(DiffError::Poisoned);
        }
        if let Some(script) = self.script.get() {
            return Ok(script);
        }
        let table = self.table()?;
        match reconstruct(table, &self.a, &self.b, &self.equal, self.tie_break) {
            Ok(script) => Ok(self.script.get_or_init(|| script)),
            Err(err) => {
                self.poisoned.set(true);
                Err(err)
            }
        }
    }

    /// LCS length, `table[n][m]`. O(1) once the table exists.
    pub fn lcs_length(&self) -> Result<usize> {
        Ok(self.table()?.lcs_length())
    }

    /// The longest common subsequence: SAME entries of the edit script,
    /// in order.
    pub fn lcs(&self) -> Result<Vec<T>> {
        Ok(self
            .edit_script()?
            .iter()
            .filter(|entry| entry.status == DiffStatus::Same)
            .map(|entry| entry.element.clone())
            .collect())
    }

    /// Entry counts for the edit script.
    pub fn summary(&self) -> Result<DiffSummary> {
        Ok(DiffSummary::of(self.edit_script()?))
    }

    /// Pre-compute the table and edit script.
    ///
    /// After a successful `force` the engine is fully immutable and may be
    /// shared for read-only concurrent access.
    pub fn force(&self) -> Result<()> {
        self.edit_script().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComparisonFault;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_lcs_length_matches_same_count() {
        let engine = DiffEngine::new(
            lines(&["a", "b", "c", "d"]),
            lines(&["a", "c", "b", "d"]),
            TieBreak::default(),
        );
        let same = engine
            .edit_script()
            .unwrap()
            .iter()
            .filter(|e| e.status == DiffStatus::Same)
            .count();
        assert_eq!(engine.lcs_length().unwrap(), same);
    }

    #[test]
    fn test_edit_script_is_memoized() {
        let engine = DiffEngine::new(lines(&["a", "b"]), lines(&["b", "c"]), TieBreak::default());
        let first = engine.edit_script().unwrap().as_ptr();
        let second = engine.edit_script().unwrap().as_ptr();
        assert_eq!(first, second, "repeated calls must return the cached script");
    }

    #[test]
    fn test_lcs_view_matches_tie_break_mode() {
        let a = lines(&["a", "b", "c", "d"]);
        let b = lines(&["a", "c", "b", "d"]);

        let engine = DiffEngine::new(a.clone(), b.clone(), TieBreak::PreferRemoved);
        assert_eq!(engine.lcs().unwrap(), lines(&["a", "b", "d"]));

        let engine = DiffEngine::new(a, b, TieBreak::PreferAdded);
        assert_eq!(engine.lcs().unwrap(), lines(&["a", "c", "d"]));
    }

    #[test]
    fn test_custom_comparator() {
        let engine = DiffEngine::with_comparator(
            lines(&["Hello", "World"]),
            lines(&["hello", "planet"]),
            Comparator::new(|l: &String, r: &String| l.eq_ignore_ascii_case(r)),
            TieBreak::default(),
        );
        assert_eq!(engine.lcs_length().unwrap(), 1);
    }

    #[test]
    fn test_fault_poisons_engine() {
        let engine = DiffEngine::with_comparator(
            vec![1, 2],
            vec![2, 3],
            Comparator::fallible(|_: &i32, _: &i32| {
                Err(ComparisonFault("broken oracle".to_string()))
            }),
            TieBreak::default(),
        );
        assert!(matches!(
            engine.edit_script(),
            Err(DiffError::Comparison { .. })
        ));
        // Every subsequent query reports the poisoned state.
        assert!(matches!(engine.lcs_length(), Err(DiffError::Poisoned)));
        assert!(matches!(engine.lcs(), Err(DiffError::Poisoned)));
    }

    #[test]
    fn test_force_precomputes_everything() {
        let engine = DiffEngine::new(lines(&["x"]), lines(&["y"]), TieBreak::default());
        engine.force().unwrap();
        assert_eq!(engine.lcs_length().unwrap(), 0);
        assert_eq!(engine.summary().unwrap().total_changes(), 2);
    }

    #[test]
    fn test_dimensions() {
        let engine = DiffEngine::new(lines(&["a", "b"]), lines(&["c"]), TieBreak::default());
        assert_eq!(engine.dimensions(), (2, 1));
    }
}
