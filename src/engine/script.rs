//! Edit script types and backtrace reconstruction.
//!
//! The backtrace walks the LCS table from `(n, m)` back to `(0, 0)` and
//! classifies every element of both sequences as SAME, ADDED, or REMOVED.
//! Entries are collected in reverse and flipped once at the end instead of
//! repeatedly prepending.

use crate::engine::{Comparator, LcsTable};
use crate::error::{DiffError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single edit-script entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DiffStatus {
    /// Element present in both sequences
    Same,
    /// Element present only in the new sequence
    Added,
    /// Element present only in the old sequence
    Removed,
}

impl fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffStatus::Same => write!(f, "SAME"),
            DiffStatus::Added => write!(f, "ADDED"),
            DiffStatus::Removed => write!(f, "REMOVED"),
        }
    }
}

/// One classified element of the edit script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry<T> {
    pub element: T,
    pub status: DiffStatus,
}

impl<T> DiffEntry<T> {
    pub const fn new(element: T, status: DiffStatus) -> Self {
        Self { element, status }
    }
}

impl<T: fmt::Display> fmt::Display for DiffEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.status, self.element)
    }
}

/// Entry counts derived from an edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub same: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffSummary {
    /// Tally the statuses of an edit script.
    #[must_use]
    pub fn of<T>(script: &[DiffEntry<T>]) -> Self {
        let mut summary = Self::default();
        for entry in script {
            match entry.status {
                DiffStatus::Same => summary.same += 1,
                DiffStatus::Added => summary.added += 1,
                DiffStatus::Removed => summary.removed += 1,
            }
        }
        summary
    }

    /// Number of non-SAME entries.
    #[must_use]
    pub const fn total_changes(&self) -> usize {
        self.added + self.removed
    }
}

/// Backtrace direction preference when the table admits more than one
/// optimal path.
///
/// The mode only affects the order and attribution of ADDED vs REMOVED
/// entries among equally minimal edit scripts; the LCS length is the same
/// either way.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Consume the old sequence first while walking the table backwards;
    /// ADDED entries surface before REMOVED in the forward script
    #[default]
    PreferRemoved,
    /// Consume the new sequence first while walking the table backwards;
    /// REMOVED entries surface before ADDED in the forward script
    PreferAdded,
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TieBreak::PreferRemoved => write!(f, "prefer-removed"),
            TieBreak::PreferAdded => write!(f, "prefer-added"),
        }
    }
}

/// Reconstruct the edit script from a built table.
///
/// Pure function of the table, the sequences, and the tie-break mode. The
/// produced script covers every element of `a` (SAME or REMOVED) and every
/// element of `b` (SAME or ADDED); its SAME count equals `table[n][m]`.
pub(crate) fn reconstruct<T: Clone>(
    table: &LcsTable,
    a: &[T],
    b: &[T],
    equal: &Comparator<T>,
    tie_break: TieBreak,
) -> Result<Vec<DiffEntry<T>>> {
    let mut i = a.len();
    let mut j = b.len();
    let mut script = Vec::with_capacity(a.len() + b.len() - table.lcs_length());

    while i > 0 && j > 0 {
        let same = equal.equal(&a[i - 1], &b[j - 1]).map_err(|fault| {
            DiffError::comparison(format!("comparing A[{}] with B[{}]", i - 1, j - 1), fault)
        })?;
        if same {
            i -= 1;
            j -= 1;
            script.push(DiffEntry::new(a[i].clone(), DiffStatus::Same));
        } else {
            match tie_break {
                TieBreak::PreferRemoved => {
                    if table.get(i - 1, j) == table.get(i, j) {
                        i -= 1;
                        script.push(DiffEntry::new(a[i].clone(), DiffStatus::Removed));
                    } else {
                        j -= 1;
                        script.push(DiffEntry::new(b[j].clone(), DiffStatus::Added));
                    }
                }
                TieBreak::PreferAdded => {
                    if table.get(i, j - 1) == table.get(i, j) {
                        j -= 1;
                        script.push(DiffEntry::new(b[j].clone(), DiffStatus::Added));
                    } else {
                        i -= 1;
                        script.push(DiffEntry::new(a[i].clone(), DiffStatus::Removed));
                    }
                }
            }
        }
    }
    while i > 0 {
        i -= 1;
        script.push(DiffEntry::new(a[i].clone(), DiffStatus::Removed));
    }
    while j > 0 {
        j -= 1;
        script.push(DiffEntry::new(b[j].clone(), DiffStatus::Added));
    }

    script.reverse();
    debug_assert_eq!(
        script
            .iter()
            .filter(|e| e.status == DiffStatus::Same)
            .count(),
        table.lcs_length(),
    );
    Ok(script)
}
