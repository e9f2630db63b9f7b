//! LCS diff engine.
//!
//! Computes a line-oriented difference between two ordered sequences using
//! the classic O(n·m) Longest Common Subsequence dynamic program, then
//! backtracks through the table to classify every element as SAME, ADDED,
//! or REMOVED.
//!
//! # Architecture
//!
//! - [`LcsTable`]: the dense DP length table
//! - [`Comparator`]: caller-supplied equality oracle
//! - [`DiffEngine`]: owns the inputs, memoizes the table and edit script,
//!   and serves the derived queries (`edit_script`, `lcs_length`, `lcs`)
//! - [`TieBreak`]: which backtrace direction wins when the table admits
//!   multiple optimal paths
//!
//! # Example
//!
//! ```
//! use linediff::{DiffEngine, TieBreak};
//!
//! let engine = DiffEngine::new(
//!     vec!["shared", "only in old"],
//!     vec!["shared", "only in new"],
//!     TieBreak::PreferRemoved,
//! );
//!
//! for entry in engine.edit_script().unwrap() {
//!     println!("{entry}");
//! }
//! assert_eq!(engine.lcs().unwrap(), vec!["shared"]);
//! ```

mod compare;
#[allow(clippy::module_inception)]
mod engine;
mod script;
mod table;

pub use compare::{CompareOutcome, Comparator};
pub use engine::DiffEngine;
pub use script::{DiffEntry, DiffStatus, DiffSummary, TieBreak};
pub use table::LcsTable;
