//! **A line-oriented LCS diff library and CLI.**
//!
//! `linediff` compares two ordered sequences of comparable elements
//! (typically text lines) with the classic Longest Common Subsequence
//! dynamic program and classifies every element of both sequences as SAME,
//! ADDED, or REMOVED. It powers both a command-line tool and a Rust library
//! for embedding diff computation in your own applications.
//!
//! ## Core Concepts & Modules
//!
//! - **[`engine`]**: Home of the [`DiffEngine`], the LCS table, the edit
//!   script types, and the [`TieBreak`] modes that choose between equally
//!   minimal edit scripts.
//! - **[`input`]**: Collaborators that feed the engine — file reading,
//!   interactive console prompting, and output routing. The engine itself
//!   never performs IO.
//! - **[`report`]**: Text, summary, and JSON renderings of an edit script.
//!
//! ## Getting Started
//!
//! ```
//! use linediff::{DiffEngine, DiffStatus, TieBreak};
//!
//! let old: Vec<String> = ["a", "b", "c", "d"].iter().map(ToString::to_string).collect();
//! let new: Vec<String> = ["a", "c", "b", "d"].iter().map(ToString::to_string).collect();
//!
//! let engine = DiffEngine::new(old, new, TieBreak::PreferRemoved);
//! assert_eq!(engine.lcs_length()?, 3);
//!
//! for entry in engine.edit_script()? {
//!     match entry.status {
//!         DiffStatus::Same => println!("  {}", entry.element),
//!         DiffStatus::Added => println!("+ {}", entry.element),
//!         DiffStatus::Removed => println!("- {}", entry.element),
//!     }
//! }
//! # Ok::<(), linediff::DiffError>(())
//! ```
//!
//! ## Scope
//!
//! The engine is deliberately the textbook O(n·m) dynamic program with a
//! full dense table and a deterministic backtrace. Tokenization,
//! character-level diffing, hunk compression, and alternative algorithms
//! (Myers, patience, Hirschberg) are out of scope.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Variable names like `old`/`new` or `min`/`max` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod report;

// Re-export main types for convenience
pub use config::{BehaviorConfig, DiffConfig, DiffPaths, OutputConfig};
pub use engine::{
    CompareOutcome, Comparator, DiffEngine, DiffEntry, DiffStatus, DiffSummary, LcsTable, TieBreak,
};
pub use error::{ComparisonFault, DiffError, Result};
pub use report::{ReportConfig, ReportFormat, ReportGenerator, ReportMetadata};
