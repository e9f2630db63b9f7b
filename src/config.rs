//! Configuration types for CLI command handlers.
//!
//! Assembled in `main.rs` from parsed arguments and passed to the
//! `cli::run_*` handlers.

use crate::engine::TieBreak;
use crate::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input paths for the diff command.
///
/// Either path may be absent; the handler prompts for missing paths
/// interactively.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiffPaths {
    /// Path to the old/baseline file
    pub old: Option<PathBuf>,
    /// Path to the new file
    pub new: Option<PathBuf>,
}

/// Output routing and rendering options
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (stdout if not specified)
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Append the LCS block after the diff
    pub show_lcs: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any changes are detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Full configuration for the diff command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiffConfig {
    pub paths: DiffPaths,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
    /// Backtrace direction preference for ambiguous table paths
    pub tie_break: TieBreak,
}
