//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. Each handler implements the business logic for a specific CLI
//! subcommand.

mod diff;

pub use diff::run_diff;

/// Process exit codes used by the binary
pub mod exit_codes {
    /// No changes detected (or `--fail-on-change` not set)
    pub const SUCCESS: i32 = 0;
    /// Changes detected with `--fail-on-change`
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
