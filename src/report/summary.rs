//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::engine::{DiffEntry, DiffSummary};
use std::fmt::Write;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary reporter for shell output
#[derive(Debug)]
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        script: &[DiffEntry<String>],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let summary = DiffSummary::of(script);
        let mut out = String::new();

        writeln!(out, "{}", self.color("Line Diff Summary", "bold"))?;
        writeln!(out, "{}", self.color(&"─".repeat(40), "dim"))?;

        if config.metadata.old_path.is_some() || config.metadata.new_path.is_some() {
            writeln!(
                out,
                "{}  {} → {}",
                self.color("Files:", "cyan"),
                config.metadata.old_path.as_deref().unwrap_or("old"),
                config.metadata.new_path.as_deref().unwrap_or("new"),
            )?;
        }
        writeln!(
            out,
            "{}  {} → {} lines",
            self.color("Size:", "cyan"),
            summary.same + summary.removed,
            summary.same + summary.added,
        )?;
        writeln!(out)?;

        if summary.total_changes() == 0 {
            writeln!(out, "{}", self.color("No changes detected", "green"))?;
        } else {
            writeln!(out, "{}", self.color("Changes:", "bold"))?;
            if summary.added > 0 {
                writeln!(
                    out,
                    "  {} {} added",
                    self.color(&format!("+{}", summary.added), "green"),
                    if summary.added == 1 { "line" } else { "lines" },
                )?;
            }
            if summary.removed > 0 {
                writeln!(
                    out,
                    "  {} {} removed",
                    self.color(&format!("-{}", summary.removed), "red"),
                    if summary.removed == 1 { "line" } else { "lines" },
                )?;
            }
            writeln!(out, "  {} unchanged", summary.same)?;
        }

        if config.show_lcs {
            writeln!(out)?;
            writeln!(
                out,
                "{} {}",
                self.color("LCS Length:", "cyan"),
                summary.same
            )?;
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
