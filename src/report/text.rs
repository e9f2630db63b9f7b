//! Plain text report: the classic console rendering.
//!
//! One line per edit-script entry formatted as `"<STATUS> : <element>"`.
//! When requested, the LCS block follows: `"LCS Length: <n>"`, `"LCS:"`,
//! then one common element per line.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::engine::{DiffEntry, DiffStatus};
use std::fmt::Write;

/// Text reporter producing the full classified diff
#[derive(Debug, Default)]
pub struct TextReporter;

impl TextReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for TextReporter {
    fn generate(
        &self,
        script: &[DiffEntry<String>],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut out = String::new();

        for entry in script {
            writeln!(out, "{entry}")?;
        }

        if config.show_lcs {
            let lcs: Vec<&str> = script
                .iter()
                .filter(|e| e.status == DiffStatus::Same)
                .map(|e| e.element.as_str())
                .collect();
            writeln!(out, "LCS Length: {}", lcs.len())?;
            writeln!(out, "LCS:")?;
            for element in lcs {
                writeln!(out, "{element}")?;
            }
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{DiffEngine, TieBreak};

    fn script(a: &[&str], b: &[&str]) -> Vec<DiffEntry<String>> {
        let engine = DiffEngine::new(
            a.iter().map(ToString::to_string).collect(),
            b.iter().map(ToString::to_string).collect(),
            TieBreak::default(),
        );
        engine.edit_script().unwrap().to_vec()
    }

    #[test]
    fn test_one_line_per_entry() {
        let report = TextReporter::new()
            .generate(&script(&["a"], &["b"]), &ReportConfig::default())
            .unwrap();
        assert_eq!(report, "ADDED : b\nREMOVED : a\n");
    }

    #[test]
    fn test_lcs_block_follows_diff() {
        let config = ReportConfig {
            show_lcs: true,
            ..Default::default()
        };
        let report = TextReporter::new()
            .generate(&script(&["x", "y"], &["x", "z"]), &config)
            .unwrap();

        assert!(report.starts_with("SAME : x\n"));
        assert!(report.contains("LCS Length: 1\n"));
        assert!(report.ends_with("LCS:\nx\n"));
    }

    #[test]
    fn test_empty_script_renders_empty_diff() {
        let report = TextReporter::new()
            .generate(&[], &ReportConfig::default())
            .unwrap();
        assert!(report.is_empty());
    }
}
