//! Diff command handler.
//!
//! Implements the `diff` subcommand: resolve the two input paths (prompting
//! interactively for any that are missing), read both files as line
//! sequences, run the engine, and route the rendered report.

use crate::cli::exit_codes;
use crate::config::DiffConfig;
use crate::engine::{DiffEngine, DiffSummary};
use crate::input::{
    auto_detect_format, prompt_path, read_lines, should_use_color, write_output, OutputTarget,
};
use crate::report::{reporter_for, ReportConfig, ReportMetadata};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let old_path = resolve_path(config.paths.old.clone(), "Base file:")?;
    let new_path = resolve_path(config.paths.new.clone(), "Changed file:")?;

    let old_lines = read_lines(&old_path)
        .with_context(|| format!("Failed to read base file: {}", old_path.display()))?;
    let new_lines = read_lines(&new_path)
        .with_context(|| format!("Failed to read changed file: {}", new_path.display()))?;

    if !quiet {
        tracing::info!(
            "Read {} lines from base file, {} from changed file",
            old_lines.len(),
            new_lines.len()
        );
    }

    let engine = DiffEngine::new(old_lines, new_lines, config.tie_break);
    let script = engine.edit_script().context("Diff computation failed")?;
    let summary = DiffSummary::of(script);

    let exit_code = determine_exit_code(&config, &summary);

    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);
    let colored = should_use_color(config.output.no_color) && output_target.is_terminal();

    let report_config = ReportConfig {
        show_lcs: config.output.show_lcs,
        metadata: ReportMetadata {
            old_path: Some(old_path.display().to_string()),
            new_path: Some(new_path.display().to_string()),
            ..ReportMetadata::new()
        },
    };

    let reporter = reporter_for(effective_output, colored)
        .context("Failed to select a report generator")?;
    let mut rendered = reporter
        .generate(script, &report_config)
        .context("Report generation failed")?;
    // Normalize to exactly one trailing newline regardless of format.
    rendered.truncate(rendered.trim_end_matches('\n').len());
    rendered.push('\n');
    write_output(&rendered, &output_target, quiet)?;

    Ok(exit_code)
}

/// Use the given path, or prompt interactively until a valid one is entered.
fn resolve_path(path: Option<PathBuf>, message: &str) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p),
        None => prompt_path(message).context("Failed to read file path from console"),
    }
}

/// Determine the appropriate exit code from the summary and config flags.
const fn determine_exit_code(config: &DiffConfig, summary: &DiffSummary) -> i32 {
    if config.behavior.fail_on_change && summary.total_changes() > 0 {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorConfig;

    #[test]
    fn test_exit_code_without_fail_on_change() {
        let config = DiffConfig::default();
        let summary = DiffSummary {
            same: 1,
            added: 2,
            removed: 3,
        };
        assert_eq!(determine_exit_code(&config, &summary), exit_codes::SUCCESS);
    }

    #[test]
    fn test_exit_code_with_fail_on_change() {
        let config = DiffConfig {
            behavior: BehaviorConfig {
                fail_on_change: true,
                quiet: false,
            },
            ..Default::default()
        };
        let changed = DiffSummary {
            same: 0,
            added: 1,
            removed: 0,
        };
        assert_eq!(
            determine_exit_code(&config, &changed),
            exit_codes::CHANGES_DETECTED
        );

        let unchanged = DiffSummary {
            same: 4,
            added: 0,
            removed: 0,
        };
        assert_eq!(determine_exit_code(&config, &unchanged), exit_codes::SUCCESS);
    }
}
