//! Report generation for diff results.
//!
//! This module provides the output formats for an edit script:
//! - Text: the classic console rendering, one `"<STATUS> : <element>"` line
//!   per entry, optionally followed by the LCS block
//! - Summary: compact shell-friendly change counts
//! - JSON: structured data for programmatic integration
//!
//! Hunk compression and unified-diff formatting are deliberately absent;
//! every entry of the edit script is rendered.

mod json;
mod summary;
mod text;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use text::TextReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::engine::DiffEntry;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render an edit script into the generator's format
    fn generate(
        &self,
        script: &[DiffEntry<String>],
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Pick a reporter for a resolved (non-`Auto`) format.
///
/// # Errors
///
/// Returns [`ReportError::ConfigError`] when `format` is still `Auto`;
/// callers resolve `Auto` via [`crate::input::auto_detect_format`] first.
pub fn reporter_for(
    format: ReportFormat,
    colored: bool,
) -> Result<Box<dyn ReportGenerator>, ReportError> {
    match format {
        ReportFormat::Text => Ok(Box::new(TextReporter::new())),
        ReportFormat::Json => Ok(Box::new(JsonReporter::new())),
        ReportFormat::Summary => {
            let reporter = if colored {
                SummaryReporter::new()
            } else {
                SummaryReporter::new().no_color()
            };
            Ok(Box::new(reporter))
        }
        ReportFormat::Auto => Err(ReportError::ConfigError(
            "auto format must be resolved before rendering".to_string(),
        )),
    }
}
