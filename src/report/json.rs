//! JSON report generator for programmatic integration.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use crate::engine::{DiffEntry, DiffStatus, DiffSummary};
use serde::Serialize;

/// Top-level JSON document shape
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    metadata: &'a ReportMetadata,
    summary: DiffSummary,
    lcs_length: usize,
    entries: &'a [DiffEntry<String>],
    #[serde(skip_serializing_if = "Option::is_none")]
    lcs: Option<Vec<&'a str>>,
}

/// JSON reporter
#[derive(Debug, Default)]
pub struct JsonReporter;

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        script: &[DiffEntry<String>],
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let summary = DiffSummary::of(script);
        let lcs = config.show_lcs.then(|| {
            script
                .iter()
                .filter(|e| e.status == DiffStatus::Same)
                .map(|e| e.element.as_str())
                .collect()
        });

        let report = JsonReport {
            metadata: &config.metadata,
            summary,
            lcs_length: summary.same,
            entries: script,
            lcs,
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
