//! Run Exporter Port - Renders an analysis run into downloadable formats.
//!
//! Exporters only format; they never add scoring logic.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::domain::fmea::AnalysisRun;

/// Export formats supported for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Per-persona scores: Leader, Severity, Occurrence, Detection, RPN.
    ScoresCsv,
    /// Aggregated roadmap.
    RoadmapCsv,
    /// Every persona's style coaching lines: Leader, Mitigation.
    MitigationsCsv,
    /// Every persona's theme and guardrail actions.
    ActionsCsv,
    /// Inputs, theme weights, per-persona results and roadmap as one JSON document.
    JsonBundle,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::ScoresCsv,
        ExportFormat::RoadmapCsv,
        ExportFormat::MitigationsCsv,
        ExportFormat::ActionsCsv,
        ExportFormat::JsonBundle,
    ];

    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::ScoresCsv
            | ExportFormat::RoadmapCsv
            | ExportFormat::MitigationsCsv
            | ExportFormat::ActionsCsv => "text/csv; charset=utf-8",
            ExportFormat::JsonBundle => "application/json",
        }
    }

    /// Get the default file name for this format.
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::ScoresCsv => "fmea_scores.csv",
            ExportFormat::RoadmapCsv => "roadmap.csv",
            ExportFormat::MitigationsCsv => "mitigations.csv",
            ExportFormat::ActionsCsv => "mitigation_actions.csv",
            ExportFormat::JsonBundle => "fmea_results.json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Errors that can occur while exporting
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No analysis run available to export")]
    NoRun,

    #[error("No exporter registered for {0:?}")]
    UnsupportedFormat(ExportFormat),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl ExportError {
    pub fn io(message: impl Into<String>) -> Self {
        ExportError::Io(message.into())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

/// Port for rendering a run into bytes.
///
/// # Contract
///
/// Implementations must:
/// - Produce identical bytes for identical runs
/// - Report `UnsupportedFormat` for formats outside `formats()`
pub trait RunExporter: Send + Sync {
    /// Formats this exporter can render.
    fn formats(&self) -> &'static [ExportFormat];

    /// Render `run` in `format`.
    fn export(&self, run: &AnalysisRun, format: ExportFormat) -> Result<Vec<u8>, ExportError>;

    fn supports(&self, format: ExportFormat) -> bool {
        self.formats().contains(&format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_distinct() {
        let names: std::collections::HashSet<&str> =
            ExportFormat::ALL.iter().map(|f| f.file_name()).collect();
        assert_eq!(names.len(), ExportFormat::ALL.len());
    }

    #[test]
    fn content_types_match_extension() {
        for format in ExportFormat::ALL {
            if format.file_name().ends_with(".csv") {
                assert!(format.content_type().starts_with("text/csv"));
            } else {
                assert_eq!(format.content_type(), "application/json");
            }
        }
    }
}
