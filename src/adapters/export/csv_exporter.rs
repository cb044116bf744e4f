//! CSV Exporter - Scores, roadmap and mitigation tables as CSV.

use crate::domain::fmea::AnalysisRun;
use crate::ports::{ExportError, ExportFormat, RunExporter};

const SCORES_HEADER: &str = "Leader,Severity,Occurrence,Detection,RPN";
const ROADMAP_HEADER: &str = "Action,Owner,Theme,KPI,StartBy,Weight,SupportedBy,Rationale";
const MITIGATIONS_HEADER: &str = "Leader,Mitigation";
const ACTIONS_HEADER: &str = "Leader,Theme,Action,Owner,KPI,StartBy,RPN";

/// Quote a field when it contains a comma, quote or line break.
pub fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Renders the four tabular exports.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    fn scores(run: &AnalysisRun) -> String {
        let mut out = String::from(SCORES_HEADER);
        out.push('\n');
        for assessment in &run.assessments {
            let (s, o, d) = assessment.score.as_tuple();
            out.push_str(&format!(
                "{},{},{},{},{}\n",
                escape_csv(&assessment.leader),
                s,
                o,
                d,
                assessment.rpn
            ));
        }
        out
    }

    fn roadmap(run: &AnalysisRun) -> String {
        let mut out = String::from(ROADMAP_HEADER);
        out.push('\n');
        for entry in &run.roadmap {
            out.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                escape_csv(&entry.action),
                escape_csv(&entry.owner),
                escape_csv(&entry.theme),
                escape_csv(&entry.kpi),
                entry.start_by,
                entry.weight,
                escape_csv(&entry.supported_by),
                escape_csv(&entry.rationale)
            ));
        }
        out
    }

    fn mitigations(run: &AnalysisRun) -> String {
        let mut out = String::from(MITIGATIONS_HEADER);
        out.push('\n');
        for assessment in &run.assessments {
            for line in &assessment.style_mitigations {
                out.push_str(&format!(
                    "{},{}\n",
                    escape_csv(&assessment.leader),
                    escape_csv(line)
                ));
            }
        }
        out
    }

    fn actions(run: &AnalysisRun) -> String {
        let mut out = String::from(ACTIONS_HEADER);
        out.push('\n');
        for action in &run.actions {
            out.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                escape_csv(&action.persona),
                escape_csv(&action.theme),
                escape_csv(&action.action),
                escape_csv(&action.owner),
                escape_csv(&action.kpi),
                action.start_by,
                action.rpn
            ));
        }
        out
    }
}

impl RunExporter for CsvExporter {
    fn formats(&self) -> &'static [ExportFormat] {
        &[
            ExportFormat::ScoresCsv,
            ExportFormat::RoadmapCsv,
            ExportFormat::MitigationsCsv,
            ExportFormat::ActionsCsv,
        ]
    }

    fn export(&self, run: &AnalysisRun, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        let text = match format {
            ExportFormat::ScoresCsv => Self::scores(run),
            ExportFormat::RoadmapCsv => Self::roadmap(run),
            ExportFormat::MitigationsCsv => Self::mitigations(run),
            ExportFormat::ActionsCsv => Self::actions(run),
            other => return Err(ExportError::UnsupportedFormat(other)),
        };
        Ok(text.into_bytes())
    }
}
