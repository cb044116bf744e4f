//! JSON Exporter - Whole run as a single pretty-printed document.

use serde::Serialize;

use crate::domain::fmea::{AnalysisRun, RoadmapEntry, ThemeScoreDistribution};
use crate::ports::{ExportError, ExportFormat, RunExporter};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonaRecord<'a> {
    leader: &'a str,
    description: &'a str,
    failure_mode: &'a str,
    effects: &'a str,
    severity: u8,
    occurrence: u8,
    detection: u8,
    rpn: u16,
    style_mitigations: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    eli5: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportBundle<'a> {
    problem: &'a str,
    decision: &'a str,
    theme_weights: &'a ThemeScoreDistribution,
    personas: Vec<PersonaRecord<'a>>,
    roadmap: &'a [RoadmapEntry],
}

impl<'a> ExportBundle<'a> {
    fn of(run: &'a AnalysisRun) -> Self {
        let personas = run
            .assessments
            .iter()
            .map(|a| {
                let (severity, occurrence, detection) = a.score.as_tuple();
                PersonaRecord {
                    leader: &a.leader,
                    description: &a.description,
                    failure_mode: &a.failure_mode,
                    effects: &a.effects,
                    severity,
                    occurrence,
                    detection,
                    rpn: a.rpn,
                    style_mitigations: &a.style_mitigations,
                    eli5: a.eli5.as_deref(),
                }
            })
            .collect();

        Self {
            problem: &run.problem,
            decision: &run.decision,
            theme_weights: &run.theme_weights,
            personas,
            roadmap: &run.roadmap,
        }
    }
}

/// Renders the JSON bundle.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl RunExporter for JsonExporter {
    fn formats(&self) -> &'static [ExportFormat] {
        &[ExportFormat::JsonBundle]
    }

    fn export(&self, run: &AnalysisRun, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        if format != ExportFormat::JsonBundle {
            return Err(ExportError::UnsupportedFormat(format));
        }
        Ok(serde_json::to_vec_pretty(&ExportBundle::of(run))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fmea::{FmeaEngine, LeadershipStyle};
    use serde_json::Value;

    const PROBLEM: &str = "Our market share is collapsing due to a competitor's cheaper cloud offering";
    const DECISION: &str = "We will acquire a smaller rival and lay off 10% of staff";

    fn bundle() -> (AnalysisRun, Value) {
        bundle_with(FmeaEngine::new())
    }

    fn bundle_with(engine: FmeaEngine) -> (AnalysisRun, Value) {
        let run = engine.run(PROBLEM, DECISION);
        let bytes = JsonExporter::new()
            .export(&run, ExportFormat::JsonBundle)
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();
        (run, value)
    }

    #[test]
    fn bundle_carries_inputs() {
        let (_, json) = bundle();
        assert_eq!(json["problem"], PROBLEM);
        assert_eq!(json["decision"], DECISION);
    }

    #[test]
    fn bundle_has_all_theme_weights() {
        let (_, json) = bundle();
        let weights = json["themeWeights"].as_object().unwrap();
        assert_eq!(weights.len(), 10);
        assert!(weights.contains_key("Market & Customer"));
    }

    #[test]
    fn bundle_scores_match_run() {
        let (run, json) = bundle();
        let personas = json["personas"].as_array().unwrap();
        assert_eq!(personas.len(), 10);
        assert_eq!(personas[0]["leader"], "Autocratic Leader Agentic AI Agent CEO");
        assert_eq!(personas[0]["rpn"], 180);
        assert_eq!(json["roadmap"].as_array().unwrap().len(), run.roadmap.len());
    }

    #[test]
    fn persona_records_carry_narrative_and_style_mitigations() {
        let (run, json) = bundle();
        let record = &json["personas"][0];
        let autocratic = &run.assessments[0];

        assert_eq!(record["failureMode"], autocratic.failure_mode.as_str());
        assert_eq!(record["effects"], autocratic.effects.as_str());
        assert_eq!(record["description"], autocratic.description.as_str());
        assert!(record["eli5"].as_str().unwrap().starts_with("ELI5:"));

        let lines: Vec<&str> = record["styleMitigations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(lines, LeadershipStyle::Autocratic.style_mitigations().to_vec());
    }

    #[test]
    fn eli5_is_omitted_when_disabled() {
        let (_, json) = bundle_with(FmeaEngine::new().with_eli5(false));
        let record = &json["personas"][0];
        assert!(record.get("eli5").is_none());
        assert!(record["failureMode"].is_string());
    }

    #[test]
    fn roadmap_records_use_start_by_label() {
        let (_, json) = bundle();
        let first = &json["roadmap"][0];
        assert_eq!(first["startBy"], "0–30 days");
        assert!(first["supportedBy"].is_string());
    }

    #[test]
    fn csv_formats_are_unsupported() {
        let run = FmeaEngine::new().run(PROBLEM, DECISION);
        let result = JsonExporter::new().export(&run, ExportFormat::ScoresCsv);
        assert!(matches!(result, Err(ExportError::UnsupportedFormat(_))));
    }
}
