//! FMEA engine - runs every component for one or all personas.
//!
//! A run is split into three steps so callers can pace persona evaluation:
//! [`FmeaEngine::prepare`] scores the shared text once, [`FmeaEngine::assess`]
//! evaluates a single persona, and [`FmeaEngine::complete`] aggregates the
//! roadmap. [`FmeaEngine::run`] does all three back to back.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{RiskScore, RunId, Timestamp};

use super::narrative;
use super::{
    AnalysisRun, BaseScorer, LeadershipStyle, MitigationAction, MitigationBuilder,
    RoadmapAggregator, StyleScorer, ThemeClassifier, ThemeScoreDistribution,
};

/// Persona-independent results computed once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunContext {
    pub problem: String,
    pub decision: String,
    pub base_score: RiskScore,
    pub themes: ThemeScoreDistribution,
}

/// One persona's FMEA result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaAssessment {
    pub style: LeadershipStyle,
    pub leader: String,
    pub description: String,
    pub score: RiskScore,
    pub rpn: u16,
    pub failure_mode: String,
    pub effects: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eli5: Option<String>,
    pub style_mitigations: Vec<String>,
    pub mitigations: Vec<MitigationAction>,
}

/// Deterministic scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmeaEngine {
    include_eli5: bool,
}

impl Default for FmeaEngine {
    fn default() -> Self {
        Self { include_eli5: true }
    }
}

impl FmeaEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the ELI5 explanation on each assessment.
    pub fn with_eli5(mut self, include_eli5: bool) -> Self {
        self.include_eli5 = include_eli5;
        self
    }

    pub fn includes_eli5(&self) -> bool {
        self.include_eli5
    }

    /// Runs the theme classifier and base scorer on the shared text.
    pub fn prepare(&self, problem: &str, decision: &str) -> RunContext {
        RunContext {
            problem: problem.to_string(),
            decision: decision.to_string(),
            base_score: BaseScorer::base_scores(problem, decision),
            themes: ThemeClassifier::detect_themes(problem, decision),
        }
    }

    /// Scores one persona and builds its mitigation plan.
    pub fn assess(&self, context: &RunContext, style: LeadershipStyle) -> PersonaAssessment {
        let score = StyleScorer::style_adjusted_scores(context.base_score, style);
        let rpn = score.rpn();
        let mitigations = MitigationBuilder::build_mitigations(
            &context.problem,
            &context.decision,
            style,
            score,
            &context.themes,
        );

        debug!(
            persona = style.key(),
            severity = score.severity.value(),
            occurrence = score.occurrence.value(),
            detection = score.detection.value(),
            rpn,
            "Persona assessed"
        );

        PersonaAssessment {
            style,
            leader: style.display_name().to_string(),
            description: style.description().to_string(),
            score,
            rpn,
            failure_mode: narrative::failure_mode(style),
            effects: narrative::EFFECTS.to_string(),
            eli5: self.include_eli5.then(|| narrative::eli5(&score)),
            style_mitigations: style
                .style_mitigations()
                .iter()
                .map(|m| m.to_string())
                .collect(),
            mitigations,
        }
    }

    /// Aggregates assessed personas into an immutable run.
    pub fn complete(&self, context: RunContext, assessments: Vec<PersonaAssessment>) -> AnalysisRun {
        let actions: Vec<MitigationAction> = assessments
            .iter()
            .flat_map(|a| a.mitigations.iter().cloned())
            .collect();
        let roadmap = RoadmapAggregator::aggregate(&actions);

        AnalysisRun {
            id: RunId::new(),
            created_at: Timestamp::now(),
            problem: context.problem,
            decision: context.decision,
            base_score: context.base_score,
            theme_weights: context.themes,
            assessments,
            actions,
            roadmap,
        }
    }

    /// Evaluates all ten personas and builds the roadmap.
    ///
    /// Input is not validated here; blank text yields the base scores.
    pub fn run(&self, problem: &str, decision: &str) -> AnalysisRun {
        let context = self.prepare(problem, decision);
        let assessments = LeadershipStyle::ALL
            .iter()
            .map(|style| self.assess(&context, *style))
            .collect();
        self.complete(context, assessments)
    }
}
