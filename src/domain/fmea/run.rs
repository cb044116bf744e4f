//! AnalysisRun - immutable result of one problem/decision analysis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RiskScore, RunId, Timestamp};

use super::{LeadershipStyle, MitigationAction, PersonaAssessment, RoadmapEntry, ThemeScoreDistribution};

/// Everything produced by one analysis. Replaces the previous run wholesale;
/// nothing inside is mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRun {
    pub id: RunId,
    pub created_at: Timestamp,
    pub problem: String,
    pub decision: String,
    pub base_score: RiskScore,
    pub theme_weights: ThemeScoreDistribution,
    /// One entry per persona, in [`LeadershipStyle::ALL`] order.
    pub assessments: Vec<PersonaAssessment>,
    /// Every persona's mitigation actions, persona by persona.
    pub actions: Vec<MitigationAction>,
    pub roadmap: Vec<RoadmapEntry>,
}

impl AnalysisRun {
    /// Assessment for a specific persona.
    pub fn assessment(&self, style: LeadershipStyle) -> Option<&PersonaAssessment> {
        self.assessments.iter().find(|a| a.style == style)
    }

    /// The `n` highest-RPN assessments; equal RPNs keep persona order.
    pub fn top_risks(&self, n: usize) -> Vec<&PersonaAssessment> {
        let mut ranked: Vec<&PersonaAssessment> = self.assessments.iter().collect();
        ranked.sort_by(|a, b| b.rpn.cmp(&a.rpn));
        ranked.truncate(n);
        ranked
    }

    /// Highest RPN across personas (0 for a run with no assessments).
    pub fn max_rpn(&self) -> u16 {
        self.assessments.iter().map(|a| a.rpn).max().unwrap_or(0)
    }

    /// Scores and roadmap, without run identity or timing. Two runs over the
    /// same text have equal fingerprints.
    pub fn fingerprint(&self) -> (Vec<(LeadershipStyle, RiskScore, u16)>, &[RoadmapEntry]) {
        let scores = self
            .assessments
            .iter()
            .map(|a| (a.style, a.score, a.rpn))
            .collect();
        (scores, &self.roadmap)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::fmea::{FmeaEngine, LeadershipStyle};

    fn sample_run() -> super::AnalysisRun {
        FmeaEngine::new().run(
            "Regulators opened an antitrust investigation into our pricing",
            "We will pivot to a subscription model and restructure sales",
        )
    }

    #[test]
    fn assessment_lookup_by_style() {
        let run = sample_run();
        let servant = run.assessment(LeadershipStyle::Servant).unwrap();
        assert_eq!(servant.leader, "Servant Leader Agentic AI Agent CEO");
    }

    #[test]
    fn top_risks_sorted_descending_and_truncated() {
        let run = sample_run();
        let top = run.top_risks(3);
        assert_eq!(top.len(), 3);
        assert!(top[0].rpn >= top[1].rpn && top[1].rpn >= top[2].rpn);
        assert_eq!(top[0].rpn, run.max_rpn());
    }

    #[test]
    fn top_risks_ties_keep_persona_order() {
        let run = sample_run();
        // Transformational, Charismatic and Visionary share the same bias
        let top = run.top_risks(10);
        let tied: Vec<LeadershipStyle> = top
            .iter()
            .filter(|a| a.style.bias() == LeadershipStyle::Visionary.bias())
            .map(|a| a.style)
            .collect();
        assert_eq!(
            tied,
            vec![
                LeadershipStyle::Transformational,
                LeadershipStyle::Charismatic,
                LeadershipStyle::Visionary
            ]
        );
    }

    #[test]
    fn fingerprint_ignores_identity() {
        let first = sample_run();
        let second = sample_run();
        assert_ne!(first.id, second.id);
        assert_eq!(first.fingerprint(), second.fingerprint());
    }
}
