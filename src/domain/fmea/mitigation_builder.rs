//! Mitigation Builder - per-persona action plan from scores and theme weights.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::foundation::RiskScore;

use super::{LeadershipStyle, StartBy, Theme, ThemeAction, ThemeScoreDistribution};

/// Number of highest-weighted themes that receive actions.
pub const TOP_THEMES: usize = 3;
/// Actions drawn from each selected theme's library.
pub const ACTIONS_PER_THEME: usize = 2;
/// Theme label carried by the governance guardrail.
pub const GOVERNANCE_THEME: &str = "Governance";
/// Owner of every governance guardrail.
pub const GUARDRAIL_OWNER: &str = "CEO/PMO";
/// KPI of every governance guardrail.
pub const GUARDRAIL_KPI: &str = "decision latency / risk review cadence";

/// A proposed mitigation from one persona's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MitigationAction {
    /// Display name of the persona proposing the action.
    pub persona: String,
    pub theme: String,
    pub action: String,
    pub owner: String,
    pub kpi: String,
    pub start_by: StartBy,
    /// Why the action was proposed.
    pub rationale: String,
    /// RPN of the proposing persona; summed into roadmap weight.
    pub rpn: u16,
}

impl MitigationAction {
    /// True for the style-specific governance guardrail.
    pub fn is_guardrail(&self) -> bool {
        self.theme == GOVERNANCE_THEME
    }
}

/// A theme and its persona-specific weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedTheme {
    pub theme: Theme,
    pub weight: f64,
}

/// Builds the seven-action mitigation plan for a persona.
pub struct MitigationBuilder;

impl MitigationBuilder {
    /// Produces theme actions for the top three themes plus one guardrail.
    ///
    /// # Algorithm
    /// 1. weight(theme) = distribution[theme] × (S + O); detection is excluded
    /// 2. Top 3 by weight, ties in theme declaration order
    /// 3. Two actions per theme, rotated by the theme's declared index
    /// 4. Bucket all actions by the persona's RPN
    /// 5. Append the style's governance guardrail
    pub fn build_mitigations(
        problem: &str,
        decision: &str,
        style: LeadershipStyle,
        score: RiskScore,
        themes: &ThemeScoreDistribution,
    ) -> Vec<MitigationAction> {
        let rpn = score.rpn();
        let start_by = StartBy::from_rpn(rpn);
        let persona = style.display_name();

        trace!(
            persona,
            problem_len = problem.len(),
            decision_len = decision.len(),
            rpn,
            "Building mitigations"
        );

        let mut actions = Vec::with_capacity(TOP_THEMES * ACTIONS_PER_THEME + 1);

        for (rank, ranked) in Self::rank_themes(themes, score)
            .into_iter()
            .take(TOP_THEMES)
            .enumerate()
        {
            let rationale = format!(
                "{} ranked #{} (weight {:.1}) at S={} O={} D={}",
                ranked.theme,
                rank + 1,
                ranked.weight,
                score.severity,
                score.occurrence,
                score.detection
            );

            for candidate in Self::select_actions(ranked.theme) {
                actions.push(MitigationAction {
                    persona: persona.to_string(),
                    theme: ranked.theme.name().to_string(),
                    action: candidate.action.to_string(),
                    owner: candidate.owner.to_string(),
                    kpi: candidate.kpi.to_string(),
                    start_by,
                    rationale: rationale.clone(),
                    rpn,
                });
            }
        }

        actions.push(MitigationAction {
            persona: persona.to_string(),
            theme: GOVERNANCE_THEME.to_string(),
            action: style.guardrail().to_string(),
            owner: GUARDRAIL_OWNER.to_string(),
            kpi: GUARDRAIL_KPI.to_string(),
            start_by,
            rationale: format!("Governance guardrail for the {} leadership style", style.key()),
            rpn,
        });

        actions
    }

    /// All themes ranked by `distribution × (S + O)`, heaviest first.
    ///
    /// The sort is stable over declaration order, so equal weights keep the
    /// earlier-declared theme first.
    pub fn rank_themes(themes: &ThemeScoreDistribution, score: RiskScore) -> Vec<RankedTheme> {
        let multiplier = f64::from(score.severity.value() + score.occurrence.value());

        let mut ranked: Vec<RankedTheme> = Theme::ALL
            .iter()
            .map(|theme| RankedTheme {
                theme: *theme,
                weight: themes.weight(*theme) * multiplier,
            })
            .collect();

        ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        ranked
    }

    /// Picks two actions from the theme's library starting at a rotation
    /// offset equal to the theme's declared index.
    pub fn select_actions(theme: Theme) -> Vec<&'static ThemeAction> {
        let library = theme.actions();
        if library.is_empty() {
            return Vec::new();
        }

        let offset = theme.index() % library.len();
        (0..ACTIONS_PER_THEME.min(library.len()))
            .map(|i| &library[(offset + i) % library.len()])
            .collect()
    }
}
