//! Theme Classifier - weighted distribution over risk themes from input text.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::lexicon::{combined_text, complexity_bonus};
use super::Theme;

/// Weight every theme receives when nothing in the text triggers any theme.
pub const UNIFORM_FALLBACK_WEIGHT: f64 = 0.5;

/// Theme → non-negative weight. Iterates in theme declaration order and always
/// carries positive total mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeScoreDistribution(BTreeMap<Theme, f64>);

impl ThemeScoreDistribution {
    /// Uniform distribution used when no trigger matched.
    pub fn uniform() -> Self {
        Self(
            Theme::ALL
                .iter()
                .map(|theme| (*theme, UNIFORM_FALLBACK_WEIGHT))
                .collect(),
        )
    }

    /// Weight for a theme (0.0 if absent).
    pub fn weight(&self, theme: Theme) -> f64 {
        self.0.get(&theme).copied().unwrap_or(0.0)
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// `(theme, weight)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Theme, f64)> + '_ {
        self.0.iter().map(|(theme, weight)| (*theme, *weight))
    }

    /// Theme with the highest weight; ties go to the earlier-declared theme.
    pub fn dominant(&self) -> Option<Theme> {
        let mut best: Option<(Theme, f64)> = None;
        for (theme, weight) in self.iter() {
            match best {
                Some((_, top)) if weight <= top => {}
                _ => best = Some((theme, weight)),
            }
        }
        best.map(|(theme, _)| theme)
    }
}

/// Keyword-count theme detection.
pub struct ThemeClassifier;

impl ThemeClassifier {
    /// Scores every theme against the combined problem/decision text.
    ///
    /// # Algorithm
    /// For each theme: Σ(non-overlapping occurrences of each trigger) + complexity bonus.
    ///
    /// # Edge Cases
    /// - No trigger anywhere and short text: total is zero, so every theme gets 0.5
    /// - Long text with no trigger: every theme carries the same complexity bonus
    pub fn detect_themes(problem: &str, decision: &str) -> ThemeScoreDistribution {
        let text = combined_text(problem, decision);
        let bonus = f64::from(complexity_bonus(&text));

        let scores: BTreeMap<Theme, f64> = Theme::ALL
            .iter()
            .map(|theme| {
                let hits: usize = theme
                    .triggers()
                    .iter()
                    .map(|trigger| text.matches(trigger).count())
                    .sum();
                (*theme, hits as f64 + bonus)
            })
            .collect();

        let distribution = ThemeScoreDistribution(scores);
        if distribution.total() == 0.0 {
            return ThemeScoreDistribution::uniform();
        }
        distribution
    }
}
