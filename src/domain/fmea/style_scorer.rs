//! Style-Adjusted Scorer - applies a persona's bias to the base score.

use crate::domain::foundation::RiskScore;

use super::LeadershipStyle;

/// Persona bias application.
pub struct StyleScorer;

impl StyleScorer {
    /// Adds the style's bias to each axis and clamps back into 1..=10.
    ///
    /// The RPN of the result is the caller's to compute and is never clamped.
    pub fn style_adjusted_scores(base: RiskScore, style: LeadershipStyle) -> RiskScore {
        let bias = style.bias();
        RiskScore {
            severity: base.severity.shifted(bias.severity),
            occurrence: base.occurrence.shifted(bias.occurrence),
            detection: base.detection.shifted(bias.detection),
        }
    }
}
