//! Base Scorer - persona-independent FMEA score from the input text.

use crate::domain::foundation::RiskScore;

use super::lexicon::{
    combined_text, complexity_bonus, matched_keywords, BASE_DETECTION, BASE_OCCURRENCE,
    BASE_SEVERITY,
};

/// Keyword- and length-driven base scoring.
pub struct BaseScorer;

impl BaseScorer {
    /// Computes the base (severity, occurrence, detection) for a problem/decision pair.
    ///
    /// # Algorithm
    /// 1. Start at S=6, O=5, D=5
    /// 2. Add each present lexicon entry's deltas once (presence, not count)
    /// 3. Add the complexity bonus to severity and occurrence
    /// 4. Clamp every axis into 1..=10
    ///
    /// # Edge Cases
    /// - Empty text: returns (6, 5, 5); rejecting blank input is the caller's job
    pub fn base_scores(problem: &str, decision: &str) -> RiskScore {
        let text = combined_text(problem, decision);

        let (mut severity, mut occurrence, mut detection) =
            (BASE_SEVERITY, BASE_OCCURRENCE, BASE_DETECTION);

        for keyword in matched_keywords(&text) {
            severity += keyword.severity;
            occurrence += keyword.occurrence;
            detection += keyword.detection;
        }

        let bonus = complexity_bonus(&text) as i32;
        severity += bonus;
        occurrence += bonus;

        RiskScore::clamped(severity, occurrence, detection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_returns_base() {
        assert_eq!(BaseScorer::base_scores("", "").as_tuple(), (6, 5, 5));
    }

    #[test]
    fn neutral_text_returns_base() {
        let score = BaseScorer::base_scores("Quarterly sales dipped", "We will hold prices");
        assert_eq!(score.as_tuple(), (6, 5, 5));
    }

    #[test]
    fn single_keyword_applies_its_deltas() {
        let score = BaseScorer::base_scores("A supplier went under", "Plan the shutdown");
        // shutdown: +3, +2, -2
        assert_eq!(score.as_tuple(), (9, 7, 3));
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let once = BaseScorer::base_scores("cloud", "move");
        let many = BaseScorer::base_scores("cloud cloud cloud", "cloud move");
        assert_eq!(once, many);
        assert_eq!(once.as_tuple(), (7, 5, 5));
    }

    #[test]
    fn keywords_stack_and_clamp() {
        let score = BaseScorer::base_scores(
            "Merger and acquisition",
            "Layoff then shutdown of the unit",
        );
        // S: 6+2+2+2+3 = 15 -> 10, O: 5+1+1+2+2 = 11 -> 10, D: 5-1-1-1-2 = 0 -> 1
        assert_eq!(score.as_tuple(), (10, 10, 1));
    }

    #[test]
    fn detection_friendly_keywords_raise_detection() {
        let score = BaseScorer::base_scores("New regulation", "Invest in compliance");
        // compliance +1,0,+2 and regulation +1,0,+2
        assert_eq!(score.as_tuple(), (8, 5, 9));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let lower = BaseScorer::base_scores("pivot", "now");
        let upper = BaseScorer::base_scores("PIVOT", "NOW");
        assert_eq!(lower, upper);
    }

    #[test]
    fn long_text_adds_complexity_to_severity_and_occurrence_only() {
        let filler = "x".repeat(450);
        let score = BaseScorer::base_scores(&filler, "hold");
        // 450 + 1 + 4 = 455 chars -> bonus 2
        assert_eq!(score.as_tuple(), (8, 7, 5));
    }

    #[test]
    fn complexity_bonus_is_capped_at_three() {
        let filler = "x".repeat(10_000);
        let score = BaseScorer::base_scores(&filler, "hold");
        assert_eq!(score.as_tuple(), (9, 8, 5));
    }
}
