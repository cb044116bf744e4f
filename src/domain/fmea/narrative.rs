//! Plain-language text attached to each persona assessment.

use crate::domain::foundation::RiskScore;

use super::LeadershipStyle;

/// Effects shared by every failure mode.
pub const EFFECTS: &str =
    "Delays, cost overruns, quality issues, compliance risks, or missed market opportunities.";

/// Failure mode seen through a persona's lens.
pub fn failure_mode(style: LeadershipStyle) -> String {
    format!(
        "Execution gaps, misalignment, and unintended consequences while applying the decision \
         through the lens of the {}.",
        style.display_name()
    )
}

/// Beginner-friendly explanation of the three FMEA axes for a given score.
pub fn eli5(score: &RiskScore) -> String {
    format!(
        "ELI5: Severity = how big the ouch; Occurrence = how often it might happen; \
         Detection = how quickly we can spot it. Higher RPN needs attention. \
         This style tilts risks like this: S={}, O={}, D={}.",
        score.severity, score.occurrence, score.detection
    )
}
