//! Leadership-style personas and their FMEA bias table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Additive adjustment a leadership style applies to each FMEA axis.
///
/// Positive means higher risk on that axis, negative lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleBias {
    pub severity: i32,
    pub occurrence: i32,
    pub detection: i32,
}

impl StyleBias {
    const fn new(severity: i32, occurrence: i32, detection: i32) -> Self {
        Self {
            severity,
            occurrence,
            detection,
        }
    }
}

/// One of the ten fixed leadership personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LeadershipStyle {
    Autocratic,
    Democratic,
    #[serde(rename = "Laissez-Faire")]
    LaissezFaire,
    Transformational,
    Transactional,
    Servant,
    Charismatic,
    Situational,
    Visionary,
    Bureaucratic,
}

impl LeadershipStyle {
    /// All personas, in the order they are evaluated and reported.
    pub const ALL: [LeadershipStyle; 10] = [
        LeadershipStyle::Autocratic,
        LeadershipStyle::Democratic,
        LeadershipStyle::LaissezFaire,
        LeadershipStyle::Transformational,
        LeadershipStyle::Transactional,
        LeadershipStyle::Servant,
        LeadershipStyle::Charismatic,
        LeadershipStyle::Situational,
        LeadershipStyle::Visionary,
        LeadershipStyle::Bureaucratic,
    ];

    /// Bias-table key, e.g. `"Laissez-Faire"`.
    pub fn key(&self) -> &'static str {
        match self {
            LeadershipStyle::Autocratic => "Autocratic",
            LeadershipStyle::Democratic => "Democratic",
            LeadershipStyle::LaissezFaire => "Laissez-Faire",
            LeadershipStyle::Transformational => "Transformational",
            LeadershipStyle::Transactional => "Transactional",
            LeadershipStyle::Servant => "Servant",
            LeadershipStyle::Charismatic => "Charismatic",
            LeadershipStyle::Situational => "Situational",
            LeadershipStyle::Visionary => "Visionary",
            LeadershipStyle::Bureaucratic => "Bureaucratic",
        }
    }

    /// Persona name shown to users and in exports.
    pub fn display_name(&self) -> &'static str {
        match self {
            LeadershipStyle::Autocratic => "Autocratic Leader Agentic AI Agent CEO",
            LeadershipStyle::Democratic => "Democratic Leader Agentic AI Agent CEO",
            LeadershipStyle::LaissezFaire => "Laissez-Faire Leader Agentic AI Agent CEO",
            LeadershipStyle::Transformational => "Transformational Leader Agentic AI Agent CEO",
            LeadershipStyle::Transactional => "Transactional Leader Agentic AI Agent CEO",
            LeadershipStyle::Servant => "Servant Leader Agentic AI Agent CEO",
            LeadershipStyle::Charismatic => "Charismatic Leader Agentic AI Agent CEO",
            LeadershipStyle::Situational => "Situational Leader Agentic AI Agent CEO",
            LeadershipStyle::Visionary => "Visionary Leader Agentic AI Agent CEO",
            LeadershipStyle::Bureaucratic => "Bureaucratic Leader Agentic AI Agent CEO",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LeadershipStyle::Autocratic => "Decides alone, tight control, speed over consensus.",
            LeadershipStyle::Democratic => {
                "Seeks participation and consensus, inclusive decision-making."
            }
            LeadershipStyle::LaissezFaire => "Hands-off, relies on team autonomy and initiative.",
            LeadershipStyle::Transformational => "Drives inspiring vision, change, and innovation.",
            LeadershipStyle::Transactional => {
                "Targets performance via incentives, KPIs, and compliance."
            }
            LeadershipStyle::Servant => "Puts people first, grows teams, builds trust and community.",
            LeadershipStyle::Charismatic => {
                "Inspires via presence and storytelling; rallies followers."
            }
            LeadershipStyle::Situational => "Adapts style to team maturity and task complexity.",
            LeadershipStyle::Visionary => "Long-term strategic focus; bold bets and roadmaps.",
            LeadershipStyle::Bureaucratic => "Follows rules and procedures; values consistency.",
        }
    }

    /// Per-axis bias this style applies to the base score.
    pub fn bias(&self) -> StyleBias {
        match self {
            LeadershipStyle::Autocratic => StyleBias::new(1, 1, -1),
            LeadershipStyle::Democratic => StyleBias::new(0, 1, 0),
            LeadershipStyle::LaissezFaire => StyleBias::new(1, 2, -1),
            LeadershipStyle::Transformational => StyleBias::new(2, 1, -1),
            LeadershipStyle::Transactional => StyleBias::new(0, 0, 1),
            LeadershipStyle::Servant => StyleBias::new(0, 0, 0),
            LeadershipStyle::Charismatic => StyleBias::new(2, 1, -1),
            LeadershipStyle::Situational => StyleBias::new(-1, -1, 1),
            LeadershipStyle::Visionary => StyleBias::new(2, 1, -1),
            LeadershipStyle::Bureaucratic => StyleBias::new(-1, 0, 2),
        }
    }

    /// Governance guardrail appended to every mitigation plan for this style.
    pub fn guardrail(&self) -> &'static str {
        match self {
            LeadershipStyle::Autocratic => {
                "Institute a weekly red-team review of unilateral decisions"
            }
            LeadershipStyle::Democratic => {
                "Set decision deadlines with a named final decision owner"
            }
            LeadershipStyle::LaissezFaire => {
                "Install biweekly OKR check-ins with a visible progress dashboard"
            }
            LeadershipStyle::Transformational => {
                "Translate the vision into 30-60-90 day milestones with a dependency register"
            }
            LeadershipStyle::Transactional => {
                "Audit incentive KPIs quarterly against long-term value"
            }
            LeadershipStyle::Servant => {
                "Define performance gates and an escalation path for rising business risk"
            }
            LeadershipStyle::Charismatic => {
                "Run pre-mortems and require data behind every narrative"
            }
            LeadershipStyle::Situational => {
                "Reassess team readiness and the leadership mix every sprint"
            }
            LeadershipStyle::Visionary => {
                "Back-cast the vision into quarterly deliverables with kill-switch gates"
            }
            LeadershipStyle::Bureaucratic => {
                "Create a fast-track exception path for controlled experiments"
            }
        }
    }

    /// Coaching notes that counter this style's typical blind spots.
    pub fn style_mitigations(&self) -> [&'static str; 2] {
        match self {
            LeadershipStyle::Autocratic => [
                "Create a fast weekly red-team review.",
                "Nominate a devil's advocate for critical decisions.",
            ],
            LeadershipStyle::Democratic => [
                "Timebox discussions and set a decision deadline.",
                "Designate a final decision owner to avoid stalemates.",
            ],
            LeadershipStyle::LaissezFaire => [
                "Set minimal check-ins (biweekly OKRs).",
                "Install simple dashboards for progress visibility.",
            ],
            LeadershipStyle::Transformational => [
                "Translate vision into 30-60-90 day milestones.",
                "Pair inspiration with risk & dependency registers.",
            ],
            LeadershipStyle::Transactional => [
                "Align incentives to long-term value, not vanity metrics.",
                "Audit KPIs quarterly to prevent gaming.",
            ],
            LeadershipStyle::Servant => [
                "Balance empathy with clear performance gates.",
                "Escalate decisively when business risk rises.",
            ],
            LeadershipStyle::Charismatic => [
                "Triangulate narratives with data and experiments.",
                "Use pre-mortems to counter optimism bias.",
            ],
            LeadershipStyle::Situational => [
                "Reassess team readiness every sprint.",
                "Adapt coaching/directing mix as competency changes.",
            ],
            LeadershipStyle::Visionary => [
                "Back-cast the vision into quarterly deliverables.",
                "Run discovery sprints and kill-switch gates.",
            ],
            LeadershipStyle::Bureaucratic => [
                "Allow policy exceptions for controlled experiments.",
                "Create a lightweight fast-track for innovations.",
            ],
        }
    }
}

impl fmt::Display for LeadershipStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LeadershipStyle {
    type Err = ValidationError;

    /// Accepts a bias key (`"Servant"`) or any name containing exactly one key
    /// (`"Servant Leader CEO"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        if lowered.is_empty() {
            return Err(ValidationError::empty_field("leadership_style"));
        }

        let mut matches = LeadershipStyle::ALL
            .iter()
            .filter(|style| lowered.contains(&style.key().to_lowercase()));

        match (matches.next(), matches.next()) {
            (Some(style), None) => Ok(*style),
            (None, _) => Err(ValidationError::invalid_format(
                "leadership_style",
                format!("'{}' names no known leadership style", s.trim()),
            )),
            (Some(_), Some(_)) => Err(ValidationError::invalid_format(
                "leadership_style",
                format!("'{}' names more than one leadership style", s.trim()),
            )),
        }
    }
}
