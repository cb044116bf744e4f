//! Risk themes: trigger vocabularies and candidate mitigation libraries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate mitigation drawn from a theme's action library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeAction {
    pub action: &'static str,
    pub owner: &'static str,
    pub kpi: &'static str,
}

const fn act(action: &'static str, owner: &'static str, kpi: &'static str) -> ThemeAction {
    ThemeAction { action, owner, kpi }
}

const MARKET_CUSTOMER_ACTIONS: &[ThemeAction] = &[
    act("Run a 30-day customer churn and win-back sprint", "CMO", "net revenue retention"),
    act("Benchmark pricing and packaging against the top three competitors", "Head of Product", "win rate vs. competitors"),
    act("Stand up a weekly market-signal review with sales and product", "CRO", "pipeline coverage ratio"),
    act("Validate demand with paid pilots before scaling the offer", "Head of Growth", "pilot-to-paid conversion"),
];

const FINANCIAL_CAPITAL_ACTIONS: &[ThemeAction] = &[
    act("Build a 13-week cash-flow forecast with downside scenarios", "CFO", "weeks of cash runway"),
    act("Stage-gate capital release against milestone evidence", "CFO", "capital deployed per milestone"),
    act("Renegotiate top supplier and lease commitments", "COO", "fixed-cost ratio"),
    act("Set margin guardrails for every new initiative", "FP&A Lead", "contribution margin %"),
];

const OPERATIONS_SUPPLY_CHAIN_ACTIONS: &[ThemeAction] = &[
    act("Dual-source critical suppliers and components", "COO", "single-source spend %"),
    act("Define service-level agreements with exit clauses for outsourced work", "Procurement Lead", "SLA attainment %"),
    act("Map end-to-end process dependencies and failure points", "Operations Excellence Lead", "unplanned downtime hours"),
    act("Hold a buffer of critical inventory during the transition", "Supply Chain Lead", "stock-out incidents"),
];

const TECHNOLOGY_PLATFORM_ACTIONS: &[ThemeAction] = &[
    act("Commission an architecture review of the target platform", "CTO", "critical architecture findings open"),
    act("Phase the migration behind feature flags with rollback plans", "VP Engineering", "rollback-free releases %"),
    act("Retire legacy systems on a dated decommission plan", "CIO", "legacy systems remaining"),
    act("Negotiate cloud cost controls and exit terms with providers", "CTO", "cloud spend vs. budget"),
];

const CYBER_DATA_ACTIONS: &[ThemeAction] = &[
    act("Run a threat-model and penetration test before go-live", "CISO", "critical vulnerabilities open"),
    act("Classify sensitive data and enforce least-privilege access", "Data Protection Officer", "privileged accounts reviewed %"),
    act("Rehearse the incident-response plan with a tabletop exercise", "CISO", "mean time to contain"),
    act("Add security and privacy clauses to every vendor contract", "General Counsel", "vendors with signed DPAs %"),
];

const PEOPLE_CULTURE_ACTIONS: &[ThemeAction] = &[
    act("Publish a transparent change narrative and FAQ for staff", "CHRO", "employee pulse score"),
    act("Identify and retain critical talent with stay plans", "CHRO", "regretted attrition %"),
    act("Train managers to lead teams through the change", "Head of L&D", "manager readiness score"),
    act("Set up a two-way feedback channel with weekly responses", "Chief of Staff", "issues closed within 7 days"),
];

const REGULATORY_COMPLIANCE_ACTIONS: &[ThemeAction] = &[
    act("Obtain an external legal and regulatory review of the decision", "General Counsel", "open regulatory findings"),
    act("Map obligations in every affected jurisdiction", "Chief Compliance Officer", "obligations with named owners %"),
    act("Brief regulators early on material changes", "General Counsel", "regulator queries outstanding"),
    act("Embed compliance checkpoints in the delivery plan", "Chief Compliance Officer", "checkpoints passed on time %"),
];

const STRATEGY_PORTFOLIO_ACTIONS: &[ThemeAction] = &[
    act("Stress-test the strategic thesis with a red-team review", "Chief Strategy Officer", "assumptions validated %"),
    act("Define explicit kill criteria and review dates", "CEO", "initiatives reviewed on schedule"),
    act("Run integration due diligence before committing capital", "Corporate Development Lead", "diligence items closed"),
    act("Rebalance the portfolio with a staged option plan", "Chief Strategy Officer", "portfolio risk concentration"),
];

const EXECUTION_DELIVERY_ACTIONS: &[ThemeAction] = &[
    act("Create an integrated plan with a critical-path owner", "PMO Director", "milestones hit on time %"),
    act("Add stage gates with go/no-go criteria", "PMO Director", "gate decisions on schedule"),
    act("Staff a dedicated transition team with clear RACI", "COO", "open RACI gaps"),
    act("Track leading delivery indicators on a weekly dashboard", "PMO Director", "schedule variance %"),
];

const REPUTATION_STAKEHOLDER_ACTIONS: &[ThemeAction] = &[
    act("Prepare a stakeholder communication plan with key messages", "Head of Communications", "stakeholder sentiment score"),
    act("Brief the board and major investors before announcement", "CEO", "investor confidence survey"),
    act("Monitor media and social sentiment with escalation triggers", "Head of Communications", "negative coverage share"),
    act("Engage community and partner leaders on the impact", "Chief Sustainability Officer", "partner retention %"),
];

/// Named business-risk category. Declaration order is the tie-break order
/// for ranking and the seed for action rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "Market & Customer")]
    MarketCustomer,
    #[serde(rename = "Financial & Capital")]
    FinancialCapital,
    #[serde(rename = "Operations & Supply Chain")]
    OperationsSupplyChain,
    #[serde(rename = "Technology & Platform")]
    TechnologyPlatform,
    #[serde(rename = "Cyber & Data")]
    CyberData,
    #[serde(rename = "People & Culture")]
    PeopleCulture,
    #[serde(rename = "Regulatory & Compliance")]
    RegulatoryCompliance,
    #[serde(rename = "Strategy & Portfolio")]
    StrategyPortfolio,
    #[serde(rename = "Execution & Delivery")]
    ExecutionDelivery,
    #[serde(rename = "Reputation & Stakeholder")]
    ReputationStakeholder,
}

impl Theme {
    /// All themes in declaration order.
    pub const ALL: [Theme; 10] = [
        Theme::MarketCustomer,
        Theme::FinancialCapital,
        Theme::OperationsSupplyChain,
        Theme::TechnologyPlatform,
        Theme::CyberData,
        Theme::PeopleCulture,
        Theme::RegulatoryCompliance,
        Theme::StrategyPortfolio,
        Theme::ExecutionDelivery,
        Theme::ReputationStakeholder,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::MarketCustomer => "Market & Customer",
            Theme::FinancialCapital => "Financial & Capital",
            Theme::OperationsSupplyChain => "Operations & Supply Chain",
            Theme::TechnologyPlatform => "Technology & Platform",
            Theme::CyberData => "Cyber & Data",
            Theme::PeopleCulture => "People & Culture",
            Theme::RegulatoryCompliance => "Regulatory & Compliance",
            Theme::StrategyPortfolio => "Strategy & Portfolio",
            Theme::ExecutionDelivery => "Execution & Delivery",
            Theme::ReputationStakeholder => "Reputation & Stakeholder",
        }
    }

    /// Stable declared index, used as the action rotation seed.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Lower-case trigger substrings counted by the theme classifier.
    pub fn triggers(&self) -> &'static [&'static str] {
        match self {
            Theme::MarketCustomer => &[
                "market", "customer", "competitor", "competition", "share", "pricing",
                "demand", "churn", "brand", "rival",
            ],
            Theme::FinancialCapital => &[
                "cost", "cash", "debt", "margin", "revenue", "budget", "capital", "profit",
                "funding", "valuation",
            ],
            Theme::OperationsSupplyChain => &[
                "supply", "supplier", "logistics", "vendor", "outsourcing", "offshoring",
                "manufactur", "inventory", "capacity", "operations",
            ],
            Theme::TechnologyPlatform => &[
                "cloud", "platform", "software", "legacy", "automation", "digital",
                "infrastructure", "streaming", "smartphone", "technology",
            ],
            Theme::CyberData => &[
                "cyber", "security", "breach", "data", "privacy", "hack", "ransomware",
                "encryption", "identity", "fraud",
            ],
            Theme::PeopleCulture => &[
                "staff", "layoff", "lay off", "talent", "culture", "employee", "morale",
                "union", "hiring", "retention",
            ],
            Theme::RegulatoryCompliance => &[
                "compliance", "regulat", "legal", "audit", "lawsuit", "antitrust", "licens",
                "policy", "sanction", "gdpr",
            ],
            Theme::StrategyPortfolio => &[
                "strategy", "strategic", "pivot", "acquire", "acquisition", "merger",
                "expansion", "divest", "portfolio", "diversif",
            ],
            Theme::ExecutionDelivery => &[
                "deadline", "delay", "execution", "rollout", "roll out", "launch",
                "integration", "timeline", "migration", "milestone",
            ],
            Theme::ReputationStakeholder => &[
                "reputation", "investor", "stakeholder", "esg", "public", "shareholder",
                "backlash", "activist", "news", "boycott",
            ],
        }
    }

    /// Ordered candidate actions for this theme.
    pub fn actions(&self) -> &'static [ThemeAction] {
        match self {
            Theme::MarketCustomer => MARKET_CUSTOMER_ACTIONS,
            Theme::FinancialCapital => FINANCIAL_CAPITAL_ACTIONS,
            Theme::OperationsSupplyChain => OPERATIONS_SUPPLY_CHAIN_ACTIONS,
            Theme::TechnologyPlatform => TECHNOLOGY_PLATFORM_ACTIONS,
            Theme::CyberData => CYBER_DATA_ACTIONS,
            Theme::PeopleCulture => PEOPLE_CULTURE_ACTIONS,
            Theme::RegulatoryCompliance => REGULATORY_COMPLIANCE_ACTIONS,
            Theme::StrategyPortfolio => STRATEGY_PORTFOLIO_ACTIONS,
            Theme::ExecutionDelivery => EXECUTION_DELIVERY_ACTIONS,
            Theme::ReputationStakeholder => REPUTATION_STAKEHOLDER_ACTIONS,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
