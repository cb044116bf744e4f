//! FMEA Module - Deterministic leadership-style risk scoring.
//!
//! This module contains the scoring and recommendation engine. Every component
//! is a pure function over fixed tables; given identical text, a run always
//! produces identical scores and an identical roadmap.
//!
//! # Components
//!
//! - `lexicon` - Risky keywords and their (S, O, D) deltas
//! - `ThemeClassifier` - Keyword-count distribution over ten risk themes
//! - `BaseScorer` - Persona-independent base score
//! - `StyleScorer` - Applies a `LeadershipStyle` bias, clamped to 1-10
//! - `MitigationBuilder` - Top-3 theme actions plus a governance guardrail
//! - `RoadmapAggregator` - Cross-persona deduplicated, prioritized roadmap
//! - `FmeaEngine` - Runs the components and assembles an `AnalysisRun`

mod base_scorer;
mod cases;
mod engine;
pub mod lexicon;
mod mitigation_builder;
pub mod narrative;
mod persona;
mod roadmap;
mod run;
mod style_scorer;
mod theme;
mod theme_classifier;
mod timeline;

pub use base_scorer::BaseScorer;
pub use cases::ClassicCase;
pub use engine::{FmeaEngine, PersonaAssessment, RunContext};
pub use mitigation_builder::{
    MitigationAction, MitigationBuilder, RankedTheme, ACTIONS_PER_THEME, GOVERNANCE_THEME,
    GUARDRAIL_KPI, GUARDRAIL_OWNER, TOP_THEMES,
};
pub use persona::{LeadershipStyle, StyleBias};
pub use roadmap::{RoadmapAggregator, RoadmapEntry};
pub use run::AnalysisRun;
pub use style_scorer::StyleScorer;
pub use theme::{Theme, ThemeAction};
pub use theme_classifier::{ThemeClassifier, ThemeScoreDistribution, UNIFORM_FALLBACK_WEIGHT};
pub use timeline::{StartBy, IMMEDIATE_RPN_THRESHOLD, NEAR_TERM_RPN_THRESHOLD};
