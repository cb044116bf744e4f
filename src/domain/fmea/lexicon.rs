//! Keyword risk lexicon and the text helpers shared by the scorers.

/// Starting severity before any keyword or complexity adjustment.
pub const BASE_SEVERITY: i32 = 6;
/// Starting occurrence before any keyword or complexity adjustment.
pub const BASE_OCCURRENCE: i32 = 5;
/// Starting detection before any keyword adjustment.
pub const BASE_DETECTION: i32 = 5;

/// Characters of combined text per complexity point.
pub const COMPLEXITY_CHARS_PER_POINT: usize = 200;
/// Upper bound of the length-based complexity bonus.
pub const MAX_COMPLEXITY_BONUS: u32 = 3;

/// A lexicon entry: a risky business keyword and the score deltas it implies.
///
/// `surface_forms` lists every spelling that counts as the keyword being
/// present. The deltas apply once per entry regardless of how many forms
/// or repetitions appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskKeyword {
    pub keyword: &'static str,
    pub surface_forms: &'static [&'static str],
    pub severity: i32,
    pub occurrence: i32,
    pub detection: i32,
}

impl RiskKeyword {
    const fn new(
        keyword: &'static str,
        surface_forms: &'static [&'static str],
        severity: i32,
        occurrence: i32,
        detection: i32,
    ) -> Self {
        Self {
            keyword,
            surface_forms,
            severity,
            occurrence,
            detection,
        }
    }

    /// True if any surface form occurs in the (already lower-cased) text.
    pub fn is_present(&self, lowered_text: &str) -> bool {
        self.surface_forms.iter().any(|form| lowered_text.contains(form))
    }
}

/// The fixed risk lexicon, in evaluation order.
pub const RISK_LEXICON: &[RiskKeyword] = &[
    RiskKeyword::new("merger", &["merger"], 2, 1, -1),
    RiskKeyword::new("acquisition", &["acquisition", "acquire"], 2, 1, -1),
    RiskKeyword::new("layoff", &["layoff", "lay off", "lay-off"], 2, 2, -1),
    RiskKeyword::new("restructure", &["restructure"], 1, 1, -1),
    RiskKeyword::new("pivot", &["pivot"], 2, 1, -1),
    RiskKeyword::new("ai", &["ai"], 1, 1, -1),
    RiskKeyword::new("cloud", &["cloud"], 1, 0, 0),
    RiskKeyword::new("shutdown", &["shutdown", "shut down"], 3, 2, -2),
    RiskKeyword::new("outsourcing", &["outsourcing"], 1, 1, 0),
    RiskKeyword::new("offshoring", &["offshoring"], 1, 1, 0),
    RiskKeyword::new("automation", &["automation"], 1, 1, 0),
    RiskKeyword::new("cybersecurity", &["cybersecurity"], 2, 1, 1),
    RiskKeyword::new("compliance", &["compliance"], 1, 0, 2),
    RiskKeyword::new("regulation", &["regulation"], 1, 0, 2),
    RiskKeyword::new("expansion", &["expansion"], 1, 1, -1),
];

/// Lower-cased `"{problem} {decision}"`, the text every matcher scans.
pub fn combined_text(problem: &str, decision: &str) -> String {
    format!("{} {}", problem, decision).to_lowercase()
}

/// Length-based complexity proxy: one point per 200 characters, capped at 3.
pub fn complexity_bonus(text: &str) -> u32 {
    let points = text.chars().count() / COMPLEXITY_CHARS_PER_POINT;
    (points as u32).min(MAX_COMPLEXITY_BONUS)
}

/// Lexicon entries present in the lower-cased text.
pub fn matched_keywords(lowered_text: &str) -> impl Iterator<Item = &'static RiskKeyword> + '_ {
    RISK_LEXICON.iter().filter(move |kw| kw.is_present(lowered_text))
}
