//! Classic corporate-failure cases for quick-start problem text.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassicCase {
    Nokia,
    Kodak,
    Blockbuster,
    Sears,
    #[serde(rename = "Pan Am")]
    PanAm,
}

impl ClassicCase {
    pub const ALL: [ClassicCase; 5] = [
        ClassicCase::Nokia,
        ClassicCase::Kodak,
        ClassicCase::Blockbuster,
        ClassicCase::Sears,
        ClassicCase::PanAm,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ClassicCase::Nokia => "Nokia",
            ClassicCase::Kodak => "Kodak",
            ClassicCase::Blockbuster => "Blockbuster",
            ClassicCase::Sears => "Sears",
            ClassicCase::PanAm => "Pan Am",
        }
    }

    /// Problem statement to prefill the analysis with.
    pub fn problem(&self) -> &'static str {
        match self {
            ClassicCase::Nokia => {
                "Failed to adapt from feature phones to smartphone OS ecosystems (iOS/Android)."
            }
            ClassicCase::Kodak => {
                "Underestimated the shift to digital photography despite inventing it internally."
            }
            ClassicCase::Blockbuster => {
                "Ignored/late to video streaming disruption and online subscription models."
            }
            ClassicCase::Sears => {
                "Lost retail share to e-commerce and discounters due to slow digital pivot."
            }
            ClassicCase::PanAm => {
                "High fixed costs, deregulation shocks, and financial mismanagement led to collapse."
            }
        }
    }
}

impl FromStr for ClassicCase {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ClassicCase::ALL
            .iter()
            .find(|case| case.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("case", format!("unknown classic case '{}'", wanted))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_case_has_problem_text() {
        for case in ClassicCase::ALL {
            assert!(!case.problem().trim().is_empty());
        }
    }

    #[test]
    fn parses_case_names_case_insensitively() {
        assert_eq!("pan am".parse::<ClassicCase>().unwrap(), ClassicCase::PanAm);
        assert_eq!(" KODAK ".parse::<ClassicCase>().unwrap(), ClassicCase::Kodak);
        assert!("Enron".parse::<ClassicCase>().is_err());
    }
}
