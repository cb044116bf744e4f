//! Start-by timeline buckets derived from RPN.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RPN at or above which work must start within 30 days.
pub const IMMEDIATE_RPN_THRESHOLD: u16 = 180;
/// RPN at or above which work must start within 60 days.
pub const NEAR_TERM_RPN_THRESHOLD: u16 = 120;

/// When a mitigation action should start. Orders from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StartBy {
    #[serde(rename = "0–30 days")]
    Within30Days,
    #[serde(rename = "30–60 days")]
    Within60Days,
    #[serde(rename = "60–90 days")]
    Within90Days,
}

impl StartBy {
    /// Buckets an RPN: ≥180 → 0–30, ≥120 → 30–60, else 60–90.
    pub fn from_rpn(rpn: u16) -> Self {
        if rpn >= IMMEDIATE_RPN_THRESHOLD {
            StartBy::Within30Days
        } else if rpn >= NEAR_TERM_RPN_THRESHOLD {
            StartBy::Within60Days
        } else {
            StartBy::Within90Days
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            StartBy::Within30Days => "0–30 days",
            StartBy::Within60Days => "30–60 days",
            StartBy::Within90Days => "60–90 days",
        }
    }
}

impl fmt::Display for StartBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
