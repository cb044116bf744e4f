//! Severity / Occurrence / Detection triple and its Risk Priority Number.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::FmeaRating;

/// FMEA risk score. Every axis is an [`FmeaRating`], so the triple can never
/// leave the 1-10 range no matter how it was adjusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiskScore {
    pub severity: FmeaRating,
    pub occurrence: FmeaRating,
    pub detection: FmeaRating,
}

impl RiskScore {
    /// Builds a score from raw integers, clamping each axis.
    pub fn clamped(severity: i32, occurrence: i32, detection: i32) -> Self {
        Self {
            severity: FmeaRating::clamped(severity),
            occurrence: FmeaRating::clamped(occurrence),
            detection: FmeaRating::clamped(detection),
        }
    }

    /// Risk Priority Number: severity × occurrence × detection (1..=1000).
    pub fn rpn(&self) -> u16 {
        self.severity.value() as u16 * self.occurrence.value() as u16 * self.detection.value() as u16
    }

    /// Raw `(severity, occurrence, detection)` tuple.
    pub fn as_tuple(&self) -> (u8, u8, u8) {
        (
            self.severity.value(),
            self.occurrence.value(),
            self.detection.value(),
        )
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S={} O={} D={}",
            self.severity, self.occurrence, self.detection
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpn_is_product_of_axes() {
        assert_eq!(RiskScore::clamped(6, 5, 5).rpn(), 150);
        assert_eq!(RiskScore::clamped(10, 9, 2).rpn(), 180);
    }

    #[test]
    fn rpn_bounds() {
        assert_eq!(RiskScore::clamped(1, 1, 1).rpn(), 1);
        assert_eq!(RiskScore::clamped(10, 10, 10).rpn(), 1000);
        assert_eq!(RiskScore::clamped(40, 40, 40).rpn(), 1000);
        assert_eq!(RiskScore::clamped(-4, 0, -1).rpn(), 1);
    }

    #[test]
    fn displays_axes() {
        assert_eq!(RiskScore::clamped(7, 3, 2).to_string(), "S=7 O=3 D=2");
    }
}
