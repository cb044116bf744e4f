//! FMEA rating value object (1-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single FMEA axis rating, always between 1 and 10 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FmeaRating(u8);

impl FmeaRating {
    /// Lowest rating.
    pub const MIN: Self = Self(1);

    /// Highest rating.
    pub const MAX: Self = Self(10);

    /// Creates a rating, clamping any integer into 1..=10.
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(Self::MIN.0 as i32, Self::MAX.0 as i32) as u8)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns a rating shifted by `delta`, clamped back into range.
    pub fn shifted(&self, delta: i32) -> Self {
        Self::clamped(self.0 as i32 + delta)
    }
}

impl fmt::Display for FmeaRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_keeps_values_in_range() {
        assert_eq!(FmeaRating::clamped(5).value(), 5);
        assert_eq!(FmeaRating::clamped(1).value(), 1);
        assert_eq!(FmeaRating::clamped(10).value(), 10);
    }

    #[test]
    fn clamped_pins_out_of_range_values() {
        assert_eq!(FmeaRating::clamped(0).value(), 1);
        assert_eq!(FmeaRating::clamped(-7).value(), 1);
        assert_eq!(FmeaRating::clamped(11).value(), 10);
        assert_eq!(FmeaRating::clamped(i32::MAX).value(), 10);
    }

    #[test]
    fn shifted_clamps_after_adjustment() {
        let rating = FmeaRating::clamped(9);
        assert_eq!(rating.shifted(2).value(), 10);
        assert_eq!(rating.shifted(-3).value(), 6);
        assert_eq!(FmeaRating::MIN.shifted(-1).value(), 1);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&FmeaRating::clamped(4)).unwrap();
        assert_eq!(json, "4");
    }
}
