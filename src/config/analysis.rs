//! Analysis configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for the pause between persona evaluations.
pub const MAX_PERSONA_DELAY_MS: u64 = 1000;

/// Analysis run configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Pause between persona evaluations, in milliseconds. Pacing only;
    /// results are unaffected.
    #[serde(default)]
    pub persona_delay_ms: u64,

    /// Attach the ELI5 explanation to each persona assessment
    #[serde(default = "default_include_eli5")]
    pub include_eli5: bool,
}

impl AnalysisConfig {
    pub fn persona_delay(&self) -> Duration {
        Duration::from_millis(self.persona_delay_ms)
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.persona_delay_ms > MAX_PERSONA_DELAY_MS {
            return Err(ValidationError::PersonaDelayTooLarge(self.persona_delay_ms));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            persona_delay_ms: 0,
            include_eli5: default_include_eli5(),
        }
    }
}

fn default_include_eli5() -> bool {
    true
}
