//! Export configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Export configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ExportConfig {
    /// Directory export files are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl ExportConfig {
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }

    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.trim().is_empty() {
            return Err(ValidationError::MissingRequired("export.output_dir"));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

fn default_output_dir() -> String {
    "exports".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_config_defaults() {
        let config = ExportConfig::default();
        assert_eq!(config.output_path(), PathBuf::from("exports"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_output_dir_is_rejected() {
        let config = ExportConfig {
            output_dir: String::new(),
        };
        assert!(config.validate().is_err());
    }
}
