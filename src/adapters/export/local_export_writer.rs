//! Local Export Writer - Implementation of ExportSink.
//!
//! Writes rendered exports into a single output directory.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::config::ExportConfig;
use crate::ports::{ExportError, ExportSink};

/// Writes export files into `output_dir`.
///
/// # Atomic Writes
///
/// Each file is written to `{name}.tmp`, synced, then renamed over the final
/// name, so a reader never sees a half-written export.
#[derive(Debug, Clone)]
pub struct LocalExportWriter {
    output_dir: PathBuf,
}

impl LocalExportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Writes into the configured `export.output_dir`.
    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.output_path())
    }

    /// Rejects names that would escape the output directory.
    fn file_path(&self, file_name: &str) -> Result<PathBuf, ExportError> {
        let plain = !file_name.is_empty()
            && !file_name.contains(['/', '\\'])
            && file_name != "."
            && file_name != "..";
        if !plain {
            return Err(ExportError::io(format!("Invalid export file name '{}'", file_name)));
        }
        Ok(self.output_dir.join(file_name))
    }

    async fn ensure_output_dir(&self) -> Result<(), ExportError> {
        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to create output directory {}: {}",
                self.output_dir.display(),
                e
            ))
        })
    }
}

#[async_trait]
impl ExportSink for LocalExportWriter {
    async fn store(&self, file_name: &str, content: &[u8]) -> Result<String, ExportError> {
        let final_path = self.file_path(file_name)?;
        let temp_path = self.output_dir.join(format!("{}.tmp", file_name));

        self.ensure_output_dir().await?;

        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.write_all(content).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to write to temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        file.sync_all().await.map_err(|e| {
            ExportError::io(format!(
                "Failed to sync temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

        fs::rename(&temp_path, &final_path).await.map_err(|e| {
            ExportError::io(format!(
                "Failed to rename {} to {}: {}",
                temp_path.display(),
                final_path.display(),
                e
            ))
        })?;

        Ok(final_path.display().to_string())
    }
}
