//! Export Sink Port - Where rendered exports are written.

use async_trait::async_trait;

use super::ExportError;

/// Port for persisting rendered export files on demand
#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Store `content` under `file_name`, returning where it was written
    async fn store(&self, file_name: &str, content: &[u8]) -> Result<String, ExportError>;
}
