//! Run Store Port - Holds the most recent analysis run.
//!
//! Only one run is kept at a time. Storing a new run replaces the previous
//! one; there is no history.

use async_trait::async_trait;

use crate::domain::fmea::AnalysisRun;

/// Errors that can occur during run storage operations
#[derive(Debug, thiserror::Error)]
pub enum RunStoreError {
    #[error("Run store unavailable: {0}")]
    Unavailable(String),
}

/// Port for keeping the latest analysis run
#[async_trait]
pub trait RunStore: Send + Sync {
    /// Replace whatever run is held with `run`
    async fn replace(&self, run: AnalysisRun) -> Result<(), RunStoreError>;

    /// The latest run, if any has been stored
    async fn latest(&self) -> Result<Option<AnalysisRun>, RunStoreError>;

    /// Discard the held run
    async fn clear(&self) -> Result<(), RunStoreError>;
}
