//! In-Memory Run Store Adapter
//!
//! Holds the latest analysis run in memory. The run lives only as long as
//! the process.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::fmea::AnalysisRun;
use crate::ports::{RunStore, RunStoreError};

/// In-memory holder for the latest run
#[derive(Debug, Clone, Default)]
pub struct InMemoryRunStore {
    latest: Arc<RwLock<Option<AnalysisRun>>>,
}

impl InMemoryRunStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run is currently held
    pub async fn is_empty(&self) -> bool {
        self.latest.read().await.is_none()
    }
}

#[async_trait]
impl RunStore for InMemoryRunStore {
    async fn replace(&self, run: AnalysisRun) -> Result<(), RunStoreError> {
        *self.latest.write().await = Some(run);
        Ok(())
    }

    async fn latest(&self) -> Result<Option<AnalysisRun>, RunStoreError> {
        Ok(self.latest.read().await.clone())
    }

    async fn clear(&self) -> Result<(), RunStoreError> {
        self.latest.write().await.take();
        Ok(())
    }
}
