//! Errors surfaced by the analysis handlers.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::{ExportError, RunStoreError};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] RunStoreError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
