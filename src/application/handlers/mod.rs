//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod analysis;

pub use analysis::{
    AnalysisError, ExportRunCommand, ExportRunHandler, ExportRunResult, ExportedFile,
    RunAnalysisCommand, RunAnalysisHandler, RunAnalysisResult,
};
