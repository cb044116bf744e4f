//! Analysis command handlers.
//!
//! Running the engine over a problem/decision pair and exporting the result.

mod error;
mod export_run;
mod run_analysis;

pub use error::AnalysisError;
pub use export_run::{ExportRunCommand, ExportRunHandler, ExportRunResult, ExportedFile};
pub use run_analysis::{RunAnalysisCommand, RunAnalysisHandler, RunAnalysisResult};
