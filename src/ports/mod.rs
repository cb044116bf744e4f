//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RunStore` - Holds the latest analysis run
//! - `RunExporter` - Renders a run as CSV or JSON
//! - `ExportSink` - Persists rendered exports

mod export_sink;
mod run_exporter;
mod run_store;

pub use export_sink::ExportSink;
pub use run_exporter::{ExportError, ExportFormat, RunExporter};
pub use run_store::{RunStore, RunStoreError};
