//! Export adapters - Implementations for rendering and writing run exports.
//!
//! - `CsvExporter` - Scores, roadmap and mitigation tables
//! - `JsonExporter` - Full run bundle
//! - `LocalExportWriter` - Writes export files into a directory

mod csv_exporter;
mod json_exporter;
mod local_export_writer;

pub use csv_exporter::{escape_csv, CsvExporter};
pub use json_exporter::JsonExporter;
pub use local_export_writer::LocalExportWriter;
