//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Run store implementations (in-memory)
//! - `export` - CSV/JSON renderers and the local file writer

pub mod export;
pub mod storage;

pub use export::{escape_csv, CsvExporter, JsonExporter, LocalExportWriter};
pub use storage::InMemoryRunStore;
