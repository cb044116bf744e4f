//! Storage Adapters
//!
//! Implementations of the RunStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryRunStore** - Keeps the latest run in memory

mod in_memory_run_store;

pub use in_memory_run_store::InMemoryRunStore;
