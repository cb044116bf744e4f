//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `fmea` - Pure scoring, mitigation and roadmap services
//!
//! No I/O happens here; ports and adapters handle storage and export.

pub mod fmea;
pub mod foundation;
