//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the FMEA domain.

mod errors;
mod ids;
mod rating;
mod risk_score;
mod timestamp;

pub use errors::{require_text, ValidationError};
pub use ids::RunId;
pub use rating::FmeaRating;
pub use risk_score::RiskScore;
pub use timestamp::Timestamp;
