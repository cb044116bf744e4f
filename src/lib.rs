//! Leadership FMEA - rule-based risk scoring across leadership personas
//!
//! This crate scores a free-text business problem and decision with
//! Failure Mode and Effects Analysis (Severity, Occurrence, Detection, RPN)
//! as seen by ten leadership styles, builds a mitigation plan per style and
//! merges the plans into one prioritized roadmap.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
