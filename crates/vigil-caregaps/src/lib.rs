//! vigil-caregaps
//!
//! Preventive care gap analysis. A fixed table of screening, immunization
//! and monitoring measures is evaluated against a patient's demographics,
//! conditions and most recent completion dates.

pub mod analyzer;
pub mod error;
pub mod rules;
mod text;

pub use analyzer::analyze_care_gaps;
