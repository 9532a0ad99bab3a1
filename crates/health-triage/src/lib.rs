//! Rule-based health risk triage.
//!
//! The crate exposes four assessment engines (common diseases, heart,
//! diabetes, parkinsons), the static symptom taxonomy backing the
//! multi-symptom form, and the HTTP-facing service and router that wrap
//! them. Heart and diabetes assessments can be delegated to an external
//! prediction service; every delegate failure falls back to local scoring.

pub mod assessments;
pub mod config;
pub mod error;
pub mod telemetry;
