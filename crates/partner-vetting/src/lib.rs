//! Partnership application vetting: intake validation, rule-based scoring, report rendering,
//! and the HTTP routes that expose them.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod vetting;
