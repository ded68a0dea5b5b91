//! Partner earn eligibility for a loyalty program.
//!
//! The [`eligibility`] module holds the decision pipeline; the remaining modules carry the
//! configuration, logging and error plumbing shared with the HTTP/CLI service.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
