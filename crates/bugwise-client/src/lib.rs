//! # bugwise-client - Analysis Service Client
//!
//! Talks to the Bugwise HTTP API: submitting a bug description for analysis,
//! listing previously analysed bugs, and probing service health.
//!
//! ## Public API
//!
//! - [`AnalysisApi`] / [`LocalAnalysisApi`] - async port the application layer
//!   depends on (the `Send` variant is generated with `trait_variant`)
//! - [`HttpAnalysisClient`] - reqwest implementation of the port
//! - [`SubmitRequest`], [`HealthStatus`] - request/response payloads
//! - [`SubmitError`] - tagged failure of a single request

pub mod api;
pub mod error;
pub mod http;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{AnalysisApi, HealthStatus, LocalAnalysisApi, SubmitRequest};
pub use error::SubmitError;
pub use http::{ClientConfig, HttpAnalysisClient, ANALYZE_PATH, HEALTH_PATH, HISTORY_PATH};
