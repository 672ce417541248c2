//! Analysis service port
//!
//! The application layer only sees this trait; the HTTP implementation and
//! the scripted test double both plug in behind it.

use bugwise_core::{Analysis, HistoryEntry};
use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

/// Body of `POST /analyze-bug`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitRequest {
    pub bug_text: String,

    /// Serialized as `null` when absent, never omitted
    pub language: Option<String>,

    /// Optional extra context; omitted from the body when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl SubmitRequest {
    pub fn new(bug_text: impl Into<String>, language: Option<String>) -> Self {
        Self {
            bug_text: bug_text.into(),
            language,
            context: None,
        }
    }

    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Operations against the analysis service.
///
/// Each call is a single attempt; retry policy belongs to the caller.
#[trait_variant::make(AnalysisApi: Send)]
pub trait LocalAnalysisApi {
    /// Submit a bug description for analysis
    async fn submit(&self, request: SubmitRequest) -> Result<Analysis, SubmitError>;

    /// List previously analysed bugs. Never fails: any error yields an empty list.
    async fn fetch_history(&self) -> Vec<HistoryEntry>;

    /// Probe service availability
    async fn health(&self) -> Result<HealthStatus, SubmitError>;
}
