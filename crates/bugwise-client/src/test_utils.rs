//! Test utilities for the analysis client
//!
//! Provides a scripted [`AnalysisApi`] double that records what it was asked.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use bugwise_core::{Analysis, HistoryEntry};

use crate::api::{AnalysisApi, HealthStatus, SubmitRequest};
use crate::error::SubmitError;

/// Scripted analysis service.
///
/// Submit responses are consumed in order; once the script runs out every
/// submit fails with a network error. History returns the configured list
/// on every call.
#[derive(Debug, Default)]
pub struct FakeAnalysisApi {
    submit_script: Mutex<VecDeque<Result<Analysis, SubmitError>>>,
    history: Mutex<Vec<HistoryEntry>>,
    health: Mutex<Option<HealthStatus>>,
    submitted: Mutex<Vec<SubmitRequest>>,
    history_calls: AtomicUsize,
}

impl FakeAnalysisApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next `submit` call
    pub fn with_submit_result(self, result: Result<Analysis, SubmitError>) -> Self {
        self.push_submit_result(result);
        self
    }

    pub fn with_history(self, entries: Vec<HistoryEntry>) -> Self {
        self.set_history(entries);
        self
    }

    pub fn with_health(self, health: HealthStatus) -> Self {
        if let Ok(mut slot) = self.health.lock() {
            *slot = Some(health);
        }
        self
    }

    pub fn push_submit_result(&self, result: Result<Analysis, SubmitError>) {
        if let Ok(mut script) = self.submit_script.lock() {
            script.push_back(result);
        }
    }

    pub fn set_history(&self, entries: Vec<HistoryEntry>) {
        if let Ok(mut history) = self.history.lock() {
            *history = entries;
        }
    }

    /// Every request passed to `submit`, oldest first
    pub fn submitted(&self) -> Vec<SubmitRequest> {
        self.submitted
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    pub fn submit_calls(&self) -> usize {
        self.submitted.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }
}

impl AnalysisApi for FakeAnalysisApi {
    async fn submit(&self, request: SubmitRequest) -> Result<Analysis, SubmitError> {
        if let Ok(mut submitted) = self.submitted.lock() {
            submitted.push(request);
        }
        self.submit_script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_else(|| Err(SubmitError::network("no scripted response")))
    }

    async fn fetch_history(&self) -> Vec<HistoryEntry> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }

    async fn health(&self) -> Result<HealthStatus, SubmitError> {
        self.health
            .lock()
            .ok()
            .and_then(|h| h.clone())
            .ok_or_else(|| SubmitError::network("health not scripted"))
    }
}

/// Analysis with recognisable field values derived from `tag`
pub fn test_analysis(tag: &str) -> Analysis {
    Analysis::new(
        format!("{tag} explanation"),
        format!("{tag} root cause"),
        vec![format!("{tag} step 1"), format!("{tag} step 2")],
        format!("// {tag} example"),
    )
}

/// History entry wrapping [`test_analysis`]
pub fn test_history_entry(bug_text: &str, language: Option<&str>) -> HistoryEntry {
    let analysis = test_analysis(bug_text);
    HistoryEntry {
        bug_text: bug_text.to_string(),
        language: language.map(str::to_string),
        explanation: analysis.explanation,
        root_cause: analysis.root_cause,
        fix_steps: analysis.fix_steps,
        example_code: analysis.example_code,
        ..Default::default()
    }
}
