//! Application state (Model in TEA pattern)

use bugwise_core::ErrorKind;

use crate::cache::PersistentCache;
use crate::config::Settings;
use crate::history_view::HistoryView;
use crate::result_view::ResultView;

/// Submit control label while idle
pub const SUBMIT_LABEL: &str = "Analyze Bug";
/// Submit control label while a request is outstanding
pub const SUBMITTING_LABEL: &str = "Analyzing…";
/// Banner text for every request/response failure
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
/// Banner text when the bug description is blank
pub const BUG_TEXT_REQUIRED_MESSAGE: &str = "Bug text is required.";
/// Banner text when the bug description exceeds [`MAX_BUG_TEXT_CHARS`]
pub const BUG_TEXT_TOO_LONG_MESSAGE: &str = "Bug text is too long.";
/// Longest bug description the service accepts
pub const MAX_BUG_TEXT_CHARS: usize = 8000;

/// Whole-application lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which form element receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    BugText,
    Language,
    History,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::BugText => Focus::Language,
            Focus::Language => Focus::History,
            Focus::History => Focus::BugText,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::BugText => Focus::History,
            Focus::Language => Focus::BugText,
            Focus::History => Focus::Language,
        }
    }
}

/// Submission state machine
///
/// `Validating`, `Success` and `Failed` are passed through within a single
/// update; only `Idle` and `Submitting` are ever observed between messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Failed,
}

/// How the most recent submission attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed { kind: ErrorKind, detail: String },
}

/// Submit control and busy indicator
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    pub phase: SubmissionPhase,
    pub last_outcome: Option<SubmissionOutcome>,
    /// Spinner frame, advanced on tick while busy
    pub busy_frame: usize,
}

impl SubmissionState {
    /// A request is outstanding
    pub fn is_busy(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// The submit control accepts input
    pub fn control_enabled(&self) -> bool {
        !self.is_busy()
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_busy() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub(crate) fn transition(&mut self, to: SubmissionPhase) {
        tracing::debug!("Submission {:?} -> {:?}", self.phase, to);
        self.phase = to;
    }
}

/// Service reachability as last probed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Online {
        message: String,
    },
    Offline,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,
    /// Service base URL, for display
    pub base_url: String,

    pub focus: Focus,
    pub bug_text: String,
    pub language: String,
    /// Extra context sent with the request; only settable from the command line
    pub context: Option<String>,

    pub submission: SubmissionState,
    /// Inline error banner (hidden when `None`)
    pub error_message: Option<String>,

    pub result_view: ResultView,
    pub history_view: HistoryView,
    pub cache: PersistentCache,

    pub service_status: ServiceStatus,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State with default settings and an in-memory cache
    pub fn new() -> Self {
        Self::with_cache(Settings::default(), PersistentCache::in_memory())
    }

    pub fn with_cache(settings: Settings, cache: PersistentCache) -> Self {
        let base_url = settings.api.base_url.clone();
        Self {
            phase: AppPhase::Running,
            settings,
            base_url,
            focus: Focus::default(),
            bug_text: String::new(),
            language: String::new(),
            context: None,
            submission: SubmissionState::default(),
            error_message: None,
            result_view: ResultView::new(),
            history_view: HistoryView::new(),
            cache,
            service_status: ServiceStatus::Unknown,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Text input that currently has focus, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::BugText => Some(&mut self.bug_text),
            Focus::Language => Some(&mut self.language),
            Focus::History => None,
        }
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn hide_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_enabled() {
        let state = AppState::new();
        assert_eq!(state.submission.phase, SubmissionPhase::Idle);
        assert!(state.submission.control_enabled());
        assert_eq!(state.submission.button_label(), SUBMIT_LABEL);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_button_label_while_submitting() {
        let mut submission = SubmissionState::default();
        submission.transition(SubmissionPhase::Submitting);
        assert!(submission.is_busy());
        assert!(!submission.control_enabled());
        assert_eq!(submission.button_label(), SUBMITTING_LABEL);
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(Focus::BugText.next(), Focus::Language);
        assert_eq!(Focus::History.next(), Focus::BugText);
        assert_eq!(Focus::BugText.previous(), Focus::History);
        assert_eq!(Focus::Language.previous(), Focus::BugText);
    }

    #[test]
    fn test_focused_input() {
        let mut state = AppState::new();
        state.focused_input_mut().unwrap().push('a');
        state.focus = Focus::Language;
        state.focused_input_mut().unwrap().push('b');
        state.focus = Focus::History;
        assert!(state.focused_input_mut().is_none());
        assert_eq!(state.bug_text, "a");
        assert_eq!(state.language, "b");
    }

    #[test]
    fn test_base_url_taken_from_settings() {
        let mut settings = Settings::default();
        settings.api.base_url = "http://example.test/api".into();
        let state = AppState::with_cache(settings, PersistentCache::in_memory());
        assert_eq!(state.base_url, "http://example.test/api");
    }
}
