//! Display state of the history list
//!
//! Rows are rebuilt from scratch on every render. Refreshes are numbered so a
//! slow response can never overwrite a newer one.

use bugwise_core::prelude::*;
use bugwise_core::{Analysis, HistoryEntry};

/// Characters of bug text kept in a row label
pub const LABEL_PREFIX_CHARS: usize = 80;

/// Appended to every label, whether or not the text was cut
pub const LABEL_ELLIPSIS: char = '…';

/// Shown in place of an empty list
pub const EMPTY_HISTORY_PLACEHOLDER: &str = "No bugs yet.";

/// Label prefix when an entry carries no language
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// A single row of the history list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryRow {
    /// Non-selectable filler shown when the server has nothing
    Placeholder(String),
    /// Selectable entry
    Entry {
        label: String,
        created_at: Option<String>,
        analysis: Analysis,
    },
}

impl HistoryRow {
    pub fn label(&self) -> &str {
        match self {
            HistoryRow::Placeholder(text) => text,
            HistoryRow::Entry { label, .. } => label,
        }
    }

    pub fn is_selectable(&self) -> bool {
        matches!(self, HistoryRow::Entry { .. })
    }
}

/// `"{language or Unknown} – {first 80 chars of bug text}…"`
pub fn history_label(entry: &HistoryEntry) -> String {
    let language = entry.language_hint().unwrap_or(UNKNOWN_LANGUAGE);
    let prefix: String = entry.bug_text.chars().take(LABEL_PREFIX_CHARS).collect();
    format!("{language} – {prefix}{LABEL_ELLIPSIS}")
}

/// History list state plus the refresh sequence guard
#[derive(Debug, Clone, Default)]
pub struct HistoryView {
    rows: Vec<HistoryRow>,
    selected: usize,
    loaded: bool,
    issued_seq: u64,
    applied_seq: u64,
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rows with `entries`, in the order given.
    pub fn render(&mut self, entries: &[HistoryEntry]) {
        self.rows.clear();
        self.selected = 0;
        self.loaded = true;

        if entries.is_empty() {
            self.rows
                .push(HistoryRow::Placeholder(EMPTY_HISTORY_PLACEHOLDER.to_string()));
            return;
        }

        for entry in entries {
            self.rows.push(HistoryRow::Entry {
                label: history_label(entry),
                created_at: entry.created_at_display(),
                analysis: entry.analysis(),
            });
        }
    }

    /// Number for the next refresh request
    pub fn next_request(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Render a refresh response unless a newer one was already applied.
    ///
    /// Returns whether the response was rendered.
    pub fn apply(&mut self, seq: u64, entries: &[HistoryEntry]) -> bool {
        if seq < self.applied_seq {
            debug!(
                "Ignoring stale history response #{} (already showing #{})",
                seq, self.applied_seq
            );
            return false;
        }
        self.applied_seq = seq;
        self.render(entries);
        true
    }

    /// Whether any response has been rendered yet
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn selectable_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_selectable()).count()
    }

    /// Highlighted row index
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let count = self.selectable_count();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Analysis behind row `index`, or `None` for placeholders and out-of-range rows.
    pub fn activate(&self, index: usize) -> Option<Analysis> {
        match self.rows.get(index)? {
            HistoryRow::Entry { analysis, .. } => Some(analysis.clone()),
            HistoryRow::Placeholder(_) => None,
        }
    }

    pub fn last_applied_seq(&self) -> u64 {
        self.applied_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(bug_text: &str, language: Option<&str>) -> HistoryEntry {
        HistoryEntry {
            bug_text: bug_text.to_string(),
            language: language.map(str::to_string),
            explanation: format!("why {bug_text}"),
            root_cause: "cause".into(),
            fix_steps: vec!["fix".into()],
            example_code: "code".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_history_renders_single_placeholder() {
        let mut view = HistoryView::new();
        view.render(&[]);

        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].label(), EMPTY_HISTORY_PLACEHOLDER);
        assert_eq!(view.selectable_count(), 0);
        assert_eq!(view.activate(0), None);
    }

    #[test]
    fn test_label_truncates_to_80_chars_plus_ellipsis() {
        let text: String = "x".repeat(200);
        let label = history_label(&entry(&text, Some("rust")));

        assert_eq!(label, format!("rust – {}…", "x".repeat(80)));
    }

    #[test]
    fn test_label_unknown_language() {
        let label = history_label(&entry(&"y".repeat(200), None));
        assert!(label.starts_with("Unknown – "));
        assert_eq!(label.chars().filter(|c| *c == 'y').count(), 80);
        assert!(label.ends_with('…'));
    }

    #[test]
    fn test_label_always_appends_ellipsis() {
        assert_eq!(history_label(&entry("short", Some("go"))), "go – short…");
    }

    #[test]
    fn test_label_empty_language_is_unknown() {
        assert_eq!(history_label(&entry("bug", Some(""))), "Unknown – bug…");
    }

    #[test]
    fn test_label_counts_characters_not_bytes() {
        let text: String = "é".repeat(100);
        let label = history_label(&entry(&text, None));
        assert_eq!(label, format!("Unknown – {}…", "é".repeat(80)));
    }

    #[test]
    fn test_render_preserves_server_order() {
        let mut view = HistoryView::new();
        view.render(&[entry("newest", None), entry("older", None), entry("oldest", None)]);

        let labels: Vec<_> = view.rows().iter().map(|r| r.label().to_string()).collect();
        assert_eq!(
            labels,
            vec!["Unknown – newest…", "Unknown – older…", "Unknown – oldest…"]
        );
    }

    #[test]
    fn test_render_replaces_previous_rows() {
        let mut view = HistoryView::new();
        view.render(&[entry("a", None), entry("b", None)]);
        view.render(&[entry("c", None)]);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].label(), "Unknown – c…");
    }

    #[test]
    fn test_activate_returns_four_field_projection() {
        let mut view = HistoryView::new();
        view.render(&[entry("crash", Some("c"))]);

        let analysis = view.activate(0).unwrap();
        assert_eq!(analysis.explanation, "why crash");
        assert_eq!(analysis.bug_text, None);
        assert_eq!(analysis.language, None);
        assert_eq!(view.activate(5), None);
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let mut view = HistoryView::new();
        let first = view.next_request();
        let second = view.next_request();

        assert!(view.apply(second, &[entry("fresh", None)]));
        assert!(!view.apply(first, &[]));

        assert_eq!(view.rows()[0].label(), "Unknown – fresh…");
        assert_eq!(view.last_applied_seq(), second);
    }

    #[test]
    fn test_in_order_responses_both_apply() {
        let mut view = HistoryView::new();
        let first = view.next_request();
        let second = view.next_request();

        assert!(view.apply(first, &[]));
        assert!(view.apply(second, &[entry("later", None)]));
        assert_eq!(view.selectable_count(), 1);
    }

    #[test]
    fn test_selection_clamps() {
        let mut view = HistoryView::new();
        view.render(&[entry("a", None), entry("b", None)]);

        view.select_previous();
        assert_eq!(view.selected(), 0);
        view.select_next();
        view.select_next();
        assert_eq!(view.selected(), 1);

        view.render(&[entry("c", None)]);
        assert_eq!(view.selected(), 0);
    }

    #[test]
    fn test_not_loaded_until_first_render() {
        let mut view = HistoryView::new();
        assert!(!view.is_loaded());
        view.render(&[]);
        assert!(view.is_loaded());
    }
}
