//! Analysis domain types
//!
//! Wire shapes for the analysis service. Every text field tolerates being
//! absent or `null` in the payload and comes back as an empty string / empty
//! list, so nothing downstream ever has to render a placeholder.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Structured result of a bug analysis.
///
/// Immutable by convention: a newer analysis replaces an older one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub root_cause: String,

    /// Ordered fix steps (display order)
    #[serde(default, deserialize_with = "null_as_default")]
    pub fix_steps: Vec<String>,

    /// Preformatted example code
    #[serde(default, deserialize_with = "null_as_default")]
    pub example_code: String,

    /// Only set on records that came from the history listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Only set on records that came from the history listing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bug_text: Option<String>,
}

impl Analysis {
    pub fn new(
        explanation: impl Into<String>,
        root_cause: impl Into<String>,
        fix_steps: Vec<String>,
        example_code: impl Into<String>,
    ) -> Self {
        Self {
            explanation: explanation.into(),
            root_cause: root_cause.into(),
            fix_steps,
            example_code: example_code.into(),
            language: None,
            bug_text: None,
        }
    }

    /// Projection onto the four analysis fields, dropping history labels.
    pub fn core(&self) -> Analysis {
        Analysis::new(
            self.explanation.clone(),
            self.root_cause.clone(),
            self.fix_steps.clone(),
            self.example_code.clone(),
        )
    }

    /// True when the four analysis fields match, ignoring history labels.
    pub fn same_content(&self, other: &Analysis) -> bool {
        self.explanation == other.explanation
            && self.root_cause == other.root_cause
            && self.fix_steps == other.fix_steps
            && self.example_code == other.example_code
    }
}

/// A previously stored analysis, as returned by the history listing.
///
/// Order within a listing is decided by the server and never changed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub bug_text: String,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub explanation: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub root_cause: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub fix_steps: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub example_code: String,

    /// Server timestamp, ISO-8601 without offset (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl HistoryEntry {
    /// The four-field analysis this entry carries.
    pub fn analysis(&self) -> Analysis {
        Analysis::new(
            self.explanation.clone(),
            self.root_cause.clone(),
            self.fix_steps.clone(),
            self.example_code.clone(),
        )
    }

    /// Language hint, treating an empty string as absent
    pub fn language_hint(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }

    /// Creation time formatted for display (`YYYY-MM-DD HH:MM UTC`)
    pub fn created_at_display(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
