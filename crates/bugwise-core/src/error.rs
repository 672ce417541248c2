//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Analysis Service Errors
    // ─────────────────────────────────────────────────────────────
    #[error("HTTP client error: {message}")]
    Http { message: String },

    #[error("Invalid service URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Local Storage Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Cache storage error: {message}")]
    Cache { message: String },

    #[error("Stored slot '{key}' is unreadable: {message}")]
    CorruptSlot { key: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        Self::Cache {
            message: message.into(),
        }
    }

    pub fn corrupt_slot(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CorruptSlot {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Client-Visible Failure Classification
// ─────────────────────────────────────────────────────────────────

/// Coarse failure classes surfaced by the submission flow.
///
/// Network failures and HTTP rejections are both `RequestFailed`; the finer
/// distinction lives on the client's own error type and only reaches logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required input missing or out of bounds; no request was sent
    ValidationError,
    /// Transport failure or non-2xx status
    RequestFailed,
    /// 2xx response whose body did not match the expected shape
    MalformedResponse,
    /// Stored cache slot could not be deserialized
    CacheCorrupt,
}

impl ErrorKind {
    /// Stable label used in log lines and headless output
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ValidationError => "validation_error",
            ErrorKind::RequestFailed => "request_failed",
            ErrorKind::MalformedResponse => "malformed_response",
            ErrorKind::CacheCorrupt => "cache_corrupt",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
