//! # bugwise-core - Core Domain Types
//!
//! Foundation crate for Bugwise. Provides the analysis domain types, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`analysis`)
//! - [`Analysis`] - Structured result of a bug analysis
//! - [`HistoryEntry`] - A stored analysis enriched with the original bug text
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure error enum
//! - [`ErrorKind`] - Coarse classification of client-visible failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use bugwise_core::prelude::*;
//! ```

pub mod analysis;
pub mod error;
pub mod logging;

/// Prelude for common imports used throughout all Bugwise crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use analysis::{Analysis, HistoryEntry};
pub use logging::LogOptions;
pub use error::{Error, ErrorKind, Result, ResultExt};
