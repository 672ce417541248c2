//! File logging for the terminal client
//!
//! Log lines go to a daily-rolling file; stdout belongs to the TUI and to
//! headless JSON output.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding filter directives, e.g. `bugwise_client=trace`
pub const LOG_ENV: &str = "BUGWISE_LOG";

const DEFAULT_FILTER: &str = "bugwise=info,warn";
const LOG_FILE_PREFIX: &str = "bugwise.log";

/// Where and how verbosely to log. Built from the `[log]` config section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// Log directory; `<data_local_dir>/bugwise/logs` when unset
    pub dir: Option<PathBuf>,
    /// Filter directives used when `BUGWISE_LOG` is not set
    pub level: Option<String>,
}

impl LogOptions {
    pub fn directory(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(default_log_directory)
    }

    /// Pick the filter: `BUGWISE_LOG`, then the configured level, then the default.
    fn directives(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.level.clone().filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }
}

/// Install the global subscriber.
///
/// ```bash
/// BUGWISE_LOG=debug bugwise
/// BUGWISE_LOG=bugwise_client=trace bugwise analyze "KeyError: 'id'"
/// ```
pub fn init(options: &LogOptions) -> Result<()> {
    let log_dir = options.directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let directives = options.directives(std::env::var(LOG_ENV).ok());
    let env_filter = EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Ignoring log filter '{}': {}", directives, e);
        EnvFilter::new(DEFAULT_FILTER)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!(
        "Bugwise {} starting, logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );

    Ok(())
}

fn default_log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bugwise")
        .join("logs")
}
