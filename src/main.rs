//! Bugwise - terminal client for the Bugwise bug analysis service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod headless;

use std::path::PathBuf;

use bugwise_app::config::{self, Settings};
use bugwise_app::state::AppState;
use bugwise_client::{ClientConfig, HttpAnalysisClient};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use tracing::{info, warn};

/// Bugwise - explain a bug, its root cause and how to fix it
#[derive(Parser, Debug)]
#[command(name = "bugwise", version)]
#[command(about = "A terminal client for the Bugwise bug analysis service", long_about = None)]
struct Args {
    /// Base URL of the analysis service (overrides config and BUGWISE_API_BASE)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Path to config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Keep the last analysis in memory only
    #[arg(long, global = true)]
    no_cache: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one bug and print the result as JSON
    Analyze {
        /// Error message or description of the bug
        #[arg(value_name = "BUG_TEXT")]
        bug_text: String,

        /// Language hint, e.g. "python"
        #[arg(long, short)]
        language: Option<String>,

        /// Extra context sent along with the bug
        #[arg(long)]
        context: Option<String>,
    },

    /// Print the history list, newest first
    History,

    /// Print the cached last analysis as JSON
    Last,

    /// Write a default config file if none exists
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let config_path = args.config.clone().or_else(config::default_config_path);

    // Settings decide where logs go, so read them before logging starts
    let (settings, config_error) = match config_path.as_deref().map(config::read_settings) {
        Some(Ok(settings)) => (settings, None),
        Some(Err(e)) => (Settings::default(), Some(e)),
        None => (Settings::default(), None),
    };

    // Logs go to a file; never to the terminal
    if let Err(e) = bugwise_core::logging::init(&settings.log.options()) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
    if let Some(e) = config_error {
        warn!("{}; using default settings", e);
    }

    let overrides = Overrides {
        base_url: args.base_url.as_deref(),
        no_cache: args.no_cache,
    };

    match args.command {
        Some(Command::InitConfig) => init_config(config_path)?,
        None => {
            let (state, client) = build_state(settings, &overrides)?;
            bugwise_tui::run(state, client).await?;
        }
        Some(Command::Analyze {
            bug_text,
            language,
            context,
        }) => {
            let (state, client) = build_state(settings, &overrides)?;
            let input = headless::AnalyzeInput {
                bug_text,
                language,
                context,
            };
            if !headless::runner::run_analyze(state, client, input).await? {
                std::process::exit(1);
            }
        }
        Some(Command::History) => {
            let (state, client) = build_state(settings, &overrides)?;
            headless::runner::run_history(state, client).await?;
        }
        Some(Command::Last) => {
            let (state, _) = build_state(settings, &overrides)?;
            headless::print_last(&state)?;
        }
    }

    Ok(())
}

fn init_config(config_path: Option<PathBuf>) -> Result<()> {
    let path = config_path.ok_or_else(|| eyre!("No config directory on this platform"))?;
    if config::init_config_file(&path)? {
        println!("Created {}", path.display());
    } else {
        println!("{} already exists", path.display());
    }
    Ok(())
}

/// Command-line settings that win over the config file
struct Overrides<'a> {
    base_url: Option<&'a str>,
    no_cache: bool,
}

/// Apply overrides and build the state and HTTP client
fn build_state(
    mut settings: Settings,
    overrides: &Overrides<'_>,
) -> Result<(AppState, HttpAnalysisClient)> {
    settings.api.base_url = config::resolve_base_url(&settings, overrides.base_url);
    if overrides.no_cache {
        settings.cache.enabled = false;
    }
    info!("Using service at {}", settings.api.base_url);

    let cache = config::build_cache(&settings);
    let client = HttpAnalysisClient::new(
        ClientConfig::new(settings.api.base_url.clone()).with_timeout(settings.api.timeout()),
    )?;

    Ok((AppState::with_cache(settings, cache), client))
}
