//! draftgen - AI content generation CLI
//!
#![doc = "draftgen - AI content generation CLI"]
#![doc = "Main entry point for the draftgen application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use draftgen::cli::{Cli, Commands};
use draftgen::commands;
use draftgen::config::Config;
use draftgen::insights::TextInsights;
use draftgen::storage::{HistoryStore, Theme};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Mirror a CLI storage path override into DRAFTGEN_HISTORY_DB so the
    // storage initializer can pick it up without threading extra state.
    if let Some(db_path) = &cli.storage_path {
        std::env::set_var("DRAFTGEN_HISTORY_DB", db_path);
        tracing::info!("Using storage DB override from CLI: {}", db_path);
    }

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat { provider, mode } => {
            if let Some(p) = &provider {
                tracing::debug!("Using provider override: {}", p);
            }
            if let Some(m) = &mode {
                tracing::debug!("Using mode override: {}", m);
            }

            commands::chat::run_chat(config, provider, mode).await?;
            Ok(())
        }
        Commands::Generate {
            prompt,
            mode,
            provider,
            stats,
            save,
        } => {
            tracing::info!("Starting one-shot generation");
            commands::generate::run_generate(config, prompt, mode, provider, stats, save).await?;
            Ok(())
        }
        Commands::History { command } => {
            tracing::info!("Starting history command");
            let mut store = HistoryStore::open(&config.history)?;
            commands::history::handle_history(&mut store, command)?;
            Ok(())
        }
        Commands::Stats { text, file } => {
            let text = match (text, file) {
                (_, Some(path)) => std::fs::read_to_string(path)?,
                (Some(text), None) => text,
                (None, None) => {
                    anyhow::bail!("provide text to analyze, or --file <path>");
                }
            };
            commands::history::print_insights_table(&TextInsights::from_text(&text));
            Ok(())
        }
        Commands::Theme { value } => {
            let store = HistoryStore::open(&config.history)?;
            match value {
                Some(value) => match Theme::parse_str(&value) {
                    Some(theme) => {
                        store.set_theme(theme)?;
                        println!("Theme set to {}", theme);
                        Ok(())
                    }
                    None => {
                        anyhow::bail!("invalid theme: {} (expected light or dark)", value);
                    }
                },
                None => {
                    println!("Current theme: {}", store.theme());
                    Ok(())
                }
            }
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("draftgen=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
