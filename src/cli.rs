//! Command-line interface definition for draftgen
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat, one-shot generation,
//! history management, text insights, and theme selection.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// draftgen - AI content generation CLI
///
/// Generate blog posts, Instagram captions, YouTube scripts, and
/// summaries through AI providers, with a persisted local history.
#[derive(Parser, Debug, Clone)]
#[command(name = "draftgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the history database path
    #[arg(long)]
    pub storage_path: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for draftgen
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive generation session
    Chat {
        /// Override the provider from config (gemini, ollama)
        #[arg(short, long)]
        provider: Option<String>,

        /// Starting content mode (blog, instagram, youtube, summary)
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// Generate content for a single prompt and exit
    Generate {
        /// The topic or description to generate content for
        prompt: String,

        /// Content mode (blog, instagram, youtube, summary)
        #[arg(short, long)]
        mode: Option<String>,

        /// Override the provider from config (gemini, ollama)
        #[arg(short, long)]
        provider: Option<String>,

        /// Print text insights for the generated output
        #[arg(long)]
        stats: bool,

        /// Save the generated output to a text file
        #[arg(long)]
        save: bool,
    },

    /// Manage the interaction history
    History {
        /// History subcommand
        #[command(subcommand)]
        command: HistoryCommand,
    },

    /// Compute text insights for a piece of text
    Stats {
        /// Text to analyze (reads from the file if --file is given)
        text: Option<String>,

        /// Read the text to analyze from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show or set the display theme
    Theme {
        /// Theme to set (light, dark); prints the current theme if omitted
        value: Option<String>,
    },
}

/// History management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum HistoryCommand {
    /// List stored interactions grouped by day
    List,

    /// Show a stored interaction in full, with text insights
    Show {
        /// Interaction identifier
        id: u64,
    },

    /// Delete a stored interaction
    Delete {
        /// Interaction identifier
        id: u64,
    },

    /// Delete all stored interactions
    Clear,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            storage_path: None,
            command: Commands::Chat {
                provider: None,
                mode: None,
            },
        }
    }
}
