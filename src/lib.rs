//! Draftgen - AI content generation CLI library
//!
//! This library provides the core functionality for the draftgen content
//! generator, including the generation provider abstraction, bounded
//! persisted history, session orchestration, and derived text statistics.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: Session controller orchestrating submit -> generate -> record
//! - `storage`: Bounded interaction history backed by an embedded key-value store
//! - `providers`: Generation provider abstraction and implementations (Gemini, Ollama)
//! - `insights`: Pure derived statistics over generated text
//! - `mode`: Content mode (Blog, Instagram, YouTube, Summary) tags
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use draftgen::{Config, storage::HistoryStore};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config/config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let history = HistoryStore::open(&config.history)?;
//!     println!("{} past generations", history.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod insights;
pub mod mode;
pub mod providers;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::Config;
pub use error::{DraftgenError, Result};
pub use insights::TextInsights;
pub use mode::ContentMode;
pub use session::{SessionController, SessionState, SubmitOutcome};
pub use storage::{HistoryStore, Interaction, Theme};
