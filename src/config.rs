//! Configuration management for draftgen
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use crate::error::{DraftgenError, Result};
use crate::mode::ContentMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure for draftgen
///
/// Holds all configuration needed for the application: provider settings,
/// history storage, and session defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Provider configuration (Gemini, Ollama)
    pub provider: ProviderConfig,

    /// History storage configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Session defaults
    #[serde(default)]
    pub session: SessionConfig,
}

/// Provider configuration
///
/// Specifies which generation provider to use and its settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Type of provider to use
    #[serde(rename = "type")]
    pub provider_type: String,

    /// Gemini configuration
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Ollama configuration
    #[serde(default)]
    pub ollama: OllamaConfig,
}

/// Gemini provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// Model to use for Gemini
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Optional API base URL (useful for tests and local mocks)
    ///
    /// When set, this base is used to build the `generateContent` endpoint,
    /// which allows tests to point the provider at a mock server.
    #[serde(default)]
    pub api_base: Option<String>,
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_gemini_model(),
            api_base: None,
        }
    }
}

/// Ollama provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Ollama server host
    #[serde(default = "default_ollama_host")]
    pub host: String,

    /// Model to use for Ollama
    #[serde(default = "default_ollama_model")]
    pub model: String,
}

fn default_ollama_host() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:latest".to_string()
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_ollama_host(),
            model: default_ollama_model(),
        }
    }
}

/// History storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HistoryConfig {
    /// Database path (if None, the platform data directory is used)
    #[serde(default)]
    pub db_path: Option<PathBuf>,
}

/// Session defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Default content mode: "blog", "instagram", "youtube", or "summary"
    #[serde(default = "default_content_mode")]
    pub default_mode: String,
}

fn default_content_mode() -> String {
    "blog".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_mode: default_content_mode(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default_config()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn default_config() -> Self {
        Self {
            provider: ProviderConfig {
                provider_type: "gemini".to_string(),
                gemini: GeminiConfig::default(),
                ollama: OllamaConfig::default(),
            },
            history: HistoryConfig::default(),
            session: SessionConfig::default(),
        }
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DraftgenError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| DraftgenError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(provider_type) = std::env::var("DRAFTGEN_PROVIDER") {
            self.provider.provider_type = provider_type;
        }

        if let Ok(gemini_model) = std::env::var("DRAFTGEN_GEMINI_MODEL") {
            self.provider.gemini.model = gemini_model;
        }

        if let Ok(ollama_host) = std::env::var("DRAFTGEN_OLLAMA_HOST") {
            self.provider.ollama.host = ollama_host;
        }

        if let Ok(ollama_model) = std::env::var("DRAFTGEN_OLLAMA_MODEL") {
            self.provider.ollama.model = ollama_model;
        }

        if let Ok(mode) = std::env::var("DRAFTGEN_DEFAULT_MODE") {
            if ContentMode::parse_str(&mode).is_ok() {
                self.session.default_mode = mode;
            } else {
                tracing::warn!("Invalid DRAFTGEN_DEFAULT_MODE: {}", mode);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        if let Some(ref path) = cli.storage_path {
            self.history.db_path = Some(PathBuf::from(path));
        }
    }

    /// Validate the configuration
    ///
    /// Ensures all configuration values are within acceptable ranges
    /// and that required fields are properly set.
    ///
    /// # Returns
    ///
    /// Returns Ok if configuration is valid
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.provider.provider_type.is_empty() {
            return Err(DraftgenError::Config("Provider type cannot be empty".to_string()).into());
        }

        let valid_providers = ["gemini", "ollama"];
        if !valid_providers.contains(&self.provider.provider_type.as_str()) {
            return Err(DraftgenError::Config(format!(
                "Invalid provider type: {}. Must be one of: {}",
                self.provider.provider_type,
                valid_providers.join(", ")
            ))
            .into());
        }

        if self.provider.gemini.model.is_empty() {
            return Err(
                DraftgenError::Config("gemini.model cannot be empty".to_string()).into(),
            );
        }

        if self.provider.ollama.host.is_empty() {
            return Err(DraftgenError::Config("ollama.host cannot be empty".to_string()).into());
        }

        if ContentMode::parse_str(&self.session.default_mode).is_err() {
            return Err(DraftgenError::Config(format!(
                "Invalid default mode: {}. Must be one of: blog, instagram, youtube, summary",
                self.session.default_mode
            ))
            .into());
        }

        Ok(())
    }

    /// Resolve the configured default mode
    pub fn default_mode(&self) -> ContentMode {
        ContentMode::parse_str(&self.session.default_mode).unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
