//! Ollama provider implementation
//!
//! Connects to a local or remote Ollama server to generate text from a
//! single composed prompt via the `/api/chat` endpoint. No credential is
//! required; an unreachable server surfaces as `GenerationError::Network`.

use crate::config::OllamaConfig;
use crate::error::{DraftgenError, Result};
use crate::providers::{GenerationError, Provider};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ollama API provider
///
/// # Examples
///
/// ```no_run
/// use draftgen::config::OllamaConfig;
/// use draftgen::providers::{OllamaProvider, Provider};
///
/// # async fn example() -> draftgen::error::Result<()> {
/// let config = OllamaConfig {
///     host: "http://localhost:11434".to_string(),
///     model: "llama3.2:latest".to_string(),
/// };
/// let provider = OllamaProvider::new(config)?;
/// let text = provider.generate("Summary: the borrow checker").await?;
/// # Ok(())
/// # }
/// ```
pub struct OllamaProvider {
    client: Client,
    config: OllamaConfig,
}

/// Request structure for Ollama's /api/chat endpoint
#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct OllamaMessage {
    role: String,
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaMessage,
}

impl OllamaProvider {
    /// Create a new Ollama provider instance
    pub fn new(config: OllamaConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("draftgen/0.1.0")
            .build()
            .map_err(|e| DraftgenError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            "Initialized Ollama provider: host={}, model={}",
            config.host,
            config.model
        );

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/api/chat", self.config.host.trim_end_matches('/'))
    }
}

#[async_trait]
impl Provider for OllamaProvider {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        let request = OllamaRequest {
            model: self.config.model.clone(),
            messages: vec![OllamaMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            stream: false,
        };

        tracing::debug!(
            "Sending generation request to Ollama: host={}, model={}",
            self.config.host,
            self.config.model
        );

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(GenerationError::from_http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Ollama returned error {}", status);
            return Err(GenerationError::from_status(status, &body));
        }

        let body: OllamaResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Provider(format!("Failed to parse response: {}", e)))?;

        Ok(body.message.content)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
