//! Gemini provider implementation
//!
//! Connects to the Google Generative Language API to generate text from a
//! single composed prompt. The API key is supplied out-of-band through the
//! `GEMINI_API_KEY` environment variable; a missing or rejected key
//! surfaces as `GenerationError::Auth`.

use crate::config::GeminiConfig;
use crate::error::{DraftgenError, Result};
use crate::providers::{GenerationError, Provider};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API base for the Generative Language endpoint
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the API key
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Google Generative Language API provider
///
/// # Examples
///
/// ```no_run
/// use draftgen::config::GeminiConfig;
/// use draftgen::providers::{GeminiProvider, Provider};
///
/// # async fn example() -> draftgen::error::Result<()> {
/// let provider = GeminiProvider::new(GeminiConfig::default())?;
/// let text = provider.generate("Blog: the future of rust").await?;
/// # Ok(())
/// # }
/// ```
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

impl GeminiProvider {
    /// Create a new Gemini provider instance
    ///
    /// The API key is read from the environment at construction time but
    /// only checked when a generation is attempted, so the provider can be
    /// built in credential-less contexts (help output, validation).
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .user_agent("draftgen/0.1.0")
            .build()
            .map_err(|e| DraftgenError::Provider(format!("Failed to create HTTP client: {}", e)))?;

        let api_key = std::env::var(API_KEY_ENV).ok();

        tracing::info!(
            "Initialized Gemini provider: model={}, key_present={}",
            config.model,
            api_key.is_some()
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    /// Override the API key (primarily for tests)
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    fn endpoint(&self, key: &str) -> String {
        let base = self
            .config
            .api_base
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/');
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            base, self.config.model, key
        )
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::Auth(format!("{} is not set", API_KEY_ENV)))?;

        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!("Sending generation request to Gemini: model={}", self.config.model);

        let response = self
            .client
            .post(self.endpoint(key))
            .json(&request)
            .send()
            .await
            .map_err(GenerationError::from_http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Gemini returned error {}", status);
            return Err(GenerationError::from_status(status, &body));
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Provider(format!("Failed to parse response: {}", e)))?;

        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| {
                GenerationError::Provider("response contained no candidates".to_string())
            })?;

        Ok(text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_provider(api_base: &str) -> GeminiProvider {
        let config = GeminiConfig {
            model: "gemini-2.0-flash".to_string(),
            api_base: Some(api_base.to_string()),
        };
        GeminiProvider::new(config)
            .expect("provider construction")
            .with_api_key("test-key")
    }

    fn candidate_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": text } ] } }
            ]
        })
    }

    #[tokio::test]
    async fn test_generate_returns_text_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("Hello!")))
            .mount(&server)
            .await;

        let provider = test_provider(&server.uri());
        let text = provider.generate("Blog: say hello").await.unwrap();
        assert_eq!(text, "Hello!");
    }

    #[tokio::test]
    async fn test_generate_unauthorized_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&server)
            .await;

        let provider = test_provider(&server.uri());
        let err = provider.generate("Blog: anything").await.unwrap_err();
        assert!(matches!(err, GenerationError::Auth(_)));
    }

    #[tokio::test]
    async fn test_generate_server_error_maps_to_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
            .mount(&server)
            .await;

        let provider = test_provider(&server.uri());
        let err = provider.generate("Blog: anything").await.unwrap_err();
        assert!(matches!(err, GenerationError::Provider(_)));
    }

    #[tokio::test]
    async fn test_generate_empty_candidates_is_provider_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})),
            )
            .mount(&server)
            .await;

        let provider = test_provider(&server.uri());
        let err = provider.generate("Blog: anything").await.unwrap_err();
        assert!(matches!(err, GenerationError::Provider(_)));
    }

    #[tokio::test]
    async fn test_generate_without_key_is_auth_error() {
        let config = GeminiConfig {
            model: "gemini-2.0-flash".to_string(),
            api_base: Some("http://localhost:9".to_string()),
        };
        let mut provider = GeminiProvider::new(config).unwrap();
        // Construction may have picked up a key from the environment
        provider.api_key = None;

        let err = provider.generate("Blog: anything").await.unwrap_err();
        assert!(matches!(err, GenerationError::Auth(_)));
    }

    #[test]
    fn test_endpoint_uses_api_base_override() {
        let provider = test_provider("http://localhost:1234/");
        let url = provider.endpoint("k");
        assert_eq!(
            url,
            "http://localhost:1234/v1beta/models/gemini-2.0-flash:generateContent?key=k"
        );
    }
}
