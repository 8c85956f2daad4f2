//! Base provider trait and error taxonomy
//!
//! This module defines the Provider trait that all generation providers
//! implement, along with the tagged generation error so callers and tests
//! can distinguish failure causes even though the user-facing message
//! stays generic.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// Generation failure taxonomy
///
/// The gateway collapses everything into one user-facing message, but the
/// variants keep the underlying cause distinguishable for callers and tests.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Transport-level failure (connection refused, timeout, DNS)
    #[error("network error: {0}")]
    Network(String),

    /// Credential missing or rejected by the provider
    #[error("authentication error: {0}")]
    Auth(String),

    /// Provider-side failure (quota, server error, malformed response)
    #[error("provider error: {0}")]
    Provider(String),

    /// Anything that does not fit the other variants
    #[error("unknown generation error: {0}")]
    Unknown(String),
}

impl GenerationError {
    /// Classify a reqwest transport error
    pub fn from_http(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            return Self::Network(err.to_string());
        }
        match err.status() {
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN) => {
                Self::Auth(err.to_string())
            }
            Some(_) => Self::Provider(err.to_string()),
            None => Self::Unknown(err.to_string()),
        }
    }

    /// Classify a non-success HTTP status with its response body
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let body = truncate_body(body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Self::Auth(format!("{}: {}", status, body))
            }
            _ => Self::Provider(format!("{}: {}", status, body)),
        }
    }
}

/// Keep provider error bodies readable in logs
fn truncate_body(body: &str) -> String {
    let body = body.trim();
    if body.len() > 500 {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i < 500)
            .last()
            .map_or(0, |(i, c)| i + c.len_utf8());
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}

/// Provider trait for generation backends
///
/// A provider performs a single text-generation round trip: one composed
/// prompt in, one text response out. No retries; the HTTP client timeout
/// is the only bound on latency.
///
/// # Examples
///
/// ```no_run
/// use draftgen::providers::{GenerationError, Provider};
/// use async_trait::async_trait;
///
/// struct EchoProvider;
///
/// #[async_trait]
/// impl Provider for EchoProvider {
///     async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
///         Ok(prompt.to_string())
///     }
///
///     fn name(&self) -> &str {
///         "echo"
///     }
/// }
/// ```
#[async_trait]
pub trait Provider: Send + Sync {
    /// Generate text for a composed prompt
    ///
    /// # Arguments
    ///
    /// * `prompt` - The composed prompt (mode label plus user text)
    ///
    /// # Errors
    ///
    /// Returns a tagged `GenerationError` for any transport,
    /// authentication, or provider-side failure.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Short identifier for logs and display
    fn name(&self) -> &str;
}
