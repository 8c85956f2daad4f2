//! Session controller orchestrating the generation flow
//!
//! The controller owns the transient session state (current mode, input,
//! output, in-flight flag) and the history store. One generation request
//! at a time: submission is refused while a request is in flight or when
//! the input is blank. Only successful generations are recorded in
//! history; failures surface as a fixed fallback message.

use crate::error::Result;
use crate::mode::ContentMode;
use crate::providers::Provider;
use crate::storage::HistoryStore;

/// Maximum accepted input length, enforced before text reaches the controller
pub const MAX_INPUT_CHARS: usize = 2000;

/// User-facing message for any generation failure
pub const GENERATION_FALLBACK_TEXT: &str = "Error generating content. Please try again.";

/// Controller state: idle or awaiting a provider response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Generating,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Generation succeeded; output updated and history appended
    Generated,
    /// Generation failed; output set to the fallback message
    Failed,
    /// Input was empty or whitespace-only; nothing happened
    RejectedEmptyInput,
    /// A request was already in flight; nothing happened
    RejectedBusy,
}

/// Clip raw input to the accepted maximum, at a character boundary
pub fn clip_input(raw: &str) -> &str {
    match raw.char_indices().nth(MAX_INPUT_CHARS) {
        Some((idx, _)) => &raw[..idx],
        None => raw,
    }
}

/// Orchestrates submit -> generate -> record for one user session
///
/// Lives for the process lifetime, oscillating between `Idle` and
/// `Generating`; there is no terminal state.
pub struct SessionController {
    mode: ContentMode,
    input: String,
    output: String,
    state: SessionState,
    history: HistoryStore,
}

impl SessionController {
    /// Create a controller with default transient state
    pub fn new(history: HistoryStore, mode: ContentMode) -> Self {
        Self {
            mode,
            input: String::new(),
            output: String::new(),
            state: SessionState::Idle,
            history,
        }
    }

    /// Current content mode
    pub fn mode(&self) -> ContentMode {
        self.mode
    }

    /// Switch the content mode for subsequent submissions
    pub fn set_mode(&mut self, mode: ContentMode) {
        self.mode = mode;
    }

    /// Current input text
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replace the input text
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Current output text
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Current controller state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The owned history store
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Mutable access to the history store (delete, clear, theme)
    pub fn history_mut(&mut self) -> &mut HistoryStore {
        &mut self.history
    }

    /// Submit the current input for generation
    ///
    /// Guarded: a blank input or an in-flight request is silently refused.
    /// On success the output is set verbatim, the interaction is appended
    /// to history, and the input is cleared. On failure the output is set
    /// to [`GENERATION_FALLBACK_TEXT`] and nothing is recorded.
    pub async fn submit(&mut self, provider: &dyn Provider) -> Result<SubmitOutcome> {
        if self.state == SessionState::Generating {
            tracing::debug!("Submit refused: generation already in flight");
            return Ok(SubmitOutcome::RejectedBusy);
        }
        if self.input.trim().is_empty() {
            tracing::debug!("Submit refused: empty input");
            return Ok(SubmitOutcome::RejectedEmptyInput);
        }

        self.state = SessionState::Generating;
        let prompt = format!("{}: {}", self.mode, self.input);

        let result = provider.generate(&prompt).await;
        self.state = SessionState::Idle;

        match result {
            Ok(text) => {
                self.output = text.clone();
                self.history.append(self.input.clone(), text, self.mode)?;
                self.input.clear();
                Ok(SubmitOutcome::Generated)
            }
            Err(err) => {
                tracing::warn!("Generation failed ({}): {}", provider.name(), err);
                self.output = GENERATION_FALLBACK_TEXT.to_string();
                Ok(SubmitOutcome::Failed)
            }
        }
    }

    /// Load a stored interaction's output into the current session
    ///
    /// Read-only projection: valid in either state, does not invoke the
    /// provider, does not change history. Returns `false` when the id is
    /// not present.
    pub fn select_history_item(&mut self, id: u64) -> bool {
        match self.history.find(id) {
            Some(interaction) => {
                self.output = interaction.output.clone();
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    fn force_generating(&mut self) {
        self.state = SessionState::Generating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::GenerationError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::tempdir;

    /// Scripted provider for controller tests
    struct StubProvider {
        response: std::result::Result<String, GenerationError>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn ok(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(err: GenerationError) -> Self {
            Self {
                response: Err(err),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Provider for StubProvider {
        async fn generate(&self, _prompt: &str) -> std::result::Result<String, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(GenerationError::Network(m)) => Err(GenerationError::Network(m.clone())),
                Err(GenerationError::Auth(m)) => Err(GenerationError::Auth(m.clone())),
                Err(GenerationError::Provider(m)) => Err(GenerationError::Provider(m.clone())),
                Err(GenerationError::Unknown(m)) => Err(GenerationError::Unknown(m.clone())),
            }
        }

        fn name(&self) -> &str {
            "stub"
        }
    }

    /// Provider that records the composed prompt it receives
    struct PromptCapture {
        seen: std::sync::Mutex<Option<String>>,
    }

    #[async_trait]
    impl Provider for PromptCapture {
        async fn generate(&self, prompt: &str) -> std::result::Result<String, GenerationError> {
            *self.seen.lock().unwrap() = Some(prompt.to_string());
            Ok("captured".to_string())
        }

        fn name(&self) -> &str {
            "capture"
        }
    }

    fn test_controller() -> (SessionController, tempfile::TempDir) {
        let dir = tempdir().expect("failed to create tempdir");
        let store = HistoryStore::open_at(dir.path().join("history.db")).unwrap();
        (SessionController::new(store, ContentMode::Blog), dir)
    }

    #[tokio::test]
    async fn test_submit_success_records_history_and_clears_input() {
        let (mut session, _dir) = test_controller();
        let provider = StubProvider::ok("Generated text.");

        session.set_input("a post about rust");
        let outcome = session.submit(&provider).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Generated);
        assert_eq!(session.output(), "Generated text.");
        assert_eq!(session.input(), "");
        assert_eq!(session.state(), SessionState::Idle);

        assert_eq!(session.history().len(), 1);
        let entry = &session.history().entries()[0];
        assert_eq!(entry.prompt, "a post about rust");
        assert_eq!(entry.output, "Generated text.");
        assert_eq!(entry.mode, ContentMode::Blog);
    }

    #[tokio::test]
    async fn test_submit_composes_prompt_with_mode_label() {
        let (mut session, _dir) = test_controller();
        let provider = PromptCapture {
            seen: std::sync::Mutex::new(None),
        };

        session.set_mode(ContentMode::YouTube);
        session.set_input("intro for a rust video");
        session.submit(&provider).await.unwrap();

        let seen = provider.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen, "YouTube: intro for a rust video");
    }

    #[tokio::test]
    async fn test_submit_empty_input_never_calls_provider() {
        let (mut session, _dir) = test_controller();
        let provider = StubProvider::ok("should not appear");

        session.set_input("   \t  ");
        let outcome = session.submit(&provider).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::RejectedEmptyInput);
        assert_eq!(provider.call_count(), 0);
        assert_eq!(session.history().len(), 0);
        assert_eq!(session.output(), "");
    }

    #[tokio::test]
    async fn test_submit_while_generating_never_calls_provider() {
        let (mut session, _dir) = test_controller();
        let provider = StubProvider::ok("should not appear");

        session.set_input("valid input");
        session.force_generating();
        let outcome = session.submit(&provider).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::RejectedBusy);
        assert_eq!(provider.call_count(), 0);
        assert_eq!(session.history().len(), 0);
    }

    #[tokio::test]
    async fn test_submit_failure_sets_fallback_and_skips_history() {
        let (mut session, _dir) = test_controller();
        let provider = StubProvider::failing(GenerationError::Network("refused".to_string()));

        session.set_input("a post about rust");
        let outcome = session.submit(&provider).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(session.output(), GENERATION_FALLBACK_TEXT);
        assert_eq!(session.history().len(), 0);
        assert_eq!(session.state(), SessionState::Idle);
        // Input is kept so the user can retry
        assert_eq!(session.input(), "a post about rust");
    }

    #[tokio::test]
    async fn test_failure_then_success_recovers() {
        let (mut session, _dir) = test_controller();

        session.set_input("retry me");
        let failing = StubProvider::failing(GenerationError::Provider("quota".to_string()));
        session.submit(&failing).await.unwrap();

        let ok = StubProvider::ok("second try worked");
        let outcome = session.submit(&ok).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Generated);
        assert_eq!(session.output(), "second try worked");
        assert_eq!(session.history().len(), 1);
    }

    #[tokio::test]
    async fn test_select_history_item_is_read_only_projection() {
        let (mut session, _dir) = test_controller();
        let provider = StubProvider::ok("stored output");

        session.set_input("original prompt");
        session.submit(&provider).await.unwrap();
        let id = session.history().entries()[0].id;

        session.set_input("unrelated new input");
        assert!(session.select_history_item(id));
        assert_eq!(session.output(), "stored output");
        // History and pending input are untouched
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.input(), "unrelated new input");
        // Only one provider call happened, for the original submit
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_select_history_item_missing_id() {
        let (mut session, _dir) = test_controller();
        assert!(!session.select_history_item(42));
        assert_eq!(session.output(), "");
    }

    #[test]
    fn test_clip_input_under_limit_is_unchanged() {
        assert_eq!(clip_input("short"), "short");
    }

    #[test]
    fn test_clip_input_truncates_at_limit() {
        let long = "x".repeat(MAX_INPUT_CHARS + 100);
        assert_eq!(clip_input(&long).chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_clip_input_respects_char_boundaries() {
        let long = "é".repeat(MAX_INPUT_CHARS + 5);
        let clipped = clip_input(&long);
        assert_eq!(clipped.chars().count(), MAX_INPUT_CHARS);
        assert!(long.is_char_boundary(clipped.len()));
    }

    #[test]
    fn test_new_controller_defaults() {
        let (session, _dir) = test_controller();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.input(), "");
        assert_eq!(session.output(), "");
        assert_eq!(session.mode(), ContentMode::Blog);
    }
}
