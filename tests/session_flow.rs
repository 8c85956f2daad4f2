//! End-to-end session flow against a mock provider server

use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use draftgen::config::GeminiConfig;
use draftgen::mode::ContentMode;
use draftgen::providers::GeminiProvider;
use draftgen::session::{SessionController, SubmitOutcome, GENERATION_FALLBACK_TEXT};
use draftgen::storage::HistoryStore;

fn mock_provider(server: &MockServer) -> GeminiProvider {
    let config = GeminiConfig {
        model: "gemini-2.0-flash".to_string(),
        api_base: Some(server.uri()),
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
async fn test_generation_flow_records_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("A fine blog post.")))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let store = HistoryStore::open_at(dir.path().join("history.db")).unwrap();
    let mut session = SessionController::new(store, ContentMode::Blog);
    let provider = mock_provider(&server);

    session.set_input("the borrow checker");
    let outcome = session.submit(&provider).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Generated);
    assert_eq!(session.output(), "A fine blog post.");
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().entries()[0].prompt, "the borrow checker");
}

#[tokio::test]
async fn test_generation_failure_leaves_history_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let store = HistoryStore::open_at(dir.path().join("history.db")).unwrap();
    let mut session = SessionController::new(store, ContentMode::Summary);
    let provider = mock_provider(&server);

    session.set_input("a topic");
    let outcome = session.submit(&provider).await.unwrap();

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(session.output(), GENERATION_FALLBACK_TEXT);
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn test_successive_generations_accumulate_newest_first() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("generated")))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let store = HistoryStore::open_at(dir.path().join("history.db")).unwrap();
    let mut session = SessionController::new(store, ContentMode::YouTube);
    let provider = mock_provider(&server);

    for prompt in ["first", "second", "third"] {
        session.set_input(prompt);
        assert_eq!(
            session.submit(&provider).await.unwrap(),
            SubmitOutcome::Generated
        );
    }

    let prompts: Vec<&str> = session
        .history()
        .entries()
        .iter()
        .map(|i| i.prompt.as_str())
        .collect();
    assert_eq!(prompts, vec!["third", "second", "first"]);

    // Reloading an older entry projects its output without a provider call
    let oldest_id = session.history().entries()[2].id;
    assert!(session.select_history_item(oldest_id));
    assert_eq!(session.output(), "generated");
}

#[tokio::test]
async fn test_history_persists_after_session_ends() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("persisted text")))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let db_path = dir.path().join("history.db");

    {
        let store = HistoryStore::open_at(&db_path).unwrap();
        let mut session = SessionController::new(store, ContentMode::Instagram);
        let provider = mock_provider(&server);
        session.set_input("sunset photo");
        session.submit(&provider).await.unwrap();
    }

    let store = HistoryStore::open_at(&db_path).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.entries()[0].output, "persisted text");
    assert_eq!(store.entries()[0].mode, ContentMode::Instagram);
}
