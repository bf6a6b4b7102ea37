//! Common test utilities for integration tests.

#![allow(dead_code)]

use openrouter_client::OpenRouterClient;
use relay_bot::{CompletionRelay, SessionConfig};
use std::sync::Arc;
use std::time::Duration;
use telegram_client::BotMessage;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_MODEL: &str = "openai/gpt-3.5-turbo";
pub const TEST_SYSTEM_PROMPT: &str = "You are a test bot.";

/// Create an OpenRouter client configured for a mock server.
pub fn test_openrouter_client(mock_server: &MockServer, timeout: Duration) -> OpenRouterClient {
    OpenRouterClient::new("test-api-key", mock_server.uri(), timeout).unwrap()
}

/// Relay wired to a mock server, plus the session it reads the model from.
pub fn test_relay(mock_server: &MockServer, timeout: Duration) -> (Arc<SessionConfig>, Arc<CompletionRelay>) {
    let session = Arc::new(SessionConfig::new(TEST_MODEL));
    let relay = Arc::new(CompletionRelay::new(
        test_openrouter_client(mock_server, timeout),
        session.clone(),
        TEST_SYSTEM_PROMPT,
        500,
    ));
    (session, relay)
}

pub fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "gen-123",
        "model": TEST_MODEL,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// Mount a completion endpoint that answers every request with `content`.
pub async fn mount_completion(mock_server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(content)))
        .mount(mock_server)
        .await;
}

pub fn message(chat_id: i64, text: &str) -> BotMessage {
    BotMessage {
        chat_id,
        message_id: 1,
        text: text.to_string(),
        from_username: Some("tester".into()),
    }
}
