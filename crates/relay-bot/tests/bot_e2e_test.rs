//! End-to-end tests: Telegram updates in, Telegram replies out.

mod common;

use common::*;
use relay_bot::commands::build_router;
use relay_bot::Dispatcher;
use std::sync::Arc;
use std::time::Duration;
use telegram_client::TelegramClient;
use tokio::task::JoinSet;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sent(chat_id: i64) -> serde_json::Value {
    serde_json::json!({
        "ok": true,
        "result": {
            "message_id": 500,
            "date": 1700000000,
            "chat": {"id": chat_id, "type": "private"}
        }
    })
}

async fn expect_reply(telegram_server: &MockServer, chat_id: i64, text: &str) {
    Mock::given(method("POST"))
        .and(path("/bottest-token/sendMessage"))
        .and(body_partial_json(serde_json::json!({"chat_id": chat_id, "text": text})))
        .respond_with(ResponseTemplate::new(200).set_body_json(sent(chat_id)))
        .expect(1)
        .mount(telegram_server)
        .await;
}

#[tokio::test]
async fn test_bot_chat_e2e() {
    let openrouter_server = MockServer::start().await;
    let telegram_server = MockServer::start().await;

    mount_completion(&openrouter_server, "Hello! I am your AI assistant.").await;
    expect_reply(&telegram_server, 1001, "Hello! I am your AI assistant.").await;

    let (session, relay) = test_relay(&openrouter_server, Duration::from_secs(5));
    let telegram = TelegramClient::new(telegram_server.uri(), "test-token").unwrap();
    let router = Arc::new(build_router(session, relay, Some("relay_bot".into())));
    let dispatcher = Dispatcher::new(router, Arc::new(telegram));

    dispatcher.handle(message(1001, "Hi there!")).await;
}

#[tokio::test]
async fn test_bot_error_reply_e2e() {
    let openrouter_server = MockServer::start().await;
    let telegram_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&openrouter_server)
        .await;
    expect_reply(&telegram_server, 1001, relay_bot::RELAY_ERROR_REPLY).await;

    let (session, relay) = test_relay(&openrouter_server, Duration::from_secs(5));
    let telegram = TelegramClient::new(telegram_server.uri(), "test-token").unwrap();
    let router = Arc::new(build_router(session, relay, None));
    let dispatcher = Dispatcher::new(router, Arc::new(telegram));

    dispatcher.handle(message(1001, "Hi there!")).await;
}

#[tokio::test]
async fn test_replies_go_to_originating_chats() {
    let openrouter_server = MockServer::start().await;
    let telegram_server = MockServer::start().await;

    mount_completion(&openrouter_server, "relayed").await;
    expect_reply(&telegram_server, 1, "relayed").await;
    expect_reply(
        &telegram_server,
        2,
        "ℹ️ Я Telegram-бот, использующий OpenRouter.ai.\nПоддерживаю GPT, Claude, Mistral и другие модели.",
    )
    .await;

    let (session, relay) = test_relay(&openrouter_server, Duration::from_secs(5));
    let telegram = TelegramClient::new(telegram_server.uri(), "test-token").unwrap();
    let router = Arc::new(build_router(session, relay, None));
    let dispatcher = Dispatcher::new(router, Arc::new(telegram));

    let mut tasks = JoinSet::new();
    dispatcher.spawn(&mut tasks, message(1, "free text"));
    dispatcher.spawn(&mut tasks, message(2, "/about"));

    while let Some(result) = tasks.join_next().await {
        result.unwrap();
    }
}
