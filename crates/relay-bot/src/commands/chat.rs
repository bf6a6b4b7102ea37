//! Chat fallback - relays non-command messages to the completion service.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use crate::relay::CompletionRelay;
use async_trait::async_trait;
use std::sync::Arc;
use telegram_client::BotMessage;
use tracing::{info, instrument};

pub struct ChatHandler {
    relay: Arc<CompletionRelay>,
}

impl ChatHandler {
    pub fn new(relay: Arc<CompletionRelay>) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl CommandHandler for ChatHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat_id))]
    async fn execute(&self, message: &BotMessage) -> AppResult<String> {
        info!(
            "Chat from {}: {}...",
            message.from_username.as_deref().unwrap_or("unknown"),
            message.text.chars().take(50).collect::<String>()
        );

        let reply = self.relay.relay(&message.text).await;

        info!("Response to {}: {} chars", message.chat_id, reply.chars().count());
        Ok(reply)
    }
}
