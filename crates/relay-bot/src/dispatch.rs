//! Per-message dispatch: route, execute, reply.

use crate::commands::CommandRouter;
use crate::relay::RELAY_ERROR_REPLY;
use async_trait::async_trait;
use std::sync::Arc;
use telegram_client::{BotMessage, TelegramClient, TelegramError};
use tokio::task::JoinSet;
use tracing::{error, instrument};

/// Where replies are delivered.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send(&self, chat_id: i64, text: &str) -> Result<(), TelegramError>;
}

#[async_trait]
impl ReplySink for TelegramClient {
    async fn send(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        self.send_message(chat_id, text).await
    }
}

/// Handles each inbound message in isolation: one reply per message, and no
/// failure escapes to the caller.
pub struct Dispatcher<S: ?Sized> {
    router: Arc<CommandRouter>,
    sink: Arc<S>,
}

impl<S: ?Sized> Clone for Dispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            router: self.router.clone(),
            sink: self.sink.clone(),
        }
    }
}

impl<S: ReplySink + ?Sized + 'static> Dispatcher<S> {
    pub fn new(router: Arc<CommandRouter>, sink: Arc<S>) -> Self {
        Self { router, sink }
    }

    /// Answer a single message.
    #[instrument(skip(self, message), fields(chat_id = message.chat_id))]
    pub async fn handle(&self, message: BotMessage) {
        let handler = self.router.route(&message.text);

        let reply = match handler.execute(&message).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Handler error: {}", e);
                RELAY_ERROR_REPLY.into()
            }
        };

        if let Err(e) = self.sink.send(message.chat_id, &reply).await {
            error!("Failed to send reply: {}", e);
        }
    }

    /// Handle `message` on its own task so slow completions don't hold up the loop.
    pub fn spawn(&self, tasks: &mut JoinSet<()>, message: BotMessage) {
        let dispatcher = self.clone();
        tasks.spawn(async move { dispatcher.handle(message).await });
    }
}
