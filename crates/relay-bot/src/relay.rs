//! Completion relay - forwards free text to the chat model.

use crate::session::SessionConfig;
use openrouter_client::{Message, OpenRouterClient, OpenRouterError};
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Reply sent whenever the completion service cannot produce an answer.
pub const RELAY_ERROR_REPLY: &str = "❌ Ошибка при обращении к ИИ.";

/// Single-turn relay to the completion service.
pub struct CompletionRelay {
    client: OpenRouterClient,
    session: Arc<SessionConfig>,
    system_prompt: String,
    max_tokens: u32,
}

impl CompletionRelay {
    pub fn new(
        client: OpenRouterClient,
        session: Arc<SessionConfig>,
        system_prompt: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            client,
            session,
            system_prompt: system_prompt.into(),
            max_tokens,
        }
    }

    /// Request a completion for `text` with the currently selected model.
    pub async fn complete(&self, text: &str) -> Result<String, OpenRouterError> {
        // Read once: a concurrent `/model` must not affect a request already being built.
        let model = self.session.current_model().await;
        debug!("Relaying to {}", model);

        let messages = vec![Message::system(&self.system_prompt), Message::user(text)];
        self.client.chat(&model, messages, Some(self.max_tokens)).await
    }

    /// Like [`complete`](Self::complete), but every failure collapses into
    /// [`RELAY_ERROR_REPLY`] after being logged.
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub async fn relay(&self, text: &str) -> String {
        match self.complete(text).await {
            Ok(reply) => reply,
            Err(e) => {
                match &e {
                    OpenRouterError::Timeout => error!("Completion request timed out"),
                    OpenRouterError::Network(_) => error!("Completion service unreachable: {}", e),
                    OpenRouterError::Api { status, .. } => {
                        error!(status, "Completion service rejected request: {}", e)
                    }
                    OpenRouterError::Json(_) | OpenRouterError::EmptyResponse => {
                        error!("Unexpected completion response: {}", e)
                    }
                }
                RELAY_ERROR_REPLY.into()
            }
        }
    }
}
