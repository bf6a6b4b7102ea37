//! Model command - switches the completion model for everyone.

use crate::commands::{parse_command, CommandHandler};
use crate::error::AppResult;
use crate::session::SessionConfig;
use async_trait::async_trait;
use std::sync::Arc;
use telegram_client::BotMessage;

const USAGE: &str = "⚠️ Использование:\n/model <название модели>";

pub struct ModelHandler {
    session: Arc<SessionConfig>,
}

impl ModelHandler {
    pub fn new(session: Arc<SessionConfig>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl CommandHandler for ModelHandler {
    fn command(&self) -> Option<&str> {
        Some("model")
    }

    async fn execute(&self, message: &BotMessage) -> AppResult<String> {
        let Some(model) = parse_command(&message.text).and_then(|c| c.args) else {
            return Ok(USAGE.into());
        };

        self.session.set_model(model).await;
        Ok(format!("✅ Модель изменена на:\n{}", model))
    }
}
