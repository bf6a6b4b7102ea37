//! About command.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use telegram_client::BotMessage;

pub struct AboutHandler;

impl AboutHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AboutHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for AboutHandler {
    fn command(&self) -> Option<&str> {
        Some("about")
    }

    async fn execute(&self, _message: &BotMessage) -> AppResult<String> {
        Ok("ℹ️ Я Telegram-бот, использующий OpenRouter.ai.\n\
            Поддерживаю GPT, Claude, Mistral и другие модели."
            .into())
    }
}
