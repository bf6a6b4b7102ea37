//! Start command - greets the user.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use telegram_client::BotMessage;

pub struct StartHandler;

impl StartHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StartHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for StartHandler {
    fn command(&self) -> Option<&str> {
        Some("start")
    }

    async fn execute(&self, _message: &BotMessage) -> AppResult<String> {
        Ok("🤖 Привет! Я ИИ чат-бот через OpenRouter.\n\
            Напиши мне сообщение 👇\n\
            Используй /help для списка команд."
            .into())
    }
}
