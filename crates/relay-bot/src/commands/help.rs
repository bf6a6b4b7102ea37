//! Help command - displays available commands.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use telegram_client::BotMessage;

pub struct HelpHandler;

impl HelpHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelpHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for HelpHandler {
    fn command(&self) -> Option<&str> {
        Some("help")
    }

    async fn execute(&self, _message: &BotMessage) -> AppResult<String> {
        Ok("📖 Доступные команды:
/start – начать диалог
/help – список команд
/about – информация о боте
/model <название> – сменить модель
/dice – бросить кубик 🎲
/joke – случайная шутка 😂
/fact – интересный факт 🌍
/quote – вдохновляющая цитата ✨
/quiz – мини-викторина 🧠"
            .into())
    }
}
