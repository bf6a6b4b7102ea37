//! Quiz command - shows a fixed multiple-choice question.
//!
//! Answers are not tracked; a numeric reply is just another chat message.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use telegram_client::BotMessage;

const QUESTION: &str = "🧩 Какая планета ближе всего к Солнцу?";
const OPTIONS: [&str; 4] = ["Земля", "Меркурий", "Венера", "Марс"];

pub struct QuizHandler;

impl QuizHandler {
    pub fn new() -> Self {
        Self
    }

    fn render() -> String {
        let options = OPTIONS
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{}. {}", i + 1, option))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{}\n\n{}\n\nОтветь номером.", QUESTION, options)
    }
}

impl Default for QuizHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for QuizHandler {
    fn command(&self) -> Option<&str> {
        Some("quiz")
    }

    async fn execute(&self, _message: &BotMessage) -> AppResult<String> {
        Ok(Self::render())
    }
}
