//! Dice command - rolls a six-sided die.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use rand::Rng;
use telegram_client::BotMessage;

/// Uniform roll in `1..=6`.
pub fn roll_die() -> u8 {
    rand::thread_rng().gen_range(1..=6)
}

pub struct DiceHandler;

impl DiceHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DiceHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandHandler for DiceHandler {
    fn command(&self) -> Option<&str> {
        Some("dice")
    }

    async fn execute(&self, _message: &BotMessage) -> AppResult<String> {
        Ok(format!("🎲 Ты выбросил: {}", roll_die()))
    }
}
