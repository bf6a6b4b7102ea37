//! Joke, fact and quote commands - one canned line picked at random.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use async_trait::async_trait;
use rand::seq::SliceRandom;
use telegram_client::BotMessage;

pub const JOKES: [&str; 3] = [
    "Почему программисты любят кофе? Потому что без него код не компилируется ☕",
    "Бот зашёл в бар… и сразу начал отвечать на все вопросы 🤖",
    "Ученые доказали: смех продлевает жизнь 😄",
];

pub const FACTS: [&str; 3] = [
    "🌍 В мире больше кур, чем людей.",
    "🧠 Мозг человека потребляет около 20% энергии тела.",
    "🚀 Первый человек в космосе — Юрий Гагарин.",
];

pub const QUOTES: [&str; 3] = [
    "✨ «Будь собой; все остальные роли уже заняты.» — Оскар Уайльд",
    "💡 «Успех — это движение от неудачи к неудаче без потери энтузиазма.» — Черчилль",
    "🔥 «Делай сегодня то, что другие не хотят.»",
];

/// Answers a command with a uniformly chosen entry from a fixed list.
pub struct RandomReplyHandler {
    command: &'static str,
    replies: &'static [&'static str],
}

impl RandomReplyHandler {
    pub fn new(command: &'static str, replies: &'static [&'static str]) -> Self {
        Self { command, replies }
    }

    pub fn jokes() -> Self {
        Self::new("joke", &JOKES)
    }

    pub fn facts() -> Self {
        Self::new("fact", &FACTS)
    }

    pub fn quotes() -> Self {
        Self::new("quote", &QUOTES)
    }

    fn pick(&self) -> &'static str {
        self.replies
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or_default()
    }
}

#[async_trait]
impl CommandHandler for RandomReplyHandler {
    fn command(&self) -> Option<&str> {
        Some(self.command)
    }

    async fn execute(&self, _message: &BotMessage) -> AppResult<String> {
        Ok(self.pick().into())
    }
}
