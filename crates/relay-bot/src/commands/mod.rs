//! Bot command handlers and the router that picks one per message.

mod about;
mod chat;
mod dice;
mod help;
mod model;
mod quiz;
mod random_reply;
mod start;

pub use about::AboutHandler;
pub use chat::ChatHandler;
pub use dice::{roll_die, DiceHandler};
pub use help::HelpHandler;
pub use model::ModelHandler;
pub use quiz::QuizHandler;
pub use random_reply::{RandomReplyHandler, FACTS, JOKES, QUOTES};
pub use start::StartHandler;

use crate::error::AppResult;
use crate::relay::CompletionRelay;
use crate::session::SessionConfig;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use telegram_client::BotMessage;
use tracing::warn;

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name without the slash (e.g., "help"). `None` for the
    /// fallback handler that receives non-command messages.
    fn command(&self) -> Option<&str> {
        None
    }

    /// Execute the command.
    async fn execute(&self, message: &BotMessage) -> AppResult<String>;
}

/// A slash command split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// Name without the slash or mention.
    pub name: &'a str,
    /// Bot username after `@`, as in `/help@my_bot`.
    pub mention: Option<&'a str>,
    /// Remaining text after the command token, trimmed. `None` if empty.
    pub args: Option<&'a str>,
}

/// Parse the leading token of `text` as a slash command.
pub fn parse_command(text: &str) -> Option<ParsedCommand<'_>> {
    let text = text.trim_start();
    let (token, rest) = match text.find(char::is_whitespace) {
        Some(idx) => text.split_at(idx),
        None => (text, ""),
    };

    let body = token.strip_prefix('/')?;
    let (name, mention) = match body.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (body, None),
    };
    if name.is_empty() {
        return None;
    }

    let args = rest.trim();
    Some(ParsedCommand {
        name,
        mention,
        args: (!args.is_empty()).then_some(args),
    })
}

/// Maps command names to handlers; anything unmatched goes to the fallback.
pub struct CommandRouter {
    handlers: HashMap<String, Arc<dyn CommandHandler>>,
    fallback: Arc<dyn CommandHandler>,
    bot_username: Option<String>,
}

impl CommandRouter {
    pub fn new(fallback: Arc<dyn CommandHandler>) -> Self {
        Self {
            handlers: HashMap::new(),
            fallback,
            bot_username: None,
        }
    }

    /// Only accept `/cmd@mention` when the mention is this bot.
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    /// Register a handler under its command name.
    pub fn register(&mut self, handler: Arc<dyn CommandHandler>) {
        match handler.command() {
            Some(name) => {
                let name = name.to_string();
                if self.handlers.insert(name.clone(), handler).is_some() {
                    warn!("Handler for /{} registered twice, keeping the last one", name);
                }
            }
            None => warn!("Ignoring handler without a command name"),
        }
    }

    /// Number of registered commands, not counting the fallback.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Command handler for `text`, if it starts with a known command
    /// addressed to this bot.
    pub fn command_for(&self, text: &str) -> Option<&Arc<dyn CommandHandler>> {
        let parsed = parse_command(text)?;

        if let (Some(mention), Some(username)) = (parsed.mention, self.bot_username.as_deref()) {
            if !mention.eq_ignore_ascii_case(username) {
                return None;
            }
        }

        self.handlers.get(parsed.name)
    }

    /// Handler that should answer `text`.
    pub fn route(&self, text: &str) -> &Arc<dyn CommandHandler> {
        self.command_for(text).unwrap_or(&self.fallback)
    }
}

/// Build the router with every built-in command and the completion relay as fallback.
pub fn build_router(
    session: Arc<SessionConfig>,
    relay: Arc<CompletionRelay>,
    bot_username: Option<String>,
) -> CommandRouter {
    let mut router = CommandRouter::new(Arc::new(ChatHandler::new(relay)));
    if let Some(username) = bot_username {
        router = router.with_bot_username(username);
    }

    router.register(Arc::new(StartHandler::new()));
    router.register(Arc::new(HelpHandler::new()));
    router.register(Arc::new(AboutHandler::new()));
    router.register(Arc::new(ModelHandler::new(session)));
    router.register(Arc::new(DiceHandler::new()));
    router.register(Arc::new(RandomReplyHandler::jokes()));
    router.register(Arc::new(RandomReplyHandler::facts()));
    router.register(Arc::new(RandomReplyHandler::quotes()));
    router.register(Arc::new(QuizHandler::new()));

    router
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn message(text: &str) -> BotMessage {
        BotMessage {
            chat_id: 42,
            message_id: 1,
            text: text.to_string(),
            from_username: Some("tester".into()),
        }
    }

    struct Fixed(Option<&'static str>, &'static str);

    #[async_trait]
    impl CommandHandler for Fixed {
        fn command(&self) -> Option<&str> {
            self.0
        }

        async fn execute(&self, _message: &BotMessage) -> AppResult<String> {
            Ok(self.1.into())
        }
    }

    fn router() -> CommandRouter {
        let mut router = CommandRouter::new(Arc::new(Fixed(None, "fallback")))
            .with_bot_username("relay_bot");
        router.register(Arc::new(Fixed(Some("help"), "help")));
        router.register(Arc::new(Fixed(Some("model"), "model")));
        router
    }

    async fn answer(router: &CommandRouter, text: &str) -> String {
        router.route(text).execute(&message(text)).await.unwrap()
    }

    #[test]
    fn test_parse_command() {
        let parsed = parse_command("/model  anthropic/claude-3-haiku ").unwrap();
        assert_eq!(parsed.name, "model");
        assert_eq!(parsed.mention, None);
        assert_eq!(parsed.args, Some("anthropic/claude-3-haiku"));

        let parsed = parse_command("/help@relay_bot").unwrap();
        assert_eq!(parsed.name, "help");
        assert_eq!(parsed.mention, Some("relay_bot"));
        assert_eq!(parsed.args, None);

        let parsed = parse_command("  /dice\n").unwrap();
        assert_eq!(parsed.name, "dice");
    }

    #[test]
    fn test_parse_non_command() {
        assert_eq!(parse_command("hello /help"), None);
        assert_eq!(parse_command("/"), None);
        assert_eq!(parse_command("/@relay_bot"), None);
        assert_eq!(parse_command(""), None);
    }

    #[tokio::test]
    async fn test_route_known_command() {
        let router = router();
        assert_eq!(answer(&router, "/help").await, "help");
        assert_eq!(answer(&router, "/model foo").await, "model");
    }

    #[tokio::test]
    async fn test_route_free_text_and_unknown_command_to_fallback() {
        let router = router();
        assert_eq!(answer(&router, "What is Rust?").await, "fallback");
        assert_eq!(answer(&router, "/unknown arg").await, "fallback");
        assert_eq!(answer(&router, "/Help").await, "fallback");
    }

    #[tokio::test]
    async fn test_route_mentions() {
        let router = router();
        assert_eq!(answer(&router, "/help@relay_bot").await, "help");
        assert_eq!(answer(&router, "/help@Relay_Bot").await, "help");
        assert_eq!(answer(&router, "/help@other_bot").await, "fallback");
    }

    #[tokio::test]
    async fn test_mentions_accepted_without_known_username() {
        let mut router = CommandRouter::new(Arc::new(Fixed(None, "fallback")));
        router.register(Arc::new(Fixed(Some("help"), "help")));
        assert_eq!(answer(&router, "/help@anything").await, "help");
    }

    #[test]
    fn test_register_ignores_fallback_style_handler() {
        let mut router = router();
        router.register(Arc::new(Fixed(None, "nameless")));
        assert_eq!(router.len(), 2);
    }
}
