//! Telegram bot that answers a handful of slash commands and relays
//! everything else to an OpenRouter chat model.

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod relay;
pub mod session;

pub use dispatch::{Dispatcher, ReplySink};
pub use relay::{CompletionRelay, RELAY_ERROR_REPLY};
pub use session::SessionConfig;
