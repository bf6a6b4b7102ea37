//! Telegram Bot API client.

mod client;
mod error;
mod receiver;
mod types;

pub use client::{split_message, TelegramClient, MAX_MESSAGE_LENGTH};
pub use error::TelegramError;
pub use receiver::UpdateReceiver;
pub use types::*;
