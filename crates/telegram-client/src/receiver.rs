//! Update receiver built on `getUpdates` long polling.

use crate::client::TelegramClient;
use crate::types::*;
use std::time::Duration;
use tokio::time::sleep;
use tokio_stream::Stream;
use tracing::{debug, error};

const ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// Message receiver that long-polls for new updates.
pub struct UpdateReceiver {
    client: TelegramClient,
    poll_timeout: Duration,
}

impl UpdateReceiver {
    /// Create a new update receiver.
    pub fn new(client: TelegramClient, poll_timeout: Duration) -> Self {
        Self {
            client,
            poll_timeout,
        }
    }

    /// Start receiving text messages as an async stream.
    ///
    /// Every fetched update is acknowledged through the next poll's offset,
    /// including the non-text ones that are dropped here.
    pub fn stream(self) -> impl Stream<Item = BotMessage> {
        async_stream::stream! {
            let mut offset: Option<i64> = None;

            loop {
                match self.client.get_updates(offset, self.poll_timeout).await {
                    Ok(updates) => {
                        for update in updates {
                            offset = Some(update.update_id + 1);

                            if let Some(bot_msg) = BotMessage::from_update(&update) {
                                debug!(chat_id = bot_msg.chat_id, "Received: {}",
                                    bot_msg.text.chars().take(50).collect::<String>()
                                );
                                yield bot_msg;
                            }
                        }
                    }
                    Err(e) => {
                        error!("Receive error: {}", e);
                        sleep(ERROR_BACKOFF).await;
                    }
                }
            }
        }
    }
}
