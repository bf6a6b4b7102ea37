//! Telegram Bot API HTTP client.

use crate::error::TelegramError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Telegram rejects messages longer than this many characters.
pub const MAX_MESSAGE_LENGTH: usize = 4096;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Headroom on top of the long-poll timeout before the HTTP request gives up.
const POLL_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

/// Telegram Bot API client.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    api_url: String,
    token: SecretString,
}

impl TelegramClient {
    /// Create a new Telegram client.
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self, TelegramError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: SecretString::new(token.into()),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_url, self.token.expose_secret(), method)
    }

    async fn call<B, T>(
        &self,
        method: &str,
        body: &B,
        timeout: Option<Duration>,
    ) -> Result<T, TelegramError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.client.post(self.method_url(method)).json(body);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Failed calls still carry the JSON envelope with a description.
        let envelope: ApiResponse<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(TelegramError::Api {
                    code: i32::from(status.as_u16()),
                    description: body,
                })
            }
            Err(e) => return Err(e.into()),
        };

        match envelope {
            ApiResponse {
                ok: true,
                result: Some(result),
                ..
            } => Ok(result),
            ApiResponse {
                description,
                error_code,
                ..
            } => Err(TelegramError::Api {
                code: error_code.unwrap_or_else(|| i32::from(status.as_u16())),
                description: description.unwrap_or_else(|| "Unknown error".into()),
            }),
        }
    }

    /// Fetch the bot's own account. Fails on an invalid token.
    #[instrument(skip(self))]
    pub async fn get_me(&self) -> Result<User, TelegramError> {
        self.call("getMe", &serde_json::json!({}), None).await
    }

    /// Long-poll for updates newer than `offset`.
    #[instrument(skip(self))]
    pub async fn get_updates(
        &self,
        offset: Option<i64>,
        timeout: Duration,
    ) -> Result<Vec<Update>, TelegramError> {
        let request = GetUpdatesRequest {
            offset,
            timeout: timeout.as_secs(),
            allowed_updates: vec!["message".into()],
        };

        let updates: Vec<Update> = self
            .call("getUpdates", &request, Some(timeout + POLL_TIMEOUT_MARGIN))
            .await?;
        debug!("Received {} updates", updates.len());
        Ok(updates)
    }

    /// Send a text message, split into several if it exceeds Telegram's limit.
    #[instrument(skip(self, text), fields(len = text.len()))]
    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<(), TelegramError> {
        for chunk in split_message(text, MAX_MESSAGE_LENGTH) {
            let request = SendMessageRequest {
                chat_id,
                text: chunk,
            };

            if let Err(e) = self.call::<_, Message>("sendMessage", &request, None).await {
                warn!("Send failed: {}", e);
                return Err(e);
            }
        }

        debug!("Sent message to {}", chat_id);
        Ok(())
    }
}

/// Split `text` into chunks of at most `max_chars` characters.
///
/// Always yields at least one chunk so an empty reply still reaches the API
/// (and fails there) instead of silently vanishing.
pub fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
