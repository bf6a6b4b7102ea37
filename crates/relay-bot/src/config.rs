//! Application configuration loaded from environment variables.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Telegram bot token (`TELEGRAM_TOKEN`)
    #[serde(default)]
    pub telegram_token: String,

    /// OpenRouter API key (`OPENROUTER_API_KEY`)
    #[serde(default)]
    pub openrouter_api_key: String,

    /// Telegram configuration
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// OpenRouter configuration
    #[serde(default)]
    pub openrouter: OpenRouterConfig,

    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot API endpoint
    #[serde(default = "default_telegram_api")]
    pub api_url: String,

    /// Long-poll timeout for getUpdates
    #[serde(default = "default_poll_timeout", with = "humantime_serde")]
    pub poll_timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenRouterConfig {
    /// API base URL
    #[serde(default = "default_openrouter_url")]
    pub base_url: String,

    /// Model selected at startup; `/model` changes it at runtime
    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    /// Upper bound on generated tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// System prompt for every completion
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_url: default_telegram_api(),
            poll_timeout: default_poll_timeout(),
        }
    }
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            base_url: default_openrouter_url(),
            model: default_model(),
            timeout: default_timeout(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            log_level: default_log_level(),
        }
    }
}

fn default_telegram_api() -> String {
    "https://api.telegram.org".into()
}

fn default_poll_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_openrouter_url() -> String {
    "https://openrouter.ai/api/v1".into()
}

fn default_model() -> String {
    "openai/gpt-3.5-turbo".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_max_tokens() -> u32 {
    500
}

fn default_system_prompt() -> String {
    "Ты дружелюбный Telegram чат-бот.".into()
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_environment(config::Environment::default())
    }

    fn from_environment(environment: config::Environment) -> Result<Self> {
        let config: Config = config::Config::builder()
            .add_source(environment.separator("__").try_parsing(false))
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Both secrets are required; an empty value counts as missing.
    fn validate(&self) -> Result<()> {
        if self.telegram_token.trim().is_empty() {
            bail!("TELEGRAM_TOKEN environment variable not set");
        }
        if self.openrouter_api_key.trim().is_empty() {
            bail!("OPENROUTER_API_KEY environment variable not set");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_from(vars: &[(&str, &str)]) -> Result<Config> {
        let source: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_environment(config::Environment::default().source(Some(source)))
    }

    #[test]
    fn test_defaults_with_secrets() {
        let config = load_from(&[
            ("TELEGRAM_TOKEN", "123:abc"),
            ("OPENROUTER_API_KEY", "sk-or-test"),
        ])
        .unwrap();

        assert_eq!(config.telegram_token, "123:abc");
        assert_eq!(config.openrouter_api_key, "sk-or-test");
        assert_eq!(config.telegram.api_url, "https://api.telegram.org");
        assert_eq!(config.telegram.poll_timeout, Duration::from_secs(30));
        assert_eq!(config.openrouter.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(config.openrouter.model, "openai/gpt-3.5-turbo");
        assert_eq!(config.openrouter.timeout, Duration::from_secs(30));
        assert_eq!(config.openrouter.max_tokens, 500);
        assert_eq!(config.bot.log_level, "info");
    }

    #[test]
    fn test_nested_overrides() {
        let config = load_from(&[
            ("TELEGRAM_TOKEN", "123:abc"),
            ("OPENROUTER_API_KEY", "sk-or-test"),
            ("OPENROUTER__MODEL", "mistralai/mistral-7b-instruct"),
            ("OPENROUTER__TIMEOUT", "5s"),
            ("TELEGRAM__POLL_TIMEOUT", "1m"),
        ])
        .unwrap();

        assert_eq!(config.openrouter.model, "mistralai/mistral-7b-instruct");
        assert_eq!(config.openrouter.timeout, Duration::from_secs(5));
        assert_eq!(config.telegram.poll_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_missing_telegram_token() {
        let err = load_from(&[("OPENROUTER_API_KEY", "sk-or-test")]).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_TOKEN"));
    }

    #[test]
    fn test_missing_api_key() {
        let err = load_from(&[("TELEGRAM_TOKEN", "123:abc")]).unwrap_err();
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }

    #[test]
    fn test_empty_secret_is_missing() {
        let err = load_from(&[("TELEGRAM_TOKEN", "123:abc"), ("OPENROUTER_API_KEY", "  ")])
            .unwrap_err();
        assert!(err.to_string().contains("OPENROUTER_API_KEY"));
    }
}
