//! OpenRouter client for the OpenAI-compatible chat completions API.

mod client;
mod error;
mod types;

pub use client::OpenRouterClient;
pub use error::OpenRouterError;
pub use types::*;
