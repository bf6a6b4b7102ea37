//! Process-wide session settings shared between command handlers and the relay.

use tokio::sync::RwLock;
use tracing::info;

/// Runtime-mutable bot settings. Currently only the completion model.
///
/// Shared as `Arc<SessionConfig>`; every handler that needs it gets the same
/// instance injected at startup.
#[derive(Debug)]
pub struct SessionConfig {
    current_model: RwLock<String>,
}

impl SessionConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            current_model: RwLock::new(model.into()),
        }
    }

    /// Snapshot of the selected model. The lock is released before returning,
    /// so callers can hold the value across awaits.
    pub async fn current_model(&self) -> String {
        self.current_model.read().await.clone()
    }

    /// Replace the selected model. No validation: any identifier is accepted.
    pub async fn set_model(&self, model: impl Into<String>) {
        let model = model.into();
        let mut current = self.current_model.write().await;
        info!("Model changed: {} -> {}", *current, model);
        *current = model;
    }
}
