//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use vanmenh_config::Config;
use vanmenh_llm::{FallbackDispatcher, GroqBackend};

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub dispatcher: FallbackDispatcher,
}

impl AppState {
    pub fn new(dispatcher: FallbackDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Wire up the production Groq backend from config + API key.
    pub fn from_config(config: &Config, api_key: String) -> anyhow::Result<Self> {
        let backend = GroqBackend::new(
            config.llm.base_url.clone(),
            api_key,
            Duration::from_secs(config.llm.request_timeout_secs),
        )?;
        Ok(Self::new(FallbackDispatcher::new(Arc::new(backend))))
    }
}

pub type SharedState = Arc<AppState>;
