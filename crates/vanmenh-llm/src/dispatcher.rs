//! Model-fallback dispatcher.
//!
//! Candidates are tried strictly in list order, one attempt each. A rate
//! limit (429) or server error (5xx) falls through to the next model with
//! no backoff; any other failure is fatal and propagates immediately.

use std::sync::Arc;

use crate::backend::{ChatBackend, CompletionRequest, LlmError, Message};

/// Priority list of models to try, highest priority first.
pub const MODEL_CANDIDATES: &[&str] = &[
    "openai/gpt-oss-120b",      // primary
    "openai/gpt-oss-20b",       // backup
    "llama-3.3-70b-versatile",  // smartest
    "llama-3.1-8b-instant",     // fastest
    "mixtral-8x7b-32768",       // backup
];

/// Sampling parameters, held constant across all candidates.
const TEMPERATURE: f32 = 0.6;
const MAX_TOKENS: u32 = 16_384;

pub struct FallbackDispatcher {
    backend: Arc<dyn ChatBackend>,
    candidates: Vec<String>,
}

impl FallbackDispatcher {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self::with_candidates(
            backend,
            MODEL_CANDIDATES.iter().map(|m| m.to_string()).collect(),
        )
    }

    pub fn with_candidates(backend: Arc<dyn ChatBackend>, candidates: Vec<String>) -> Self {
        Self { backend, candidates }
    }

    /// Run the message list against the candidate models and return the
    /// first successful completion's text (empty string when the provider
    /// returns no content).
    pub async fn dispatch(&self, messages: &[Message]) -> Result<String, LlmError> {
        for model in &self.candidates {
            let req = CompletionRequest {
                messages: messages.to_vec(),
                model: model.clone(),
                max_tokens: MAX_TOKENS,
                temperature: TEMPERATURE,
            };

            tracing::info!(model = %model, "attempting completion");

            match self.backend.complete(req).await {
                Ok(resp) => {
                    tracing::info!(model = %resp.model, "completion succeeded");
                    return Ok(resp.content);
                }
                Err(err) if err.is_retryable() => {
                    tracing::warn!(
                        model = %model,
                        status = err.status(),
                        "model failed, switching to backup"
                    );
                }
                Err(err) => {
                    tracing::error!(model = %model, error = %err, "fatal completion error");
                    return Err(err);
                }
            }
        }
        Err(LlmError::Exhausted)
    }
}
