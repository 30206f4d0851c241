//! Chat-completion backend trait and the Groq implementation.
//!
//! GroqBackend speaks the OpenAI-compatible /v1/chat/completions protocol,
//! so any OpenAI-compatible endpoint (Groq, TogetherAI, OpenRouter, vLLM, …)
//! works by pointing base_url elsewhere.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("API error [{status}]: {message}")]
    Api { status: u16, message: String },
    #[error("All candidate models failed to respond")]
    Exhausted,
}

impl LlmError {
    /// HTTP-style status attached to this failure. Errors without a real
    /// status (transport, decode) count as 500, matching the provider SDK
    /// convention of treating them as server-side.
    pub fn status(&self) -> u16 {
        match self {
            LlmError::Api { status, .. } => *status,
            LlmError::Http(e) => e.status().map(|s| s.as_u16()).unwrap_or(500),
            LlmError::Serde(_) => 500,
            LlmError::Exhausted => 500,
        }
    }

    /// Rate limits and server errors are worth trying on the next candidate
    /// model; anything else (validation, auth) would fail everywhere.
    pub fn is_retryable(&self) -> bool {
        if matches!(self, LlmError::Exhausted) {
            return false;
        }
        let status = self.status();
        status == 429 || (500..600).contains(&status)
    }
}

// ── Request / Response ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String, // "system" | "user"
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub messages: Vec<Message>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub content: String,
    pub model: String,
}

// ── Trait ─────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, req: CompletionRequest) -> Result<CompletionResponse, LlmError>;
}

// ── Helpers: OpenAI-style response handling ──────────────────────────────────

fn parse_completion(json: &serde_json::Value, fallback_model: &str) -> CompletionResponse {
    CompletionResponse {
        content: json["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string(),
        model: json["model"]
            .as_str()
            .unwrap_or(fallback_model)
            .to_string(),
    }
}

async fn check_response_status(resp: reqwest::Response) -> Result<serde_json::Value, LlmError> {
    let status = resp.status().as_u16();
    let body: serde_json::Value = resp.json().await?;
    if status >= 400 {
        let msg = body["error"]["message"]
            .as_str()
            .or_else(|| body["message"].as_str())
            .unwrap_or("unknown API error")
            .to_string();
        return Err(LlmError::Api { status, message: msg });
    }
    Ok(body)
}

// ── Groq (OpenAI-compatible) ─────────────────────────────────────────────────

pub struct GroqBackend {
    pub base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl GroqBackend {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        })
    }
}

#[async_trait]
impl ChatBackend for GroqBackend {
    async fn complete(&self, req: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let url = format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({
            "model":       req.model,
            "messages":    req.messages,
            "max_tokens":  req.max_tokens,
            "temperature": req.temperature,
        });
        let resp = self.client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let json = check_response_status(resp).await?;
        Ok(parse_completion(&json, &req.model))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_is_retryable() {
        let e = LlmError::Api { status: 429, message: "rate limit".into() };
        assert!(e.is_retryable());
    }

    #[test]
    fn test_all_server_errors_are_retryable() {
        for status in [500, 502, 503, 599] {
            let e = LlmError::Api { status, message: "server".into() };
            assert!(e.is_retryable(), "status {status} should be retryable");
        }
    }

    #[test]
    fn test_client_errors_are_fatal() {
        for status in [400, 401, 403, 404, 422] {
            let e = LlmError::Api { status, message: "client".into() };
            assert!(!e.is_retryable(), "status {status} should be fatal");
        }
    }

    #[test]
    fn test_exhausted_is_terminal() {
        assert!(!LlmError::Exhausted.is_retryable());
    }

    #[test]
    fn test_parse_completion_extracts_first_choice() {
        let json = serde_json::json!({
            "model": "llama-3.3-70b-versatile",
            "choices": [{"message": {"role": "assistant", "content": "a reading"}}]
        });
        let resp = parse_completion(&json, "fallback");
        assert_eq!(resp.content, "a reading");
        assert_eq!(resp.model, "llama-3.3-70b-versatile");
    }

    #[test]
    fn test_parse_completion_tolerates_missing_content() {
        let json = serde_json::json!({"choices": []});
        let resp = parse_completion(&json, "fallback");
        assert_eq!(resp.content, "");
        assert_eq!(resp.model, "fallback");
    }
}
