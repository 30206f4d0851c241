//! vanmenh-llm — chat-completion provider client and model-fallback dispatcher.

pub mod backend;
pub mod dispatcher;
pub mod prompt;

pub use backend::{ChatBackend, CompletionRequest, CompletionResponse, GroqBackend, LlmError, Message};
pub use dispatcher::{FallbackDispatcher, MODEL_CANDIDATES};
