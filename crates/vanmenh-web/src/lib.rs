//! vanmenh-web — HTTP boundary for the fortune-reading service.
//! Provides:
//!   - POST /api/fortune — birth profile in, Markdown reading out
//!   - GET  /api/health  — liveness probe

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
