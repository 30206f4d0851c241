//! Configuration loading for Vanmenh.
//! Reads vanmenh.toml from the current directory or path in VANMENH_CONFIG env var.
//! The Groq API key is taken from the GROQ_API_KEY environment variable only;
//! it never lives in the TOML file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use vanmenh_common::error::{Result, VanmenhError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url()     -> String { "https://api.groq.com/openai".to_string() }
fn default_timeout_secs() -> u64    { 120 }

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load the config file, falling back to full defaults when absent.
    /// The service must boot with zero configuration.
    pub fn load() -> Result<Self> {
        let path = std::env::var("VANMENH_CONFIG").unwrap_or_else(|_| "vanmenh.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .map_err(|e| VanmenhError::Config(format!("cannot read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| VanmenhError::Config(format!("cannot parse {}: {e}", path.display())))
    }
}

/// Read the provider API key from the environment (loads .env first).
pub fn groq_api_key() -> Result<String> {
    let _ = dotenvy::dotenv();
    std::env::var("GROQ_API_KEY")
        .map_err(|_| VanmenhError::Config("GROQ_API_KEY is not set".to_string()))
}

mod tests;
