use thiserror::Error;

#[derive(Debug, Error)]
pub enum VanmenhError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid birth profile: {0}")]
    InvalidProfile(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VanmenhError>;
