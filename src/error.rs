use thiserror::Error;

/// Reasons a submission never reaches the engine
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Failed to parse input: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Failed to serialize output: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, ForecastError>;
