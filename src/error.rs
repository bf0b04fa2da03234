use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReddituiError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Anyhow error: {0}")]
    Anyhow(String),
}

impl From<io::Error> for ReddituiError {
    fn from(err: io::Error) -> Self {
        ReddituiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReddituiError {
    fn from(err: serde_json::Error) -> Self {
        ReddituiError::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ReddituiError {
    fn from(err: reqwest::Error) -> Self {
        ReddituiError::Network(err.to_string())
    }
}

impl From<anyhow::Error> for ReddituiError {
    fn from(err: anyhow::Error) -> Self {
        ReddituiError::Anyhow(err.to_string())
    }
}
