//! Error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered `success: false`.
    #[error("{}", message.as_deref().unwrap_or("request rejected"))]
    Rejected { message: Option<String> },

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("checkout widget error: {0}")]
    Widget(String),
}

impl ApiError {
    /// The server's message when it sent a non-empty one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message: Some(m) } if !m.trim().is_empty() => m.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Network or decoding trouble, as opposed to an answer from the server.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Decode(_) | ApiError::Widget(_))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid app config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
