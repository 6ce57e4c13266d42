// src/errors.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParleyError {
    /// No usable bot reply could be obtained.
    #[error("delivery failure: {0}")]
    Delivery(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ParleyResult<T> = Result<T, ParleyError>;

impl ParleyError {
    pub fn delivery_error(msg: impl Into<String>) -> Self {
        ParleyError::Delivery(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        ParleyError::Config(msg.into())
    }

    pub fn logging_error(msg: impl Into<String>) -> Self {
        ParleyError::Logging(msg.into())
    }

    pub fn is_delivery(&self) -> bool {
        matches!(self, ParleyError::Delivery(_))
    }
}
