//! Error types for the Arabic shaper
//!
//! Shaping itself never fails. Errors only come from loading and saving
//! configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaperError {
    #[error("Invalid shaper config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShaperError>;
