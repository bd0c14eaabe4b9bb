//! Error handling for the fitrank engine
//!
//! The scoring core itself is total: malformed or absent optional input
//! degrades to documented defaults and never surfaces here. Errors exist
//! only at the boundaries (config files, JSON input, CLI arguments).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitRankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FitRankError>;
