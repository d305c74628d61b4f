use thiserror::Error;

use crate::lookup::LookupError;

/// Custom error types for kb-client
#[derive(Debug, Error)]
pub enum KbError {
    #[error("Invalid config file: {0}")]
    Config(String),

    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
