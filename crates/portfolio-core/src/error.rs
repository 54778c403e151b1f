//! Error types for the core crate.

use thiserror::Error;

use crate::contact::{FormError, TransportError};

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),

    /// Contact form rejected a submission.
    #[error("form error: {0}")]
    Form(#[from] FormError),

    /// Contact transport failed to deliver.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
