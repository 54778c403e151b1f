//! Errors surfaced by the command-line entry points.

use thiserror::Error;

use portfolio_api::RenderError;
use portfolio_core::CoreError;

/// Result type for commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Settings or transport setup failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Page templates failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal could not be driven.
    #[error("terminal error: {0}")]
    Terminal(String),
}
