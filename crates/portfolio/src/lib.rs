//! Portfolio command-line library.
//!
//! Entry points behind the `portfolio` binary: the web server, the static
//! HTML export and the terminal viewer.

pub mod cli;
pub mod commands;
pub mod error;
pub mod tui;

use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::Result;

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// With `log_dir` set, logs are appended to `portfolio.log` there instead of
/// going to stderr, which the terminal viewer owns.
pub fn init_tracing(default_level: &str, log_dir: Option<&Path>) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join("portfolio.log"))?;
            fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
        None => {
            fmt().with_env_filter(filter).with_target(false).init();
        }
    }
    Ok(())
}
