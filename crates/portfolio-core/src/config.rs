//! Shared configuration for the portfolio.
//!
//! Provides the state directory layout and the environment-driven settings
//! used by both the web service and the terminal app.
//!
//! # Storage Structure
//!
//! ```text
//! ~/.portfolio/
//! ├── logs/         # Terminal-mode log files
//! └── config/       # .env.local with local overrides
//! ```
//!
//! # Environment Variables
//!
//! - `PORTFOLIO_STATE_DIR`: Override the base state directory
//! - `PORTFOLIO_HOST` / `PORTFOLIO_PORT`: Bind address of the web service
//! - `PORTFOLIO_ASSET_DIR`: Directory served at the site root (resumes, images)
//! - `PORTFOLIO_SUBMIT_DELAY_MS`: Simulated contact submission delay
//! - `PORTFOLIO_CONTACT_WEBHOOK`: Deliver contact messages to this URL instead
//! - `PORTFOLIO_WEBHOOK_TIMEOUT_MS`: Timeout for webhook delivery

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::{CoreError, Result};

/// Environment variable for custom state directory.
pub const STATE_DIR_ENV: &str = "PORTFOLIO_STATE_DIR";
/// Environment variable for the bind host.
pub const HOST_ENV: &str = "PORTFOLIO_HOST";
/// Environment variable for the bind port.
pub const PORT_ENV: &str = "PORTFOLIO_PORT";
/// Environment variable for the static asset directory.
pub const ASSET_DIR_ENV: &str = "PORTFOLIO_ASSET_DIR";
/// Environment variable for the simulated submission delay.
pub const SUBMIT_DELAY_ENV: &str = "PORTFOLIO_SUBMIT_DELAY_MS";
/// Environment variable for the contact webhook URL.
pub const WEBHOOK_ENV: &str = "PORTFOLIO_CONTACT_WEBHOOK";
/// Environment variable for the webhook timeout.
pub const WEBHOOK_TIMEOUT_ENV: &str = "PORTFOLIO_WEBHOOK_TIMEOUT_MS";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".portfolio";

const LOGS_SUBDIR: &str = "logs";
const CONFIG_SUBDIR: &str = "config";

/// Simulated delay between submit and reset of the contact form.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);
/// Default webhook timeout.
pub const DEFAULT_WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

static STATE_DIR_CACHE: OnceLock<PathBuf> = OnceLock::new();

/// Get the portfolio state directory.
///
/// Resolved from `PORTFOLIO_STATE_DIR`, then `~/.portfolio`, then
/// `.portfolio` in the current directory.
pub fn state_dir() -> PathBuf {
    STATE_DIR_CACHE
        .get_or_init(|| {
            std::env::var(STATE_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    dirs::home_dir()
                        .map(|h| h.join(DEFAULT_STATE_DIR))
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
                })
        })
        .clone()
}

/// Get the logs directory under `state_dir`.
pub fn logs_dir(state_dir: &Path) -> PathBuf {
    state_dir.join(LOGS_SUBDIR)
}

/// Get the user config directory.
pub fn config_dir() -> PathBuf {
    state_dir().join(CONFIG_SUBDIR)
}

/// Get the .env.local file path inside the config directory.
pub fn env_file() -> PathBuf {
    config_dir().join(".env.local")
}

/// Load environment files.
///
/// The config directory's `.env.local` is read first, then `.env.local` and
/// `.env` in the working directory. Variables already set are never
/// overwritten.
pub fn load_env() {
    let env_path = env_file();
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    }
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());
}

/// Runtime settings shared by both interfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioConfig {
    /// Host the web service binds to.
    pub host: String,
    /// Port the web service binds to.
    pub port: u16,
    /// Directory served at the site root.
    pub asset_dir: PathBuf,
    /// Simulated contact submission delay.
    pub submit_delay: Duration,
    /// Webhook that receives contact messages, if any.
    pub webhook_url: Option<Url>,
    /// Timeout applied to webhook delivery.
    pub webhook_timeout: Duration,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8765,
            asset_dir: PathBuf::from("public"),
            submit_delay: DEFAULT_SUBMIT_DELAY,
            webhook_url: None,
            webhook_timeout: DEFAULT_WEBHOOK_TIMEOUT,
        }
    }
}

impl PortfolioConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the config from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the config through an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults; set but malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_ENV) {
            config.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            config.port = parse_var(PORT_ENV, &port)?;
        }
        if let Some(dir) = lookup(ASSET_DIR_ENV) {
            config.asset_dir = PathBuf::from(dir);
        }
        if let Some(ms) = lookup(SUBMIT_DELAY_ENV) {
            config.submit_delay = Duration::from_millis(parse_var(SUBMIT_DELAY_ENV, &ms)?);
        }
        if let Some(raw) = lookup(WEBHOOK_ENV).filter(|v| !v.trim().is_empty()) {
            let url = Url::parse(raw.trim())
                .map_err(|e| CoreError::Config(format!("{}: {}", WEBHOOK_ENV, e)))?;
            config.webhook_url = Some(url);
        }
        if let Some(ms) = lookup(WEBHOOK_TIMEOUT_ENV) {
            config.webhook_timeout =
                Duration::from_millis(parse_var(WEBHOOK_TIMEOUT_ENV, &ms)?);
        }

        debug!(
            host = %config.host,
            port = config.port,
            asset_dir = %config.asset_dir.display(),
            webhook = config.webhook_url.is_some(),
            "loaded portfolio config"
        );
        Ok(config)
    }

    /// Sets the bind host and port.
    pub fn with_bind(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Sets the asset directory.
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Sets the simulated submission delay.
    pub fn with_submit_delay(mut self, delay: Duration) -> Self {
        self.submit_delay = delay;
        self
    }

    /// Sets the contact webhook.
    pub fn with_webhook(mut self, url: Url) -> Self {
        self.webhook_url = Some(url);
        self
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| CoreError::Config(format!("{}={:?}: {}", name, raw, e)))
}
