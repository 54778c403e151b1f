//! HTTP service configuration.

use std::path::PathBuf;
use std::time::Instant;

use portfolio_core::PortfolioConfig;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Directory served for paths no route matches.
    pub asset_dir: PathBuf,
    /// Allowed CORS origins. `*` allows any.
    pub cors_origins: Vec<String>,
    /// Seed of the live background scene.
    pub scene_seed: u64,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl ApiConfig {
    /// Creates a configuration with the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Takes bind address and asset directory from the shared settings.
    pub fn from_portfolio(config: &PortfolioConfig) -> Self {
        Self::new(config.host.clone(), config.port).with_asset_dir(config.asset_dir.clone())
    }

    /// Sets the asset directory.
    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Sets the CORS origins.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Sets the live scene seed.
    pub fn with_scene_seed(mut self, seed: u64) -> Self {
        self.scene_seed = seed;
        self
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether any origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8765,
            asset_dir: PathBuf::from("public"),
            cors_origins: vec!["*".to_string()],
            scene_seed: 2025,
            start_time: Instant::now(),
        }
    }
}
