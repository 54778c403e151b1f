//! Non-interactive commands: the web server and the static export.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use portfolio_api::{serve, ApiConfig, AppState, PageRenderer, PageViewBuilder};
use portfolio_core::{transport_from_config, Catalogue, PortfolioConfig};

use crate::error::{CliError, Result};

/// Flag overrides for `serve`.
#[derive(Debug, Clone, Default)]
pub struct ServeOptions {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub assets: Option<PathBuf>,
    pub cors_origins: Vec<String>,
}

impl ServeOptions {
    /// Applies the flags on top of the environment settings.
    pub fn apply(&self, mut config: PortfolioConfig) -> PortfolioConfig {
        if self.host.is_some() || self.port.is_some() {
            let host = self.host.clone().unwrap_or(config.host.clone());
            let port = self.port.unwrap_or(config.port);
            config = config.with_bind(host, port);
        }
        if let Some(dir) = &self.assets {
            config = config.with_asset_dir(dir.clone());
        }
        config
    }
}

/// Runs the web server until Ctrl-C.
pub fn run_serve(options: ServeOptions) -> Result<()> {
    let config = options.apply(PortfolioConfig::from_env()?);
    let transport = transport_from_config(&config)?;

    let mut api_config = ApiConfig::from_portfolio(&config);
    if !options.cors_origins.is_empty() {
        api_config = api_config.with_cors_origins(options.cors_origins);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let state = AppState::new(api_config, transport)?;
        serve(state).await?;
        Ok::<(), CliError>(())
    })
}

/// Renders the page to a string.
pub fn render_page(all_projects: bool) -> Result<String> {
    let renderer = PageRenderer::new()?;
    let view = PageViewBuilder::new(Catalogue::canonical())
        .expanded(all_projects)
        .build();
    Ok(renderer.render(&view)?)
}

/// Writes the page to `out`, or stdout when `None`.
pub fn run_render(out: Option<&Path>, all_projects: bool) -> Result<()> {
    let html = render_page(all_projects)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &html)?;
            info!(path = %path.display(), bytes = html.len(), "page rendered");
            println!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}
