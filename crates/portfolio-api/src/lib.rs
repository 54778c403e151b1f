//! HTTP service for the portfolio site.
//!
//! - Server-rendered page at `/`, with the contact form posting to `/contact`
//! - JSON catalogue endpoints under `/api/`
//! - Contact submission (`POST /api/contact`)
//! - Procedural scene snapshots, deterministic and live
//! - Static assets (resumes, images) for any other path
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use portfolio_api::{serve, ApiConfig, AppState};
//! use portfolio_core::SimulatedTransport;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = Arc::new(SimulatedTransport::new(Duration::from_secs(1)));
//!     let state = AppState::new(ApiConfig::default(), transport)?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod state;
pub mod types;
pub mod view;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use render::{PageRenderer, RenderError};
pub use router::{create_router, serve};
pub use state::AppState;
pub use view::{PageView, PageViewBuilder};
