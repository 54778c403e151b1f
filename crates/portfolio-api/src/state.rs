//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use portfolio_core::{Catalogue, ContactTransport, ExpandableList, Showcase, PROJECTS_COLLAPSED};
use portfolio_models::Project;

use crate::config::ApiConfig;
use crate::render::{PageRenderer, RenderError};
use crate::view::PageView;

/// Application state shared across all handlers.
///
/// Nothing here is per-visitor: expansion and form contents arrive with each
/// request. The only mutable part is the live scene, written by its frame loop.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Page content.
    pub catalogue: &'static Catalogue,
    /// Compiled page templates.
    pub renderer: Arc<PageRenderer>,
    /// Delivery of contact messages.
    pub transport: Arc<dyn ContactTransport>,
    /// Background scene advanced by the server's frame loop.
    pub scene: Arc<RwLock<Showcase>>,
}

impl AppState {
    /// Creates the state, compiling the page templates.
    pub fn new(
        config: ApiConfig,
        transport: Arc<dyn ContactTransport>,
    ) -> Result<Self, RenderError> {
        let scene = Showcase::new(config.scene_seed);
        Ok(Self {
            config: Arc::new(config),
            catalogue: Catalogue::canonical(),
            renderer: Arc::new(PageRenderer::new()?),
            transport,
            scene: Arc::new(RwLock::new(scene)),
        })
    }

    /// Replaces the live scene, e.g. with a smaller one in tests.
    pub fn with_scene(mut self, scene: Showcase) -> Self {
        self.scene = Arc::new(RwLock::new(scene));
        self
    }

    /// The projects list in the given expansion state.
    pub fn projects(&self, expanded: bool) -> ExpandableList<&'static Project> {
        ExpandableList::new(self.catalogue.projects.iter().collect(), PROJECTS_COLLAPSED)
            .with_expanded(expanded)
    }

    /// Renders a page view to HTML.
    pub fn render(&self, view: &PageView<'_>) -> Result<String, RenderError> {
        self.renderer.render(view)
    }
}
