//! Server-side page rendering with handlebars templates.

use handlebars::Handlebars;
use thiserror::Error;
use tracing::debug;

use crate::view::PageView;

const PAGE_TEMPLATE: &str = "page";

const PAGE_SRC: &str = include_str!("../templates/page.hbs");
const SECTION_HEADER_SRC: &str = include_str!("../templates/section_header.hbs");
const PROJECT_CARD_SRC: &str = include_str!("../templates/project_card.hbs");
const STYLE_SRC: &str = include_str!("../templates/style.hbs");
const SCRIPT_SRC: &str = include_str!("../templates/script.hbs");

/// Template failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template failed to parse.
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Rendering failed.
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Renders the full page from a [`PageView`].
#[derive(Debug)]
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    /// Compiles the embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.register_partial("section_header", SECTION_HEADER_SRC)?;
        registry.register_partial("project_card", PROJECT_CARD_SRC)?;
        registry.register_partial("style", STYLE_SRC)?;
        registry.register_partial("script", SCRIPT_SRC)?;
        registry.register_template_string(PAGE_TEMPLATE, PAGE_SRC)?;
        debug!("page templates compiled");
        Ok(Self { registry })
    }

    /// Renders the page as a complete HTML document.
    pub fn render(&self, view: &PageView<'_>) -> Result<String, RenderError> {
        Ok(self.registry.render(PAGE_TEMPLATE, view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::PageViewBuilder;
    use portfolio_core::contact::{ContactFields, Notification};
    use portfolio_core::Catalogue;

    fn render(builder: PageViewBuilder<'_>) -> String {
        PageRenderer::new().unwrap().render(&builder.build()).unwrap()
    }

    #[test]
    fn test_render_contains_every_anchor() {
        let html = render(PageViewBuilder::new(Catalogue::canonical()));

        for anchor in ["home", "about", "skills", "certifications", "projects", "contact"] {
            assert!(html.contains(&format!("id=\"{}\"", anchor)), "missing #{}", anchor);
        }
    }

    #[test]
    fn test_render_project_cards() {
        let collapsed = render(PageViewBuilder::new(Catalogue::canonical()));
        let expanded = render(PageViewBuilder::new(Catalogue::canonical()).expanded(true));

        assert_eq!(collapsed.matches("class=\"project-card reveal\"").count(), 3);
        assert_eq!(expanded.matches("class=\"project-card reveal\"").count(), 7);
        assert!(collapsed.contains("View All Projects"));
        assert!(expanded.contains("View Less Projects"));
    }

    #[test]
    fn test_render_escapes_and_prefills_form() {
        let fields = ContactFields::new("<Jane>", "jane@example.com", "Hi", "Body");
        let html = render(PageViewBuilder::new(Catalogue::canonical()).fields(fields));

        assert!(html.contains("value=\"&lt;Jane&gt;\""));
        assert!(!html.contains("<Jane>"));
    }

    #[test]
    fn test_render_notification() {
        let html = render(
            PageViewBuilder::new(Catalogue::canonical()).notification(Notification::sent()),
        );

        assert!(html.contains("Message sent!"));
        assert!(html.contains("get back to you soon."));
    }

    #[test]
    fn test_render_stagger_delays() {
        let html = render(PageViewBuilder::new(Catalogue::canonical()));
        assert!(html.contains("transition-delay: 0.20s"));
        assert!(html.contains("transition-duration: 0.60s"));
    }

    #[test]
    fn test_render_outbound_links_open_new_context() {
        let html = render(PageViewBuilder::new(Catalogue::canonical()));
        assert!(html.contains(
            "href=\"https://www.linkedin.com/in/akash-kumarnayak\" target=\"_blank\" rel=\"noopener noreferrer\""
        ));
        assert!(html.contains("href=\"mailto:akashsiku2004@gmail.com\""));
    }
}
