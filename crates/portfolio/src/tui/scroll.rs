//! Scrolling the page.

use super::App;

impl App {
    /// Largest scroll offset that still fills the view.
    pub fn max_scroll(&self) -> u32 {
        self.layout.height().saturating_sub(self.viewport_height)
    }

    pub(super) fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Scroll up by one line.
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        self.scroll_offset = (self.scroll_offset + 1).min(self.max_scroll());
    }

    /// Scroll up by a page.
    pub fn scroll_page_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(self.page_size());
    }

    /// Scroll down by a page.
    pub fn scroll_page_down(&mut self) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(self.page_size())
            .min(self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.max_scroll();
    }

    fn page_size(&self) -> u32 {
        self.viewport_height.saturating_sub(2).max(1)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use portfolio_core::{Showcase, SimulatedTransport};
    use tokio::runtime::Handle;

    use super::App;

    #[tokio::test]
    async fn test_scroll_is_clamped() {
        let mut app = App::new(
            Arc::new(SimulatedTransport::new(Duration::ZERO)),
            Handle::current(),
            Showcase::with_particles(4, 1),
        );
        app.viewport_height = 20;

        app.scroll_up();
        assert_eq!(app.scroll_offset, 0);

        app.scroll_to_bottom();
        assert_eq!(app.scroll_offset, app.layout.height() - 20);
        app.scroll_down();
        app.scroll_page_down();
        assert_eq!(app.scroll_offset, app.max_scroll());

        app.scroll_page_up();
        assert_eq!(app.scroll_offset, app.max_scroll() - 18);
    }
}
