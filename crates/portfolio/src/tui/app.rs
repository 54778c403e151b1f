//! TUI application state and logic.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;
use tracing::{debug, info};

use portfolio_core::contact::{
    ContactForm, ContactTransport, FormField, Notification, Receipt, TransportError,
};
use portfolio_core::{
    Animate, Catalogue, ExpandableList, RevealTracker, Showcase, Viewport, PROJECTS_COLLAPSED,
};
use portfolio_models::{Project, SectionId};

use super::layout::{ItemKey, PageLayout};

/// Where key presses go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Scrolling and section navigation.
    #[default]
    Page,
    /// Editing a contact form input.
    Form(FormField),
}

/// Outcome of a delivery task.
pub(super) type Delivery = Result<Receipt, TransportError>;

/// TUI application state.
pub struct App {
    /// Page content.
    pub catalogue: &'static Catalogue,
    /// Projects list and its expansion state.
    pub projects: ExpandableList<&'static Project>,
    /// Rows of every block for the current expansion state.
    pub layout: PageLayout,
    /// Fire-once reveal state of every block.
    pub reveal: RevealTracker<ItemKey>,

    // Scrolling
    /// First visible document row.
    pub scroll_offset: u32,
    /// Rows of the document area, set on each draw.
    pub viewport_height: u32,

    // Contact form
    pub focus: Focus,
    pub form: ContactForm,
    /// Cursor position in the focused input, in chars.
    pub cursor_pos: usize,
    /// One-line feedback under the document.
    pub status: Option<String>,

    /// Background scene, advanced on every tick.
    pub showcase: Showcase,

    /// Whether the app should quit.
    pub should_quit: bool,

    pub(super) started: Instant,
    pub(super) transport: Arc<dyn ContactTransport>,
    pub(super) runtime: Handle,
    /// Receiver for the in-flight delivery, if any.
    pub(super) delivery_rx: Option<mpsc::Receiver<Delivery>>,
}

impl App {
    /// Creates the app. `runtime` runs contact deliveries.
    pub fn new(transport: Arc<dyn ContactTransport>, runtime: Handle, showcase: Showcase) -> Self {
        let catalogue = Catalogue::canonical();
        let projects = ExpandableList::new(catalogue.projects.iter().collect(), PROJECTS_COLLAPSED);

        let mut app = Self {
            catalogue,
            layout: PageLayout::default(),
            projects,
            reveal: RevealTracker::new(),
            scroll_offset: 0,
            viewport_height: 0,
            focus: Focus::Page,
            form: ContactForm::new(),
            cursor_pos: 0,
            status: None,
            showcase,
            should_quit: false,
            started: Instant::now(),
            transport,
            runtime,
            delivery_rx: None,
        };
        app.relayout();
        app
    }

    /// Rebuilds the layout and moves reveal entries to their new rows.
    ///
    /// Blocks that left the page lose their reveal state, so they never fire
    /// while hidden and animate again when they come back.
    pub fn relayout(&mut self) {
        self.layout = PageLayout::build(self.catalogue, &self.projects);
        for item in self.layout.items() {
            self.reveal
                .register(item.key, item.span, item.timing, item.index);
        }
        let layout = &self.layout;
        self.reveal.retain(|key| layout.get(*key).is_some());
        self.clamp_scroll();
    }

    /// Flips the projects list between collapsed and expanded.
    pub fn toggle_projects(&mut self) {
        self.projects.toggle();
        debug!(expanded = self.projects.is_expanded(), "projects toggled");
        self.relayout();
    }

    /// Scrolls so the section starts at the top of the view.
    pub fn jump_to(&mut self, section: SectionId) {
        self.scroll_offset = self.layout.section_top(section);
        self.clamp_scroll();
    }

    /// Section at the top of the view.
    pub fn current_section(&self) -> SectionId {
        self.layout.section_at(self.scroll_offset)
    }

    /// Current scroll window.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll_offset, self.viewport_height)
    }

    /// Latest notification, if any.
    pub fn latest_notification(&self) -> Option<&Notification> {
        self.form.notifications().latest()
    }

    /// Per-tick work: advance the scene, apply a finished delivery, fire
    /// reveals for whatever is on screen.
    pub fn on_tick(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        self.showcase.advance(elapsed);

        self.poll_delivery();

        let fired = self.reveal.observe(&self.viewport(), now);
        if !fired.is_empty() {
            debug!(count = fired.len(), "blocks revealed");
        }
    }

    /// Applies the delivery result once the task reports back.
    pub(super) fn poll_delivery(&mut self) {
        let Some(rx) = &self.delivery_rx else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => Err(TransportError::Network(
                "delivery task ended without a result".to_string(),
            )),
        };
        self.delivery_rx = None;

        if let Some(notification) = self.form.complete(outcome) {
            info!(success = notification.is_success(), "contact form completed");
            self.status = Some(format!(
                "{} {}",
                notification.title, notification.description
            ));
        }
        self.cursor_pos = self.cursor_pos.min(self.focused_len());
    }

    /// Length of the focused input in chars, zero outside the form.
    pub(super) fn focused_len(&self) -> usize {
        match self.focus {
            Focus::Form(field) => self.form.field(field).chars().count(),
            Focus::Page => 0,
        }
    }

    /// Reveal progress of a block in `[0.0, 1.0]`.
    pub fn reveal_progress(&self, key: ItemKey, now: Instant) -> f32 {
        self.reveal.progress(&key, now)
    }
}
