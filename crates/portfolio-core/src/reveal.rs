//! Scroll-triggered, fire-once reveal animations.
//!
//! Items are registered with the rows they occupy and a stagger timing. Each
//! observation asks a [`VisibilityProbe`] which items are on screen; an item
//! triggers the first time it is seen and stays triggered after that, even if
//! it later scrolls out and back in.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::trace;

/// Per-section animation constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerTiming {
    /// Delay added per list index.
    pub base_delay: Duration,
    /// Length of the reveal transition.
    pub duration: Duration,
}

impl StaggerTiming {
    /// Section headers.
    pub const HEADER: StaggerTiming = StaggerTiming::new(0, 600);
    /// Skill, about, stat and contact cards.
    pub const CARD: StaggerTiming = StaggerTiming::new(100, 600);
    /// Project and certification cards.
    pub const PROJECT_CARD: StaggerTiming = StaggerTiming::new(100, 500);
    /// Tag badges inside a card.
    pub const TAG: StaggerTiming = StaggerTiming::new(50, 300);

    /// Creates a timing from milliseconds.
    pub const fn new(base_delay_ms: u64, duration_ms: u64) -> Self {
        Self {
            base_delay: Duration::from_millis(base_delay_ms),
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// Start offset of the item at `index`.
    pub fn delay_for(&self, index: usize) -> Duration {
        self.base_delay * index as u32
    }

    /// Start offset in seconds, as used by CSS transition delays.
    pub fn delay_secs(&self, index: usize) -> f64 {
        self.delay_for(index).as_secs_f64()
    }
}

/// A vertical band of the scrolled document, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub top: u32,
    pub height: u32,
}

impl Span {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// First row past the span.
    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }
}

/// Answers whether a region is currently in view.
pub trait VisibilityProbe {
    /// Returns true if any part of `span` is visible.
    fn is_visible(&self, span: Span) -> bool;
}

/// A scroll window over the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible row.
    pub offset: u32,
    /// Number of visible rows.
    pub height: u32,
}

impl Viewport {
    pub fn new(offset: u32, height: u32) -> Self {
        Self { offset, height }
    }
}

impl VisibilityProbe for Viewport {
    fn is_visible(&self, span: Span) -> bool {
        let end = self.offset.saturating_add(self.height);
        span.height > 0 && span.top < end && span.bottom() > self.offset
    }
}

#[derive(Debug, Clone)]
struct RevealEntry {
    span: Span,
    timing: StaggerTiming,
    index: usize,
    triggered_at: Option<Instant>,
}

/// Tracks which items have revealed and how far along their animation is.
#[derive(Debug)]
pub struct RevealTracker<K> {
    entries: HashMap<K, RevealEntry>,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone + std::fmt::Debug> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an item or moves an existing one.
    ///
    /// Moving keeps the trigger state, so relayout never replays a reveal.
    pub fn register(&mut self, key: K, span: Span, timing: StaggerTiming, index: usize) {
        self.entries
            .entry(key)
            .and_modify(|e| {
                e.span = span;
                e.timing = timing;
                e.index = index;
            })
            .or_insert(RevealEntry {
                span,
                timing,
                index,
                triggered_at: None,
            });
    }

    /// Triggers every untriggered item the probe can see.
    ///
    /// Returns the keys triggered by this call.
    pub fn observe<P: VisibilityProbe + ?Sized>(&mut self, probe: &P, now: Instant) -> Vec<K> {
        let mut fired = Vec::new();
        for (key, entry) in self.entries.iter_mut() {
            if entry.triggered_at.is_none() && probe.is_visible(entry.span) {
                entry.triggered_at = Some(now);
                trace!(item = ?key, index = entry.index, "reveal triggered");
                fired.push(key.clone());
            }
        }
        fired
    }

    /// Whether the item has ever been seen.
    pub fn is_triggered(&self, key: &K) -> bool {
        self.entries
            .get(key)
            .is_some_and(|e| e.triggered_at.is_some())
    }

    /// Animation progress in `[0.0, 1.0]`; zero until triggered and delayed.
    pub fn progress(&self, key: &K, now: Instant) -> f32 {
        let Some(entry) = self.entries.get(key) else {
            return 0.0;
        };
        let Some(triggered_at) = entry.triggered_at else {
            return 0.0;
        };
        let start = triggered_at + entry.timing.delay_for(entry.index);
        if now <= start {
            return 0.0;
        }
        let duration = entry.timing.duration.as_secs_f32();
        if duration == 0.0 {
            return 1.0;
        }
        ((now - start).as_secs_f32() / duration).clamp(0.0, 1.0)
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every item `keep` rejects, along with its trigger state.
    ///
    /// An item registered again afterwards reveals as if new.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        self.entries.retain(|key, _| keep(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        for i in 0..8 {
            assert_eq!(
                StaggerTiming::CARD.delay_for(i),
                Duration::from_millis(100 * i as u64)
            );
            assert_eq!(
                StaggerTiming::TAG.delay_for(i),
                Duration::from_millis(50 * i as u64)
            );
        }
        assert!((StaggerTiming::CARD.delay_secs(3) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_viewport_visibility() {
        let viewport = Viewport::new(10, 5);

        assert!(viewport.is_visible(Span::new(12, 1)));
        assert!(viewport.is_visible(Span::new(8, 3)));
        assert!(viewport.is_visible(Span::new(14, 10)));
        assert!(!viewport.is_visible(Span::new(15, 2)));
        assert!(!viewport.is_visible(Span::new(5, 5)));
        assert!(!viewport.is_visible(Span::new(12, 0)));
    }

    #[test]
    fn test_reveal_fires_once() {
        let mut tracker = RevealTracker::new();
        tracker.register("card", Span::new(20, 4), StaggerTiming::CARD, 0);
        let now = Instant::now();

        assert!(tracker.observe(&Viewport::new(0, 10), now).is_empty());
        assert!(!tracker.is_triggered(&"card"));

        assert_eq!(tracker.observe(&Viewport::new(15, 10), now), vec!["card"]);
        // scroll away and back
        assert!(tracker.observe(&Viewport::new(0, 10), now).is_empty());
        assert!(tracker.observe(&Viewport::new(15, 10), now).is_empty());
        assert!(tracker.is_triggered(&"card"));
    }

    #[test]
    fn test_progress_respects_delay() {
        let mut tracker = RevealTracker::new();
        tracker.register(2usize, Span::new(0, 1), StaggerTiming::CARD, 2);
        let t0 = Instant::now();
        tracker.observe(&Viewport::new(0, 10), t0);

        assert_eq!(tracker.progress(&2, t0), 0.0);
        assert_eq!(tracker.progress(&2, t0 + Duration::from_millis(200)), 0.0);
        let mid = tracker.progress(&2, t0 + Duration::from_millis(500));
        assert!((mid - 0.5).abs() < 1e-3);
        assert_eq!(tracker.progress(&2, t0 + Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn test_register_moves_without_retrigger() {
        let mut tracker = RevealTracker::new();
        let now = Instant::now();
        tracker.register("a", Span::new(0, 2), StaggerTiming::HEADER, 0);
        tracker.observe(&Viewport::new(0, 5), now);

        tracker.register("a", Span::new(50, 2), StaggerTiming::HEADER, 0);
        assert!(tracker.is_triggered(&"a"));
        assert!(tracker.observe(&Viewport::new(48, 5), now).is_empty());
    }

    #[test]
    fn test_unknown_item_has_no_progress() {
        let tracker: RevealTracker<&str> = RevealTracker::new();
        assert_eq!(tracker.progress(&"missing", Instant::now()), 0.0);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_retain_drops_items_and_trigger_state() {
        let mut tracker = RevealTracker::new();
        let now = Instant::now();
        tracker.register("kept", Span::new(0, 2), StaggerTiming::CARD, 0);
        tracker.register("gone", Span::new(2, 2), StaggerTiming::CARD, 1);
        tracker.observe(&Viewport::new(0, 10), now);

        tracker.retain(|key| *key == "kept");
        assert_eq!(tracker.len(), 1);
        assert!(tracker.is_triggered(&"kept"));

        // a dropped item never fires while absent
        assert!(tracker.observe(&Viewport::new(0, 10), now).is_empty());

        // and reveals afresh once registered again
        tracker.register("gone", Span::new(2, 2), StaggerTiming::CARD, 1);
        assert!(!tracker.is_triggered(&"gone"));
        assert_eq!(tracker.observe(&Viewport::new(0, 10), now), vec!["gone"]);
    }
}
