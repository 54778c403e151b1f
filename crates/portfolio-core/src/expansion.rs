//! Expandable "show more" lists.
//!
//! A list shows a prefix of its items while collapsed and every item while
//! expanded. Toggling only flips the expansion flag; item order never changes.

use serde::Serialize;

/// Number of projects shown while the projects list is collapsed.
pub const PROJECTS_COLLAPSED: usize = 3;

/// Toggle label while collapsed.
pub const SHOW_MORE_LABEL: &str = "View All Projects";
/// Toggle label while expanded.
pub const SHOW_LESS_LABEL: &str = "View Less Projects";

/// An ordered list with a collapsed prefix view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandableList<T> {
    items: Vec<T>,
    threshold: usize,
    expanded: bool,
}

impl<T> ExpandableList<T> {
    /// Creates a collapsed list showing at most `threshold` items.
    pub fn new(items: Vec<T>, threshold: usize) -> Self {
        Self {
            items,
            threshold,
            expanded: false,
        }
    }

    /// Sets the initial expansion state.
    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Flips the expansion state.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Whether every item is shown.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Collapsed prefix length.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// All items regardless of state.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The items currently shown, always a prefix of [`items`](Self::items).
    pub fn visible(&self) -> &[T] {
        if self.expanded {
            &self.items
        } else {
            &self.items[..self.items.len().min(self.threshold)]
        }
    }

    /// How many items the current view leaves out.
    pub fn hidden_count(&self) -> usize {
        self.items.len() - self.visible().len()
    }

    /// Whether toggling changes what is shown.
    pub fn can_expand(&self) -> bool {
        self.items.len() > self.threshold
    }

    /// Text of the toggle control.
    pub fn toggle_label(&self) -> &'static str {
        if self.expanded {
            SHOW_LESS_LABEL
        } else {
            SHOW_MORE_LABEL
        }
    }
}
