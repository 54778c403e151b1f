//! Terminal viewer for the portfolio.
//!
//! Renders the page as one scrolled column:
//! - Navigation bar with the current section highlighted
//! - Sections that reveal with a slide-in the first time they scroll into view
//! - Live particle field and analytics bars, advanced every tick
//! - Expandable projects list and an editable contact form
//! - Status line with the latest notification

mod app;
mod events;
mod input;
mod layout;
mod scene;
mod scroll;
mod ui;

pub use app::{App, Focus};
pub use events::{handle_key, run, TuiOptions};
pub use layout::{ItemKey, PageLayout, Placed};
