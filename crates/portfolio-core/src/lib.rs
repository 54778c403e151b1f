//! Portfolio Core - behavior shared by the web service and the terminal app.
//!
//! - **catalogue**: The literal content of every page section
//! - **config**: State directory layout and environment settings
//! - **contact**: Contact form state machine and delivery transports
//! - **expansion**: Collapsible "show more" lists
//! - **reveal**: Fire-once, staggered reveal-on-scroll tracking
//! - **scene**: Decorative procedural scenes and their frame loop

pub mod catalogue;
pub mod config;
pub mod contact;
pub mod error;
pub mod expansion;
pub mod reveal;
pub mod scene;

pub use catalogue::Catalogue;
pub use config::{
    config_dir, env_file, load_env, logs_dir, state_dir, PortfolioConfig,
};
pub use contact::{
    transport_from_config, ContactFields, ContactForm, ContactTransport, FormError, FormField,
    FormState, Notification, NotificationKind, Receipt, SimulatedTransport, TransportError,
    WebhookTransport,
};
pub use error::{CoreError, Result};
pub use expansion::{ExpandableList, PROJECTS_COLLAPSED};
pub use reveal::{RevealTracker, Span, StaggerTiming, Viewport, VisibilityProbe};
pub use scene::{Animate, SceneLoop, SceneSnapshot, Showcase};

// Record types, so callers need only one import.
pub use portfolio_models as models;
