//! API request handlers.

pub mod catalogue;
pub mod contact;
pub mod health;
pub mod page;
pub mod scene;

pub use catalogue::*;
pub use contact::*;
pub use health::*;
pub use page::*;
pub use scene::*;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;
    use std::time::Duration;

    use portfolio_core::{Showcase, SimulatedTransport};

    use crate::config::ApiConfig;
    use crate::state::AppState;

    pub fn make_test_state() -> AppState {
        AppState::new(
            ApiConfig::default(),
            Arc::new(SimulatedTransport::new(Duration::ZERO)),
        )
        .unwrap()
        .with_scene(Showcase::with_particles(64, 7))
    }
}
