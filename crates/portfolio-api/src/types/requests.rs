//! Query and body types for the API.

use serde::Deserialize;

/// Largest `frames` value `/api/scene` accepts (one minute at 60 fps).
pub const MAX_SCENE_FRAMES: u64 = 3600;

/// Particles included in a scene snapshot when `sample` is absent.
pub const DEFAULT_SCENE_SAMPLE: usize = 32;

/// Largest `sample` value accepted.
pub const MAX_SCENE_SAMPLE: usize = 2000;

/// Seed used by `/api/scene` when none is given.
pub const DEFAULT_SCENE_SEED: u64 = 2025;

/// Query of the page route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// `all` expands the projects list.
    pub projects: Option<String>,
}

impl PageQuery {
    /// Whether the expanded projects list was asked for.
    pub fn is_expanded(&self) -> bool {
        self.projects.as_deref() == Some("all")
    }
}

/// Query of the projects endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectsQuery {
    #[serde(default)]
    pub expanded: bool,
}

/// Query of the deterministic scene endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneQuery {
    /// Frames to advance from the start.
    pub frames: Option<u64>,
    /// Particle field seed.
    pub seed: Option<u64>,
    /// Particles to include in the response.
    pub sample: Option<usize>,
}

/// Query of the live scene endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SampleQuery {
    pub sample: Option<usize>,
}

/// Resolves a `sample` parameter, rejecting values above [`MAX_SCENE_SAMPLE`].
pub fn resolve_sample(sample: Option<usize>) -> Result<usize, String> {
    match sample {
        None => Ok(DEFAULT_SCENE_SAMPLE),
        Some(n) if n > MAX_SCENE_SAMPLE => Err(format!(
            "sample must be at most {}, got {}",
            MAX_SCENE_SAMPLE, n
        )),
        Some(n) => Ok(n),
    }
}
