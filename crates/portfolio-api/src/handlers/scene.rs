//! Procedural scene snapshots.

use axum::{
    extract::{Query, State},
    Json,
};

use portfolio_core::{SceneSnapshot, Showcase};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{
    resolve_sample, SampleQuery, SceneQuery, DEFAULT_SCENE_SEED, MAX_SCENE_FRAMES,
};

/// GET /api/scene - Snapshot of a fresh scene after `frames` frames.
///
/// The same `seed` and `frames` always produce the same snapshot.
pub async fn scene(Query(query): Query<SceneQuery>) -> Result<Json<SceneSnapshot>> {
    let frames = query.frames.unwrap_or(0);
    if frames > MAX_SCENE_FRAMES {
        return Err(ApiError::BadRequest(format!(
            "frames must be at most {}, got {}",
            MAX_SCENE_FRAMES, frames
        )));
    }
    let sample = resolve_sample(query.sample).map_err(ApiError::BadRequest)?;

    let seed = query.seed.unwrap_or(DEFAULT_SCENE_SEED);

    // thousands of frames over the full particle field
    let snapshot = tokio::task::spawn_blocking(move || {
        let mut showcase = Showcase::new(seed);
        showcase.run_frames(frames);
        showcase.snapshot(sample)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("scene task failed: {}", e)))?;
    Ok(Json(snapshot))
}

/// GET /api/scene/live - Current state of the server's running scene.
pub async fn live_scene(
    State(state): State<AppState>,
    Query(query): Query<SampleQuery>,
) -> Result<Json<SceneSnapshot>> {
    let sample = resolve_sample(query.sample).map_err(ApiError::BadRequest)?;
    let snapshot = state.scene.read().await.snapshot(sample);
    Ok(Json(snapshot))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::make_test_state;

    #[tokio::test]
    async fn test_scene_is_deterministic() {
        let query = || SceneQuery {
            frames: Some(30),
            seed: Some(11),
            sample: Some(4),
        };
        let Json(a) = scene(Query(query())).await.unwrap();
        let Json(b) = scene(Query(query())).await.unwrap();

        assert_eq!(a.frames, 30);
        assert_eq!(a.particles, b.particles);
        assert_eq!(a.particles.len(), 4);
    }

    #[tokio::test]
    async fn test_scene_at_frame_limit() {
        let Json(snapshot) = scene(Query(SceneQuery {
            frames: Some(MAX_SCENE_FRAMES),
            seed: Some(3),
            sample: Some(1),
        }))
        .await
        .unwrap();

        assert_eq!(snapshot.frames, MAX_SCENE_FRAMES);
    }

    #[tokio::test]
    async fn test_scene_rejects_too_many_frames() {
        let err = scene(Query(SceneQuery {
            frames: Some(MAX_SCENE_FRAMES + 1),
            ..SceneQuery::default()
        }))
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_live_scene_reads_shared_state() {
        let state = make_test_state();
        state.scene.write().await.run_frames(5);

        let Json(snapshot) = live_scene(State(state), Query(SampleQuery::default()))
            .await
            .unwrap();

        assert_eq!(snapshot.frames, 5);
        assert_eq!(snapshot.particle_count, 64);
    }
}
