//! Frame loop for a shared scene.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::time::{interval, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use super::{Animate, FRAME_RATE};

/// Advances a scene once per tick until shutdown.
pub struct SceneLoop<S> {
    scene: Arc<RwLock<S>>,
    frame_interval: Duration,
    shutdown: watch::Receiver<bool>,
}

impl<S: Animate + Send + Sync> SceneLoop<S> {
    /// Creates a loop ticking at [`FRAME_RATE`].
    pub fn new(scene: Arc<RwLock<S>>, shutdown: watch::Receiver<bool>) -> Self {
        Self {
            scene,
            frame_interval: Duration::from_secs(1) / FRAME_RATE,
            shutdown,
        }
    }

    /// Sets the tick interval.
    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// Runs until the shutdown signal turns true. Returns the frames advanced.
    pub async fn run(mut self) -> u64 {
        let mut ticker = interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let start = Instant::now();
        let mut frames = 0u64;

        debug!(
            frame_interval_ms = self.frame_interval.as_millis() as u64,
            "starting scene loop"
        );

        if *self.shutdown.borrow() {
            debug!("scene loop stopped before first frame");
            return frames;
        }

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let elapsed = start.elapsed().as_secs_f64();
                    self.scene.write().await.advance(elapsed);
                    frames += 1;
                    trace!(frames, elapsed, "scene frame");
                }
                changed = self.shutdown.changed() => {
                    if changed.is_err() || *self.shutdown.borrow() {
                        debug!("scene loop received shutdown signal");
                        break;
                    }
                }
            }
        }

        debug!(frames, "scene loop stopped");
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::HeroScene;

    #[tokio::test(start_paused = true)]
    async fn test_scene_loop_advances_until_shutdown() {
        let scene = Arc::new(RwLock::new(HeroScene::with_particles(8, 3)));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let scene_loop = SceneLoop::new(Arc::clone(&scene), shutdown_rx)
            .with_frame_interval(Duration::from_millis(10));
        let handle = tokio::spawn(scene_loop.run());

        tokio::time::sleep(Duration::from_millis(105)).await;
        shutdown_tx.send(true).unwrap();

        let frames = tokio::time::timeout(Duration::from_millis(100), handle)
            .await
            .expect("loop should stop after shutdown")
            .unwrap();

        assert!(frames >= 10, "frames = {}", frames);
        let scene = scene.read().await;
        assert_eq!(scene.frames(), frames);
        assert!(scene.elapsed() > 0.0);
        assert!((scene.sphere.rotation_y - scene.elapsed() * 0.3).abs() < 1e-9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scene_loop_stops_when_sender_dropped() {
        let scene = Arc::new(RwLock::new(HeroScene::with_particles(1, 0)));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = tokio::spawn(SceneLoop::new(scene, shutdown_rx).run());

        drop(shutdown_tx);

        let result = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_scene_loop_already_shut_down() {
        let scene = Arc::new(RwLock::new(HeroScene::with_particles(1, 0)));
        let (_tx, shutdown_rx) = watch::channel(true);

        let frames = SceneLoop::new(Arc::clone(&scene), shutdown_rx).run().await;

        assert_eq!(frames, 0);
        assert_eq!(scene.read().await.frames(), 0);
    }
}
