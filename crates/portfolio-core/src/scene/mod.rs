//! Decorative procedural scenes.
//!
//! Every primitive is a pure function of elapsed time, except particles, which
//! also carry a velocity that flips at the field boundary. Nothing here knows
//! about a graphics library; renderers read the state after each frame.
//!
//! - **hero**: distorted sphere, rings and the particle field
//! - **analytics**: skill bars, metric spheres and group sway
//! - **runner**: drives a scene on a tokio interval until shutdown

pub mod analytics;
pub mod hero;
pub mod particles;
pub mod runner;

use serde::Serialize;

pub use analytics::{AnalyticsScene, DataBar, DataSphere};
pub use hero::{DistortedSphere, HeroScene, Ring};
pub use particles::{motion_factor, Particle, ParticleField, BOUNDARY, PARTICLE_COUNT};
pub use runner::SceneLoop;

/// Target frame rate of the scene loops.
pub const FRAME_RATE: u32 = 60;

/// A per-frame animated primitive.
pub trait Animate {
    /// Advances one frame. `elapsed` is seconds since the scene started.
    fn advance(&mut self, elapsed: f64);
}

/// Both scenes advanced together.
#[derive(Debug, Clone, Serialize)]
pub struct Showcase {
    pub hero: HeroScene,
    pub analytics: AnalyticsScene,
}

impl Showcase {
    pub fn new(seed: u64) -> Self {
        Self::with_particles(PARTICLE_COUNT, seed)
    }

    pub fn with_particles(count: usize, seed: u64) -> Self {
        Self {
            hero: HeroScene::with_particles(count, seed),
            analytics: AnalyticsScene::new(),
        }
    }

    /// Advances `frames` frames at [`FRAME_RATE`] from the current time.
    pub fn run_frames(&mut self, frames: u64) {
        let start = self.hero.frames();
        for frame in start + 1..=start + frames {
            self.advance(frame as f64 / f64::from(FRAME_RATE));
        }
    }

    /// Compact view of the current state with at most `sample` particles.
    pub fn snapshot(&self, sample: usize) -> SceneSnapshot {
        let particles = self.hero.field.particles();
        SceneSnapshot {
            frames: self.hero.frames(),
            elapsed: self.hero.elapsed(),
            sphere: self.hero.sphere,
            rings: self.hero.rings.clone(),
            field_rotation_y: self.hero.field.rotation_y(),
            particle_count: particles.len(),
            particles: particles.iter().take(sample).copied().collect(),
            bars: self.analytics.bars.clone(),
            spheres: self.analytics.spheres.clone(),
            sway: self.analytics.sway,
        }
    }
}

impl Animate for Showcase {
    fn advance(&mut self, elapsed: f64) {
        self.hero.advance(elapsed);
        self.analytics.advance(elapsed);
    }
}

/// Serializable state of a [`Showcase`].
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub frames: u64,
    pub elapsed: f64,
    pub sphere: DistortedSphere,
    pub rings: Vec<Ring>,
    pub field_rotation_y: f64,
    pub particle_count: usize,
    pub particles: Vec<Particle>,
    pub bars: Vec<DataBar>,
    pub spheres: Vec<DataSphere>,
    pub sway: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_frames_is_deterministic() {
        let mut a = Showcase::with_particles(32, 9);
        let mut b = Showcase::with_particles(32, 9);
        a.run_frames(120);
        b.run_frames(60);
        b.run_frames(60);

        let (sa, sb) = (a.snapshot(32), b.snapshot(32));
        assert_eq!(sa.frames, 120);
        assert_eq!(sa.particles, sb.particles);
        assert!((sa.elapsed - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_samples_particles() {
        let showcase = Showcase::with_particles(100, 1);
        let snapshot = showcase.snapshot(10);

        assert_eq!(snapshot.particle_count, 100);
        assert_eq!(snapshot.particles.len(), 10);
        assert_eq!(snapshot.bars.len(), 6);
    }
}
