//! Hero background: a distorted sphere, orbit rings and a particle field.

use serde::Serialize;

use super::particles::{ParticleField, PARTICLE_COUNT};
use super::Animate;

/// Sphere spin around x, radians per second.
pub const SPHERE_SPIN_X: f64 = 0.2;
/// Sphere spin around y, radians per second.
pub const SPHERE_SPIN_Y: f64 = 0.3;

const FLOAT_SPEED: f64 = 2.0;
const FLOAT_AMPLITUDE: f64 = 0.2;

/// The central sphere.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DistortedSphere {
    pub rotation_x: f64,
    pub rotation_y: f64,
    /// Vertical float offset.
    pub bob: f64,
}

impl Animate for DistortedSphere {
    fn advance(&mut self, elapsed: f64) {
        self.rotation_x = elapsed * SPHERE_SPIN_X;
        self.rotation_y = elapsed * SPHERE_SPIN_Y;
        self.bob = (elapsed * FLOAT_SPEED).sin() * FLOAT_AMPLITUDE;
    }
}

/// A torus circling the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ring {
    pub radius: f64,
    /// Spin rates around x and y.
    pub spin: (f64, f64),
    pub rotation_x: f64,
    pub rotation_y: f64,
}

impl Ring {
    pub fn new(radius: f64, spin_x: f64, spin_y: f64) -> Self {
        Self {
            radius,
            spin: (spin_x, spin_y),
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }
}

impl Animate for Ring {
    fn advance(&mut self, elapsed: f64) {
        self.rotation_x = elapsed * self.spin.0;
        self.rotation_y = elapsed * self.spin.1;
    }
}

/// Everything drawn behind the hero text.
#[derive(Debug, Clone, Serialize)]
pub struct HeroScene {
    pub sphere: DistortedSphere,
    pub rings: Vec<Ring>,
    pub field: ParticleField,
    elapsed: f64,
    frames: u64,
}

impl HeroScene {
    /// Full-size scene with a seeded particle field.
    pub fn new(seed: u64) -> Self {
        Self::with_particles(PARTICLE_COUNT, seed)
    }

    pub fn with_particles(count: usize, seed: u64) -> Self {
        Self {
            sphere: DistortedSphere::default(),
            rings: vec![
                Ring::new(3.2, 0.10, 0.15),
                Ring::new(3.8, -0.12, 0.08),
                Ring::new(4.4, 0.07, -0.10),
            ],
            field: ParticleField::new(count, seed),
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Seconds of scene time seen by the last frame.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Frames advanced so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Animate for HeroScene {
    fn advance(&mut self, elapsed: f64) {
        self.elapsed = elapsed;
        self.frames += 1;
        self.sphere.advance(elapsed);
        for ring in &mut self.rings {
            ring.advance(elapsed);
        }
        self.field.advance(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_rotation_is_linear_in_time() {
        let mut sphere = DistortedSphere::default();
        sphere.advance(5.0);

        assert!((sphere.rotation_x - 1.0).abs() < 1e-12);
        assert!((sphere.rotation_y - 1.5).abs() < 1e-12);
        assert!(sphere.bob.abs() <= FLOAT_AMPLITUDE);
    }

    #[test]
    fn test_ring_rotation() {
        let mut ring = Ring::new(1.0, 0.5, -0.25);
        ring.advance(4.0);
        assert_eq!((ring.rotation_x, ring.rotation_y), (2.0, -1.0));
    }

    #[test]
    fn test_hero_counts_frames() {
        let mut scene = HeroScene::with_particles(16, 1);
        for frame in 1..=10 {
            scene.advance(frame as f64 / 60.0);
        }
        assert_eq!(scene.frames(), 10);
        assert!((scene.elapsed() - 10.0 / 60.0).abs() < 1e-12);
        assert_eq!(scene.field.len(), 16);
    }
}
