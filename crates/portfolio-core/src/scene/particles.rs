//! Drifting particle field behind the hero section.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::Animate;

/// Particles in the hero field.
pub const PARTICLE_COUNT: usize = 2000;
/// Edge length of the cube particles spawn in.
pub const FIELD_EXTENT: f64 = 50.0;
/// Distance from the origin at which a particle turns back.
pub const BOUNDARY: f64 = 40.0;
/// Largest initial speed per axis, in units per frame.
pub const MAX_SPEED: f64 = 0.02;
/// Whole-field spin around y, radians per second.
pub const FIELD_SPIN: f64 = 0.05;

/// One point of the field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

impl Particle {
    pub fn new(position: [f64; 3], velocity: [f64; 3]) -> Self {
        Self { position, velocity }
    }

    /// Moves the particle by `velocity * factor` and bounces it off the
    /// boundary.
    ///
    /// A velocity component flips only while the particle is beyond the
    /// boundary and still heading outward, so each crossing flips it once.
    /// Returns the number of components flipped.
    pub fn step(&mut self, factor: f64) -> usize {
        let mut flips = 0;
        for axis in 0..3 {
            self.position[axis] += self.velocity[axis] * factor;
            let p = self.position[axis];
            if p.abs() > BOUNDARY && p * self.velocity[axis] > 0.0 {
                self.velocity[axis] = -self.velocity[axis];
                flips += 1;
            }
        }
        flips
    }
}

/// Speed multiplier at elapsed time `t`; always in `[0.5, 1.5]`.
pub fn motion_factor(t: f64) -> f64 {
    1.0 + 0.5 * t.sin()
}

/// A seeded cloud of particles.
#[derive(Debug, Clone, Serialize)]
pub struct ParticleField {
    particles: Vec<Particle>,
    rotation_y: f64,
}

impl ParticleField {
    /// Scatters `count` particles uniformly in the spawn cube.
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| {
                let position = [(); 3].map(|_| (rng.gen::<f64>() - 0.5) * FIELD_EXTENT);
                let velocity = [(); 3].map(|_| rng.gen_range(-MAX_SPEED..=MAX_SPEED));
                Particle::new(position, velocity)
            })
            .collect();
        Self {
            particles,
            rotation_y: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn rotation_y(&self) -> f64 {
        self.rotation_y
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

impl Animate for ParticleField {
    fn advance(&mut self, elapsed: f64) {
        self.rotation_y = elapsed * FIELD_SPIN;
        let factor = motion_factor(elapsed);
        for particle in &mut self.particles {
            particle.step(factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_factor_positive() {
        for i in 0..1000 {
            let f = motion_factor(i as f64 * 0.013);
            assert!((0.5..=1.5).contains(&f));
        }
    }

    #[test]
    fn test_field_spawns_in_cube() {
        let field = ParticleField::new(PARTICLE_COUNT, 7);

        assert_eq!(field.len(), 2000);
        for p in field.particles() {
            for axis in 0..3 {
                assert!(p.position[axis].abs() <= FIELD_EXTENT / 2.0);
                assert!(p.velocity[axis].abs() <= MAX_SPEED);
            }
        }
    }

    #[test]
    fn test_field_is_deterministic_per_seed() {
        let a = ParticleField::new(10, 42);
        let b = ParticleField::new(10, 42);
        let c = ParticleField::new(10, 43);

        assert_eq!(a.particles(), b.particles());
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn test_reflection_flips_once_per_crossing() {
        let mut particle = Particle::new([39.0, 0.0, 0.0], [0.3, 0.0, 0.0]);
        let mut flips = 0;
        let mut flipped_at = None;

        for frame in 0..100 {
            let n = particle.step(motion_factor(frame as f64 * 0.016));
            if n > 0 {
                flips += n;
                flipped_at.get_or_insert(frame);
            }
        }

        assert_eq!(flips, 1);
        assert!(particle.velocity[0] < 0.0);
        assert!(particle.position[0] < BOUNDARY);
        assert!(flipped_at.is_some());
    }

    #[test]
    fn test_reflection_returns_under_boundary() {
        let mut particle = Particle::new([39.9, 0.0, 0.0], [0.2, 0.0, 0.0]);

        // one step takes it past the boundary and flips the velocity
        assert_eq!(particle.step(1.0), 1);
        assert!(particle.position[0] > BOUNDARY);
        assert_eq!(particle.velocity[0], -0.2);

        // still beyond but heading inward: no second flip
        assert_eq!(particle.step(0.1), 0);
        assert!(particle.position[0] > BOUNDARY);

        assert_eq!(particle.step(1.0), 0);
        assert!(particle.position[0] < BOUNDARY);
    }

    #[test]
    fn test_reflection_negative_side() {
        let mut particle = Particle::new([0.0, -39.95, 0.0], [0.0, -0.1, 0.0]);

        assert_eq!(particle.step(1.0), 1);
        assert!(particle.velocity[1] > 0.0);

        particle.step(1.0);
        assert!(particle.position[1].abs() < BOUNDARY);
    }

    #[test]
    fn test_field_rotation() {
        let mut field = ParticleField::new(1, 0);
        field.advance(10.0);
        assert!((field.rotation_y() - 0.5).abs() < 1e-12);
    }
}
