use glam::Vec3;
use rand::prelude::*;
use rand_distr::StandardNormal;
use thiserror::Error;

use crate::types::{Particle, SimParams};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParticleError {
    #[error("A particle cloud needs at least one particle")]
    Empty,
    #[error("Invalid cloud parameter: {0}")]
    InvalidParameter(&'static str),
}

/// CPU-side seed for the GPU particle buffer
#[derive(Debug, Clone)]
pub struct ParticleCloud {
    particles: Vec<Particle>,
}

impl ParticleCloud {
    /// Isotropic Gaussian cloud around `center`.
    ///
    /// Positions have standard deviation `spread`, velocities `speed`. The same
    /// seed always yields the same cloud.
    pub fn gaussian(center: Vec3, count: usize, spread: f32, speed: f32, seed: u64) -> Result<Self, ParticleError> {
        if count == 0 {
            return Err(ParticleError::Empty);
        }
        if !(spread.is_finite() && spread >= 0.0) {
            return Err(ParticleError::InvalidParameter("spread must be finite and non-negative"));
        }
        if !(speed.is_finite() && speed >= 0.0) {
            return Err(ParticleError::InvalidParameter("speed must be finite and non-negative"));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| {
                let offset = gaussian_vec3(&mut rng);
                let velocity = gaussian_vec3(&mut rng) * speed;
                Particle::new(
                    (center + offset * spread).to_array(),
                    velocity.to_array(),
                    tint(offset.length()),
                )
            })
            .collect();

        Ok(Self { particles })
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Mean particle position
    pub fn centroid(&self) -> Vec3 {
        let sum: Vec3 = self
            .particles
            .iter()
            .map(|p| Vec3::from_array(p.position))
            .sum();
        sum / self.particles.len().max(1) as f32
    }
}

/// Standard normal sample per component
fn gaussian_vec3(rng: &mut StdRng) -> Vec3 {
    Vec3::new(rng.sample(StandardNormal), rng.sample(StandardNormal), rng.sample(StandardNormal))
}

/// Warm core fading to cool blue at about three standard deviations
fn tint(sigma: f32) -> [f32; 4] {
    let t = (sigma / 3.0).clamp(0.0, 1.0);
    let core = Vec3::new(1.0, 0.85, 0.6);
    let rim = Vec3::new(0.3, 0.5, 1.0);
    let rgb = core.lerp(rim, t);
    [rgb.x, rgb.y, rgb.z, 1.0 - 0.6 * t]
}

impl SimParams {
    pub fn new(delta_time: f32, time: f32, jitter: f32, damping: f32, count: u32) -> Self {
        Self {
            // A long stall (window drag, breakpoint) must not blow the cloud apart
            delta_time: delta_time.clamp(0.0, 0.1),
            time,
            jitter,
            damping: damping.clamp(0.0, 1.0),
            count,
            _pad: [0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_has_requested_count() {
        let cloud = ParticleCloud::gaussian(Vec3::ZERO, 1000, 2.0, 0.1, 7).unwrap();
        assert_eq!(cloud.len(), 1000);
        assert!(!cloud.is_empty());
    }

    #[test]
    fn test_same_seed_same_cloud() {
        let a = ParticleCloud::gaussian(Vec3::ZERO, 64, 1.0, 0.5, 42).unwrap();
        let b = ParticleCloud::gaussian(Vec3::ZERO, 64, 1.0, 0.5, 42).unwrap();
        let c = ParticleCloud::gaussian(Vec3::ZERO, 64, 1.0, 0.5, 43).unwrap();
        assert_eq!(a.particles(), b.particles());
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn test_cloud_is_centred() {
        let center = Vec3::new(5.0, -2.0, 1.0);
        let cloud = ParticleCloud::gaussian(center, 20_000, 1.0, 0.0, 1).unwrap();
        assert!((cloud.centroid() - center).length() < 0.05);
        assert!(cloud.particles().iter().all(|p| p.velocity == [0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_empty_cloud_rejected() {
        assert_eq!(
            ParticleCloud::gaussian(Vec3::ZERO, 0, 1.0, 1.0, 0).unwrap_err(),
            ParticleError::Empty
        );
        assert!(ParticleCloud::gaussian(Vec3::ZERO, 1, f32::NAN, 1.0, 0).is_err());
    }

    #[test]
    fn test_sim_params_clamp_stalls() {
        let params = SimParams::new(2.0, 10.0, 0.5, 1.5, 8);
        assert_eq!(params.delta_time, 0.1);
        assert_eq!(params.damping, 1.0);
        assert_eq!(params.count, 8);
    }
}
