//! Coherent noise for surface perturbation.
//!
//! 2D Perlin noise remapped from its signed range onto [0, 1], so callers can
//! centre it with `noise - 0.5`.

use noise::{NoiseFn, Perlin};

/// Deterministic 2D noise sampler
pub struct SurfaceNoise {
    perlin: Perlin,
}

impl SurfaceNoise {
    /// Create new noise sampler with seed
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// Sample 2D Perlin noise at position
    ///
    /// Returns value in range [0, 1]
    pub fn sample_2d(&self, x: f32, y: f32) -> f32 {
        let value = self.perlin.get([x as f64, y as f64]);
        ((value + 1.0) * 0.5).clamp(0.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_range() {
        let noise = SurfaceNoise::new(0);
        for i in 0..200 {
            let x = i as f32 * 0.37 - 20.0;
            let y = i as f32 * 0.11 + 3.5;
            let v = noise.sample_2d(x, y);
            assert!((0.0..=1.0).contains(&v), "noise {} out of range", v);
        }
    }

    #[test]
    fn test_sample_deterministic() {
        let a = SurfaceNoise::new(7);
        let b = SurfaceNoise::new(7);
        assert_eq!(
            a.sample_2d(1.25, -4.5).to_bits(),
            b.sample_2d(1.25, -4.5).to_bits()
        );
    }

    #[test]
    fn test_lattice_points_are_centred() {
        // Perlin gradients vanish at integer lattice points
        let noise = SurfaceNoise::new(3);
        assert!((noise.sample_2d(2.0, 5.0) - 0.5).abs() < 1e-6);
    }
}
