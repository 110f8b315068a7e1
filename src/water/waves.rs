//! Wave displacement strategies.
//!
//! Both strategies are pure: the vertical offset depends only on the rest
//! position's (x, z), the elapsed time and the bound configuration. The rest
//! height is always discarded, so a frame never compounds the previous one.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};

use crate::error::Result;
use crate::noise::SurfaceNoise;
use crate::params::{WaveConfig, WaveMode};

/// Noise lattice scale applied to rest (x, z)
const NOISE_SCALE: f32 = 0.1;

/// Rate at which the noise field drifts with wave time
const NOISE_DRIFT: f32 = 0.1;

/// Fraction of `amplitude` the centred noise contributes
const NOISE_STRENGTH: f32 = 0.3;

/// Per-index amplitude falloff: wave w is scaled by 1 / (1 + w * decay)
const AMPLITUDE_DECAY: f32 = 0.8;

/// Per-index frequency growth: wave w runs at frequency * (1 + w * growth)
const FREQUENCY_GROWTH: f32 = 0.2;

/// Vertical displacement of a rest vertex at a point in time
pub trait WaveField {
    fn displace(&self, rest: Vec3, time_s: f32) -> f32;
}

/// One diagonal travelling sine wave
#[derive(Debug, Clone)]
pub struct SingleWave {
    amplitude: f32,
    frequency: f32,
    wavelength: f32,
}

impl SingleWave {
    /// Bind a validated configuration; a zero wavelength is rejected
    pub fn new(config: &WaveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            amplitude: config.amplitude,
            frequency: config.frequency,
            wavelength: config.wavelength,
        })
    }
}

impl WaveField for SingleWave {
    fn displace(&self, rest: Vec3, time_s: f32) -> f32 {
        ((rest.x + rest.z) / self.wavelength + time_s * self.frequency).sin() * self.amplitude
    }
}

/// Directional wave superposition with harmonic decay plus drifting noise
///
/// Wave `w` of `n` travels along angle `w/n * 2π + wind_direction_offset`,
/// so the set fans out evenly around the compass.
pub struct MultiWave {
    config: WaveConfig,
    noise: SurfaceNoise,
}

impl MultiWave {
    pub fn new(config: &WaveConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
            noise: SurfaceNoise::new(config.noise_seed),
        })
    }

    /// Summed directional waves without the noise term
    pub fn wave_height(&self, rest: Vec3, time_s: f32) -> f32 {
        let c = &self.config;
        let wave_time = time_s * c.wave_speed;
        let horizontal = Vec2::new(rest.x, rest.z);

        let mut height = 0.0;
        for w in 0..c.wave_count {
            let wf = w as f32;
            let angle = (wf / c.wave_count as f32) * TAU + c.wind_direction_offset;
            let direction = Vec2::new(angle.cos(), angle.sin());

            let amplitude = c.wave_height / (1.0 + wf * AMPLITUDE_DECAY);
            let frequency = c.frequency * (1.0 + wf * FREQUENCY_GROWTH);

            let phase = direction.dot(horizontal) / c.wavelength + wave_time * frequency;
            height += phase.sin() * amplitude;
        }
        height
    }

    /// Centred noise perturbation, in world units
    pub fn noise_offset(&self, rest: Vec3, time_s: f32) -> f32 {
        let drift = time_s * self.config.wave_speed * NOISE_DRIFT;
        let n = self
            .noise
            .sample_2d(rest.x * NOISE_SCALE + drift, rest.z * NOISE_SCALE + drift);
        (n - 0.5) * self.config.amplitude * NOISE_STRENGTH
    }
}

impl WaveField for MultiWave {
    fn displace(&self, rest: Vec3, time_s: f32) -> f32 {
        self.wave_height(rest, time_s) + self.noise_offset(rest, time_s)
    }
}

impl WaveMode {
    /// Construct the displacement strategy for this mode
    pub fn field(self, config: &WaveConfig) -> Result<Box<dyn WaveField>> {
        Ok(match self {
            WaveMode::Single => Box::new(SingleWave::new(config)?),
            WaveMode::Multi => Box::new(MultiWave::new(config)?),
        })
    }
}

/// Displace every rest vertex into `out`, keeping x and z
pub fn displace_all(field: &dyn WaveField, rest: &[Vec3], time_s: f32, out: &mut Vec<Vec3>) {
    out.clear();
    out.extend(rest.iter().map(|&v| Vec3::new(v.x, field.displace(v, time_s), v.z)));
}
