//! Grid resolution and wave parameters for the water surface.

use std::fs;
use std::path::Path;

use glam::Vec2;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WaterError};

/// Grid resolution in quads (one world unit per quad)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParams {
    /// Quads along X (vertices per row = width + 1)
    pub width: usize,

    /// Quads along Z (rows of vertices = height + 1)
    pub height: usize,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
        }
    }
}

impl GridParams {
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 || self.height < 1 {
            return Err(WaterError::configuration(format!(
                "grid must be at least 1x1 quads, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Wave animation parameters
///
/// Immutable for one animation session. Swapping it in via
/// `WaterSurface::reconfigure` changes the numbers only, never the topology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// Base height in world units.
    /// Scales the noise term, and is the whole wave height in single-wave mode.
    pub amplitude: f32,

    /// Base temporal frequency (radians per second of wave time)
    pub frequency: f32,

    /// Spatial scale divisor (world units per radian of phase), must be non-zero
    pub wavelength: f32,

    /// Number of superposed directional waves
    pub wave_count: usize,

    /// Time multiplier for multi-wave mode (dimensionless)
    pub wave_speed: f32,

    /// Angular bias applied to every wave direction (radians)
    pub wind_direction_offset: f32,

    /// Amplitude of the first wave before harmonic decay (world units)
    pub wave_height: f32,

    /// Perlin noise seed
    pub noise_seed: u32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.5,
            frequency: 1.0,
            wavelength: 5.0,
            wave_count: 4,
            wave_speed: 2.0,
            wind_direction_offset: 1.0, // x of the (1.0, 0.5) wind vector
            wave_height: 0.8,
            noise_seed: 0,
        }
    }
}

impl WaveConfig {
    /// Take the angular bias from a 2D wind vector.
    ///
    /// Only `wind.x` biases the wave angles; `wind.y` has no effect on the
    /// surface. This matches the established wave-direction model.
    pub fn from_wind_vector(wind: Vec2) -> Self {
        if wind.y != 0.0 {
            debug!(
                "Wind vector y component {} is ignored; only x biases wave directions",
                wind.y
            );
        }
        Self {
            wind_direction_offset: wind.x,
            ..Self::default()
        }
    }

    /// Validate configuration (wave count, wavelength, finiteness)
    pub fn validate(&self) -> Result<()> {
        if self.wave_count < 1 {
            return Err(WaterError::configuration("wave_count must be at least 1"));
        }
        if self.wavelength == 0.0 || !self.wavelength.is_finite() {
            return Err(WaterError::InvalidWavelength(self.wavelength));
        }

        let scalars = [
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("wave_speed", self.wave_speed),
            ("wind_direction_offset", self.wind_direction_offset),
            ("wave_height", self.wave_height),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(WaterError::configuration(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Displacement strategy selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum WaveMode {
    /// One diagonal travelling sine wave
    Single,

    /// Directional superposition with harmonic decay plus Perlin noise
    #[default]
    Multi,
}

/// Everything needed to construct a `WaterSurface`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceParams {
    pub grid: GridParams,
    pub waves: WaveConfig,
    pub mode: WaveMode,
}

impl SurfaceParams {
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.waves.validate()
    }

    /// Parse parameters from RON text; omitted fields keep their defaults
    pub fn from_ron(contents: &str) -> Result<Self> {
        Ok(ron::de::from_str(contents)?)
    }

    /// Load parameters from a RON file on disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let params = Self::from_ron(&contents)?;
        info!("Loaded surface parameters from {}", path.display());
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SurfaceParams::default().validate().is_ok());
    }

    #[test]
    fn test_degenerate_grid_rejected() {
        let grid = GridParams {
            width: 0,
            height: 5,
        };
        assert!(matches!(grid.validate(), Err(WaterError::Configuration(_))));

        let grid = GridParams {
            width: 5,
            height: 0,
        };
        assert!(matches!(grid.validate(), Err(WaterError::Configuration(_))));
    }

    #[test]
    fn test_zero_wave_count_rejected() {
        let waves = WaveConfig {
            wave_count: 0,
            ..WaveConfig::default()
        };
        assert!(matches!(
            waves.validate(),
            Err(WaterError::Configuration(_))
        ));
    }

    #[test]
    fn test_zero_wavelength_rejected() {
        let waves = WaveConfig {
            wavelength: 0.0,
            ..WaveConfig::default()
        };
        assert!(matches!(
            waves.validate(),
            Err(WaterError::InvalidWavelength(_))
        ));
    }

    #[test]
    fn test_non_finite_parameter_rejected() {
        let waves = WaveConfig {
            wave_speed: f32::NAN,
            ..WaveConfig::default()
        };
        assert!(matches!(
            waves.validate(),
            Err(WaterError::Configuration(_))
        ));
    }

    #[test]
    fn test_wind_vector_uses_x_only() {
        let a = WaveConfig::from_wind_vector(Vec2::new(0.3, 0.0));
        let b = WaveConfig::from_wind_vector(Vec2::new(0.3, 7.0));
        assert_eq!(a, b);
        assert_eq!(a.wind_direction_offset, 0.3);
    }

    #[test]
    fn test_ron_partial_config_keeps_defaults() {
        let params = SurfaceParams::from_ron(
            "(grid: (width: 8), waves: (wave_count: 2), mode: Single)",
        )
        .unwrap();

        assert_eq!(params.grid.width, 8);
        assert_eq!(params.grid.height, GridParams::default().height);
        assert_eq!(params.waves.wave_count, 2);
        assert_eq!(params.waves.wavelength, WaveConfig::default().wavelength);
        assert_eq!(params.mode, WaveMode::Single);
    }

    #[test]
    fn test_ron_round_trip() {
        let params = SurfaceParams::default();
        let text = ron::ser::to_string(&params).unwrap();
        assert_eq!(SurfaceParams::from_ron(&text).unwrap(), params);
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let params = SurfaceParams::from_ron(include_str!("../../config/surface.ron")).unwrap();
        assert_eq!(params, SurfaceParams::default());
    }

    #[test]
    fn test_malformed_ron_reports_parse_error() {
        let err = SurfaceParams::from_ron("(grid: (width: ").unwrap_err();
        assert!(matches!(err, WaterError::ConfigParse(_)));
    }
}
