//! Headless run and debug snapshot configuration.

use std::path::PathBuf;

use crate::error::{Result, WaterError};

/// Fixed-rate tick schedule for the headless driver
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Simulated duration (seconds)
    pub duration_secs: f32,

    /// Tick rate (ticks per simulated second)
    pub fps: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            duration_secs: 5.0,
            fps: 60,
        }
    }
}

impl RunConfig {
    pub fn new(duration_secs: f32, fps: u32) -> Self {
        Self { duration_secs, fps }
    }

    pub fn validate(&self) -> Result<()> {
        if self.fps == 0 {
            return Err(WaterError::configuration("fps must be > 0"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(WaterError::configuration(format!(
                "duration must be a non-negative number of seconds, got {}",
                self.duration_secs
            )));
        }
        Ok(())
    }

    /// Total number of ticks to run
    pub fn total_ticks(&self) -> usize {
        (self.duration_secs * self.fps as f32).ceil() as usize
    }

    /// Elapsed time at the given tick
    pub fn tick_time(&self, tick: usize) -> f32 {
        tick as f32 / self.fps as f32
    }
}

/// Debug point-cloud snapshot configuration
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Output PNG path
    pub path: PathBuf,

    /// Image edge length (pixels, square image)
    pub size_px: u32,

    /// Marker radius in world units
    pub marker_radius: f32,
}

impl SnapshotConfig {
    pub fn new(path: PathBuf, size_px: u32) -> Self {
        Self {
            path,
            size_px,
            marker_radius: 0.05,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size_px == 0 {
            return Err(WaterError::configuration("snapshot size must be > 0"));
        }
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(WaterError::configuration(format!(
                "marker radius must be positive, got {}",
                self.marker_radius
            )));
        }
        Ok(())
    }
}
