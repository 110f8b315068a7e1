//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::params::{RunConfig, SnapshotConfig, SurfaceParams, WaveMode};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "wavegrid")]
#[command(about = "Headless procedural water surface simulator", long_about = None)]
pub struct Args {
    /// RON file with surface parameters (grid, waves, mode)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Displacement strategy
    #[arg(long, value_enum)]
    pub mode: Option<WaveMode>,

    /// Grid quads along X
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid quads along Z
    #[arg(long)]
    pub height: Option<usize>,

    /// Number of superposed directional waves
    #[arg(long)]
    pub wave_count: Option<usize>,

    /// Spatial scale divisor (world units)
    #[arg(long)]
    pub wavelength: Option<f32>,

    /// Simulated duration (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 5.0)]
    pub duration: f32,

    /// Tick rate (ticks per simulated second)
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Write a top-down point-cloud PNG of the final frame
    #[arg(long, value_name = "PNG")]
    pub snapshot: Option<PathBuf>,

    /// Snapshot edge length (pixels)
    #[arg(long, value_name = "PX", default_value_t = 512)]
    pub snapshot_size: u32,
}

impl Args {
    /// Resolve surface parameters: defaults, then config file, then flags
    pub fn surface_params(&self) -> Result<SurfaceParams> {
        let mut params = match &self.config {
            Some(path) => SurfaceParams::load(path)?,
            None => SurfaceParams::default(),
        };

        if let Some(mode) = self.mode {
            params.mode = mode;
        }
        if let Some(width) = self.width {
            params.grid.width = width;
        }
        if let Some(height) = self.height {
            params.grid.height = height;
        }
        if let Some(wave_count) = self.wave_count {
            params.waves.wave_count = wave_count;
        }
        if let Some(wavelength) = self.wavelength {
            params.waves.wavelength = wavelength;
        }

        params.validate()?;
        Ok(params)
    }

    pub fn run_config(&self) -> Result<RunConfig> {
        let run = RunConfig::new(self.duration, self.fps);
        run.validate()?;
        Ok(run)
    }

    /// Snapshot configuration if a snapshot path was given
    pub fn snapshot_config(&self) -> Result<Option<SnapshotConfig>> {
        let Some(path) = &self.snapshot else {
            return Ok(None);
        };

        let snapshot = SnapshotConfig::new(path.clone(), self.snapshot_size);
        snapshot.validate()?;
        Ok(Some(snapshot))
    }
}
