//! Tick-driven water surface with double-buffered frame publication.

use log::{debug, info, warn};

use super::mesh::GridTopology;
use super::normals::recompute_into;
use super::waves::{displace_all, WaveField};
use super::{SurfaceFrame, SurfaceVertex};
use crate::error::Result;
use crate::params::{GridParams, SurfaceParams, WaveConfig, WaveMode};

/// Animated water surface driven once per external tick
///
/// Owns its buffers exclusively. Consumers borrow the published frame, whose
/// positions and normals always come from the same tick.
pub struct WaterSurface {
    grid: GridParams,
    waves: WaveConfig,
    mode: WaveMode,
    field: Box<dyn WaveField>,
    topology: Option<GridTopology>,
    /// Published frame
    front: SurfaceFrame,
    /// Frame being computed; swapped with `front` when complete
    back: SurfaceFrame,
}

impl WaterSurface {
    /// Create new surface from validated parameters (topology not yet built)
    pub fn new(params: SurfaceParams) -> Result<Self> {
        params.validate()?;
        let field = params.mode.field(&params.waves)?;
        Ok(Self {
            grid: params.grid,
            waves: params.waves,
            mode: params.mode,
            field,
            topology: None,
            front: SurfaceFrame::default(),
            back: SurfaceFrame::default(),
        })
    }

    /// Build the grid topology and publish the rest frame
    ///
    /// Calling again rebuilds an identical topology from the same grid.
    pub fn build(&mut self) -> Result<()> {
        let topology = GridTopology::build(self.grid.width, self.grid.height)?;

        self.front = SurfaceFrame {
            time_s: 0.0,
            positions: topology.vertices().to_vec(),
            normals: topology.normals().to_vec(),
        };
        self.back = SurfaceFrame::default();

        info!(
            "Water surface built: {}x{} grid, {} vertices, {:?} waves",
            topology.width(),
            topology.height(),
            topology.vertex_count(),
            self.mode
        );
        self.topology = Some(topology);
        Ok(())
    }

    /// Replace the wave configuration without touching the topology
    pub fn reconfigure(&mut self, waves: WaveConfig) -> Result<()> {
        self.field = self.mode.field(&waves)?;
        self.waves = waves;
        debug!("Wave configuration replaced: {:?}", self.waves);
        Ok(())
    }

    /// Switch displacement strategy, keeping the current wave configuration
    pub fn set_mode(&mut self, mode: WaveMode) -> Result<()> {
        self.field = mode.field(&self.waves)?;
        self.mode = mode;
        debug!("Wave mode set to {:?}", mode);
        Ok(())
    }

    /// Advance the surface to `time_s` and publish the new frame
    ///
    /// Returns `None` without side effects if the topology has not been built
    /// or `time_s` is not finite.
    pub fn tick(&mut self, time_s: f32) -> Option<&SurfaceFrame> {
        let topology = self.topology.as_ref()?;

        if !time_s.is_finite() {
            warn!("Skipping tick with non-finite time {}", time_s);
            return None;
        }

        displace_all(
            self.field.as_ref(),
            topology.vertices(),
            time_s,
            &mut self.back.positions,
        );
        recompute_into(
            &self.back.positions,
            topology.indices(),
            &mut self.back.normals,
        );
        self.back.time_s = time_s;

        std::mem::swap(&mut self.front, &mut self.back);
        Some(&self.front)
    }

    /// Most recently published frame, if the topology exists
    pub fn frame(&self) -> Option<&SurfaceFrame> {
        self.topology.as_ref().map(|_| &self.front)
    }

    pub fn topology(&self) -> Option<&GridTopology> {
        self.topology.as_ref()
    }

    pub fn waves(&self) -> &WaveConfig {
        &self.waves
    }

    pub fn mode(&self) -> WaveMode {
        self.mode
    }

    /// Published frame interleaved with UVs, ready for upload
    pub fn interleaved(&self) -> Vec<SurfaceVertex> {
        let Some(topology) = self.topology.as_ref() else {
            return Vec::new();
        };

        self.front
            .positions
            .iter()
            .zip(&self.front.normals)
            .zip(topology.uvs())
            .map(|((p, n), uv)| SurfaceVertex {
                position: p.to_array(),
                normal: n.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }
}
