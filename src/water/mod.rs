//! Procedural water surface: grid topology, wave displacement, normals.

mod mesh;
mod normals;
mod system;
mod waves;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

// Re-export public types
pub use mesh::GridTopology;
pub use normals::{recompute, recompute_into};
pub use system::WaterSurface;
pub use waves::{displace_all, MultiWave, SingleWave, WaveField};

/// Interleaved vertex for upload (position + normal + UV coordinates)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SurfaceVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Positions and normals published together for one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceFrame {
    /// Elapsed time the frame was computed for
    pub time_s: f32,
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
}

impl SurfaceFrame {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}
