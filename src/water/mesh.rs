//! Grid topology for the water plane.

use glam::{Vec2, Vec3};
use log::debug;

use crate::error::{Result, WaterError};

/// Immutable grid mesh: rest positions, UVs, initial normals, triangle list
#[derive(Debug, Clone, PartialEq)]
pub struct GridTopology {
    width: usize,
    height: usize,
    /// Rest positions, row-major: index = row * (width + 1) + column
    vertices: Vec<Vec3>,
    uvs: Vec<Vec2>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl GridTopology {
    /// Build a flat `width` x `height` quad grid on the XZ plane
    ///
    /// Vertex (row i, column j) sits at (j, 0, i) with UV (j/width, i/height).
    /// Each quad becomes two triangles whose face normals point up (+Y).
    pub fn build(width: usize, height: usize) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(WaterError::configuration(format!(
                "grid must be at least 1x1 quads, got {}x{}",
                width, height
            )));
        }

        let vertex_count = width
            .checked_add(1)
            .zip(height.checked_add(1))
            .and_then(|(w, h)| w.checked_mul(h))
            .filter(|&count| count <= u32::MAX as usize)
            .ok_or_else(|| {
                WaterError::configuration(format!(
                    "{}x{} grid exceeds the u32 index range",
                    width, height
                ))
            })?;

        let mut vertices = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);

        // Row-major over Z, then X; triangulation below depends on this order
        for i in 0..=height {
            for j in 0..=width {
                vertices.push(Vec3::new(j as f32, 0.0, i as f32));
                uvs.push(Vec2::new(j as f32 / width as f32, i as f32 / height as f32));
            }
        }
        let normals = vec![Vec3::Y; vertex_count];

        let row = width as u32 + 1;
        let mut indices = Vec::with_capacity(width * height * 6);
        let mut vert = 0u32;
        for _ in 0..height {
            for _ in 0..width {
                indices.extend_from_slice(&[
                    vert,
                    vert + row,
                    vert + 1,
                    vert + 1,
                    vert + row,
                    vert + row + 1,
                ]);
                vert += 1;
            }
            // Skip the last column so the next row starts at its first vertex
            vert += 1;
        }

        debug!(
            "Built {}x{} water grid: {} vertices, {} triangles",
            width,
            height,
            vertex_count,
            indices.len() / 3
        );

        Ok(Self {
            width,
            height,
            vertices,
            uvs,
            normals,
            indices,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Rest positions
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Initial (flat) normals, all up
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Triangle list, three indices per triangle
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_counts() {
        for (width, height) in [(1, 1), (3, 2), (7, 11), (30, 30)] {
            let grid = GridTopology::build(width, height).unwrap();

            assert_eq!(grid.vertex_count(), (width + 1) * (height + 1));
            assert_eq!(grid.triangle_count(), width * height * 2);
            assert_eq!(grid.index_count(), width * height * 6);
            assert_eq!(grid.uvs().len(), grid.vertex_count());
            assert_eq!(grid.normals().len(), grid.vertex_count());

            let vertex_count = grid.vertex_count() as u32;
            assert!(grid.indices().iter().all(|&i| i < vertex_count));
        }
    }

    #[test]
    fn test_single_quad_triangles() {
        let grid = GridTopology::build(1, 1).unwrap();

        assert_eq!(
            grid.vertices(),
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(1.0, 0.0, 1.0),
            ]
        );
        assert_eq!(grid.indices(), vec![0, 2, 1, 1, 2, 3]);
    }

    #[test]
    fn test_row_seam_skipped() {
        // Second row of a 2x2 grid starts at vertex 3, not 2
        let grid = GridTopology::build(2, 2).unwrap();
        assert_eq!(&grid.indices()[12..18], &[3, 6, 4, 4, 6, 7]);
    }

    #[test]
    fn test_row_major_layout_and_uvs() {
        let grid = GridTopology::build(4, 2).unwrap();

        // row 1 (5 vertices per row), column 3
        let idx = 5 + 3;
        assert_eq!(grid.vertices()[idx], Vec3::new(3.0, 0.0, 1.0));
        assert_eq!(grid.uvs()[idx], Vec2::new(0.75, 0.5));
        assert_eq!(grid.uvs()[0], Vec2::ZERO);
        assert_eq!(*grid.uvs().last().unwrap(), Vec2::ONE);
        assert!(grid.normals().iter().all(|&n| n == Vec3::Y));
    }

    #[test]
    fn test_degenerate_grid_rejected() {
        assert!(matches!(
            GridTopology::build(0, 5),
            Err(WaterError::Configuration(_))
        ));
        assert!(matches!(
            GridTopology::build(5, 0),
            Err(WaterError::Configuration(_))
        ));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        assert!(matches!(
            GridTopology::build(usize::MAX, 1),
            Err(WaterError::Configuration(_))
        ));
        assert!(matches!(
            GridTopology::build(1, usize::MAX),
            Err(WaterError::Configuration(_))
        ));
        assert!(matches!(
            GridTopology::build(1 << 20, 1 << 20),
            Err(WaterError::Configuration(_))
        ));
    }

    #[test]
    fn test_rebuild_is_identical() {
        let a = GridTopology::build(6, 4).unwrap();
        let b = GridTopology::build(6, 4).unwrap();
        assert_eq!(a.indices(), b.indices());
        assert_eq!(a.uvs(), b.uvs());
        assert_eq!(a, b);
    }
}
