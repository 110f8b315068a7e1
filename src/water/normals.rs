//! Smooth vertex normals from triangle geometry.
//!
//! Each triangle's unit face normal is accumulated at its three corners and
//! the sums are normalized once every triangle has been visited.

use glam::Vec3;

/// Recompute vertex normals for the whole mesh
pub fn recompute(vertices: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = Vec::with_capacity(vertices.len());
    recompute_into(vertices, indices, &mut normals);
    normals
}

/// Recompute vertex normals into an existing buffer
///
/// `out` is resized to `vertices.len()`. A vertex with no incident triangle
/// or a zero-length sum keeps the up vector.
pub fn recompute_into(vertices: &[Vec3], indices: &[u32], out: &mut Vec<Vec3>) {
    out.clear();
    out.resize(vertices.len(), Vec3::ZERO);

    for tri in indices.chunks_exact(3) {
        let a = tri[0] as usize;
        let b = tri[1] as usize;
        let c = tri[2] as usize;

        let face = (vertices[b] - vertices[a])
            .cross(vertices[c] - vertices[a])
            .normalize_or_zero();

        out[a] += face;
        out[b] += face;
        out[c] += face;
    }

    for normal in out.iter_mut() {
        *normal = normal.try_normalize().unwrap_or(Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::water::GridTopology;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_flat_grid_normals_up() {
        let grid = GridTopology::build(5, 3).unwrap();
        let normals = recompute(grid.vertices(), grid.indices());

        assert_eq!(normals.len(), grid.vertex_count());
        for n in normals {
            assert!((n - Vec3::Y).length() < EPS, "normal {:?} not up", n);
        }
    }

    #[test]
    fn test_tilted_plane() {
        // Raise height along X with slope 1: normal is (-1, 1, 0) / √2
        let grid = GridTopology::build(4, 4).unwrap();
        let tilted: Vec<Vec3> = grid
            .vertices()
            .iter()
            .map(|v| Vec3::new(v.x, v.x, v.z))
            .collect();

        let expected = Vec3::new(-1.0, 1.0, 0.0).normalize();
        for n in recompute(&tilted, grid.indices()) {
            assert!((n - expected).length() < EPS);
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        let grid = GridTopology::build(6, 6).unwrap();
        let bumpy: Vec<Vec3> = grid
            .vertices()
            .iter()
            .map(|v| Vec3::new(v.x, (v.x * 0.9).sin() * (v.z * 0.6).cos(), v.z))
            .collect();

        for n in recompute(&bumpy, grid.indices()) {
            assert!((n.length() - 1.0).abs() < EPS);
            assert!(n.y > 0.0);
        }
    }

    #[test]
    fn test_unreferenced_vertex_stays_up() {
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(5.0, 3.0, 5.0),
        ];
        let normals = recompute(&vertices, &[0, 1, 2]);
        assert_eq!(normals[3], Vec3::Y);
        assert!((normals[0] - Vec3::Y).length() < EPS);
    }

    #[test]
    fn test_recompute_into_resizes() {
        let grid = GridTopology::build(2, 2).unwrap();
        let mut out = vec![Vec3::X; 100];
        recompute_into(grid.vertices(), grid.indices(), &mut out);
        assert_eq!(out.len(), grid.vertex_count());
    }
}
