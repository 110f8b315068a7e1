//! Debug point-cloud view of the published vertex buffer.
//!
//! Draws one marker per vertex at its world-space position, seen from above
//! (orthographic projection onto X-Z). Brightness encodes height. Purely
//! observational: nothing here feeds back into the surface.

use glam::{Affine3A, Vec2, Vec3, Vec3Swizzles};
use image::{Rgb, RgbImage};
use log::info;

use crate::error::Result;
use crate::params::SnapshotConfig;

const BACKGROUND: Rgb<u8> = Rgb([8, 12, 24]);

/// Top-down point-cloud renderer
#[derive(Debug, Clone)]
pub struct PointCloud {
    /// Local (mesh) to world transform
    transform: Affine3A,
    /// Marker radius in world units
    marker_radius: f32,
}

impl Default for PointCloud {
    fn default() -> Self {
        Self::new(0.05)
    }
}

impl PointCloud {
    pub fn new(marker_radius: f32) -> Self {
        Self {
            transform: Affine3A::IDENTITY,
            marker_radius,
        }
    }

    pub fn with_transform(mut self, transform: Affine3A) -> Self {
        self.transform = transform;
        self
    }

    /// Map local vertex positions to world space
    pub fn world_points(&self, positions: &[Vec3]) -> Vec<Vec3> {
        positions
            .iter()
            .map(|&p| self.transform.transform_point3(p))
            .collect()
    }

    /// Rasterize the point cloud into a square image
    pub fn render(&self, positions: &[Vec3], size_px: u32) -> RgbImage {
        let mut img = RgbImage::from_pixel(size_px, size_px, BACKGROUND);
        let points = self.world_points(positions);
        if points.is_empty() || size_px == 0 {
            return img;
        }

        // Fit the X-Z footprint (plus one marker of padding) into the image
        let pad = Vec2::splat(self.marker_radius);
        let min = points
            .iter()
            .fold(Vec2::splat(f32::INFINITY), |m, p| m.min(p.xz()))
            - pad;
        let max = points
            .iter()
            .fold(Vec2::splat(f32::NEG_INFINITY), |m, p| m.max(p.xz()))
            + pad;
        let extent = (max - min).max_element().max(f32::EPSILON);
        let scale = (size_px - 1) as f32 / extent;

        let (y_min, y_max) = points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let y_range = y_max - y_min;

        let radius_px = (self.marker_radius * scale).max(1.0);
        for p in &points {
            let centre = (p.xz() - min) * scale;
            let level = if y_range > f32::EPSILON {
                (p.y - y_min) / y_range
            } else {
                0.5
            };
            let colour = Rgb([
                (40.0 + 120.0 * level) as u8,
                (110.0 + 110.0 * level) as u8,
                (180.0 + 75.0 * level) as u8,
            ]);
            draw_disc(&mut img, centre, radius_px, colour);
        }
        img
    }

    /// Render and save the snapshot as PNG
    pub fn save(&self, positions: &[Vec3], config: &SnapshotConfig) -> Result<()> {
        config.validate()?;
        let img = self.render(positions, config.size_px);
        img.save(&config.path)?;
        info!(
            "Saved {} point snapshot to {}",
            positions.len(),
            config.path.display()
        );
        Ok(())
    }
}

fn draw_disc(img: &mut RgbImage, centre: Vec2, radius: f32, colour: Rgb<u8>) {
    let (w, h) = img.dimensions();
    let x0 = (centre.x - radius).floor().max(0.0) as u32;
    let y0 = (centre.y - radius).floor().max(0.0) as u32;
    let x1 = ((centre.x + radius).ceil() as u32).min(w - 1);
    let y1 = ((centre.y + radius).ceil() as u32).min(h - 1);
    let r2 = radius * radius;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = Vec2::new(x as f32, y as f32) - centre;
            if d.length_squared() <= r2 {
                img.put_pixel(x, y, colour);
            }
        }
    }
}
