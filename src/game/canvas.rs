//! 2D Canvas
//!
//! The drawing surface scenes and overlay UI paint into each frame. Takes
//! screen-space primitives (pixels, y down) and emits NDC triangles into a
//! [`ShapeMesh`] for the shape render pass.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::Vec2;

use crate::game::ui::text::{draw_text, pixel_scale};
use crate::render::ShapeMesh;

/// Segments per rounded-rectangle corner
const CORNER_SEGMENTS: usize = 6;
/// Rim segments per circle
const CIRCLE_SEGMENTS: usize = 24;

/// Convert `0xRRGGBB` to an opaque RGBA color
pub fn hex_color(rgb: u32) -> [f32; 4] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
        1.0,
    ]
}

/// Screen-space drawing target for one frame
pub struct Canvas {
    mesh: ShapeMesh,
    width: f32,
    height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            mesh: ShapeMesh::new(),
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Start a new frame at the given size, keeping allocations
    pub fn reset(&mut self, width: f32, height: f32) {
        self.mesh.clear();
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn mesh(&self) -> &ShapeMesh {
        &self.mesh
    }

    fn to_ndc(&self, p: Vec2) -> [f32; 2] {
        ShapeMesh::screen_to_ndc(p.x, p.y, self.width, self.height)
    }

    /// Axis-aligned filled rectangle with its top-left corner at `origin`
    pub fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: [f32; 4]) {
        let tl = self.to_ndc(origin);
        let tr = self.to_ndc(origin + Vec2::new(size.x, 0.0));
        let br = self.to_ndc(origin + size);
        let bl = self.to_ndc(origin + Vec2::new(0.0, size.y));
        self.mesh.add_quad(tl, tr, br, bl, color);
    }

    /// Filled rectangle with rounded corners
    pub fn fill_rounded_rect(&mut self, origin: Vec2, size: Vec2, radius: f32, color: [f32; 4]) {
        let radius = radius.clamp(0.0, size.x.min(size.y) * 0.5);
        if radius <= 0.0 {
            self.fill_rect(origin, size, color);
            return;
        }

        // Corner arc centers, walked clockwise on screen starting top-right
        let corners = [
            (origin + Vec2::new(size.x - radius, radius), -FRAC_PI_2),
            (origin + Vec2::new(size.x - radius, size.y - radius), 0.0),
            (origin + Vec2::new(radius, size.y - radius), FRAC_PI_2),
            (origin + Vec2::new(radius, radius), 2.0 * FRAC_PI_2),
        ];

        let mut rim = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1));
        for (center, start) in corners {
            for step in 0..=CORNER_SEGMENTS {
                let angle = start + FRAC_PI_2 * step as f32 / CORNER_SEGMENTS as f32;
                let p = center + Vec2::new(angle.cos(), angle.sin()) * radius;
                rim.push(self.to_ndc(p));
            }
        }

        let center = self.to_ndc(origin + size * 0.5);
        self.mesh.add_fan(center, &rim, color);
    }

    /// Filled circle
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let rim: Vec<[f32; 2]> = (0..CIRCLE_SEGMENTS)
            .map(|i| {
                let angle = TAU * i as f32 / CIRCLE_SEGMENTS as f32;
                self.to_ndc(center + Vec2::new(angle.cos(), angle.sin()) * radius)
            })
            .collect();
        let center = self.to_ndc(center);
        self.mesh.add_fan(center, &rim, color);
    }

    /// Pixel-font text with its top-left corner at `origin`
    pub fn draw_text(&mut self, text: &str, origin: Vec2, font_size: f32, color: [f32; 4]) {
        draw_text(
            &mut self.mesh,
            text,
            origin.x,
            origin.y,
            pixel_scale(font_size),
            color,
            self.width,
            self.height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(mesh: &ShapeMesh) {
        assert_eq!(mesh.indices.len() % 3, 0);
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0xff0000), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(hex_color(0x00ff00), [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(hex_color(0x0000ff), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_primitives_are_well_formed() {
        let mut canvas = Canvas::new(640.0, 480.0);
        canvas.fill_rect(Vec2::new(10.0, 10.0), Vec2::new(50.0, 20.0), [1.0; 4]);
        canvas.fill_rounded_rect(Vec2::new(100.0, 100.0), Vec2::new(80.0, 120.0), 10.0, [1.0; 4]);
        canvas.fill_circle(Vec2::new(320.0, 240.0), 5.0, [1.0; 4]);
        canvas.draw_text("Hello", Vec2::new(0.0, 0.0), 40.0, [1.0; 4]);

        assert!(!canvas.mesh().is_empty());
        assert_well_formed(canvas.mesh());
    }

    #[test]
    fn test_rounded_rect_stays_in_bounds() {
        let (w, h) = (400.0, 400.0);
        let mut canvas = Canvas::new(w, h);
        let origin = Vec2::new(100.0, 100.0);
        let size = Vec2::new(80.0, 120.0);
        canvas.fill_rounded_rect(origin, size, 10.0, [1.0; 4]);

        let min = ShapeMesh::screen_to_ndc(origin.x, origin.y + size.y, w, h);
        let max = ShapeMesh::screen_to_ndc(origin.x + size.x, origin.y, w, h);
        for v in &canvas.mesh().vertices {
            assert!(v.position[0] >= min[0] - 1e-4 && v.position[0] <= max[0] + 1e-4);
            assert!(v.position[1] >= min[1] - 1e-4 && v.position[1] <= max[1] + 1e-4);
        }
    }

    #[test]
    fn test_zero_radius_falls_back_to_rect() {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.fill_rounded_rect(Vec2::ZERO, Vec2::splat(10.0), 0.0, [1.0; 4]);
        assert_eq!(canvas.mesh().vertices.len(), 4);
    }

    #[test]
    fn test_reset_clears_geometry() {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.fill_circle(Vec2::splat(50.0), 5.0, [1.0; 4]);
        canvas.reset(200.0, 50.0);

        assert!(canvas.mesh().is_empty());
        assert_eq!((canvas.width(), canvas.height()), (200.0, 50.0));
    }
}
