//! Software-Backend: `Renderer` auf `bezier_raster::Canvas`.

use super::Renderer;
use crate::shared::AnimatorOptions;
use bezier_raster::{to_rgba, Canvas};
use glam::Vec2;

impl Renderer for Canvas {
    fn clear(&mut self, color: [f32; 4]) {
        self.fill(to_rgba(color));
    }

    fn draw_dot(&mut self, center: Vec2, size: u32, color: [f32; 4]) {
        Canvas::draw_dot(self, center, size, to_rgba(color));
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: [f32; 4]) {
        Canvas::draw_line(self, start, end, to_rgba(color));
    }

    fn draw_pixel(&mut self, point: Vec2, color: [f32; 4]) {
        Canvas::draw_pixel(self, point, to_rgba(color));
    }
}

/// Erstellt eine Zeichenfläche in Größe und Hintergrundfarbe der Optionen.
pub fn canvas_for(options: &AnimatorOptions) -> Canvas {
    Canvas::new(
        options.surface_width,
        options.surface_height,
        to_rgba(options.background_color),
    )
}
