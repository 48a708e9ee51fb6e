//! `bezier_raster`: Software-Pixelfläche für die Kurven-Animation.
//!
//! Alle Primitive clippen selbst auf die Bildgrenzen; Koordinaten außerhalb
//! werden stillschweigend verworfen.
//!
//! # Beispiel
//! ```no_run
//! use bezier_raster::{Canvas, to_rgba};
//! use glam::Vec2;
//!
//! let mut canvas = Canvas::new(200, 200, to_rgba([0.0, 0.0, 0.0, 1.0]));
//! canvas.draw_line(Vec2::new(10.0, 100.0), Vec2::new(190.0, 100.0), to_rgba([1.0; 4]));
//! canvas.save_png("frame.png")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod line;

use anyhow::{Context, Result};
use glam::Vec2;
use image::{Rgba, RgbaImage};
use std::path::Path;

pub use line::LineKind;

/// Wandelt eine RGBA-Farbe `[0.0, 1.0]` in 8-Bit-Kanäle (geklemmt).
pub fn to_rgba(color: [f32; 4]) -> Rgba<u8> {
    Rgba(color.map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8))
}

/// Pixelfläche auf Basis eines `RgbaImage`.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Erstellt eine mit `background` gefüllte Fläche.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Füllt die ganze Fläche.
    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    /// Setzt einen Pixel. Liefert false, wenn er außerhalb liegt.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) -> bool {
        if x < 0 || y < 0 || x >= self.image.width() as i32 || y >= self.image.height() as i32 {
            return false;
        }
        self.image.put_pixel(x as u32, y as u32, color);
        true
    }

    /// Pixel an Position, falls innerhalb.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        if x < 0 || y < 0 {
            return None;
        }
        self.image.get_pixel_checked(x as u32, y as u32).copied()
    }

    /// Zeichnet den Pixel, in dem `point` liegt.
    pub fn draw_pixel(&mut self, point: Vec2, color: Rgba<u8>) {
        if point.is_finite() {
            self.put_pixel(point.x.floor() as i32, point.y.floor() as i32, color);
        }
    }

    /// Zentriertes Quadrat. Gerade Größen werden auf die nächste ungerade aufgerundet.
    pub fn draw_dot(&mut self, center: Vec2, size: u32, color: Rgba<u8>) {
        if !center.is_finite() {
            return;
        }
        let size = (if size % 2 == 0 { size + 1 } else { size }) as i32;
        let left = center.x.floor() as i32 - size / 2;
        let top = center.y.floor() as i32 - size / 2;
        self.fill_rect(left, top, size, size, color);
    }

    /// Zeichnet ein Segment von `start` nach `end`.
    ///
    /// Achsenparallele Segmente werden als 1-Pixel-Spalte bzw. -Zeile gefüllt,
    /// alle anderen pixelweise entlang der längeren Achse abgelaufen.
    pub fn draw_line(&mut self, start: Vec2, end: Vec2, color: Rgba<u8>) {
        if !start.is_finite() || !end.is_finite() {
            return;
        }
        let (min, max) = (start.min(end), start.max(end));

        match LineKind::classify(start, end) {
            LineKind::Point => self.draw_pixel(start, color),
            LineKind::Vertical => {
                let (top, bottom) = (min.y.floor() as i32, max.y.floor() as i32);
                let height = bottom.saturating_sub(top).saturating_add(1);
                self.fill_rect(start.x.floor() as i32, top, 1, height, color);
            }
            LineKind::Horizontal => {
                let (left, right) = (min.x.floor() as i32, max.x.floor() as i32);
                let width = right.saturating_sub(left).saturating_add(1);
                self.fill_rect(left, start.y.floor() as i32, width, 1, color);
            }
            LineKind::Sloped {
                slope,
                intercept,
                steep: false,
            } => {
                let (from, to) = self.clip_span(min.x, max.x, self.width());
                for x in from..=to {
                    let y = slope * x as f32 + intercept;
                    self.put_pixel(x, y.floor() as i32, color);
                }
            }
            LineKind::Sloped {
                slope,
                intercept,
                steep: true,
            } => {
                let (from, to) = self.clip_span(min.y, max.y, self.height());
                for y in from..=to {
                    let x = (y as f32 - intercept) / slope;
                    self.put_pixel(x.floor() as i32, y, color);
                }
            }
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Speichert die Fläche als PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Verzeichnis {} konnte nicht erstellt werden", parent.display()))?;
        }
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("PNG {} konnte nicht geschrieben werden", path.display()))?;
        log::debug!("PNG geschrieben: {}", path.display());
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba<u8>) {
        let img_w = self.image.width() as i32;
        let img_h = self.image.height() as i32;
        let (x0, x1) = (x.max(0), x.saturating_add(w).min(img_w));
        let (y0, y1) = (y.max(0), y.saturating_add(h).min(img_h));

        for py in y0..y1 {
            for px in x0..x1 {
                self.image.put_pixel(px as u32, py as u32, color);
            }
        }
    }

    /// Begrenzt einen Pixelbereich entlang einer Achse auf `[0, extent)`.
    fn clip_span(&self, from: f32, to: f32, extent: u32) -> (i32, i32) {
        let from = (from.floor() as i32).max(0);
        let to = (to.floor() as i32).min(extent as i32 - 1);
        (from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    fn lit(canvas: &Canvas) -> Vec<(u32, u32)> {
        canvas
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == WHITE)
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    #[test]
    fn test_to_rgba_clamps() {
        assert_eq!(to_rgba([1.0, 0.0, 0.5, 2.0]), Rgba([255, 0, 128, 255]));
        assert_eq!(to_rgba([-1.0, 0.0, 0.0, 0.0]), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_put_pixel_clips() {
        let mut canvas = Canvas::new(4, 4, BLACK);
        assert!(canvas.put_pixel(3, 3, WHITE));
        assert!(!canvas.put_pixel(4, 0, WHITE));
        assert!(!canvas.put_pixel(-1, 0, WHITE));
        assert_eq!(lit(&canvas), vec![(3, 3)]);
        assert_eq!(canvas.pixel(-1, 2), None);
    }

    #[test]
    fn test_even_dot_size_rounds_up() {
        let mut canvas = Canvas::new(20, 20, BLACK);
        canvas.draw_dot(Vec2::new(10.0, 10.0), 2, WHITE);
        assert_eq!(lit(&canvas).len(), 9);

        canvas.fill(BLACK);
        canvas.draw_dot(Vec2::new(10.0, 10.0), 5, WHITE);
        let pixels = lit(&canvas);
        assert_eq!(pixels.len(), 25);
        assert!(pixels.contains(&(8, 8)));
        assert!(pixels.contains(&(12, 12)));
    }

    #[test]
    fn test_dot_at_corner_is_clipped() {
        let mut canvas = Canvas::new(10, 10, BLACK);
        canvas.draw_dot(Vec2::new(0.0, 0.0), 5, WHITE);
        assert_eq!(lit(&canvas).len(), 9);
    }

    #[test]
    fn test_axis_aligned_lines_are_spans() {
        let mut canvas = Canvas::new(20, 20, BLACK);
        canvas.draw_line(Vec2::new(5.0, 15.0), Vec2::new(5.0, 2.0), WHITE);
        let pixels = lit(&canvas);
        assert_eq!(pixels.len(), 14);
        assert!(pixels.iter().all(|&(x, _)| x == 5));

        canvas.fill(BLACK);
        canvas.draw_line(Vec2::new(-10.0, 3.0), Vec2::new(30.0, 3.0), WHITE);
        assert_eq!(lit(&canvas).len(), 20);
    }

    #[test]
    fn test_sloped_line_one_pixel_per_major_step() {
        let mut canvas = Canvas::new(50, 50, BLACK);
        canvas.draw_line(Vec2::new(0.0, 0.0), Vec2::new(20.0, 10.0), WHITE);
        let pixels = lit(&canvas);
        assert_eq!(pixels.len(), 21);
        for (x, y) in pixels {
            assert_eq!(y, x / 2);
        }

        canvas.fill(BLACK);
        canvas.draw_line(Vec2::new(10.0, 40.0), Vec2::new(0.0, 0.0), WHITE);
        assert_eq!(lit(&canvas).len(), 41);
    }

    #[test]
    fn test_line_far_outside_does_not_panic() {
        let mut canvas = Canvas::new(10, 10, BLACK);
        canvas.draw_line(Vec2::new(-1e9, -1e9), Vec2::new(1e9, 2e9), WHITE);
        canvas.draw_line(Vec2::new(f32::NAN, 0.0), Vec2::new(5.0, 5.0), WHITE);
        canvas.draw_pixel(Vec2::new(f32::INFINITY, 1.0), WHITE);
        assert!(lit(&canvas).len() <= 10);
    }

    #[test]
    fn test_save_png_roundtrip() {
        let mut canvas = Canvas::new(8, 8, BLACK);
        canvas.draw_pixel(Vec2::new(2.5, 3.5), WHITE);
        let path = std::env::temp_dir()
            .join(format!("bezier_raster_test_{}", std::process::id()))
            .join("frame.png");

        canvas.save_png(&path).unwrap();
        let loaded = image::open(&path).unwrap().to_rgba8();

        assert_eq!(loaded.get_pixel(2, 3), &WHITE);
        assert_eq!(loaded.get_pixel(0, 0), &BLACK);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
