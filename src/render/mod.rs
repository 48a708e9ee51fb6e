//! Render-Pass für Lattice und Kurve über eine austauschbare Zeichenfläche.

mod raster;

pub use crate::shared::FrameScene;
pub use raster::canvas_for;

use glam::Vec2;

/// Zeichen-Primitive, die der Render-Pass konsumiert.
///
/// Farben sind RGBA `[0.0, 1.0]`. Clipping ist Sache der Implementierung;
/// alle Aufrufe gelten als erfolgreich.
pub trait Renderer {
    /// Füllt die ganze Fläche.
    fn clear(&mut self, color: [f32; 4]);
    /// Zentrierter, gefüllter Punkt mit Kantenlänge `size`.
    fn draw_dot(&mut self, center: Vec2, size: u32, color: [f32; 4]);
    /// Segment zwischen zwei Punkten.
    fn draw_line(&mut self, start: Vec2, end: Vec2, color: [f32; 4]);
    /// Einzelner Pixel.
    fn draw_pixel(&mut self, point: Vec2, color: [f32; 4]);
}

/// Zeichnet einen kompletten Frame.
///
/// Reihenfolge: Hintergrund, Kanten zwischen benachbarten Nodes jeder Reihe
/// (nur solange die Kurve läuft), ein Punkt pro Node, ein Pixel pro Kurvenpunkt.
/// Ohne Lattice werden nur die Anker gezeichnet.
pub fn render_frame<R: Renderer + ?Sized>(renderer: &mut R, scene: &FrameScene<'_>) {
    let options = scene.options;
    renderer.clear(options.background_color);

    if !scene.has_lattice() {
        for &anchor in scene.anchors {
            renderer.draw_dot(anchor, options.dot_size, options.dot_color);
        }
        return;
    }

    if !scene.is_finished() {
        render_edges(renderer, scene);
    }

    for node in scene.lattice.nodes() {
        renderer.draw_dot(node.position(), options.dot_size, options.dot_color);
    }

    for &point in scene.trace.points() {
        renderer.draw_pixel(point, options.trace_color);
    }
}

fn render_edges<R: Renderer + ?Sized>(renderer: &mut R, scene: &FrameScene<'_>) {
    let color = scene.options.edge_color;
    for row in 0..scene.lattice.order() {
        for pair in scene.lattice.row(row).windows(2) {
            renderer.draw_line(pair[0].position(), pair[1].position(), color);
        }
    }
}

#[cfg(test)]
mod tests;
