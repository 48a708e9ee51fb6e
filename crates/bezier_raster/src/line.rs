//! Klassifikation von Liniensegmenten für die Rasterung.

use glam::Vec2;

/// Form eines Segments; senkrechte und waagerechte Segmente werden ohne
/// Steigung gezeichnet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind {
    /// Start und Ende fallen zusammen
    Point,
    /// Gleiches x
    Vertical,
    /// Gleiches y
    Horizontal,
    /// y = slope·x + intercept. `steep`: Höhe > Breite, y wird geschritten.
    Sloped {
        slope: f32,
        intercept: f32,
        steep: bool,
    },
}

impl LineKind {
    pub fn classify(start: Vec2, end: Vec2) -> Self {
        let delta = end - start;
        let flat_x = delta.x.abs() <= f32::EPSILON;
        let flat_y = delta.y.abs() <= f32::EPSILON;

        match (flat_x, flat_y) {
            (true, true) => LineKind::Point,
            (true, false) => LineKind::Vertical,
            (false, true) => LineKind::Horizontal,
            (false, false) => {
                let slope = delta.y / delta.x;
                LineKind::Sloped {
                    slope,
                    intercept: start.y - start.x * slope,
                    steep: delta.y.abs() > delta.x.abs(),
                }
            }
        }
    }
}
