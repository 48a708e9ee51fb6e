//! Einzelner Lattice-Node mit Position, Geradengleichung und Bewegungsrichtung.

use crate::error::LatticeError;
use glam::Vec2;

/// Flacher Index eines Nodes in der Lattice (nicht-besitzende Eltern-Referenz).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Index in das flache Node-Array.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Achse und Vorzeichen der Bewegung pro Schritt (Bildschirm-Koordinaten: y wächst nach unten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Keine Bewegung (Anker, degenerierte Segmente)
    #[default]
    None,
    /// y nimmt ab
    Up,
    /// y nimmt zu
    Down,
    /// x nimmt ab
    Left,
    /// x nimmt zu
    Right,
}

impl Direction {
    /// True wenn x direkt geschritten und y aus der Gleichung abgeleitet wird.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Gerade durch die beiden Eltern.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEquation {
    /// y = slope·x + intercept
    Sloped { slope: f32, intercept: f32 },
    /// x = konstant (Steigung wäre unendlich)
    Vertical { x: f32 },
}

impl LineEquation {
    /// y-Wert bei gegebenem x. Senkrechte Geraden haben keinen eindeutigen Wert.
    pub fn y_at(&self, x: f32) -> Option<f32> {
        match *self {
            LineEquation::Sloped { slope, intercept } => Some(slope * x + intercept),
            LineEquation::Vertical { .. } => None,
        }
    }

    /// x-Wert bei gegebenem y. Waagerechte Geraden haben keinen eindeutigen Wert.
    pub fn x_at(&self, y: f32) -> Option<f32> {
        match *self {
            LineEquation::Sloped { slope, intercept } if slope != 0.0 => {
                Some((y - intercept) / slope)
            }
            LineEquation::Sloped { .. } => None,
            LineEquation::Vertical { x } => Some(x),
        }
    }

    /// Steigung, falls endlich.
    pub fn slope(&self) -> Option<f32> {
        match *self {
            LineEquation::Sloped { slope, .. } => Some(slope),
            LineEquation::Vertical { .. } => None,
        }
    }

    /// Achsenabschnitt, falls endlich.
    pub fn intercept(&self) -> Option<f32> {
        match *self {
            LineEquation::Sloped { intercept, .. } => Some(intercept),
            LineEquation::Vertical { .. } => None,
        }
    }
}

/// Leitet Richtung und Geradengleichung aus den beiden Eltern ab.
///
/// Die längere Ausdehnung bestimmt die Schritt-Achse: bei `width >= height`
/// wird x geschritten, sonst y. Liegen beide Eltern aufeinander, gibt es
/// weder Richtung noch Gerade.
pub fn derive_segment(from: Vec2, to: Vec2) -> Result<(Direction, LineEquation), LatticeError> {
    let delta = to - from;
    let width = delta.x.abs();
    let height = delta.y.abs();

    if width <= f32::EPSILON && height <= f32::EPSILON {
        return Err(LatticeError::DegenerateSegment { at: to });
    }

    let direction = if width >= height {
        if to.x >= from.x {
            Direction::Right
        } else {
            Direction::Left
        }
    } else if to.y >= from.y {
        Direction::Down
    } else {
        Direction::Up
    };

    let equation = if width <= f32::EPSILON {
        LineEquation::Vertical { x: to.x }
    } else {
        let slope = delta.y / delta.x;
        LineEquation::Sloped {
            slope,
            intercept: to.y - to.x * slope,
        }
    };

    Ok((direction, equation))
}

/// Ein Punkt der Dreiecks-Lattice.
///
/// Anker (Reihe 0) haben keine Eltern und sind immer gesperrt. Alle anderen
/// Nodes wandern pro Schritt Richtung ihres zweiten Elternteils, bis sie
/// gesperrt werden. Ein gesperrter Node ändert sich nie wieder.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    position: Vec2,
    equation: Option<LineEquation>,
    direction: Direction,
    locked: bool,
    parents: Option<[NodeId; 2]>,
}

impl Node {
    /// Erstellt einen gesperrten Anker-Node.
    pub fn anchor(position: Vec2) -> Self {
        Self {
            position,
            equation: None,
            direction: Direction::None,
            locked: true,
            parents: None,
        }
    }

    /// Erstellt einen ungesperrten Zwischen-Node ohne Gleichung.
    pub fn interpolated(position: Vec2, parents: [NodeId; 2]) -> Self {
        Self {
            position,
            equation: None,
            direction: Direction::None,
            locked: false,
            parents: Some(parents),
        }
    }

    /// Aktuelle Position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Aktuelle Bewegungsrichtung.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Geradengleichung durch die Eltern (None bei Ankern).
    pub fn equation(&self) -> Option<LineEquation> {
        self.equation
    }

    /// Steigung der Eltern-Geraden (None bei Ankern und senkrechten Segmenten).
    pub fn slope(&self) -> Option<f32> {
        self.equation.and_then(|eq| eq.slope())
    }

    /// Achsenabschnitt der Eltern-Geraden.
    pub fn intercept(&self) -> Option<f32> {
        self.equation.and_then(|eq| eq.intercept())
    }

    /// True sobald der Node sein Ziel erreicht hat (oder Anker ist).
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Beide Eltern, falls vorhanden.
    pub fn parents(&self) -> Option<[NodeId; 2]> {
        self.parents
    }

    /// Ziel-Elternteil (der zweite).
    pub fn destination(&self) -> Option<NodeId> {
        self.parents.map(|[_, destination]| destination)
    }

    /// True für Reihe-0-Nodes.
    pub fn is_anchor(&self) -> bool {
        self.parents.is_none()
    }

    pub(crate) fn lock(&mut self) {
        self.locked = true;
    }

    /// Übernimmt Richtung und Gleichung. Gesperrte Nodes: No-op.
    pub(crate) fn set_segment(&mut self, direction: Direction, equation: LineEquation) {
        if self.locked {
            return;
        }
        self.direction = direction;
        self.equation = Some(equation);
    }

    /// Schreitet höchstens `distance` entlang der Schritt-Achse auf `target` zu
    /// und leitet die andere Achse aus der Gleichung ab. Gesperrte Nodes: No-op.
    ///
    /// Der Schritt endet spätestens auf der Achsen-Koordinate von `target`,
    /// ein Node läuft also nie über sein Ziel hinaus.
    pub(crate) fn advance(&mut self, distance: f32, target: Vec2) {
        if self.locked {
            return;
        }
        let Some(equation) = self.equation else {
            return;
        };
        match self.direction {
            Direction::Right | Direction::Left => {
                self.position.x = approach(self.position.x, target.x, distance);
                if let Some(y) = equation.y_at(self.position.x) {
                    self.position.y = y;
                }
            }
            Direction::Down | Direction::Up => {
                self.position.y = approach(self.position.y, target.y, distance);
                if let Some(x) = equation.x_at(self.position.y) {
                    self.position.x = x;
                }
            }
            Direction::None => {}
        }
    }
}

/// Bewegt `from` um höchstens `distance` Richtung `to`.
fn approach(from: f32, to: f32, distance: f32) -> f32 {
    let remaining = to - from;
    from + distance.min(remaining.abs()).copysign(remaining)
}
