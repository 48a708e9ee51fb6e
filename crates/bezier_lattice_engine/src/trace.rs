//! Append-only Spur des Terminal-Nodes (die eigentlich gezeichnete Kurve).

use crate::capacity::{CapacityPolicy, PolicyVec};
use crate::error::CapacityError;
use glam::Vec2;

/// Positionen des Terminal-Nodes pro ungesperrtem Schritt.
#[derive(Debug, Clone)]
pub struct CurveTrace {
    points: PolicyVec<Vec2>,
}

impl Default for CurveTrace {
    fn default() -> Self {
        Self::new(CapacityPolicy::default())
    }
}

impl CurveTrace {
    pub fn new(policy: CapacityPolicy) -> Self {
        Self {
            points: PolicyVec::new(policy),
        }
    }

    /// Verwirft die Spur und beginnt mit der Startposition des Terminals.
    pub fn reset(&mut self, seed: Vec2) -> Result<(), CapacityError> {
        self.points.clear();
        self.points.push(seed)
    }

    /// Verwirft die Spur komplett (keine Lattice mehr).
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Hängt eine Terminal-Position an.
    pub fn record(&mut self, point: Vec2) -> Result<(), CapacityError> {
        self.points.push(point)
    }

    pub fn points(&self) -> &[Vec2] {
        self.points.as_slice()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }
}
