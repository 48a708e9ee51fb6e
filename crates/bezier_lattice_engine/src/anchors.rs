//! Geordnete Anker-Menge (Reihe 0 der Lattice), vom Eingabe-Layer gepflegt.

use crate::capacity::{CapacityPolicy, PolicyVec};
use crate::error::CapacityError;
use glam::Vec2;

/// Ordnung der Anker bestimmt die Kurvenordnung und die Lattice-Topologie.
#[derive(Debug, Clone)]
pub struct AnchorSet {
    points: PolicyVec<Vec2>,
}

impl Default for AnchorSet {
    fn default() -> Self {
        Self::new(CapacityPolicy::default())
    }
}

impl AnchorSet {
    /// Erstellt eine leere Menge.
    pub fn new(policy: CapacityPolicy) -> Self {
        Self {
            points: PolicyVec::new(policy),
        }
    }

    /// Erstellt eine Menge aus vorhandenen Punkten.
    pub fn from_points(points: &[Vec2], policy: CapacityPolicy) -> Result<Self, CapacityError> {
        let mut set = Self::new(policy);
        for &point in points {
            set.add(point)?;
        }
        Ok(set)
    }

    /// Hängt einen Anker an. Liefert seinen Index.
    pub fn add(&mut self, point: Vec2) -> Result<usize, CapacityError> {
        self.points.push(point)?;
        Ok(self.points.len() - 1)
    }

    /// Fügt einen Anker an `index` ein (hinter dem letzten: wie `add`).
    pub fn insert(&mut self, index: usize, point: Vec2) -> Result<usize, CapacityError> {
        let index = index.min(self.points.len());
        self.points.push(point)?;
        self.points.as_mut_slice()[index..].rotate_right(1);
        Ok(index)
    }

    /// Entfernt den Anker an `index`. Außerhalb des Bereichs: No-op.
    pub fn remove(&mut self, index: usize) -> Option<Vec2> {
        self.points.remove(index)
    }

    /// Entfernt den zuletzt gesetzten Anker.
    pub fn remove_last(&mut self) -> Option<Vec2> {
        self.points.pop()
    }

    /// Verschiebt einen Anker. Liefert false bei ungültigem Index.
    pub fn move_anchor(&mut self, index: usize, position: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                *point = position;
                true
            }
            None => false,
        }
    }

    /// Entfernt alle Anker.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Index des nächstgelegenen Ankers innerhalb von `max_distance`.
    pub fn nearest(&self, point: Vec2, max_distance: f32) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, anchor)| (index, anchor.distance_squared(point)))
            .filter(|&(_, dist_sq)| dist_sq <= max_distance * max_distance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }

    /// Read-only Snapshot für den Lattice-Aufbau.
    pub fn as_slice(&self) -> &[Vec2] {
        self.points.as_slice()
    }

    /// Anzahl der Anker.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True ohne Anker.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Politik-Kapazität.
    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    /// Anker-Gate: erst ab 2 Punkten existiert eine Kurve.
    pub fn can_build_lattice(&self) -> bool {
        self.points.len() >= 2
    }
}
