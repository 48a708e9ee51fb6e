//! Update-Engine: ein synchronisierter Animationsschritt über die ganze Lattice.
//!
//! Ein Schritt läuft in drei Pässen:
//! 1. Snapshot aller Positionen
//! 2. Bewegung: jeder ungesperrte Node liest nur den Snapshot (Distanz zum
//!    Ziel) sowie Richtung und Gleichung aus dem vorherigen Schritt; der
//!    Schritt endet spätestens auf der Achsen-Koordinate des Ziels
//! 3. Lock-Prüfung und Neuableitung von Richtung/Gleichung aus den bereits
//!    bewegten Eltern, gültig ab dem nächsten Schritt
//!
//! Dadurch sieht kein Node im selben Schritt die neue Position eines Elternteils.

use crate::error::LatticeError;
use crate::lattice::Lattice;
use crate::node::{derive_segment, Node};
use glam::Vec2;


/// Standard-Schwelle, ab der ein Node als angekommen gilt.
pub const DEFAULT_LOCK_EPSILON: f32 = 0.99;

/// Ergebnis eines einzelnen Schritts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    /// Anzahl bewegter Nodes
    pub moved: usize,
    /// Anzahl in diesem Schritt gesperrter Nodes (inkl. degenerierter)
    pub newly_locked: usize,
    /// Davon wegen aufeinanderliegender Eltern gesperrt
    pub degenerate: usize,
    /// Verwendete Normalisierungs-Distanz
    pub normalization: f32,
    /// True wenn der Terminal-Node nach dem Schritt gesperrt ist
    pub finished: bool,
}

/// Treibt die Lattice Schritt für Schritt voran.
#[derive(Debug, Clone)]
pub struct UpdateEngine {
    lock_epsilon: f32,
    snapshot: Vec<Vec2>,
}

impl Default for UpdateEngine {
    fn default() -> Self {
        Self {
            lock_epsilon: DEFAULT_LOCK_EPSILON,
            snapshot: Vec::new(),
        }
    }
}

fn check_epsilon(value: f32) -> Result<f32, LatticeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LatticeError::InvalidEpsilon { value })
    }
}

impl UpdateEngine {
    /// Erstellt eine Engine mit eigener Lock-Schwelle.
    pub fn new(lock_epsilon: f32) -> Result<Self, LatticeError> {
        Ok(Self {
            lock_epsilon: check_epsilon(lock_epsilon)?,
            snapshot: Vec::new(),
        })
    }

    /// Aktuelle Lock-Schwelle.
    pub fn lock_epsilon(&self) -> f32 {
        self.lock_epsilon
    }

    /// Setzt die Lock-Schwelle. Ungültige Werte lassen die alte Schwelle stehen.
    pub fn set_lock_epsilon(&mut self, lock_epsilon: f32) -> Result<(), LatticeError> {
        self.lock_epsilon = check_epsilon(lock_epsilon)?;
        Ok(())
    }

    /// Restdistanz des Terminal-Nodes, solange er nicht gesperrt ist.
    pub fn normalization_distance(lattice: &Lattice) -> Option<f32> {
        let terminal = lattice.terminal_id()?;
        if lattice.node(terminal)?.is_locked() {
            return None;
        }
        lattice.remaining_distance(terminal)
    }

    /// Ein Schritt mit vom Aufrufer gelieferter Normalisierungs-Distanz.
    ///
    /// Jeder ungesperrte Node bewegt sich um `totalDistance / normalization`
    /// entlang seiner Schritt-Achse. Leere Lattice oder nicht-positive bzw.
    /// nicht-endliche Normalisierung: No-op.
    pub fn step(&mut self, lattice: &mut Lattice, normalization: f32) -> StepReport {
        let mut report = StepReport {
            normalization,
            finished: lattice.is_finished(),
            ..StepReport::default()
        };
        if lattice.is_empty() || !normalization.is_finite() || normalization <= 0.0 {
            return report;
        }

        // ── Pass 1: Snapshot ──
        self.snapshot.clear();
        self.snapshot
            .extend(lattice.nodes().iter().map(Node::position));

        // ── Pass 2: Bewegung ──
        for (index, node) in lattice.nodes_mut().iter_mut().enumerate() {
            if node.is_locked() {
                continue;
            }
            let Some(destination) = node.destination() else {
                continue;
            };
            let Some(target) = self.snapshot.get(destination.index()) else {
                continue;
            };
            let total = self.snapshot[index].distance(*target);
            node.advance(total / normalization, *target);
            report.moved += 1;
        }

        // ── Pass 3: Lock-Prüfung und Neuableitung ──
        let epsilon = self.lock_epsilon;
        let nodes = lattice.nodes_mut();
        for index in 0..nodes.len() {
            // Eltern liegen immer in früheren Reihen, also vor `index`
            let (parents, rest) = nodes.split_at_mut(index);
            let Some((node, _)) = rest.split_first_mut() else {
                break;
            };
            if node.is_locked() {
                continue;
            }
            let Some([first, second]) = node.parents() else {
                continue;
            };
            let (Some(first), Some(second)) = (parents.get(first.index()), parents.get(second.index()))
            else {
                continue;
            };

            if node.position().distance(second.position()) <= epsilon {
                node.lock();
                report.newly_locked += 1;
                continue;
            }

            match derive_segment(first.position(), second.position()) {
                Ok((direction, equation)) => node.set_segment(direction, equation),
                Err(_) => {
                    node.lock();
                    report.newly_locked += 1;
                    report.degenerate += 1;
                }
            }
        }

        report.finished = lattice.is_finished();
        log::trace!(
            "Schritt: norm={:.3}, bewegt={}, gesperrt={}, degeneriert={}",
            normalization,
            report.moved,
            report.newly_locked,
            report.degenerate
        );
        report
    }

    /// Ein Schritt, normalisiert auf die Restdistanz des Terminal-Nodes.
    ///
    /// No-op, wenn keine Lattice existiert oder der Terminal-Node bereits gesperrt ist.
    pub fn advance(&mut self, lattice: &mut Lattice) -> StepReport {
        let Some(normalization) = Self::normalization_distance(lattice) else {
            return StepReport {
                finished: lattice.is_finished(),
                ..StepReport::default()
            };
        };

        if normalization <= f32::EPSILON {
            // Terminal liegt bereits auf seinem Ziel
            let locked = lattice
                .terminal_id()
                .and_then(|id| lattice.node_mut(id))
                .map(Node::lock)
                .is_some();
            return StepReport {
                newly_locked: usize::from(locked),
                normalization,
                finished: lattice.is_finished(),
                ..StepReport::default()
            };
        }

        self.step(lattice, normalization)
    }
}
