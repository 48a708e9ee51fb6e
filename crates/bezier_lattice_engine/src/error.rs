//! Fehlertypen der Engine.

use glam::Vec2;
use thiserror::Error;

/// Fehler beim Vergrößern/Verkleinern der dynamischen Arrays.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// Allokation fehlgeschlagen (Ressourcen erschöpft), kein Retry
    #[error("Speicher erschöpft: Kapazität {requested} konnte nicht reserviert werden")]
    Exhausted { requested: usize },
    /// Politik-Parameter sind widersprüchlich
    #[error("Ungültige Kapazitäts-Politik: {reason}")]
    InvalidPolicy { reason: &'static str },
}

/// Fehler bei Aufbau und Fortschreibung der Lattice.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeError {
    /// Weniger als 2 Anker: keine Kurve möglich
    #[error("Mindestens 2 Anker benötigt, vorhanden: {count}")]
    TooFewAnchors { count: usize },
    /// Beide Eltern liegen aufeinander, Steigung wäre 0/0
    #[error("Degeneriertes Segment: beide Eltern liegen bei {at}")]
    DegenerateSegment { at: Vec2 },
    /// Lock-Schwelle muss endlich und positiv sein
    #[error("Ungültiges Lock-Epsilon: {value}")]
    InvalidEpsilon { value: f32 },
    /// Node-Array konnte nicht auf T(N) gebracht werden
    #[error(transparent)]
    Capacity(#[from] CapacityError),
}
