//! Frame-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::AnimatorOptions;
use bezier_lattice_engine::{CurveTrace, Lattice};
use glam::Vec2;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameScene<'a> {
    /// Aktuelle Anker (auch ohne Lattice sichtbar)
    pub anchors: &'a [Vec2],
    /// Lattice der laufenden Geste (leer bei weniger als 2 Ankern)
    pub lattice: &'a Lattice,
    /// Bisher gezeichnete Kurve
    pub trace: &'a CurveTrace,
    /// Farben und Größen
    pub options: &'a AnimatorOptions,
    /// Anzahl ausgeführter Schritte der Geste
    pub frame: u64,
}

impl FrameScene<'_> {
    /// Gibt zurück, ob eine Lattice für Rendering vorhanden ist.
    pub fn has_lattice(&self) -> bool {
        !self.lattice.is_empty()
    }

    /// True sobald der Terminal-Node gesperrt ist.
    pub fn is_finished(&self) -> bool {
        self.lattice.is_finished()
    }
}
