//! Application State: zentrale Datenhaltung einer Sitzung.

use super::CommandLog;
use crate::shared::AnimatorOptions;
use anyhow::Context;
use bezier_lattice_engine::{AnchorSet, CurveTrace, Lattice, StepReport, UpdateEngine};

/// Phase der aktuellen Geste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// Anker werden bearbeitet, keine Animation
    #[default]
    Idle,
    /// Frame-Ticks treiben die Engine
    Animating,
    /// Terminal-Node gesperrt, Kurve vollständig
    Finished,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Geordnete Anker (Reihe 0)
    pub anchors: AnchorSet,
    /// Lattice der aktuellen Geste (leer bei weniger als 2 Ankern)
    pub lattice: Lattice,
    /// Spur des Terminal-Nodes
    pub trace: CurveTrace,
    /// Update-Engine mit Lock-Schwelle
    pub engine: UpdateEngine,
    /// Laufzeit-Optionen (Farben, Größen, Schwellen)
    pub options: AnimatorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Phase der aktuellen Geste
    pub gesture: GesturePhase,
    /// Ausgeführte Schritte seit dem letzten Aufbau
    pub frame: u64,
    /// Bericht des letzten Schritts
    pub last_step: Option<StepReport>,
    /// Signalisiert dem Host, die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        let options = AnimatorOptions::default();
        let policy = options.capacity;
        Self {
            anchors: AnchorSet::new(policy),
            lattice: Lattice::new(policy),
            trace: CurveTrace::new(policy),
            engine: UpdateEngine::default(),
            options,
            command_log: CommandLog::new(),
            gesture: GesturePhase::Idle,
            frame: 0,
            last_step: None,
            should_exit: false,
        }
    }

    /// Erstellt einen leeren App-State mit geprüften Optionen.
    pub fn with_options(options: AnimatorOptions) -> anyhow::Result<Self> {
        options.validate()?;
        let engine = UpdateEngine::new(options.lock_epsilon).context("Lock-Epsilon ungültig")?;
        let policy = options.capacity;
        Ok(Self {
            anchors: AnchorSet::new(policy),
            lattice: Lattice::new(policy),
            trace: CurveTrace::new(policy),
            engine,
            options,
            ..Self::new()
        })
    }

    /// True solange Frame-Ticks die Engine treiben.
    pub fn is_animating(&self) -> bool {
        self.gesture == GesturePhase::Animating
    }

    /// True sobald die Kurve vollständig gezeichnet ist.
    pub fn is_finished(&self) -> bool {
        self.gesture == GesturePhase::Finished
    }

    /// Gibt die Anzahl der Anker zurück (für Statusausgaben)
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
