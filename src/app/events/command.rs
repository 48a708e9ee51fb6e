use crate::shared::AnimatorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Anker anhängen und Lattice neu aufbauen
    AddAnchor { position: glam::Vec2 },
    /// Nächstgelegenen Anker innerhalb `max_distance` entfernen
    RemoveNearestAnchor {
        position: glam::Vec2,
        max_distance: f32,
    },
    /// Anker verschieben
    MoveAnchor { index: usize, position: glam::Vec2 },
    /// Letzten Anker entfernen
    RemoveLastAnchor,
    /// Alle Anker entfernen
    ClearAnchors,
    /// Lattice aufbauen und Animation starten
    StartAnimation,
    /// Einen Engine-Schritt ausführen
    StepAnimation,
    /// Lattice neu aufbauen, Animation anhalten
    ResetAnimation,
    /// Optionen übernehmen (Epsilon, Kapazitäts-Politik, Darstellung)
    ApplyOptions { options: Box<AnimatorOptions> },
    /// Anwendung beenden
    RequestExit,
}
