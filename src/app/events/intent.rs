use crate::shared::AnimatorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Eingabe-Layer/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anker an Position anhängen (Klick)
    AnchorPlaced { position: glam::Vec2 },
    /// Nächstgelegenen Anker im Pick-Radius entfernen (Rechtsklick)
    AnchorRemoveRequested { position: glam::Vec2 },
    /// Anker per Drag verschieben
    AnchorDragged { index: usize, position: glam::Vec2 },
    /// Zuletzt gesetzten Anker entfernen
    LastAnchorRemoveRequested,
    /// Alle Anker verwerfen
    AnchorsCleared,
    /// Animation aus den aktuellen Ankern starten
    AnimationStartRequested,
    /// Externer Frame-Takt
    FrameTick,
    /// Animation auf den Ausgangszustand zurücksetzen
    AnimationResetRequested,
    /// Neue Optionen übernehmen
    OptionsChanged { options: Box<AnimatorOptions> },
    /// Anwendung beenden
    ExitRequested,
}
