//! Mapping von Eingabe-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};


/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::AnchorPlaced { position } => vec![AppCommand::AddAnchor { position }],
        AppIntent::AnchorRemoveRequested { position } => {
            vec![AppCommand::RemoveNearestAnchor {
                position,
                max_distance: state.options.pick_radius,
            }]
        }
        AppIntent::AnchorDragged { index, position } => {
            vec![AppCommand::MoveAnchor { index, position }]
        }
        AppIntent::LastAnchorRemoveRequested => vec![AppCommand::RemoveLastAnchor],
        AppIntent::AnchorsCleared => vec![AppCommand::ClearAnchors],
        AppIntent::AnimationStartRequested => vec![AppCommand::StartAnimation],
        // Ticks außerhalb einer laufenden Animation erzeugen keinen Log-Eintrag
        AppIntent::FrameTick if state.is_animating() => vec![AppCommand::StepAnimation],
        AppIntent::FrameTick => Vec::new(),
        AppIntent::AnimationResetRequested => vec![AppCommand::ResetAnimation],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
