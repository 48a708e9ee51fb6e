//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Eingabe-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Anker ===
            AppCommand::AddAnchor { position } => handlers::anchors::add(state, position)?,
            AppCommand::RemoveNearestAnchor {
                position,
                max_distance,
            } => handlers::anchors::remove_nearest(state, position, max_distance)?,
            AppCommand::MoveAnchor { index, position } => {
                handlers::anchors::move_anchor(state, index, position)?
            }
            AppCommand::RemoveLastAnchor => handlers::anchors::remove_last(state)?,
            AppCommand::ClearAnchors => handlers::anchors::clear(state)?,

            // === Animation ===
            AppCommand::StartAnimation => handlers::animation::start(state)?,
            AppCommand::StepAnimation => handlers::animation::step(state)?,
            AppCommand::ResetAnimation => handlers::animation::reset(state)?,

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, *options)?,

            // === System ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }
}
