//! Application Controller fuer zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent ueber Intent→Command Mapping.
    ///
    /// Events laufen strikt in Eingangsreihenfolge; jeder Command wird
    /// vollstaendig ausgefuehrt, bevor der naechste beginnt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Fuehrt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Kurve & Parameter ===
            AppCommand::SetCurveFamily { family } => handlers::curve::set_family(state, family),
            AppCommand::SetPetalVariant { variant } => {
                handlers::curve::set_petal_variant(state, variant)
            }
            AppCommand::ApplyButterflyEdits => handlers::curve::apply_butterfly_edits(state),
            AppCommand::ApplyPetalEdits => handlers::curve::apply_petal_edits(state),
            AppCommand::ApplyStarEdits => handlers::curve::apply_star_edits(state),

            // === Viewport ===
            AppCommand::ZoomAt { cursor, direction } => {
                handlers::view::zoom_at(state, cursor, direction)
            }
            AppCommand::PanView { delta } => handlers::view::pan(state, delta),
            AppCommand::ResetViewToFit => handlers::view::reset_to_fit(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
