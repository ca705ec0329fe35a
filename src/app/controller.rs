//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Einziger Schreibzugriff auf den Sitzungszustand: jeder Command wird
/// vollständig ausgeführt, bevor der nächste beginnt.
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
        log::debug!("Command: {:?}", command);
        use super::handlers;

        match command {
            // === Route ===
            AppCommand::EnterDropMode => handlers::route::enter_drop_mode(state),
            AppCommand::DropStartPoint { position } => {
                handlers::route::drop_start_point(state, position)
            }
            AppCommand::SortStopsByDistance => handlers::route::sort_by_distance(state),
            AppCommand::RegenerateStops => handlers::route::regenerate(state),

            // === Farbmodus & Selektion ===
            AppCommand::ToggleColorMode => handlers::coloring::toggle_color_mode(state),
            AppCommand::ToggleStopSelection { id } => {
                handlers::coloring::toggle_stop_selection(state, id)
            }
            AppCommand::SetActiveColor { color } => {
                handlers::coloring::set_active_color(state, color)
            }
            AppCommand::ApplyActiveColor => handlers::coloring::apply_active_color(state),

            // === Kamera & Viewport ===
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { factor, focus } => {
                handlers::view::zoom_towards(state, factor, focus)
            }
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),

            // === Optionen & Anwendungssteuerung ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,
            AppCommand::RequestExit => handlers::options::request_exit(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
