//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::DropModeRequested => vec![AppCommand::EnterDropMode],
        AppIntent::MapClicked { position } => vec![AppCommand::DropStartPoint { position }],
        AppIntent::SortRequested => vec![AppCommand::SortStopsByDistance],
        AppIntent::RegenerateRequested => vec![AppCommand::RegenerateStops],
        AppIntent::ColorModeToggled => vec![AppCommand::ToggleColorMode],
        AppIntent::StopClicked { id } => {
            // Stopp-Klicks selektieren nur im Farbmodus
            if !state.interaction.color_mode_active() {
                return Vec::new();
            }
            if !state.has_stop(id) {
                log::warn!("Klick auf unbekannten Stopp {} verworfen", id);
                return Vec::new();
            }
            vec![AppCommand::ToggleStopSelection { id }]
        }
        AppIntent::ActiveColorChanged { color } => vec![AppCommand::SetActiveColor { color }],
        AppIntent::ApplyColorRequested => vec![AppCommand::ApplyActiveColor],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { factor, focus } => vec![AppCommand::ZoomCamera { factor, focus }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
