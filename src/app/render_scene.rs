//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        stops: state.stops.clone(),
        start_point: state.start_point,
        selected_stop_ids: state.selection.selected_stop_ids.clone(),
        active_color: state.interaction.active_color,
        drop_pending: state.interaction.drop_pending(),
        color_mode_active: state.interaction.color_mode_active(),
        camera: state.view.camera.clone(),
        options: state.options.clone(),
    }
}
