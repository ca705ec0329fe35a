//! Klick-Events: Startpunkt setzen oder Stopp-Selektion umschalten.

use super::{pick_stop, InputState, ViewportContext};
use crate::app::AppIntent;
use crate::shared::RenderScene;

impl InputState {
    /// Verarbeitet Einfachklicks im Viewport.
    pub(crate) fn handle_clicks(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        let Some(pointer_pos) = ctx.response.interact_pointer_pos() else {
            return;
        };

        let local = pointer_pos - ctx.response.rect.min;
        events.push(click_intent(
            ctx.scene,
            glam::Vec2::new(local.x, local.y),
            ctx.viewport_size,
        ));
    }
}

/// Übersetzt einen Klick an einer lokalen Viewport-Position in einen Intent.
///
/// Ein getroffener Marker schluckt den Klick, auch im Drop-Modus; nur Klicks
/// auf freie Kartenfläche werden zu `MapClicked`.
pub fn click_intent(scene: &RenderScene, local_pos: glam::Vec2, viewport_size: [f32; 2]) -> AppIntent {
    if let Some(id) = pick_stop(scene, local_pos, viewport_size) {
        return AppIntent::StopClicked { id };
    }
    let size = glam::Vec2::new(viewport_size[0], viewport_size[1]);
    AppIntent::MapClicked {
        position: scene.camera.screen_to_geo(local_pos, size),
    }
}
