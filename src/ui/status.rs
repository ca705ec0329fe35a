//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Stopps: {} | Aktionen: {}",
                state.stop_count(),
                state.command_log.len()
            ));

            ui.separator();

            match state.start_point {
                Some(start) => ui.label(format!("Start: ({:.4}, {:.4})", start.lat, start.lng)),
                None => ui.label("Start: –"),
            };

            ui.separator();

            let camera = &state.view.camera;
            ui.label(format!(
                "Zoom: {:.0} px/° | Mitte: ({:.4}, {:.4})",
                camera.zoom, camera.center.y, camera.center.x
            ));

            ui.separator();

            if state.interaction.color_mode_active() {
                ui.label(format!(
                    "Farbmodus: {} | Ausgewählt: {}",
                    state.interaction.active_color.name(),
                    state.selection.len()
                ));
            } else if state.interaction.drop_pending() {
                ui.label(
                    egui::RichText::new("Auf die Karte klicken, um den Startpunkt zu setzen")
                        .color(egui::Color32::YELLOW),
                );
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
