//! Legende der Stopp-Farben und Bedienhinweise.

use crate::core::StopColor;

use super::color32;

/// Rendert die Legende als rechtes Seitenpanel.
pub fn render_legend_panel(ctx: &egui::Context) {
    egui::SidePanel::right("legend")
        .resizable(false)
        .default_width(170.0)
        .show(ctx, |ui| {
            ui.heading("Legende");
            ui.add_space(4.0);

            for color in StopColor::ALL {
                let Some(label) = color.legend_label() else {
                    continue;
                };
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::Vec2::splat(14.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(rect.center(), 6.0, color32(color.rgba()));
                    ui.label(label);
                });
            }

            ui.separator();
            ui.label(egui::RichText::new("Route").strong());
            ui.label("1. Set Start Point, dann auf die Karte klicken");
            ui.label("2. Sort by Distance nummeriert die Stopps");
            ui.separator();
            ui.label(egui::RichText::new("Farben").strong());
            ui.label("Color Code Stops, Stopps anklicken, Farbe wählen, Apply");
            ui.separator();
            ui.small("Ziehen verschiebt die Karte, Mausrad zoomt.");
        });
}
