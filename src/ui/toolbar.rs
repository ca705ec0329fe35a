//! Toolbar mit Routen-Aktionen und Farbleiste für den Farbmodus.

use crate::app::AppIntent;
use crate::core::StopColor;
use crate::shared::options::{MAX_JITTER_RADIUS, MAX_STOP_COUNT};
use crate::shared::RenderScene;

use super::color32;

const SWATCH_SIZE: egui::Vec2 = egui::Vec2::new(22.0, 22.0);

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, scene: &RenderScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let drop_btn = egui::Button::new("Set Start Point").selected(scene.drop_pending);
            if ui
                .add(drop_btn)
                .on_hover_text("Nächster Klick auf die Karte setzt den Startpunkt")
                .clicked()
            {
                events.push(AppIntent::DropModeRequested);
            }

            if ui
                .add_enabled(
                    scene.start_point.is_some(),
                    egui::Button::new("Sort by Distance"),
                )
                .on_disabled_hover_text("Zuerst einen Startpunkt setzen")
                .clicked()
            {
                events.push(AppIntent::SortRequested);
            }

            if ui.button("Regenerate Stops").clicked() {
                events.push(AppIntent::RegenerateRequested);
            }

            ui.separator();

            let color_label = if scene.color_mode_active {
                "Cancel Color Mode"
            } else {
                "Color Code Stops"
            };
            if ui
                .add(egui::Button::new(color_label).selected(scene.color_mode_active))
                .clicked()
            {
                events.push(AppIntent::ColorModeToggled);
            }

            ui.separator();

            render_options_menu(ui, scene, &mut events);
        });
    });

    events
}

/// Kleines Optionen-Menü: Stopp-Anzahl, Seed, Kamera und Reset.
fn render_options_menu(ui: &mut egui::Ui, scene: &RenderScene, events: &mut Vec<AppIntent>) {
    ui.menu_button("Optionen", |ui| {
        let mut opts = scene.options.clone();
        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label("Stopps:");
            changed |= ui
                .add(egui::DragValue::new(&mut opts.stop_count).range(1..=MAX_STOP_COUNT))
                .changed();
        });

        ui.horizontal(|ui| {
            let mut fixed = opts.rng_seed.is_some();
            if ui.checkbox(&mut fixed, "Fester Seed").changed() {
                opts.rng_seed = fixed.then_some(0);
                changed = true;
            }
            if let Some(seed) = opts.rng_seed.as_mut() {
                changed |= ui.add(egui::DragValue::new(seed)).changed();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Streuung (°):");
            changed |= ui
                .add(
                    egui::DragValue::new(&mut opts.jitter_radius)
                        .range(0.0..=MAX_JITTER_RADIUS)
                        .speed(0.001),
                )
                .changed();
        });

        if changed {
            events.push(AppIntent::OptionsChanged { options: opts });
        }

        ui.separator();

        if ui.button("Kamera zurücksetzen").clicked() {
            events.push(AppIntent::ResetCameraRequested);
            ui.close();
        }
        if ui.button("Standardwerte").clicked() {
            events.push(AppIntent::ResetOptionsRequested);
            ui.close();
        }
        if ui.button("Beenden").clicked() {
            events.push(AppIntent::ExitRequested);
            ui.close();
        }
    });
}

/// Rendert die Farbleiste (nur im Farbmodus) und gibt erzeugte Events zurück.
pub fn render_color_bar(ctx: &egui::Context, scene: &RenderScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !scene.color_mode_active {
        return events;
    }

    egui::TopBottomPanel::top("color_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Farbe:");

            for color in StopColor::ALL {
                let active = color == scene.active_color;
                let stroke = if active {
                    egui::Stroke::new(2.5, egui::Color32::BLACK)
                } else {
                    egui::Stroke::new(1.0, egui::Color32::GRAY)
                };
                let swatch = egui::Button::new("")
                    .fill(color32(color.rgba()))
                    .stroke(stroke)
                    .min_size(SWATCH_SIZE);
                if ui.add(swatch).on_hover_text(color.name()).clicked() && !active {
                    events.push(AppIntent::ActiveColorChanged { color });
                }
            }

            ui.separator();

            let count = scene.selected_stop_ids.len();
            if ui
                .add_enabled(count > 0, egui::Button::new(format!("Apply ({count})")))
                .clicked()
            {
                events.push(AppIntent::ApplyColorRequested);
            }
        });
    });

    events
}
