//! Route-Map-Demo.
//!
//! Zufällige Lieferstopps auf einer Karte, Nearest-Neighbor-Sortierung ab
//! einem Startpunkt und manuelle Farbzuordnung per Mehrfachauswahl.

use eframe::egui;
use route_map_demo::{ui, AppController, AppIntent, AppState, DemoOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Route-Map-Demo v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1200.0, 760.0])
                .with_title("Route Map Demo"),
            ..Default::default()
        };

        eframe::run_native(
            "Route Map Demo",
            options,
            Box::new(|_cc| Ok(Box::new(DemoApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DemoApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl DemoApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = DemoOptions::config_path();
        let demo_options = DemoOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(demo_options);
        state.options_path = Some(config_path);
        log::info!("{} Stopps erzeugt", state.stop_count());

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        if has_meaningful_events {
            ctx.request_repaint();
        }
    }
}

impl DemoApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let scene = self.controller.build_render_scene(&self.state);

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &scene));
        events.extend(ui::render_color_bar(ctx, &scene));
        ui::render_legend_panel(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(
                    self.input
                        .collect_viewport_events(ui, &response, viewport_size, &scene),
                );

                ui::paint_scene(ui.painter(), rect, &scene, response.hover_pos());
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
