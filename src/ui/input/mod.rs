//! Viewport-Input-Handling: Maus-Events, Pan-Drag, Scroll → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `clicks`: Klick-Events (Startpunkt, Stopp-Selektion)
//! - `zoom`: Scroll-Zoom auf Mausposition

mod clicks;
mod zoom;

pub use clicks::click_intent;

use crate::app::AppIntent;
use crate::core::{Camera2D, GeoPoint};
use crate::shared::RenderScene;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub scene: &'a RenderScene,
}

/// Verwaltet den Input-Zustand für das Viewport
#[derive(Default)]
pub struct InputState {
    panning: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { panning: false }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        scene: &RenderScene,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            scene,
        };

        let mut events = vec![AppIntent::ViewportResized {
            size: viewport_size,
        }];

        self.handle_pan(&ctx, &mut events);
        self.handle_clicks(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }

    /// Linke Maustaste ziehen verschiebt die Karte.
    fn handle_pan(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if ctx.response.drag_started_by(egui::PointerButton::Primary) {
            self.panning = true;
        }
        if self.panning && ctx.response.dragged_by(egui::PointerButton::Primary) {
            let delta = ctx.response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::CameraPan {
                    delta: glam::Vec2::new(delta.x, delta.y),
                });
            }
        }
        if ctx.response.drag_stopped() {
            self.panning = false;
        }
    }
}

/// Rechnet eine Bildschirmposition in eine Geo-Position um.
pub(crate) fn screen_pos_to_geo(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> GeoPoint {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_geo(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}

/// Findet den Stopp unter einer lokalen Viewport-Position.
///
/// Liegen mehrere Marker im Pick-Radius, gewinnt der nächstgelegene.
pub fn pick_stop(scene: &RenderScene, local_pos: glam::Vec2, viewport_size: [f32; 2]) -> Option<u64> {
    let size = glam::Vec2::new(viewport_size[0], viewport_size[1]);
    let radius = scene.options.pick_radius_px;

    scene
        .stops
        .iter()
        .map(|stop| {
            let screen = scene.camera.geo_to_screen(stop.position, size);
            (stop.id, screen.distance(local_pos))
        })
        .filter(|(_, distance)| *distance <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}
