//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;
use crate::core::{Camera2D, GeoPoint};

/// Setzt die Kamera auf Kartenmitte und Zoom der Optionen zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Camera2D::new(state.options.map_center(), state.options.map_zoom);
}

/// Verschiebt die Kamera um ein Screen-Delta in Pixeln.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan_pixels(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Nicht-positive oder nicht-endliche Faktoren werden ignoriert.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus: Option<GeoPoint>) {
    if !factor.is_finite() || factor <= 0.0 {
        return;
    }
    state.view.camera.zoom_towards(factor, focus);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}
