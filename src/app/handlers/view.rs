//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::GeoPoint;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Verschiebt die Kamera um ein Screen-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt.
pub fn zoom_towards(state: &mut AppState, factor: f64, focus: Option<GeoPoint>) {
    use_cases::camera::zoom_towards(state, factor, focus);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::resize(state, size);
}
