use crate::core::Camera2D;
use crate::shared::DemoOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Kamera über der Karte
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand aus Kartenmitte und Zoom der Optionen.
    pub fn from_options(options: &DemoOptions) -> Self {
        Self {
            camera: Camera2D::new(options.map_center(), options.map_zoom),
            viewport_size: [0.0, 0.0],
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_options(&DemoOptions::default())
    }
}
