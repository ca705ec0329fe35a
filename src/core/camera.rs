//! 2D-Kamera über geografischen Koordinaten (Pan und Zoom).

use super::GeoPoint;
use glam::{DVec2, Vec2};

/// Kamera mit Kartenmitte und Zoom in Pixeln pro Grad.
///
/// Die Projektion ist equirektangulär: Längengrade werden mit dem Kosinus
/// des Mittel-Breitengrads gestaucht, damit Cluster nicht verzerrt wirken.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Kartenmitte (x = Längengrad, y = Breitengrad)
    pub center: DVec2,
    /// Pixel pro Breitengrad
    pub zoom: f64,
}

impl Camera2D {
    /// Minimaler Zoom (Pixel pro Grad).
    pub const ZOOM_MIN: f64 = 100.0;
    /// Maximaler Zoom (Pixel pro Grad).
    pub const ZOOM_MAX: f64 = 200_000.0;

    /// Erstellt eine Kamera mit Mitte und Zoom.
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self {
            center: center.to_dvec2(),
            zoom: zoom.clamp(Self::ZOOM_MIN, Self::ZOOM_MAX),
        }
    }

    fn scale(&self) -> DVec2 {
        DVec2::new(self.zoom * self.center.y.to_radians().cos(), self.zoom)
    }

    /// Verschiebt die Kamera um ein Screen-Delta in Pixeln.
    pub fn pan_pixels(&mut self, delta: Vec2) {
        let scale = self.scale();
        self.center.x -= delta.x as f64 / scale.x;
        self.center.y += delta.y as f64 / scale.y;
    }

    /// Zoomt um `factor`; optional bleibt `focus` an derselben Screen-Position.
    pub fn zoom_towards(&mut self, factor: f64, focus: Option<GeoPoint>) {
        let old_zoom = self.zoom;
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        if let Some(focus) = focus {
            let focus = focus.to_dvec2();
            let ratio = old_zoom / self.zoom;
            self.center = focus + (self.center - focus) * ratio;
        }
    }

    /// Geo-Position → Screen-Position relativ zur Viewport-Ecke oben links.
    pub fn geo_to_screen(&self, point: GeoPoint, viewport_size: Vec2) -> Vec2 {
        let scale = self.scale();
        let offset = point.to_dvec2() - self.center;
        Vec2::new(
            viewport_size.x * 0.5 + (offset.x * scale.x) as f32,
            viewport_size.y * 0.5 - (offset.y * scale.y) as f32,
        )
    }

    /// Screen-Position → Geo-Position (Umkehrung von [`Camera2D::geo_to_screen`]).
    pub fn screen_to_geo(&self, screen: Vec2, viewport_size: Vec2) -> GeoPoint {
        let scale = self.scale();
        let dx = (screen.x - viewport_size.x * 0.5) as f64 / scale.x;
        let dy = (viewport_size.y * 0.5 - screen.y) as f64 / scale.y;
        GeoPoint::from_dvec2(self.center + DVec2::new(dx, dy))
    }
}
