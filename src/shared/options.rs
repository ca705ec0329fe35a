//! Zentrale Konfiguration für die Route-Map-Demo.
//!
//! `DemoOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{GeoPoint, StopColor, StopGenerator};
use serde::{Deserialize, Serialize};

// ── Stopp-Erzeugung ─────────────────────────────────────────────────

/// Standard-Anzahl erzeugter Stopps.
pub const DEFAULT_STOP_COUNT: usize = 35;
/// Obergrenze für die Stopp-Anzahl.
pub const MAX_STOP_COUNT: usize = 500;
/// Maximaler Versatz je Achse um ein Gebietszentrum (Grad).
pub const DEFAULT_JITTER_RADIUS: f64 = 0.015;
/// Obergrenze für den Versatz-Radius (Grad).
pub const MAX_JITTER_RADIUS: f64 = 0.2;
/// Gebietszentren (Breitengrad, Längengrad).
pub const DEFAULT_AREA_CENTERS: [[f64; 2]; 3] =
    [[40.144, -75.115], [40.177, -75.106], [40.1785, -75.129]];

// ── Karte ───────────────────────────────────────────────────────────

/// Kartenmitte beim Start (Breitengrad, Längengrad).
pub const DEFAULT_MAP_CENTER: [f64; 2] = [40.155, -75.12];
/// Start-Zoom in Pixeln pro Breitengrad.
pub const DEFAULT_MAP_ZOOM: f64 = 9000.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Marker ──────────────────────────────────────────────────────────

/// Radius eines Stopp-Markers in Screen-Pixeln.
pub const STOP_RADIUS_PX: f32 = 11.0;
/// Pick-Radius für Klicks auf Stopps in Screen-Pixeln.
pub const PICK_RADIUS_PX: f32 = 13.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Demo-Optionen.
/// Wird als `route_map_demo.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoOptions {
    // ── Stopps ──────────────────────────────────────────────────
    /// Anzahl der Stopps pro Erzeugung
    pub stop_count: usize,
    /// Versatz-Radius in Grad
    pub jitter_radius: f64,
    /// Gebietszentren als [lat, lng]
    pub area_centers: Vec<[f64; 2]>,
    /// Fester Seed für reproduzierbare Layouts (None = zufällig)
    #[serde(default)]
    pub rng_seed: Option<u64>,

    // ── Farbmodus ───────────────────────────────────────────────
    /// Aktive Farbe beim Start
    #[serde(default = "default_active_color")]
    pub initial_active_color: StopColor,

    // ── Karte ───────────────────────────────────────────────────
    /// Kartenmitte als [lat, lng]
    pub map_center: [f64; 2],
    /// Zoom in Pixeln pro Breitengrad
    pub map_zoom: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    #[serde(default = "default_scroll_zoom_step")]
    pub scroll_zoom_step: f64,

    // ── Marker ──────────────────────────────────────────────────
    /// Marker-Radius in Pixeln
    pub stop_radius_px: f32,
    /// Pick-Radius in Pixeln
    pub pick_radius_px: f32,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            stop_count: DEFAULT_STOP_COUNT,
            jitter_radius: DEFAULT_JITTER_RADIUS,
            area_centers: DEFAULT_AREA_CENTERS.to_vec(),
            rng_seed: None,

            initial_active_color: default_active_color(),

            map_center: DEFAULT_MAP_CENTER,
            map_zoom: DEFAULT_MAP_ZOOM,
            scroll_zoom_step: SCROLL_ZOOM_STEP,

            stop_radius_px: STOP_RADIUS_PX,
            pick_radius_px: PICK_RADIUS_PX,
        }
    }
}

/// Serde-Default für `initial_active_color`.
fn default_active_color() -> StopColor {
    StopColor::Red
}

/// Serde-Default für `scroll_zoom_step` (Abwärtskompatibilität).
fn default_scroll_zoom_step() -> f64 {
    SCROLL_ZOOM_STEP
}

impl DemoOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("route_map_demo"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("route_map_demo.toml")
    }

    /// Korrigiert unbrauchbare Werte (Anzahl in 1..=MAX_STOP_COUNT,
    /// Versatz in 0..=MAX_JITTER_RADIUS, Zoom > 0).
    pub fn sanitized(mut self) -> Self {
        self.stop_count = self.stop_count.clamp(1, MAX_STOP_COUNT);
        self.jitter_radius = if self.jitter_radius.is_finite() {
            self.jitter_radius.clamp(0.0, MAX_JITTER_RADIUS)
        } else {
            0.0
        };
        if !self.map_zoom.is_finite() || self.map_zoom <= 0.0 {
            self.map_zoom = DEFAULT_MAP_ZOOM;
        }
        if !self.scroll_zoom_step.is_finite() || self.scroll_zoom_step <= 1.0 {
            self.scroll_zoom_step = SCROLL_ZOOM_STEP;
        }
        self.stop_radius_px = self.stop_radius_px.max(1.0);
        self.pick_radius_px = self.pick_radius_px.max(0.0);
        self
    }

    /// Gebietszentren als Geo-Positionen.
    pub fn area_centers(&self) -> Vec<GeoPoint> {
        self.area_centers.iter().copied().map(GeoPoint::from).collect()
    }

    /// Baut einen Stopp-Generator aus Gebietszentren und Versatz-Radius.
    pub fn stop_generator(&self) -> StopGenerator {
        StopGenerator::new(self.area_centers(), self.jitter_radius)
    }

    /// Kartenmitte als Geo-Position.
    pub fn map_center(&self) -> GeoPoint {
        GeoPoint::from(self.map_center)
    }
}
