//! Render-Szene als expliziter Übergabevertrag zwischen App und Oberfläche.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.

use super::options::DemoOptions;
use crate::core::{Camera2D, GeoPoint, Stop, StopColor};
use indexmap::IndexSet;
use std::sync::Arc;

/// Read-only Daten für einen Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Stopps in aktueller Reihenfolge
    pub stops: Arc<Vec<Stop>>,
    /// Startpunkt (falls gesetzt)
    pub start_point: Option<GeoPoint>,
    /// IDs der selektierten Stopps (Arc für O(1)-Clone pro Frame)
    pub selected_stop_ids: Arc<IndexSet<u64>>,
    /// Farbe, die beim nächsten Anwenden gesetzt wird
    pub active_color: StopColor,
    /// Wartet die Karte auf den Klick für den Startpunkt?
    pub drop_pending: bool,
    /// Ist der Farbmodus aktiv?
    pub color_mode_active: bool,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Laufzeit-Optionen für Größen und Radien
    pub options: DemoOptions,
}

impl RenderScene {
    /// Gibt zurück, ob der Stopp hervorgehoben werden soll.
    pub fn is_selected(&self, stop_id: u64) -> bool {
        self.selected_stop_ids.contains(&stop_id)
    }

    /// Gibt zurück, ob die Route bereits sortiert wurde.
    pub fn is_sequenced(&self) -> bool {
        self.stops.iter().any(|s| s.label.is_some())
    }
}
