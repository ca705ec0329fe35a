//! Geografische Positionen und die Distanz-Metrik für die Routen-Sortierung.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Geografische Position in Dezimalgrad.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
}

impl GeoPoint {
    /// Erstellt eine neue Position.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Planare Darstellung (x = Längengrad, y = Breitengrad).
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    /// Gegenstück zu [`GeoPoint::to_dvec2`].
    pub fn from_dvec2(v: DVec2) -> Self {
        Self::new(v.y, v.x)
    }

    /// Vergleichsschlüssel für Nähe: Summe der quadrierten Koordinaten-Differenzen.
    ///
    /// Keine geodätische Korrektur und keine Einheit. Der Wert taugt nur zum
    /// Vergleichen, die Reihenfolge entspricht der euklidischen Distanz.
    pub fn distance_key(self, other: GeoPoint) -> f64 {
        self.to_dvec2().distance_squared(other.to_dvec2())
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}
